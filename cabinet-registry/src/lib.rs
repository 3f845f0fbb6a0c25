//! Cabinet member registry: a validated form, an in-memory record store and the
//! create/edit state machine between them, plus a small course gradebook.
//!

pub mod config;
pub mod controller;
pub mod event;
pub mod form;
pub mod gradebook;
pub mod identifier;
pub mod logging;
pub mod messages;
mod preview;
pub mod schema;
pub mod session;
pub mod store;
#[cfg(test)]
mod tests;

pub use cabinet_registry_shared as shared;
pub use config::RegistryConfig;
pub use controller::{resolve_attachment, CommitOutcome, EditController, EditMode};
pub use event::{EventOutcome, UiEvent};
pub use session::{Session, SessionView};
