//! Types shared between the registry engine and whatever renders it
//!

pub mod attachment;
pub mod draft;
pub mod error;
pub mod field;
pub mod options;
pub mod record;

pub use attachment::Attachment;
pub use draft::{Draft, FieldChange, FileSelection, SelectedFile};
pub use error::{FieldErrors, RegistryError};
pub use field::Field;
pub use options::{Choice, Ministry, Party, Position, Prefix};
pub use record::{MemberFields, Record, RecordId};
