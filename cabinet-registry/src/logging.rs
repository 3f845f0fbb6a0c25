//! Logging things
//!

use cabinet_registry_shared::RegistryError;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// The filter used when `RUST_LOG` isn't set
pub fn default_filter(debug: bool) -> &'static str {
    match debug {
        true => "cabinet_registry=debug",
        false => "cabinet_registry=info",
    }
}

/// Installs the global tracing subscriber for an embedding application.
///
/// Fails if a subscriber is already installed.
pub fn init(debug: bool) -> Result<(), RegistryError> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(debug).into()))
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .map_err(|err| RegistryError::Other(format!("Failed to install tracing subscriber: {err}")))
}
