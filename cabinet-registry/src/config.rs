//! Registry configuration
//!

use cabinet_registry_shared::RegistryError;
use serde::{Deserialize, Serialize};

use crate::messages::Locale;

/// Largest photo accepted by default, 100MB
pub const DEFAULT_MAX_ATTACHMENT_BYTES: usize = 100 * 1024 * 1024;

/// How new record identities are minted
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdStrategy {
    /// Milliseconds since the epoch, bumped when two records land in the same millisecond
    #[default]
    Timestamp,
    /// 1, 2, 3...
    Counter,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    pub locale: Locale,
    pub max_attachment_bytes: usize,
    /// Content type prefix a photo must have. Off by default, any single file is
    /// accepted.
    pub accepted_content_prefix: Option<String>,
    pub id_strategy: IdStrategy,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            max_attachment_bytes: DEFAULT_MAX_ATTACHMENT_BYTES,
            accepted_content_prefix: None,
            id_strategy: IdStrategy::default(),
        }
    }
}

impl RegistryConfig {
    pub fn from_json(input: &str) -> Result<Self, RegistryError> {
        let config: Self = serde_json::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), RegistryError> {
        if self.max_attachment_bytes == 0 {
            return Err(RegistryError::Configuration(
                "max_attachment_bytes must be greater than zero".to_string(),
            ));
        }
        if let Some(prefix) = &self.accepted_content_prefix {
            if prefix.trim().is_empty() {
                return Err(RegistryError::Configuration(
                    "accepted_content_prefix can't be empty, use null to accept any type"
                        .to_string(),
                ));
            }
        }
        Ok(())
    }
}
