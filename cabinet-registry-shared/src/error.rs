use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::field::Field;

/// Per-field validation messages, at most one per field, iterated in form order.
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<Field, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a message for the field. The first message for a field sticks.
    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.0.entry(field).or_insert_with(|| message.into());
    }

    pub fn remove(&mut self, field: Field) -> Option<String> {
        self.0.remove(&field)
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn clear(&mut self) {
        self.0.clear()
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.0.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(field, msg)| (*field, msg.as_str()))
    }
}

impl std::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self
            .iter()
            .map(|(field, msg)| format!("{field}: {msg}"))
            .collect();
        f.write_str(&parts.join("; "))
    }
}

#[derive(Debug)]
pub enum RegistryError {
    Configuration(String),
    IOError(String),
    NotFound(String),
    ValidationError(FieldErrors),
    Serde(String),
    Other(String),
}

impl std::fmt::Display for RegistryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegistryError::Configuration(msg) => write!(f, "Configuration error: {msg}"),
            RegistryError::IOError(msg) => write!(f, "IO error: {msg}"),
            RegistryError::NotFound(msg) => write!(f, "Not found: {msg}"),
            RegistryError::ValidationError(errors) => write!(f, "Validation failed: {errors}"),
            RegistryError::Serde(msg) => write!(f, "Serialization error: {msg}"),
            RegistryError::Other(msg) => f.write_str(msg),
        }
    }
}

impl std::error::Error for RegistryError {}

impl From<std::io::Error> for RegistryError {
    fn from(err: std::io::Error) -> Self {
        RegistryError::IOError(err.to_string())
    }
}

impl From<serde_json::Error> for RegistryError {
    fn from(err: serde_json::Error) -> Self {
        RegistryError::Serde(err.to_string())
    }
}

impl From<FieldErrors> for RegistryError {
    fn from(errors: FieldErrors) -> Self {
        RegistryError::ValidationError(errors)
    }
}
