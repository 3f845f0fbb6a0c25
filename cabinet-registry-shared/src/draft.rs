//! The form's working value, as the user has typed and picked it so far
//!

use serde::{Deserialize, Serialize};

use crate::field::Field;

/// A file handed over by the attachment source, opaque beyond its metadata
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectedFile {
    pub name: String,
    pub content_type: String,
    #[serde(default)]
    pub data: Vec<u8>,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, content_type: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            content_type: content_type.into(),
            data,
        }
    }
}

/// What the file input currently holds. Empty means no new file was chosen.
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FileSelection(Vec<SelectedFile>);

impl FileSelection {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn single(file: SelectedFile) -> Self {
        Self(vec![file])
    }

    pub fn files(&self) -> &[SelectedFile] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<SelectedFile>> for FileSelection {
    fn from(files: Vec<SelectedFile>) -> Self {
        Self(files)
    }
}

#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Draft {
    pub prefix: String,
    pub first_name: String,
    pub last_name: String,
    pub attachment: FileSelection,
    pub work_history: String,
    pub primary_role: String,
    pub secondary_role: String,
    pub department: String,
    pub affiliation: String,
}

/// A single edit to one draft field
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "camelCase")]
pub enum FieldChange {
    Prefix(String),
    FirstName(String),
    LastName(String),
    Attachment(FileSelection),
    WorkHistory(String),
    PrimaryRole(String),
    SecondaryRole(String),
    Department(String),
    Affiliation(String),
}

impl FieldChange {
    pub fn field(&self) -> Field {
        match self {
            FieldChange::Prefix(_) => Field::Prefix,
            FieldChange::FirstName(_) => Field::FirstName,
            FieldChange::LastName(_) => Field::LastName,
            FieldChange::Attachment(_) => Field::Attachment,
            FieldChange::WorkHistory(_) => Field::WorkHistory,
            FieldChange::PrimaryRole(_) => Field::PrimaryRole,
            FieldChange::SecondaryRole(_) => Field::SecondaryRole,
            FieldChange::Department(_) => Field::Department,
            FieldChange::Affiliation(_) => Field::Affiliation,
        }
    }
}

impl Draft {
    pub fn apply(&mut self, change: FieldChange) {
        match change {
            FieldChange::Prefix(value) => self.prefix = value,
            FieldChange::FirstName(value) => self.first_name = value,
            FieldChange::LastName(value) => self.last_name = value,
            FieldChange::Attachment(files) => self.attachment = files,
            FieldChange::WorkHistory(value) => self.work_history = value,
            FieldChange::PrimaryRole(value) => self.primary_role = value,
            FieldChange::SecondaryRole(value) => self.secondary_role = value,
            FieldChange::Department(value) => self.department = value,
            FieldChange::Affiliation(value) => self.affiliation = value,
        }
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}
