//! Committed member records
//!

use serde::{Deserialize, Serialize};

use crate::attachment::Attachment;
use crate::draft::{Draft, FileSelection};
use crate::options::{Choice, Ministry, Party, Position, Prefix};

/// Identity of a record, assigned once when it is created and never changed
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(pub u64);

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The validated field values of a member, everything except identity and photo
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberFields {
    pub prefix: Prefix,
    pub first_name: String,
    pub last_name: String,
    pub work_history: String,
    pub primary_role: Position,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub secondary_role: Option<Position>,
    pub department: Ministry,
    pub affiliation: Party,
}

impl MemberFields {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: RecordId,
    #[serde(flatten)]
    pub fields: MemberFields,
    /// `None` is a valid, permanent state: the member simply has no photo
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub attachment: Option<Attachment>,
}

impl Record {
    /// The draft the form is loaded with when this record is opened for editing.
    ///
    /// The file input can't be pre-populated, so the attachment selection is always empty.
    pub fn to_draft(&self) -> Draft {
        Draft {
            prefix: self.fields.prefix.label().to_string(),
            first_name: self.fields.first_name.clone(),
            last_name: self.fields.last_name.clone(),
            attachment: FileSelection::none(),
            work_history: self.fields.work_history.clone(),
            primary_role: self.fields.primary_role.label().to_string(),
            secondary_role: self
                .fields
                .secondary_role
                .map(|role| role.label().to_string())
                .unwrap_or_default(),
            department: self.fields.department.label().to_string(),
            affiliation: self.fields.affiliation.label().to_string(),
        }
    }
}
