use enum_iterator::Sequence;
use serde::{Deserialize, Serialize};

/// The fields of the registry form, in the order they appear on it
#[derive(
    Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize, Sequence,
)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Prefix,
    FirstName,
    LastName,
    Attachment,
    WorkHistory,
    PrimaryRole,
    SecondaryRole,
    Department,
    Affiliation,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Prefix => "prefix",
            Field::FirstName => "firstName",
            Field::LastName => "lastName",
            Field::Attachment => "attachment",
            Field::WorkHistory => "workHistory",
            Field::PrimaryRole => "primaryRole",
            Field::SecondaryRole => "secondaryRole",
            Field::Department => "department",
            Field::Affiliation => "affiliation",
        }
    }

    /// Whether submitting with this field left empty is an error
    pub fn is_required(&self) -> bool {
        !matches!(self, Field::Attachment | Field::SecondaryRole)
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[test]
fn test_field_names_match_serde() {
    for field in enum_iterator::all::<Field>() {
        let res = serde_json::to_string(&field).expect("Failed to serialize field");
        assert_eq!(res, format!("\"{}\"", field.as_str()));
    }
    assert!(!Field::SecondaryRole.is_required());
    assert!(Field::WorkHistory.is_required());
}
