//! The registry form's validation schema
//!
//! Every validator runs on every submit so the user sees all the problems at once,
//! one message per failing field.

use cabinet_registry_shared::{
    Choice, Draft, Field, FieldErrors, FileSelection, MemberFields, Ministry, Party, Position,
    Prefix, SelectedFile,
};
use tracing::debug;

use crate::config::RegistryConfig;
use crate::messages::{attachment_message, field_message, AttachmentProblem, Locale};

/// The value object a successful submit produces
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ValidatedMember {
    pub fields: MemberFields,
    /// The newly chosen photo, `None` when the file input was left empty
    pub attachment: Option<SelectedFile>,
}

pub fn validate(draft: &Draft, config: &RegistryConfig) -> Result<ValidatedMember, FieldErrors> {
    let locale = config.locale;
    let mut errors = FieldErrors::new();

    let prefix = required_choice::<Prefix>(&draft.prefix, Field::Prefix, locale, &mut errors);
    let first_name = required_text(&draft.first_name, Field::FirstName, locale, &mut errors);
    let last_name = required_text(&draft.last_name, Field::LastName, locale, &mut errors);
    let attachment = single_attachment(&draft.attachment, config, &mut errors);
    let work_history = required_text(&draft.work_history, Field::WorkHistory, locale, &mut errors);
    let primary_role =
        required_choice::<Position>(&draft.primary_role, Field::PrimaryRole, locale, &mut errors);
    let secondary_role = optional_choice::<Position>(
        &draft.secondary_role,
        Field::SecondaryRole,
        locale,
        &mut errors,
    );
    let department =
        required_choice::<Ministry>(&draft.department, Field::Department, locale, &mut errors);
    let affiliation =
        required_choice::<Party>(&draft.affiliation, Field::Affiliation, locale, &mut errors);

    match (
        prefix,
        first_name,
        last_name,
        work_history,
        primary_role,
        department,
        affiliation,
    ) {
        (
            Some(prefix),
            Some(first_name),
            Some(last_name),
            Some(work_history),
            Some(primary_role),
            Some(department),
            Some(affiliation),
        ) if errors.is_empty() => Ok(ValidatedMember {
            fields: MemberFields {
                prefix,
                first_name,
                last_name,
                work_history,
                primary_role,
                secondary_role,
                department,
                affiliation,
            },
            attachment,
        }),
        _ => {
            debug!(
                "Draft failed validation on {:?}",
                errors.fields().collect::<Vec<_>>()
            );
            Err(errors)
        }
    }
}

/// Runs the one validator that owns `field`, returning its message if the field fails
pub fn validate_field(draft: &Draft, field: Field, config: &RegistryConfig) -> Option<String> {
    let locale = config.locale;
    let mut errors = FieldErrors::new();
    match field {
        Field::Prefix => {
            required_choice::<Prefix>(&draft.prefix, field, locale, &mut errors);
        }
        Field::FirstName => {
            required_text(&draft.first_name, field, locale, &mut errors);
        }
        Field::LastName => {
            required_text(&draft.last_name, field, locale, &mut errors);
        }
        Field::Attachment => {
            single_attachment(&draft.attachment, config, &mut errors);
        }
        Field::WorkHistory => {
            required_text(&draft.work_history, field, locale, &mut errors);
        }
        Field::PrimaryRole => {
            required_choice::<Position>(&draft.primary_role, field, locale, &mut errors);
        }
        Field::SecondaryRole => {
            optional_choice::<Position>(&draft.secondary_role, field, locale, &mut errors);
        }
        Field::Department => {
            required_choice::<Ministry>(&draft.department, field, locale, &mut errors);
        }
        Field::Affiliation => {
            required_choice::<Party>(&draft.affiliation, field, locale, &mut errors);
        }
    }
    errors.get(field).map(str::to_string)
}

fn required_text(
    value: &str,
    field: Field,
    locale: Locale,
    errors: &mut FieldErrors,
) -> Option<String> {
    if value.is_empty() {
        errors.insert(field, field_message(field, locale));
        None
    } else {
        Some(value.to_string())
    }
}

fn required_choice<C: Choice>(
    value: &str,
    field: Field,
    locale: Locale,
    errors: &mut FieldErrors,
) -> Option<C> {
    let res = C::from_label(value);
    if res.is_none() {
        errors.insert(field, field_message(field, locale));
    }
    res
}

fn optional_choice<C: Choice>(
    value: &str,
    field: Field,
    locale: Locale,
    errors: &mut FieldErrors,
) -> Option<C> {
    if value.is_empty() {
        return None;
    }
    required_choice(value, field, locale, errors)
}

fn single_attachment(
    selection: &FileSelection,
    config: &RegistryConfig,
    errors: &mut FieldErrors,
) -> Option<SelectedFile> {
    let problem = match selection.files() {
        [] => return None,
        [file] => {
            let wrong_type = config
                .accepted_content_prefix
                .as_deref()
                .is_some_and(|prefix| !file.content_type.starts_with(prefix));
            if wrong_type {
                AttachmentProblem::NotAnImage
            } else if file.data.len() > config.max_attachment_bytes {
                AttachmentProblem::TooLarge
            } else {
                return Some(file.clone());
            }
        }
        _ => AttachmentProblem::NotSingle,
    };
    errors.insert(Field::Attachment, attachment_message(problem, config.locale));
    None
}
