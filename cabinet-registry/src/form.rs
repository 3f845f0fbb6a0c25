use cabinet_registry_shared::{Draft, FieldChange, FieldErrors, RegistryError};
use tracing::debug;

use crate::config::RegistryConfig;
use crate::schema::{self, ValidatedMember};

/// The registry form: the current draft plus the messages from the last rejected submit
#[derive(Debug, Default)]
pub struct ValidatedForm {
    draft: Draft,
    errors: FieldErrors,
    /// Set by a rejected submit, from then on each change re-checks its own field
    revalidate: bool,
}

impl ValidatedForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn set_field(&mut self, change: FieldChange, config: &RegistryConfig) {
        let field = change.field();
        debug!("Field {} changed", field);
        self.draft.apply(change);
        if self.revalidate {
            self.errors.remove(field);
            if let Some(message) = schema::validate_field(&self.draft, field, config) {
                self.errors.insert(field, message);
            }
        }
    }

    /// Validates the draft and hands the result to `commit`.
    ///
    /// On a validation failure the messages are kept on the form and `commit` is never
    /// called. The draft is only cleared once `commit` succeeds.
    pub fn submit<R>(
        &mut self,
        config: &RegistryConfig,
        commit: impl FnOnce(ValidatedMember) -> Result<R, RegistryError>,
    ) -> Result<R, RegistryError> {
        match schema::validate(&self.draft, config) {
            Ok(values) => {
                let res = commit(values)?;
                self.reset_to(Draft::default());
                Ok(res)
            }
            Err(errors) => {
                self.errors = errors.clone();
                self.revalidate = true;
                Err(RegistryError::ValidationError(errors))
            }
        }
    }

    /// Replaces every draft field and drops all current messages
    pub fn reset_to(&mut self, draft: Draft) {
        self.draft = draft;
        self.errors.clear();
        self.revalidate = false;
    }
}
