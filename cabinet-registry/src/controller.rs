//! Create/edit mode handling between the form and the store
//!

use cabinet_registry_shared::{Attachment, Draft, Record, RecordId, RegistryError};
use serde::Serialize;
use tracing::{debug, warn};

use crate::form::ValidatedForm;
use crate::schema::ValidatedMember;
use crate::store::RecordStore;

#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub enum EditMode {
    #[default]
    Creating,
    Editing {
        target: RecordId,
        /// The target's photo at the time editing started. The file input can't be
        /// pre-filled, so this is put back on commit unless a new photo was chosen.
        saved_attachment: Option<Attachment>,
    },
}

impl EditMode {
    pub fn target(&self) -> Option<RecordId> {
        match self {
            EditMode::Creating => None,
            EditMode::Editing { target, .. } => Some(*target),
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, EditMode::Editing { .. })
    }
}

/// What a successful submit did to the store
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(tag = "outcome", content = "id", rename_all = "camelCase")]
pub enum CommitOutcome {
    Created(RecordId),
    Updated(RecordId),
    /// The edit target no longer existed, nothing was written
    Missing(RecordId),
}

/// Picks the photo to persist: a newly chosen one always wins, then the photo saved
/// when editing started, then nothing.
pub fn resolve_attachment(
    draft_attachment: Option<Attachment>,
    mode: &EditMode,
) -> Option<Attachment> {
    match (draft_attachment, mode) {
        (Some(new), _) => Some(new),
        (
            None,
            EditMode::Editing {
                saved_attachment, ..
            },
        ) => saved_attachment.clone(),
        (None, EditMode::Creating) => None,
    }
}

#[derive(Debug, Default)]
pub struct EditController {
    mode: EditMode,
}

impl EditController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> &EditMode {
        &self.mode
    }

    /// Loads the record into the form and switches to editing it
    pub fn start_edit(&mut self, record: &Record, form: &mut ValidatedForm) {
        if let Some(previous) = self.mode.target() {
            debug!("Switching edit target from {} to {}", previous, record.id);
        }
        self.mode = EditMode::Editing {
            target: record.id,
            saved_attachment: record.attachment.clone(),
        };
        form.reset_to(record.to_draft());
        debug!("Editing record {}", record.id);
    }

    pub fn cancel_edit(&mut self, form: &mut ValidatedForm) {
        if let Some(target) = self.mode.target() {
            debug!("Cancelled editing record {}", target);
        }
        self.mode = EditMode::Creating;
        form.reset_to(Draft::default());
    }

    /// Commits validated values: replaces the edit target, or appends a new record.
    ///
    /// Always leaves the controller in `Creating` mode on success.
    pub fn on_submit(
        &mut self,
        values: ValidatedMember,
        store: &mut RecordStore,
    ) -> Result<CommitOutcome, RegistryError> {
        let draft_attachment = values
            .attachment
            .as_ref()
            .map(Attachment::from_selected)
            .transpose()?;

        let mode = std::mem::take(&mut self.mode);
        let attachment = resolve_attachment(draft_attachment, &mode);

        match mode {
            EditMode::Editing { target, .. } => {
                match store.replace(target, values.fields, attachment) {
                    Ok(record) => Ok(CommitOutcome::Updated(record.id)),
                    Err(err) => {
                        warn!("Edit target vanished before commit: {}", err);
                        Ok(CommitOutcome::Missing(target))
                    }
                }
            }
            EditMode::Creating => Ok(CommitOutcome::Created(
                store.add(values.fields, attachment).id,
            )),
        }
    }

    /// Removes the record, dropping out of edit mode if it was the one being edited
    pub fn on_delete(
        &mut self,
        id: RecordId,
        store: &mut RecordStore,
        form: &mut ValidatedForm,
    ) -> Option<Record> {
        let removed = store.remove(id);
        if self.mode.target() == Some(id) {
            self.cancel_edit(form);
        }
        removed
    }
}
