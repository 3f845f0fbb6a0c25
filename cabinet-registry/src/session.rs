//! The record editor session: everything one page instance owns
//!

use cabinet_registry_shared::{
    Choice, Draft, FieldChange, FieldErrors, Record, RecordId, RegistryError,
};
use serde::Serialize;
use tracing::{debug, error, warn};

use crate::config::RegistryConfig;
use crate::controller::{CommitOutcome, EditController};
use crate::form::ValidatedForm;
use crate::preview::PreviewRegistry;
use crate::store::RecordStore;

/// Owns the form, the store, the edit state and the photo previews. The rendering
/// surface reads through the getters and reports user actions through the `on_*`
/// handlers, each of which runs to completion before the next.
#[derive(Debug)]
pub struct Session {
    config: RegistryConfig,
    form: ValidatedForm,
    store: RecordStore,
    controller: EditController,
    previews: PreviewRegistry,
}

impl Default for Session {
    fn default() -> Self {
        Self::build(RegistryConfig::default())
    }
}

impl Session {
    /// Starts an empty session. Fails with `RegistryError::Configuration` if the
    /// config doesn't pass `RegistryConfig::validate`.
    pub fn new(config: RegistryConfig) -> Result<Self, RegistryError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: RegistryConfig) -> Self {
        debug!("Starting session with {:?}", config);
        let store = RecordStore::new(config.id_strategy);
        Self {
            config,
            form: ValidatedForm::new(),
            store,
            controller: EditController::new(),
            previews: PreviewRegistry::new(),
        }
    }

    pub fn get_draft(&self) -> &Draft {
        self.form.draft()
    }

    pub fn get_errors(&self) -> &FieldErrors {
        self.form.errors()
    }

    pub fn get_records(&self) -> &[Record] {
        self.store.all()
    }

    pub fn is_editing(&self) -> bool {
        self.controller.mode().is_editing()
    }

    pub fn editing_target(&self) -> Option<RecordId> {
        self.controller.mode().target()
    }

    pub fn live_previews(&self) -> usize {
        self.previews.len()
    }

    pub fn on_field_change(&mut self, change: FieldChange) {
        self.form.set_field(change, &self.config);
    }

    /// Validates and commits the draft. Validation failures come back as
    /// `RegistryError::ValidationError` and leave the store untouched.
    pub fn on_submit(&mut self) -> Result<CommitOutcome, RegistryError> {
        let Self {
            config,
            form,
            store,
            controller,
            previews,
        } = self;

        let outcome = form.submit(config, |values| controller.on_submit(values, store))?;
        previews.retain_referenced(store.all());
        debug!("Submit committed: {:?}", outcome);
        Ok(outcome)
    }

    /// Opens the record for editing. Returns false if there's no such record.
    pub fn on_edit_click(&mut self, id: RecordId) -> bool {
        match self.store.get(id) {
            Some(record) => {
                self.controller.start_edit(record, &mut self.form);
                true
            }
            None => {
                warn!("Edit requested for unknown record {}", id);
                false
            }
        }
    }

    pub fn on_delete_click(&mut self, id: RecordId) -> Option<Record> {
        let removed = self
            .controller
            .on_delete(id, &mut self.store, &mut self.form);
        if removed.is_none() {
            warn!("Delete requested for unknown record {}", id);
        }
        self.previews.retain_referenced(self.store.all());
        removed
    }

    pub fn on_cancel_edit(&mut self) {
        self.controller.cancel_edit(&mut self.form);
    }

    /// The display handle for a record's photo, `None` if it has no photo
    pub fn preview(&mut self, id: RecordId) -> Result<Option<&str>, RegistryError> {
        let Some(attachment) = self
            .store
            .get(id)
            .and_then(|record| record.attachment.as_ref())
        else {
            return Ok(None);
        };
        self.previews.acquire(attachment).map(Some)
    }

    /// Snapshot of everything the rendering surface draws
    pub fn view(&mut self) -> SessionView {
        let mut rows = Vec::with_capacity(self.store.len());
        for record in self.store.all() {
            let preview = match &record.attachment {
                Some(attachment) => match self.previews.acquire(attachment) {
                    Ok(uri) => Some(uri.to_string()),
                    Err(err) => {
                        error!("Failed to build preview for record {}: {}", record.id, err);
                        None
                    }
                },
                None => None,
            };
            rows.push(RecordRow::new(record, preview));
        }

        let draft = self.form.draft();
        SessionView {
            editing: self.controller.mode().target(),
            draft: DraftView {
                prefix: draft.prefix.clone(),
                first_name: draft.first_name.clone(),
                last_name: draft.last_name.clone(),
                attachment: draft
                    .attachment
                    .files()
                    .iter()
                    .map(|file| file.name.clone())
                    .collect(),
                work_history: draft.work_history.clone(),
                primary_role: draft.primary_role.clone(),
                secondary_role: draft.secondary_role.clone(),
                department: draft.department.clone(),
                affiliation: draft.affiliation.clone(),
            },
            errors: self.form.errors().clone(),
            records: rows,
        }
    }
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionView {
    /// The record being edited, `None` while creating
    pub editing: Option<RecordId>,
    pub draft: DraftView,
    pub errors: FieldErrors,
    pub records: Vec<RecordRow>,
}

/// The draft as shown, with file names instead of file contents
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftView {
    pub prefix: String,
    pub first_name: String,
    pub last_name: String,
    pub attachment: Vec<String>,
    pub work_history: String,
    pub primary_role: String,
    pub secondary_role: String,
    pub department: String,
    pub affiliation: String,
}

/// One line of the members table
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordRow {
    pub id: RecordId,
    pub prefix: String,
    pub full_name: String,
    pub primary_role: String,
    pub secondary_role: Option<String>,
    pub department: String,
    pub affiliation: String,
    pub preview: Option<String>,
}

impl RecordRow {
    fn new(record: &Record, preview: Option<String>) -> Self {
        let fields = &record.fields;
        Self {
            id: record.id,
            prefix: fields.prefix.label().to_string(),
            full_name: fields.full_name(),
            primary_role: fields.primary_role.label().to_string(),
            secondary_role: fields.secondary_role.map(|role| role.label().to_string()),
            department: fields.department.label().to_string(),
            affiliation: fields.affiliation.label().to_string(),
            preview,
        }
    }
}
