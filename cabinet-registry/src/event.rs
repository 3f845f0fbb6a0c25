//! Serialized user actions coming from the rendering surface
//!

use cabinet_registry_shared::{FieldChange, FieldErrors, RecordId, RegistryError};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::controller::CommitOutcome;
use crate::session::Session;

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum UiEvent {
    FieldChange { change: FieldChange },
    Submit,
    EditClick { id: RecordId },
    DeleteClick { id: RecordId },
    CancelEdit,
}

/// What handling an event did, for the surface to react to
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
#[serde(tag = "result", rename_all = "camelCase")]
pub enum EventOutcome {
    FieldChanged,
    Committed { commit: CommitOutcome },
    /// The submit failed validation, nothing was stored
    Rejected { errors: FieldErrors },
    EditStarted { id: RecordId, found: bool },
    Deleted { id: RecordId, found: bool },
    EditCancelled,
}

impl Session {
    pub fn dispatch(&mut self, event: UiEvent) -> Result<EventOutcome, RegistryError> {
        debug!("Dispatching {:?}", event);
        match event {
            UiEvent::FieldChange { change } => {
                self.on_field_change(change);
                Ok(EventOutcome::FieldChanged)
            }
            UiEvent::Submit => match self.on_submit() {
                Ok(commit) => Ok(EventOutcome::Committed { commit }),
                Err(RegistryError::ValidationError(errors)) => {
                    Ok(EventOutcome::Rejected { errors })
                }
                Err(err) => Err(err),
            },
            UiEvent::EditClick { id } => Ok(EventOutcome::EditStarted {
                id,
                found: self.on_edit_click(id),
            }),
            UiEvent::DeleteClick { id } => Ok(EventOutcome::Deleted {
                id,
                found: self.on_delete_click(id).is_some(),
            }),
            UiEvent::CancelEdit => {
                self.on_cancel_edit();
                Ok(EventOutcome::EditCancelled)
            }
        }
    }

    pub fn dispatch_json(&mut self, input: &str) -> Result<EventOutcome, RegistryError> {
        let event: UiEvent = serde_json::from_str(input)?;
        self.dispatch(event)
    }
}
