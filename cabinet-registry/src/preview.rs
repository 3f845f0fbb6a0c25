//! Display handles for record photos
//!
//! A handle is a `data:` URI built from the decompressed photo. Handles are cached per
//! attachment and have to be released once no record refers to that attachment any more,
//! otherwise repeated edits pile them up.

use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use cabinet_registry_shared::{Attachment, Record, RegistryError};
use tracing::debug;
use uuid::Uuid;

#[derive(Debug, Default)]
pub struct PreviewRegistry {
    handles: HashMap<Uuid, String>,
}

impl PreviewRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the handle for the attachment, creating it on first use
    pub fn acquire(&mut self, attachment: &Attachment) -> Result<&str, RegistryError> {
        match self.handles.entry(attachment.id) {
            Entry::Occupied(entry) => Ok(entry.into_mut().as_str()),
            Entry::Vacant(entry) => {
                let uri = data_uri(attachment)?;
                debug!(
                    "Created preview for attachment {} ({} bytes)",
                    attachment.id, attachment.size
                );
                Ok(entry.insert(uri).as_str())
            }
        }
    }

    fn release(&mut self, attachment_id: &Uuid) {
        if self.handles.remove(attachment_id).is_some() {
            debug!("Released preview for attachment {}", attachment_id);
        }
    }

    /// Releases every handle whose attachment isn't held by one of `records`.
    /// Returns how many were released.
    pub fn retain_referenced(&mut self, records: &[Record]) -> usize {
        let live: HashSet<Uuid> = records
            .iter()
            .filter_map(|record| record.attachment.as_ref().map(|a| a.id))
            .collect();
        let stale: Vec<Uuid> = self
            .handles
            .keys()
            .filter(|id| !live.contains(id))
            .copied()
            .collect();
        for id in &stale {
            self.release(id);
        }
        stale.len()
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }
}

fn data_uri(attachment: &Attachment) -> Result<String, RegistryError> {
    let contents = attachment.contents()?;
    Ok(format!(
        "data:{};base64,{}",
        attachment.content_type,
        STANDARD.encode(contents)
    ))
}
