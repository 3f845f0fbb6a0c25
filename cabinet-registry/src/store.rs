//! In-memory record storage
//!

use cabinet_registry_shared::{Attachment, MemberFields, Record, RecordId, RegistryError};
use tracing::debug;

use crate::config::IdStrategy;
use crate::identifier::IdGenerator;

/// Ordered collection of committed records. New records append; edits keep their position.
#[derive(Debug)]
pub struct RecordStore {
    records: Vec<Record>,
    ids: IdGenerator,
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::new(IdStrategy::default())
    }
}

impl RecordStore {
    pub fn new(strategy: IdStrategy) -> Self {
        Self {
            records: Vec::new(),
            ids: IdGenerator::new(strategy),
        }
    }

    /// Assigns a fresh identity and appends the record
    pub fn add(&mut self, fields: MemberFields, attachment: Option<Attachment>) -> &Record {
        let id = self.ids.next_id();
        let index = self.records.len();
        self.records.push(Record {
            id,
            fields,
            attachment,
        });
        debug!("Created record {} at position {}", id, index);
        &self.records[index]
    }

    /// Replaces everything but the identity of the record with the given id
    pub fn replace(
        &mut self,
        id: RecordId,
        fields: MemberFields,
        attachment: Option<Attachment>,
    ) -> Result<&Record, RegistryError> {
        let record = self
            .records
            .iter_mut()
            .find(|record| record.id == id)
            .ok_or_else(|| RegistryError::NotFound(format!("Record {} not found", id)))?;
        record.fields = fields;
        record.attachment = attachment;
        debug!("Replaced record {}", id);
        Ok(&*record)
    }

    /// Removes the record with the given id, if there is one
    pub fn remove(&mut self, id: RecordId) -> Option<Record> {
        let index = self.records.iter().position(|record| record.id == id)?;
        debug!("Removed record {}", id);
        Some(self.records.remove(index))
    }

    pub fn get(&self, id: RecordId) -> Option<&Record> {
        self.records.iter().find(|record| record.id == id)
    }

    pub fn all(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
