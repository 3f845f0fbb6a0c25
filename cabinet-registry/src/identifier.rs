//* Minting record identities
//*

use cabinet_registry_shared::RecordId;
use chrono::Utc;

use crate::config::IdStrategy;

/// Hands out strictly increasing record ids for the lifetime of a session
#[derive(Debug, Clone)]
pub struct IdGenerator {
    strategy: IdStrategy,
    last: u64,
}

impl IdGenerator {
    pub fn new(strategy: IdStrategy) -> Self {
        Self { strategy, last: 0 }
    }

    pub fn next_id(&mut self) -> RecordId {
        let candidate = match self.strategy {
            IdStrategy::Timestamp => u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0),
            IdStrategy::Counter => 0,
        };
        let id = candidate.max(self.last + 1);
        self.last = id;
        RecordId(id)
    }
}
