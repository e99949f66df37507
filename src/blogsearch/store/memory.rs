use super::RecordStore;
use crate::model::Record;

/// A store over caller-supplied records, kept in the order given.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    records: Vec<Record>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<Record>) -> Self {
        Self { records }
    }
}

impl From<Vec<Record>> for InMemoryStore {
    fn from(records: Vec<Record>) -> Self {
        Self::with_records(records)
    }
}

impl RecordStore for InMemoryStore {
    fn records(&self) -> &[Record] {
        &self.records
    }
}
