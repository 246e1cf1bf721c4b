//! In-memory record store backing the demo.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// A stored record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub id: i64,
    pub name: String,
    pub notes: String,
}

/// Tiny CRUD store with interior mutability, shared across tasks.
#[derive(Clone, Default)]
pub struct RecordService {
    inner: Arc<RwLock<RecordStore>>,
}

#[derive(Default)]
struct RecordStore {
    records: HashMap<i64, Record>,
    last_id: i64,
}

impl RecordService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a new record and return it with its minted id.
    pub fn create(&self, name: String, notes: String) -> Record {
        let mut store = self.inner.write().unwrap_or_else(|e| e.into_inner());
        store.last_id += 1;
        let record = Record {
            id: store.last_id,
            name,
            notes,
        };
        store.records.insert(record.id, record.clone());
        record
    }

    pub fn get(&self, id: i64) -> Option<Record> {
        self.inner
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .records
            .get(&id)
            .cloned()
    }

    /// All records ordered by id.
    pub fn list(&self) -> Vec<Record> {
        let store = self.inner.read().unwrap_or_else(|e| e.into_inner());
        let mut records: Vec<Record> = store.records.values().cloned().collect();
        records.sort_by_key(|r| r.id);
        records
    }

    /// Replace an existing record. Returns false if the id is unknown.
    pub fn update(&self, record: Record) -> bool {
        let mut store = self.inner.write().unwrap_or_else(|e| e.into_inner());
        match store.records.get_mut(&record.id) {
            Some(slot) => {
                *slot = record;
                true
            }
            None => false,
        }
    }

    pub fn delete(&self, id: i64) -> bool {
        let mut store = self.inner.write().unwrap_or_else(|e| e.into_inner());
        store.records.remove(&id).is_some()
    }
}
