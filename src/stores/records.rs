//! Keyed in-memory record storage with first-writer-wins semantics.
//!
//! Records are unique per id:
//! - inserting under a taken key never overwrites the original
//! - stored records are never mutated and never deleted
//!
//! The map is unbounded and lives for the lifetime of the process.

use std::collections::hash_map::{Entry, HashMap};
use std::hash::Hash;

#[derive(Debug)]
pub struct RecordStore<K, R> {
    records: HashMap<K, R>,
}

impl<K, R> Default for RecordStore<K, R> {
    fn default() -> Self {
        Self {
            records: HashMap::new(),
        }
    }
}

impl<K, R> RecordStore<K, R>
where
    K: Eq + Hash,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks whether a record is already stored under `key`.
    pub fn contains(&self, key: &K) -> bool {
        self.records.contains_key(key)
    }

    pub fn get(&self, key: &K) -> Option<&R> {
        self.records.get(key)
    }

    /// Stores `record` under `key` unless the key is taken.
    /// On conflict the original record is kept untouched and returned as the
    /// error value, mirroring `HashMap::try_insert`.
    pub fn try_insert(&mut self, key: K, record: R) -> Result<&R, &R> {
        match self.records.entry(key) {
            Entry::Occupied(existing) => Err(existing.into_mut()),
            Entry::Vacant(slot) => Ok(slot.insert(record)),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
