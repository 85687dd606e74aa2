//! In-memory upsert store
//!
//! Records are kept in insertion order behind a `RwLock`. A writer that
//! panics while holding the lock poisons it; from then on the store reports
//! soft failures instead of panicking until it is cleared.

use roster_core::{Meta, RecordStore, UpsertError, UpsertOutcome, UpsertRecord};
use std::sync::{PoisonError, RwLock};
use tracing::{debug, error, info};

/// Ordered, name-keyed records with replace-on-hit semantics
pub struct UpsertStore {
    records: RwLock<Vec<UpsertRecord>>,
}

impl UpsertStore {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
        }
    }

    /// Snapshot of every record in insertion order, `None` if the store is
    /// poisoned.
    pub fn records(&self) -> Option<Vec<UpsertRecord>> {
        self.records.read().ok().map(|records| records.clone())
    }

    /// Number of records, `None` if the store is poisoned.
    pub fn len(&self) -> Option<usize> {
        self.records.read().ok().map(|records| records.len())
    }

    pub fn is_empty(&self) -> Option<bool> {
        self.len().map(|len| len == 0)
    }
}

impl Default for UpsertStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordStore for UpsertStore {
    fn try_upsert(&self, name: &str, meta: Meta) -> Result<UpsertOutcome, UpsertError> {
        let mut records = self.records.write().map_err(|_| UpsertError::Poisoned)?;

        let positions: Vec<usize> = records
            .iter()
            .enumerate()
            .filter(|(_, record)| record.name == name)
            .map(|(index, _)| index)
            .collect();

        match positions.as_slice() {
            [] => {
                records.push(UpsertRecord::new(name, meta));
                Ok(UpsertOutcome::Inserted)
            }
            [index] => {
                records[*index].meta = meta;
                Ok(UpsertOutcome::Replaced)
            }
            _ => Err(UpsertError::DuplicateName {
                name: name.to_string(),
                count: positions.len(),
            }),
        }
    }

    fn upsert(&self, name: &str, meta: Meta) -> Option<bool> {
        match self.try_upsert(name, meta) {
            Ok(outcome) => {
                debug!("Upserted record {:?}: {:?}", name, outcome);
                Some(true)
            }
            Err(e) => {
                error!("Upsert of {:?} failed: {}", name, e);
                None
            }
        }
    }

    fn get(&self, name: &str) -> Result<Option<UpsertRecord>, UpsertError> {
        let records = self.records.read().map_err(|_| UpsertError::Poisoned)?;
        Ok(records.iter().find(|record| record.name == name).cloned())
    }

    fn clear(&self) -> usize {
        let mut records = self
            .records
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let removed = records.len();
        records.clear();
        drop(records);
        self.records.clear_poison();

        info!("Cleared {} upsert records", removed);
        removed
    }
}

#[cfg(test)]
impl UpsertStore {
    /// Poison the lock by panicking while holding it on another thread.
    pub(crate) fn poison(&self) {
        std::thread::scope(|scope| {
            let _ = scope
                .spawn(|| {
                    let _guard = self.records.write().unwrap();
                    panic!("writer died while holding the record lock");
                })
                .join();
        });
        assert!(self.records.is_poisoned());
    }
}
