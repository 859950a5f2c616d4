//! In-memory slot store with an optional byte quota.

use super::{KeyValueStore, StoreError, StoreResult};
use std::collections::HashMap;

#[derive(Debug, Default, Clone)]
pub struct MemoryKeyValueStore {
    slots: HashMap<String, String>,
    quota: Option<usize>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rejects any single write whose value is larger than `quota` bytes.
    pub fn with_quota(quota: usize) -> Self {
        Self {
            slots: HashMap::new(),
            quota: Some(quota),
        }
    }

    /// Seeds a slot directly, bypassing the quota.
    pub fn insert_raw(&mut self, slot: impl Into<String>, value: impl Into<String>) {
        self.slots.insert(slot.into(), value.into());
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get(&self, slot: &str) -> StoreResult<Option<String>> {
        Ok(self.slots.get(slot).cloned())
    }

    fn set(&mut self, slot: &str, value: &str) -> StoreResult<()> {
        if let Some(quota) = self.quota {
            if value.len() > quota {
                return Err(StoreError::QuotaExceeded {
                    requested: value.len(),
                    quota,
                });
            }
        }
        self.slots.insert(slot.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::MemoryKeyValueStore;
    use crate::store::{KeyValueStore, StoreError};

    #[test]
    fn quota_rejection_keeps_previous_value() {
        let mut store = MemoryKeyValueStore::with_quota(4);
        store.set("slot", "[]").unwrap();

        let err = store.set("slot", "[1,2,3]").unwrap_err();
        assert!(matches!(
            err,
            StoreError::QuotaExceeded {
                requested: 7,
                quota: 4
            }
        ));
        assert_eq!(store.get("slot").unwrap().as_deref(), Some("[]"));
    }
}
