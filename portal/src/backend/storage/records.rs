use anyhow::Result;
use log::warn;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;

use super::traits::KeyValueStore;

/// Typed record operations over a [`KeyValueStore`].
///
/// Two shapes exist: append-only lists (one JSON array per key) and
/// single-record profile slots (one JSON object per key). Reads treat
/// an absent or undecodable value as empty; a corrupt document is
/// logged and degraded, never surfaced as a failure.
///
/// There is no locking: when two writers interleave an append, the
/// later write wins and the earlier appended item is lost. Acceptable
/// under the single-tab usage model; known limitation.
#[derive(Clone)]
pub struct RecordStore {
    store: Arc<dyn KeyValueStore>,
}

impl RecordStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Read the list stored under `key`. Absent or corrupt → empty.
    pub fn list<T: DeserializeOwned>(&self, key: &str) -> Vec<T> {
        match self.store.get(key) {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(items) => items,
                Err(e) => {
                    warn!("Undecodable list under {}, treating as empty: {}", key, e);
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!("Failed to read {}, treating as empty: {}", key, e);
                Vec::new()
            }
        }
    }

    /// Append `record` to the list under `key`. The existing list is
    /// read first (corrupt data counts as empty), extended, and written
    /// back in full.
    pub fn append<T: Serialize + DeserializeOwned>(&self, key: &str, record: &T) -> Result<()> {
        let mut items: Vec<serde_json::Value> = self.list(key);
        items.push(serde_json::to_value(record)?);
        let raw = serde_json::to_string(&items)?;
        self.store.set(key, &raw)
    }

    /// Read the single-record slot under `key`. Absent or corrupt → `None`.
    pub fn read_slot<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        match self.store.get(key) {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(record) => Some(record),
                Err(e) => {
                    warn!("Undecodable record under {}, treating as absent: {}", key, e);
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                warn!("Failed to read {}, treating as absent: {}", key, e);
                None
            }
        }
    }

    /// Unconditionally overwrite the single-record slot under `key`.
    pub fn replace_slot<T: Serialize>(&self, key: &str, record: &T) -> Result<()> {
        let raw = serde_json::to_string(record)?;
        self.store.set(key, &raw)
    }

    /// Read a raw string slot (the credit token). Absent or unreadable → `None`.
    pub fn read_raw(&self, key: &str) -> Option<String> {
        match self.store.get(key) {
            Ok(value) => value,
            Err(e) => {
                warn!("Failed to read {}, treating as absent: {}", key, e);
                None
            }
        }
    }

    /// Write a raw string slot.
    pub fn write_raw(&self, key: &str, value: &str) -> Result<()> {
        self.store.set(key, value)
    }

    /// Clear a slot or list. Failures are logged and swallowed; clearing
    /// is always best-effort.
    pub fn clear(&self, key: &str) {
        if let Err(e) = self.store.remove(key) {
            warn!("Failed to clear {}: {}", key, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::storage::MemoryStore;
    use serde::Deserialize;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Item {
        id: String,
        value: u32,
    }

    fn setup() -> (RecordStore, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::new());
        (RecordStore::new(store.clone()), store)
    }

    #[test]
    fn append_preserves_insertion_order() {
        let (records, _store) = setup();
        for i in 0..3 {
            let item = Item {
                id: format!("item-{}", i),
                value: i,
            };
            records.append("list", &item).unwrap();
        }

        let items: Vec<Item> = records.list("list");
        assert_eq!(items.len(), 3);
        assert_eq!(items[0].id, "item-0");
        assert_eq!(items[2].id, "item-2");
    }

    #[test]
    fn absent_list_reads_as_empty() {
        let (records, _store) = setup();
        let items: Vec<Item> = records.list("missing");
        assert!(items.is_empty());
    }

    #[test]
    fn corrupt_list_reads_as_empty_and_append_recovers() {
        let (records, store) = setup();
        store.set("list", "{not json").unwrap();

        let items: Vec<Item> = records.list("list");
        assert!(items.is_empty());

        // Appending over corrupt data starts a fresh list.
        let item = Item {
            id: "fresh".to_string(),
            value: 1,
        };
        records.append("list", &item).unwrap();
        let items: Vec<Item> = records.list("list");
        assert_eq!(items, vec![item]);
    }

    #[test]
    fn slot_overwrites_and_reads_back() {
        let (records, _store) = setup();
        assert_eq!(records.read_slot::<Item>("slot"), None);

        let first = Item {
            id: "a".to_string(),
            value: 1,
        };
        let second = Item {
            id: "b".to_string(),
            value: 2,
        };
        records.replace_slot("slot", &first).unwrap();
        records.replace_slot("slot", &second).unwrap();

        assert_eq!(records.read_slot::<Item>("slot"), Some(second));
    }

    #[test]
    fn corrupt_slot_reads_as_absent() {
        let (records, store) = setup();
        store.set("slot", "][").unwrap();
        assert_eq!(records.read_slot::<Item>("slot"), None);
    }

    #[test]
    fn raw_slot_and_clear() {
        let (records, _store) = setup();
        assert_eq!(records.read_raw("token"), None);

        records.write_raw("token", "CRD2501019XKQ").unwrap();
        assert_eq!(records.read_raw("token"), Some("CRD2501019XKQ".to_string()));

        records.clear("token");
        assert_eq!(records.read_raw("token"), None);
    }
}
