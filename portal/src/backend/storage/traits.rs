//! # Storage Traits
//!
//! The key-value abstraction every storage backend implements. The
//! domain layer never touches a backend directly; it goes through
//! [`RecordStore`](super::RecordStore), which is written against this
//! trait so dashboards and services can be tested against an in-memory
//! fake instead of the real on-disk store.

use anyhow::Result;

/// A flat string-keyed store where each key holds one JSON text value.
///
/// The surface is `get/set/remove` over opaque strings, the same shape
/// as browser local storage.
pub trait KeyValueStore: Send + Sync {
    /// Read the raw value stored under `key`, or `None` if absent.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, overwriting any previous value.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove the value stored under `key`. Removing an absent key is
    /// not an error.
    fn remove(&self, key: &str) -> Result<()>;
}
