//! # Storage Module
//!
//! Persistence for the portal: a small key-value abstraction (each key
//! holds one JSON document), two backends (on-disk JSON files and an
//! in-memory map), and the typed [`RecordStore`] the domain layer uses
//! for its append-only lists and single-record profile slots.

pub mod json_file;
pub mod keys;
pub mod memory;
pub mod records;
pub mod traits;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;
pub use records::RecordStore;
pub use traits::KeyValueStore;
