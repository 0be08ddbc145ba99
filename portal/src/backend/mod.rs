//! # Backend Module
//!
//! Contains all non-UI logic for the LifeChain portal.
//!
//! The backend follows a layered architecture:
//! ```text
//! UI layer (any frontend)
//!     ↓
//! IO layer (routes, screens, submission handlers)
//!     ↓
//! Domain layer (services, form schemas, matching)
//!     ↓
//! Storage layer (key-value store, record store)
//! ```
//!
//! The backend is UI-agnostic: a desktop shell, a web frontend, or a CLI
//! can all sit on [`AppState`] without modification.

pub mod domain;
pub mod io;
pub mod storage;

use anyhow::Result;
use log::info;
use std::sync::Arc;

use crate::backend::domain::{
    AuthService, DonorService, MatchingService, OrganizationService, PasscodeService,
    RecipientService, StaffService,
};
use crate::backend::storage::{JsonFileStore, KeyValueStore, MemoryStore, RecordStore};

/// Main application state that holds all services.
#[derive(Clone)]
pub struct AppState {
    pub donor_service: DonorService,
    pub recipient_service: RecipientService,
    pub staff_service: StaffService,
    pub organization_service: OrganizationService,
    pub matching_service: MatchingService,
    pub auth_service: AuthService,
    pub passcode_service: PasscodeService,
}

/// Initialize the backend against the default on-disk store.
///
/// Persistent records live under the platform data directory; the
/// passcode slot lives in a process-scoped in-memory store and dies
/// with the process.
pub fn initialize_backend() -> Result<AppState> {
    info!("Setting up record storage");
    let persistent: Arc<dyn KeyValueStore> = Arc::new(JsonFileStore::new_default()?);
    let session: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
    Ok(initialize_backend_with_stores(persistent, session))
}

/// Initialize the backend against injected stores. Tests pass in-memory
/// stores; an embedding application may substitute any `KeyValueStore`.
pub fn initialize_backend_with_stores(
    persistent: Arc<dyn KeyValueStore>,
    session: Arc<dyn KeyValueStore>,
) -> AppState {
    info!("Setting up domain services");
    let records = RecordStore::new(persistent);
    let session_records = RecordStore::new(session);

    AppState {
        donor_service: DonorService::new(records.clone()),
        recipient_service: RecipientService::new(records.clone()),
        staff_service: StaffService::new(records.clone()),
        organization_service: OrganizationService::new(records.clone()),
        matching_service: MatchingService::new(records.clone()),
        auth_service: AuthService::new(records.clone()),
        passcode_service: PasscodeService::new(records, session_records),
    }
}
