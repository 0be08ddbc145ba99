use log::{info, warn};
use thiserror::Error;

use crate::backend::domain::commands::auth::{LoginRole, NameLoginCommand, NameLoginResult};
use crate::backend::domain::models::admin::AdminSession;
use crate::backend::domain::models::donor::DonorRecord;
use crate::backend::domain::models::recipient::RecipientRecord;
use crate::backend::storage::{keys, RecordStore};

/// Why a name-based login failed. Messages are user-visible.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoginError {
    #[error("Enter your name")]
    EmptyName,
    #[error("No donor found with this name")]
    DonorNotFound,
    #[error("No recipient found with this name")]
    RecipientNotFound,
}

/// Name-based login surrogate: a case-insensitive scan of the stored
/// lists, not a credential check. First match wins and becomes the
/// "current profile" for that role.
#[derive(Clone)]
pub struct AuthService {
    records: RecordStore,
}

impl AuthService {
    pub fn new(records: RecordStore) -> Self {
        Self { records }
    }

    pub fn login(&self, command: NameLoginCommand) -> Result<NameLoginResult, LoginError> {
        let needle = command.name.trim().to_lowercase();
        if needle.is_empty() {
            return Err(LoginError::EmptyName);
        }

        match command.role {
            LoginRole::Donor => {
                let donors: Vec<DonorRecord> = self.records.list(keys::DONORS);
                let matched = donors
                    .into_iter()
                    .find(|d| d.full_name.to_lowercase() == needle)
                    .ok_or(LoginError::DonorNotFound)?;
                if let Err(e) = self.records.replace_slot(keys::DONOR_PROFILE, &matched) {
                    warn!("Failed to load donor profile: {}", e);
                }
                info!("Donor login: {}", matched.donor_id);
                Ok(NameLoginResult::Donor(matched))
            }
            LoginRole::Recipient => {
                let recipients: Vec<RecipientRecord> = self.records.list(keys::RECIPIENTS);
                let matched = recipients
                    .into_iter()
                    .find(|r| r.full_name.to_lowercase() == needle)
                    .ok_or(LoginError::RecipientNotFound)?;
                if let Err(e) = self.records.replace_slot(keys::RECIPIENT_PROFILE, &matched) {
                    warn!("Failed to load recipient profile: {}", e);
                }
                info!("Recipient login: {}", matched.entity_id);
                Ok(NameLoginResult::Recipient(matched))
            }
            LoginRole::Admin => {
                // No lookup: the admin dashboard only wants a display name.
                let session = AdminSession {
                    name: command.name,
                };
                if let Err(e) = self.records.replace_slot(keys::ADMIN, &session) {
                    warn!("Failed to store admin session: {}", e);
                }
                info!("Admin login: {}", session.name);
                Ok(NameLoginResult::Admin(session))
            }
        }
    }

    /// The stored admin session, if an admin has logged in.
    pub fn admin_session(&self) -> Option<AdminSession> {
        self.records.read_slot(keys::ADMIN)
    }

    pub fn admin_logout(&self) {
        self.records.clear(keys::ADMIN);
        info!("Cleared admin session");
    }
}
