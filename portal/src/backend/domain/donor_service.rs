use log::{info, warn};

use crate::backend::domain::commands::donor::{RegisterDonorCommand, RegisterDonorResult};
use crate::backend::domain::identifier::{self, CREDIT_TOKEN_PREFIX, DONOR_PREFIX};
use crate::backend::domain::models::donor::DonorRecord;
use crate::backend::domain::schema::{forms, ValidationErrors};
use crate::backend::storage::{keys, RecordStore};

/// Service for donor registration, the donor profile slot, and the
/// credit token.
#[derive(Clone)]
pub struct DonorService {
    records: RecordStore,
}

impl DonorService {
    pub fn new(records: RecordStore) -> Self {
        Self { records }
    }

    /// Register a new donor pledge.
    ///
    /// Validates the form against its schema, mints a `DON` id, appends
    /// the record to the donor list, and overwrites the donor profile
    /// slot. Storage failures are logged and degrade to a no-op; the
    /// registration still reports success.
    pub fn register_donor(
        &self,
        command: RegisterDonorCommand,
    ) -> Result<RegisterDonorResult, ValidationErrors> {
        info!("Registering donor: {}", command.full_name);

        forms::DONOR_SIGNUP.validate(&command)?;

        let record = DonorRecord {
            donor_id: identifier::make_id(DONOR_PREFIX),
            full_name: command.full_name,
            blood_group: command.blood_group,
            organs: command.organs,
            email: command.email,
            phone: command.phone,
        };

        if let Err(e) = self.records.append(keys::DONORS, &record) {
            warn!("Failed to append donor record: {}", e);
        }
        if let Err(e) = self.records.replace_slot(keys::DONOR_PROFILE, &record) {
            warn!("Failed to write donor profile: {}", e);
        }

        info!("Registered donor {} with id {}", record.full_name, record.donor_id);
        Ok(RegisterDonorResult { record })
    }

    /// The donor currently loaded into the profile slot, if any.
    pub fn current_profile(&self) -> Option<DonorRecord> {
        self.records.read_slot(keys::DONOR_PROFILE)
    }

    /// Every registered donor, in registration order.
    pub fn list_donors(&self) -> Vec<DonorRecord> {
        self.records.list(keys::DONORS)
    }

    /// Return the stored credit token, minting a `CRD` one on first use.
    /// The token persists until the profile is cleared.
    pub fn ensure_credit_token(&self) -> String {
        if let Some(token) = self.records.read_raw(keys::CREDIT_TOKEN) {
            return token;
        }
        let token = identifier::make_id(CREDIT_TOKEN_PREFIX);
        if let Err(e) = self.records.write_raw(keys::CREDIT_TOKEN, &token) {
            warn!("Failed to store credit token: {}", e);
        }
        info!("Minted credit token");
        token
    }

    /// Clear the donor session: profile slot and credit token. The list
    /// entry stays.
    pub fn logout(&self) {
        self.records.clear(keys::DONOR_PROFILE);
        self.records.clear(keys::CREDIT_TOKEN);
        info!("Cleared donor profile");
    }
}
