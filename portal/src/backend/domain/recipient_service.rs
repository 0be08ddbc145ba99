use log::{info, warn};

use crate::backend::domain::commands::recipient::{
    RegisterRecipientCommand, RegisterRecipientResult,
};
use crate::backend::domain::identifier::{self, RECIPIENT_PREFIX};
use crate::backend::domain::models::recipient::RecipientRecord;
use crate::backend::domain::schema::{forms, ValidationErrors};
use crate::backend::storage::{keys, RecordStore};

/// Service for recipient registration and the recipient profile slot.
#[derive(Clone)]
pub struct RecipientService {
    records: RecordStore,
}

impl RecipientService {
    pub fn new(records: RecordStore) -> Self {
        Self { records }
    }

    /// Register a new recipient. Appends to the recipient list and
    /// overwrites the recipient profile slot. Storage failures degrade
    /// to a no-op.
    pub fn register_recipient(
        &self,
        command: RegisterRecipientCommand,
    ) -> Result<RegisterRecipientResult, ValidationErrors> {
        info!("Registering recipient: {}", command.full_name);

        forms::RECIPIENT_SIGNUP.validate(&command)?;

        let record = RecipientRecord {
            entity_id: identifier::make_id(RECIPIENT_PREFIX),
            full_name: command.full_name,
            email: command.email,
            phone: command.phone,
            age: command.age,
            gender: command.gender,
            blood_group: command.blood_group,
            address: command.address,
            need_details: command.need_details,
        };

        if let Err(e) = self.records.append(keys::RECIPIENTS, &record) {
            warn!("Failed to append recipient record: {}", e);
        }
        if let Err(e) = self.records.replace_slot(keys::RECIPIENT_PROFILE, &record) {
            warn!("Failed to write recipient profile: {}", e);
        }

        info!(
            "Registered recipient {} with id {}",
            record.full_name, record.entity_id
        );
        Ok(RegisterRecipientResult { record })
    }

    /// The recipient currently loaded into the profile slot, if any.
    pub fn current_profile(&self) -> Option<RecipientRecord> {
        self.records.read_slot(keys::RECIPIENT_PROFILE)
    }

    /// Every registered recipient, in registration order.
    pub fn list_recipients(&self) -> Vec<RecipientRecord> {
        self.records.list(keys::RECIPIENTS)
    }

    /// Clear the recipient profile slot. The list entry stays.
    pub fn logout(&self) {
        self.records.clear(keys::RECIPIENT_PROFILE);
        info!("Cleared recipient profile");
    }
}
