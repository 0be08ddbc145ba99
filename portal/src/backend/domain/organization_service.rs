use log::{info, warn};

use crate::backend::domain::commands::organization::{
    RegisterOrganizationCommand, RegisterOrganizationResult,
};
use crate::backend::domain::identifier::{self, ORGANIZATION_PREFIX};
use crate::backend::domain::models::organization::OrganizationRecord;
use crate::backend::domain::schema::{forms, ValidationErrors};
use crate::backend::storage::{keys, RecordStore};

/// Service for NGO/Government organization registration. List-only.
#[derive(Clone)]
pub struct OrganizationService {
    records: RecordStore,
}

impl OrganizationService {
    pub fn new(records: RecordStore) -> Self {
        Self { records }
    }

    pub fn register_organization(
        &self,
        command: RegisterOrganizationCommand,
    ) -> Result<RegisterOrganizationResult, ValidationErrors> {
        info!("Registering organization: {}", command.organization_name);

        forms::ORGANIZATION_SIGNUP.validate(&command)?;

        let record = OrganizationRecord {
            entity_id: identifier::make_id(ORGANIZATION_PREFIX),
            org_type: command.org_type,
            organization_name: command.organization_name,
            registration_id: command.registration_id,
            contact_name: command.contact_name,
            email: command.email,
            phone: command.phone,
            address: command.address,
            about: command.about,
        };

        if let Err(e) = self.records.append(keys::ORGANIZATIONS, &record) {
            warn!("Failed to append organization record: {}", e);
        }

        info!(
            "Registered organization {} with id {}",
            record.organization_name, record.entity_id
        );
        Ok(RegisterOrganizationResult { record })
    }

    pub fn list_organizations(&self) -> Vec<OrganizationRecord> {
        self.records.list(keys::ORGANIZATIONS)
    }
}
