use log::{info, warn};

use crate::backend::domain::commands::staff::{RegisterStaffCommand, RegisterStaffResult};
use crate::backend::domain::identifier::{self, STAFF_PREFIX};
use crate::backend::domain::models::staff::StaffRecord;
use crate::backend::domain::schema::{forms, ValidationErrors};
use crate::backend::storage::{keys, RecordStore};

/// Service for hospital-staff registration. List-only: no profile slot.
#[derive(Clone)]
pub struct StaffService {
    records: RecordStore,
}

impl StaffService {
    pub fn new(records: RecordStore) -> Self {
        Self { records }
    }

    pub fn register_staff(
        &self,
        command: RegisterStaffCommand,
    ) -> Result<RegisterStaffResult, ValidationErrors> {
        info!("Registering hospital staff: {}", command.staff_name);

        forms::STAFF_SIGNUP.validate(&command)?;

        let record = StaffRecord {
            entity_id: identifier::make_id(STAFF_PREFIX),
            hospital_name: command.hospital_name,
            staff_name: command.staff_name,
            role: command.role,
            email: command.email,
            phone: command.phone,
            hospital_reg_id: command.hospital_reg_id,
            address: command.address,
            notes: command.notes,
        };

        if let Err(e) = self.records.append(keys::STAFF, &record) {
            warn!("Failed to append staff record: {}", e);
        }

        info!(
            "Registered staff {} with id {}",
            record.staff_name, record.entity_id
        );
        Ok(RegisterStaffResult { record })
    }

    pub fn list_staff(&self) -> Vec<StaffRecord> {
        self.records.list(keys::STAFF)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::storage::MemoryStore;
    use shared::StaffRole;
    use std::sync::Arc;

    fn setup_test() -> StaffService {
        StaffService::new(RecordStore::new(Arc::new(MemoryStore::new())))
    }

    fn valid_command() -> RegisterStaffCommand {
        RegisterStaffCommand {
            hospital_name: "City General Hospital".to_string(),
            staff_name: "Dr. Kavita Rao".to_string(),
            role: StaffRole::Doctor,
            email: "kavita@citygeneral.org".to_string(),
            phone: "+91 22 2754 1234".to_string(),
            hospital_reg_id: "MH-CGH-0042".to_string(),
            address: "Sector 12, Vashi, Navi Mumbai".to_string(),
            notes: None,
            consent: true,
        }
    }

    #[test]
    fn registration_appends_to_list_only() {
        let service = setup_test();
        let result = service.register_staff(valid_command()).unwrap();
        assert!(result.record.entity_id.starts_with("HSP"));
        assert_eq!(service.list_staff(), vec![result.record]);
    }

    #[test]
    fn optional_notes_are_bounded() {
        let service = setup_test();

        let mut with_notes = valid_command();
        with_notes.notes = Some("Transplant coordination desk, ext. 204".to_string());
        assert!(service.register_staff(with_notes).is_ok());

        let mut long_notes = valid_command();
        long_notes.notes = Some("x".repeat(501));
        let err = service.register_staff(long_notes).unwrap_err();
        assert!(err.field("notes").is_some());
        assert_eq!(service.list_staff().len(), 1);
    }

    #[test]
    fn short_reg_id_is_rejected() {
        let service = setup_test();
        let mut bad = valid_command();
        bad.hospital_reg_id = "ab".to_string();
        assert!(service.register_staff(bad).is_err());
        assert!(service.list_staff().is_empty());
    }
}
