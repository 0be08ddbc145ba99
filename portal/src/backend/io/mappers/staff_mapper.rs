use crate::backend::domain::models::staff::StaffRecord;
use crate::backend::io::router::Route;
use shared::{RegistrationSummary, SummaryField};

/// Mapper between the domain staff record and its display DTOs.
pub struct StaffMapper;

impl StaffMapper {
    pub fn registration_summary(record: &StaffRecord) -> RegistrationSummary {
        RegistrationSummary {
            heading: "Hospital Staff Registration Successful".to_string(),
            entity_id: record.entity_id.clone(),
            name_label: "Staff Name".to_string(),
            name: record.staff_name.clone(),
            badges_label: "Role".to_string(),
            badges: vec![record.role.to_string()],
            fields: vec![
                SummaryField {
                    label: "Hospital".to_string(),
                    value: record.hospital_name.clone(),
                },
                SummaryField {
                    label: "Reg. ID".to_string(),
                    value: record.hospital_reg_id.clone(),
                },
            ],
            back_path: Route::StaffSignup.path().to_string(),
            home_path: Some(Route::AdminDashboard.path().to_string()),
        }
    }
}
