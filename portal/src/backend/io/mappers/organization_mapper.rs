use crate::backend::domain::models::organization::OrganizationRecord;
use crate::backend::io::router::Route;
use shared::{RegistrationSummary, SummaryField};

/// Mapper between the domain organization record and its display DTOs.
pub struct OrganizationMapper;

impl OrganizationMapper {
    pub fn registration_summary(record: &OrganizationRecord) -> RegistrationSummary {
        RegistrationSummary {
            heading: "Organization Registration Successful".to_string(),
            entity_id: record.entity_id.clone(),
            name_label: "Organization".to_string(),
            name: record.organization_name.clone(),
            badges_label: "Type".to_string(),
            badges: vec![record.org_type.to_string()],
            fields: vec![
                SummaryField {
                    label: "Reg. ID".to_string(),
                    value: record.registration_id.clone(),
                },
                SummaryField {
                    label: "Contact".to_string(),
                    value: record.contact_name.clone(),
                },
            ],
            back_path: Route::OrganizationSignup.path().to_string(),
            home_path: Some(Route::AdminDashboard.path().to_string()),
        }
    }
}
