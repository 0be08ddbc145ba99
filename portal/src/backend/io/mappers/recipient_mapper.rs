use crate::backend::domain::models::recipient::RecipientRecord;
use crate::backend::io::router::Route;
use shared::{RecipientSummary, RegistrationSummary, SummaryField};

/// Mapper between the domain recipient record and its display DTOs.
pub struct RecipientMapper;

impl RecipientMapper {
    pub fn to_dto(record: RecipientRecord) -> RecipientSummary {
        RecipientSummary {
            entity_id: record.entity_id,
            full_name: record.full_name,
            blood_group: record.blood_group,
            need_details: record.need_details,
        }
    }

    pub fn registration_summary(record: &RecipientRecord) -> RegistrationSummary {
        RegistrationSummary {
            heading: "Recipient Registration Successful".to_string(),
            entity_id: record.entity_id.clone(),
            name_label: "Name".to_string(),
            name: record.full_name.clone(),
            badges_label: "Blood Group".to_string(),
            badges: vec![record.blood_group.to_string()],
            fields: vec![SummaryField {
                label: "Need".to_string(),
                value: record.need_details.clone(),
            }],
            back_path: Route::RecipientSignup.path().to_string(),
            home_path: Some(Route::RecipientHome.path().to_string()),
        }
    }
}
