use crate::backend::domain::matching_service::{mask_id, mask_name};
use crate::backend::domain::models::donor::DonorRecord;
use crate::backend::io::router::Route;
use shared::{DonorSummary, MaskedDonor, RegistrationSummary, SummaryField};

/// Mapper between the domain donor record and its display DTOs.
pub struct DonorMapper;

impl DonorMapper {
    pub fn to_dto(record: DonorRecord) -> DonorSummary {
        DonorSummary {
            donor_id: record.donor_id,
            full_name: record.full_name,
            blood_group: record.blood_group,
            organs: record.organs,
            email: record.email,
            phone: record.phone,
        }
    }

    /// The identity-masked view a matched recipient sees. Masking is
    /// display-only; the unmasked record stays in storage.
    pub fn to_masked(record: &DonorRecord) -> MaskedDonor {
        MaskedDonor {
            masked_name: mask_name(&record.full_name),
            masked_id: mask_id(&record.donor_id),
            organs: record.organs.clone(),
        }
    }

    /// The transient payload for the success screen after donor signup.
    pub fn registration_summary(record: &DonorRecord) -> RegistrationSummary {
        RegistrationSummary {
            heading: "Donor Registration Successful".to_string(),
            entity_id: record.donor_id.clone(),
            name_label: "Name".to_string(),
            name: record.full_name.clone(),
            badges_label: "Organs".to_string(),
            badges: record.organs.iter().map(|o| o.label()).collect(),
            fields: vec![SummaryField {
                label: "Blood Group".to_string(),
                value: record.blood_group.to_string(),
            }],
            back_path: Route::DonorSignup.path().to_string(),
            home_path: Some(Route::DonorHome.path().to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{BloodGroup, Organ};

    fn record() -> DonorRecord {
        DonorRecord {
            donor_id: "DON250101AB12".to_string(),
            full_name: "Asha Verma".to_string(),
            blood_group: BloodGroup::OPos,
            organs: vec![Organ::Kidneys, Organ::BoneMarrow],
            email: "asha@example.com".to_string(),
            phone: "9876543210".to_string(),
        }
    }

    #[test]
    fn masked_view_hides_identity_fields() {
        let masked = DonorMapper::to_masked(&record());
        assert_eq!(masked.masked_name, "A****");
        assert_eq!(masked.masked_id, "DO****12");
        assert_eq!(masked.organs, vec![Organ::Kidneys, Organ::BoneMarrow]);
    }

    #[test]
    fn summary_carries_display_fields() {
        let summary = DonorMapper::registration_summary(&record());
        assert_eq!(summary.entity_id, "DON250101AB12");
        assert_eq!(summary.badges, vec!["kidneys", "bone marrow"]);
        assert_eq!(summary.fields[0].value, "O+");
        assert_eq!(summary.back_path, "/organ-donation/signup");
        assert_eq!(summary.home_path.as_deref(), Some("/donor/home"));
    }
}
