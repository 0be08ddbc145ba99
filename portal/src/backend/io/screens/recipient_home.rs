use crate::backend::io::mappers::{DonorMapper, RecipientMapper};
use crate::backend::io::router::{Navigation, Route};
use crate::backend::AppState;
use shared::{MaskedDonor, RecipientSummary};

/// The recipient dashboard: the loaded profile plus masked donors whose
/// blood group matches exactly, or an explicit no-profile state.
#[derive(Debug, Clone, PartialEq)]
pub enum RecipientHomeScreen {
    Profile {
        profile: RecipientSummary,
        /// Matched donors in registration order, identity masked.
        matches: Vec<MaskedDonor>,
    },
    NoProfile,
}

pub fn recipient_home_screen(state: &AppState) -> RecipientHomeScreen {
    match state.recipient_service.current_profile() {
        Some(record) => {
            let matches = state
                .matching_service
                .matches_for(&record)
                .iter()
                .map(DonorMapper::to_masked)
                .collect();
            RecipientHomeScreen::Profile {
                profile: RecipientMapper::to_dto(record),
                matches,
            }
        }
        None => RecipientHomeScreen::NoProfile,
    }
}

/// Log the recipient out: clears the profile slot, then returns to the
/// landing screen.
pub fn recipient_logout(state: &AppState) -> Navigation {
    state.recipient_service.logout();
    Navigation::to(Route::Landing)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::domain::commands::donor::RegisterDonorCommand;
    use crate::backend::domain::commands::recipient::RegisterRecipientCommand;
    use crate::backend::initialize_backend_with_stores;
    use crate::backend::storage::MemoryStore;
    use shared::{BloodGroup, Gender, Organ};
    use std::sync::Arc;

    fn setup_state() -> AppState {
        initialize_backend_with_stores(
            Arc::new(MemoryStore::new()),
            Arc::new(MemoryStore::new()),
        )
    }

    fn register_donor(state: &AppState, name: &str, group: BloodGroup) {
        state
            .donor_service
            .register_donor(RegisterDonorCommand {
                full_name: name.to_string(),
                email: "donor@example.com".to_string(),
                phone: "9876543210".to_string(),
                age: 30,
                gender: Gender::Male,
                blood_group: group,
                address: "MG Road, Kochi, Kerala".to_string(),
                organs: vec![Organ::Corneas],
                emergency_name: "Contact Person".to_string(),
                emergency_phone: "9876543211".to_string(),
                consent: true,
            })
            .unwrap();
    }

    fn register_recipient(state: &AppState, group: BloodGroup) {
        state
            .recipient_service
            .register_recipient(RegisterRecipientCommand {
                full_name: "Meera Nair".to_string(),
                email: "meera@example.com".to_string(),
                phone: "9876501234".to_string(),
                age: 41,
                gender: Gender::Female,
                blood_group: group,
                address: "2nd Cross, Indiranagar, Bengaluru".to_string(),
                need_details: "Corneal graft after injury".to_string(),
                consent: true,
            })
            .unwrap();
    }

    #[test]
    fn without_profile_shows_fallback() {
        let state = setup_state();
        assert_eq!(recipient_home_screen(&state), RecipientHomeScreen::NoProfile);
    }

    #[test]
    fn matches_are_masked_and_blood_group_exact() {
        let state = setup_state();
        register_donor(&state, "Asha Verma", BloodGroup::OPos);
        register_donor(&state, "Vikram Singh", BloodGroup::ONeg);
        register_recipient(&state, BloodGroup::OPos);

        match recipient_home_screen(&state) {
            RecipientHomeScreen::Profile { profile, matches } => {
                assert_eq!(profile.full_name, "Meera Nair");
                assert_eq!(matches.len(), 1);
                assert_eq!(matches[0].masked_name, "A****");
                // Only the id edges survive masking.
                assert!(matches[0].masked_id.starts_with("DO****"));
                assert_eq!(matches[0].masked_id.len(), 8);
            }
            other => panic!("unexpected screen: {:?}", other),
        }
    }

    #[test]
    fn no_matches_renders_empty_list() {
        let state = setup_state();
        register_donor(&state, "Asha Verma", BloodGroup::APos);
        register_recipient(&state, BloodGroup::AbNeg);

        match recipient_home_screen(&state) {
            RecipientHomeScreen::Profile { matches, .. } => assert!(matches.is_empty()),
            other => panic!("unexpected screen: {:?}", other),
        }
    }

    #[test]
    fn logout_clears_profile() {
        let state = setup_state();
        register_recipient(&state, BloodGroup::OPos);

        let nav = recipient_logout(&state);
        assert_eq!(nav.route, Route::Landing);
        assert_eq!(recipient_home_screen(&state), RecipientHomeScreen::NoProfile);
    }
}
