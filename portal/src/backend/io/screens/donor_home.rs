use crate::backend::io::mappers::DonorMapper;
use crate::backend::io::router::{Navigation, Route};
use crate::backend::AppState;
use shared::DonorSummary;

/// The donor dashboard: the loaded profile plus the credit token, or an
/// explicit no-profile state that points at signup.
#[derive(Debug, Clone, PartialEq)]
pub enum DonorHomeScreen {
    Profile {
        profile: DonorSummary,
        /// Shareable token, minted on first visit and stable afterwards.
        credit_token: String,
    },
    NoProfile,
}

pub fn donor_home_screen(state: &AppState) -> DonorHomeScreen {
    let credit_token = state.donor_service.ensure_credit_token();
    match state.donor_service.current_profile() {
        Some(record) => DonorHomeScreen::Profile {
            profile: DonorMapper::to_dto(record),
            credit_token,
        },
        None => DonorHomeScreen::NoProfile,
    }
}

/// Log the donor out: clears the profile slot and the credit token,
/// then returns to the landing screen.
pub fn donor_logout(state: &AppState) -> Navigation {
    state.donor_service.logout();
    Navigation::to(Route::Landing)
}
