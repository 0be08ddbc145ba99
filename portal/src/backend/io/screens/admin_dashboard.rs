use crate::backend::io::mappers::{DonorMapper, RecipientMapper};
use crate::backend::io::router::{Navigation, Route};
use crate::backend::AppState;
use shared::{DonorSummary, RecipientSummary};

/// The admin dashboard: full (unmasked) donor and recipient tables.
/// Renders with whatever is stored; an empty portal shows two empty
/// tables, not an error.
#[derive(Debug, Clone, PartialEq)]
pub struct AdminDashboardScreen {
    pub admin_name: String,
    pub donors: Vec<DonorSummary>,
    pub recipients: Vec<RecipientSummary>,
}

pub fn admin_dashboard_screen(state: &AppState) -> AdminDashboardScreen {
    let admin_name = state
        .auth_service
        .admin_session()
        .map(|s| s.name)
        .unwrap_or_else(|| "Admin".to_string());

    AdminDashboardScreen {
        admin_name,
        donors: state
            .donor_service
            .list_donors()
            .into_iter()
            .map(DonorMapper::to_dto)
            .collect(),
        recipients: state
            .recipient_service
            .list_recipients()
            .into_iter()
            .map(RecipientMapper::to_dto)
            .collect(),
    }
}

/// Log the admin out: clears the stored display name.
pub fn admin_logout(state: &AppState) -> Navigation {
    state.auth_service.admin_logout();
    Navigation::to(Route::Landing)
}
