use crate::backend::domain::auth_service::LoginError;
use crate::backend::domain::commands::auth::{NameLoginCommand, NameLoginResult};
use crate::backend::io::router::{Navigation, Route};
use crate::backend::AppState;

/// Existing-user login: resolve the typed name against the stored lists
/// and navigate to that role's home. A miss keeps the user on the login
/// screen with the error's user-visible message.
pub fn submit_login(state: &AppState, command: NameLoginCommand) -> Result<Navigation, LoginError> {
    let result = state.auth_service.login(command)?;
    let route = match result {
        NameLoginResult::Donor(_) => Route::DonorHome,
        NameLoginResult::Recipient(_) => Route::RecipientHome,
        NameLoginResult::Admin(_) => Route::AdminDashboard,
    };
    Ok(Navigation::to(route))
}
