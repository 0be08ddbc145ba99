use shared::RegistrationSummary;

/// A screen of the portal. Routes are screens, not network endpoints;
/// any path outside the table resolves to [`Route::NotFound`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Landing,
    DonorSignup,
    DonorSuccess,
    RecipientSignup,
    RecipientSuccess,
    StaffSignup,
    StaffSuccess,
    OrganizationSignup,
    OrganizationSuccess,
    Login,
    DonorHome,
    RecipientHome,
    AdminDashboard,
    NotFound(String),
}

impl Route {
    /// Resolve a path to its screen.
    pub fn resolve(path: &str) -> Route {
        match path {
            "/" => Route::Landing,
            "/organ-donation/signup" => Route::DonorSignup,
            "/organ-donation/success" => Route::DonorSuccess,
            "/recipient/signup" => Route::RecipientSignup,
            "/recipient/success" => Route::RecipientSuccess,
            "/hospital-staff/signup" => Route::StaffSignup,
            "/hospital-staff/success" => Route::StaffSuccess,
            "/organizations/signup" => Route::OrganizationSignup,
            "/organizations/success" => Route::OrganizationSuccess,
            "/login" => Route::Login,
            "/donor/home" => Route::DonorHome,
            "/recipient/home" => Route::RecipientHome,
            "/admin/dashboard" => Route::AdminDashboard,
            other => Route::NotFound(other.to_string()),
        }
    }

    /// The canonical path of this screen. `NotFound` echoes the path
    /// that failed to resolve.
    pub fn path(&self) -> &str {
        match self {
            Route::Landing => "/",
            Route::DonorSignup => "/organ-donation/signup",
            Route::DonorSuccess => "/organ-donation/success",
            Route::RecipientSignup => "/recipient/signup",
            Route::RecipientSuccess => "/recipient/success",
            Route::StaffSignup => "/hospital-staff/signup",
            Route::StaffSuccess => "/hospital-staff/success",
            Route::OrganizationSignup => "/organizations/signup",
            Route::OrganizationSuccess => "/organizations/success",
            Route::Login => "/login",
            Route::DonorHome => "/donor/home",
            Route::RecipientHome => "/recipient/home",
            Route::AdminDashboard => "/admin/dashboard",
            Route::NotFound(path) => path,
        }
    }
}

/// The explicit, short-lived message handed from one screen to the
/// next. The payload exists only inside this value: entering a screen
/// without it (back/forward navigation, a manual address) must land in
/// that screen's "no data" state.
#[derive(Debug, Clone, PartialEq)]
pub struct Navigation {
    pub route: Route,
    pub payload: Option<RegistrationSummary>,
}

impl Navigation {
    pub fn to(route: Route) -> Self {
        Self {
            route,
            payload: None,
        }
    }

    pub fn with_summary(route: Route, summary: RegistrationSummary) -> Self {
        Self {
            route,
            payload: Some(summary),
        }
    }
}
