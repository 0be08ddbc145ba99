use serde::{Deserialize, Serialize};

/// Admin "session": just the display name typed at login. No lookup and
/// no credential; the admin dashboard is unauthenticated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminSession {
    pub name: String,
}
