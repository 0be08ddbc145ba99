use serde::{Deserialize, Serialize};
use shared::StaffRole;

/// Stored hospital-staff record. List-only: staff have no "current
/// profile" slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffRecord {
    pub entity_id: String,
    pub hospital_name: String,
    pub staff_name: String,
    pub role: StaffRole,
    pub email: String,
    pub phone: String,
    pub hospital_reg_id: String,
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}
