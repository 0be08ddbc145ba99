use serde::{Deserialize, Serialize};
use shared::{BloodGroup, Gender};

/// Stored recipient record. Appended to the recipient list on signup
/// and written to the recipient "current profile" slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipientRecord {
    pub entity_id: String,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub age: u32,
    pub gender: Gender,
    pub blood_group: BloodGroup,
    pub address: String,
    pub need_details: String,
}
