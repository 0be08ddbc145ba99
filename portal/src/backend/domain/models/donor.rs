use serde::{Deserialize, Serialize};
use shared::{BloodGroup, Organ};

/// Stored donor record. Appended to the donor list on signup and also
/// written to the "current profile" slot; a new pledge overwrites the
/// profile slot only, never an existing list entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DonorRecord {
    pub donor_id: String,
    pub full_name: String,
    pub blood_group: BloodGroup,
    pub organs: Vec<Organ>,
    pub email: String,
    pub phone: String,
}
