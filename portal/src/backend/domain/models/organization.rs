use serde::{Deserialize, Serialize};
use shared::OrgType;

/// Stored organization (NGO/Government) record. List-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationRecord {
    pub entity_id: String,
    pub org_type: OrgType,
    pub organization_name: String,
    pub registration_id: String,
    pub contact_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub about: Option<String>,
}
