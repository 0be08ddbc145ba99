use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// ABO/Rh blood group. Serialized exactly as displayed ("A+", "O-", ...),
/// which is also the representation stored in donor and recipient records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BloodGroup {
    #[serde(rename = "A+")]
    APos,
    #[serde(rename = "A-")]
    ANeg,
    #[serde(rename = "B+")]
    BPos,
    #[serde(rename = "B-")]
    BNeg,
    #[serde(rename = "AB+")]
    AbPos,
    #[serde(rename = "AB-")]
    AbNeg,
    #[serde(rename = "O+")]
    OPos,
    #[serde(rename = "O-")]
    ONeg,
}

impl BloodGroup {
    pub const ALL: [BloodGroup; 8] = [
        BloodGroup::APos,
        BloodGroup::ANeg,
        BloodGroup::BPos,
        BloodGroup::BNeg,
        BloodGroup::AbPos,
        BloodGroup::AbNeg,
        BloodGroup::OPos,
        BloodGroup::ONeg,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BloodGroup::APos => "A+",
            BloodGroup::ANeg => "A-",
            BloodGroup::BPos => "B+",
            BloodGroup::BNeg => "B-",
            BloodGroup::AbPos => "AB+",
            BloodGroup::AbNeg => "AB-",
            BloodGroup::OPos => "O+",
            BloodGroup::ONeg => "O-",
        }
    }
}

impl fmt::Display for BloodGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BloodGroup {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BloodGroup::ALL
            .into_iter()
            .find(|g| g.as_str() == s)
            .ok_or_else(|| format!("unknown blood group: {}", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            "other" => Ok(Gender::Other),
            _ => Err(format!("unknown gender: {}", s)),
        }
    }
}

/// Organ a donor can pledge. The wire id uses snake_case; `label()` is the
/// human-readable form shown on dashboards and badges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Organ {
    Heart,
    Lungs,
    Liver,
    Kidneys,
    Pancreas,
    Corneas,
    Skin,
    BoneMarrow,
}

impl Organ {
    pub const ALL: [Organ; 8] = [
        Organ::Heart,
        Organ::Lungs,
        Organ::Liver,
        Organ::Kidneys,
        Organ::Pancreas,
        Organ::Corneas,
        Organ::Skin,
        Organ::BoneMarrow,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Organ::Heart => "heart",
            Organ::Lungs => "lungs",
            Organ::Liver => "liver",
            Organ::Kidneys => "kidneys",
            Organ::Pancreas => "pancreas",
            Organ::Corneas => "corneas",
            Organ::Skin => "skin",
            Organ::BoneMarrow => "bone_marrow",
        }
    }

    /// Display label: the wire id with underscores replaced by spaces.
    pub fn label(&self) -> String {
        self.as_str().replace('_', " ")
    }
}

impl fmt::Display for Organ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Organ {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Organ::ALL
            .into_iter()
            .find(|o| o.as_str() == s)
            .ok_or_else(|| format!("unknown organ: {}", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StaffRole {
    Doctor,
    Nurse,
    Coordinator,
    Admin,
    Other,
}

impl StaffRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            StaffRole::Doctor => "doctor",
            StaffRole::Nurse => "nurse",
            StaffRole::Coordinator => "coordinator",
            StaffRole::Admin => "admin",
            StaffRole::Other => "other",
        }
    }
}

impl fmt::Display for StaffRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StaffRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "doctor" => Ok(StaffRole::Doctor),
            "nurse" => Ok(StaffRole::Nurse),
            "coordinator" => Ok(StaffRole::Coordinator),
            "admin" => Ok(StaffRole::Admin),
            "other" => Ok(StaffRole::Other),
            _ => Err(format!("unknown staff role: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrgType {
    #[serde(rename = "NGO")]
    Ngo,
    Government,
}

impl OrgType {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrgType::Ngo => "NGO",
            OrgType::Government => "Government",
        }
    }
}

impl fmt::Display for OrgType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrgType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NGO" => Ok(OrgType::Ngo),
            "Government" => Ok(OrgType::Government),
            _ => Err(format!("unknown organization type: {}", s)),
        }
    }
}

/// One extra label/value row on the registration success screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryField {
    pub label: String,
    pub value: String,
}

/// Transient payload handed from a submission handler to the success
/// screen. It is passed through navigation, never persisted; a success
/// screen entered without it must fall back to its "no data" state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistrationSummary {
    pub heading: String,
    pub entity_id: String,
    pub name_label: String,
    pub name: String,
    pub badges_label: String,
    pub badges: Vec<String>,
    pub fields: Vec<SummaryField>,
    /// Path of the signup screen that produced this summary.
    pub back_path: String,
    /// Path of the role's home screen, when one exists.
    pub home_path: Option<String>,
}

/// Donor fields shown on the donor's own dashboard and the admin table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DonorSummary {
    pub donor_id: String,
    pub full_name: String,
    pub blood_group: BloodGroup,
    pub organs: Vec<Organ>,
    pub email: String,
    pub phone: String,
}

/// Recipient fields shown on the recipient's own dashboard and the admin
/// table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipientSummary {
    pub entity_id: String,
    pub full_name: String,
    pub blood_group: BloodGroup,
    pub need_details: String,
}

/// Donor as shown to a matched recipient: identity fields are masked for
/// display, only the pledged organs stay readable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaskedDonor {
    pub masked_name: String,
    pub masked_id: String,
    pub organs: Vec<Organ>,
}
