use log::debug;

use crate::backend::domain::models::donor::DonorRecord;
use crate::backend::domain::models::recipient::RecipientRecord;
use crate::backend::storage::{keys, RecordStore};

/// Service for the recipient dashboard's donor matching.
///
/// Matching is exact blood-group equality: `O+` does not match `O-`,
/// and no ABO/Rh compatibility rules apply. Matches come back in
/// registration order.
#[derive(Clone)]
pub struct MatchingService {
    records: RecordStore,
}

impl MatchingService {
    pub fn new(records: RecordStore) -> Self {
        Self { records }
    }

    /// Donors whose blood group equals the recipient's, in list order.
    pub fn matches_for(&self, recipient: &RecipientRecord) -> Vec<DonorRecord> {
        let donors: Vec<DonorRecord> = self.records.list(keys::DONORS);
        let matched: Vec<DonorRecord> = donors
            .into_iter()
            .filter(|d| d.blood_group == recipient.blood_group)
            .collect();
        debug!(
            "Matched {} donor(s) for blood group {}",
            matched.len(),
            recipient.blood_group
        );
        matched
    }
}

/// Mask a donor name for display: first character of the first name
/// token plus a fixed mask. Empty names render as `Hidden`.
pub fn mask_name(name: &str) -> String {
    let first_token = name.split_whitespace().next().unwrap_or("");
    match first_token.chars().next() {
        Some(c) => format!("{}****", c),
        None => "Hidden".to_string(),
    }
}

/// Mask a donor id for display: first two and last two characters kept,
/// middle replaced by a fixed mask. Empty ids render as `****`.
pub fn mask_id(id: &str) -> String {
    if id.is_empty() {
        return "****".to_string();
    }
    let chars: Vec<char> = id.chars().collect();
    let head: String = chars.iter().take(2).collect();
    let tail: String = if chars.len() >= 2 {
        chars[chars.len() - 2..].iter().collect()
    } else {
        chars.iter().collect()
    };
    format!("{}****{}", head, tail)
}
