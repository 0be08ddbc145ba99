use chrono::Local;
use rand::Rng;

/// Prefix for donor ids.
pub const DONOR_PREFIX: &str = "DON";
/// Prefix for recipient ids.
pub const RECIPIENT_PREFIX: &str = "REC";
/// Prefix for hospital-staff ids.
pub const STAFF_PREFIX: &str = "HSP";
/// Prefix for organization ids.
pub const ORGANIZATION_PREFIX: &str = "ORG";
/// Prefix for credit tokens.
pub const CREDIT_TOKEN_PREFIX: &str = "CRD";

const SUFFIX_LEN: usize = 4;
const SUFFIX_CHARSET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Generate a display id: `prefix` + two-digit year, month, and day
/// (local date) + four random uppercase base-36 characters.
///
/// Always succeeds. Ids are display-grade: collisions are possible and
/// tolerated, so these must never be treated as real primary keys.
pub fn make_id(prefix: &str) -> String {
    let date = Local::now().format("%y%m%d");
    let mut rng = rand::thread_rng();
    let suffix: String = (0..SUFFIX_LEN)
        .map(|_| SUFFIX_CHARSET[rng.gen_range(0..SUFFIX_CHARSET.len())] as char)
        .collect();
    format!("{}{}{}", prefix, date, suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_length_is_prefix_plus_ten() {
        for prefix in [DONOR_PREFIX, RECIPIENT_PREFIX, STAFF_PREFIX, "X"] {
            let id = make_id(prefix);
            assert_eq!(id.len(), prefix.len() + 10, "id: {}", id);
            assert!(id.starts_with(prefix));
        }
    }

    #[test]
    fn date_segment_matches_current_date() {
        // Capture the date on both sides of the call so a midnight
        // rollover mid-test cannot produce a false failure.
        let before = Local::now().format("%y%m%d").to_string();
        let id = make_id(DONOR_PREFIX);
        let after = Local::now().format("%y%m%d").to_string();

        let segment = &id[DONOR_PREFIX.len()..DONOR_PREFIX.len() + 6];
        assert!(segment == before || segment == after, "segment: {}", segment);
    }

    #[test]
    fn suffix_draws_from_uppercase_base36() {
        for _ in 0..50 {
            let id = make_id("T");
            let suffix = &id[id.len() - SUFFIX_LEN..];
            assert!(suffix
                .chars()
                .all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));
        }
    }
}
