use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Minutes a sent passcode stays valid.
pub const PASSCODE_TTL_MINUTES: i64 = 5;

/// Pending one-time passcode held in the session-scoped slot. A resend
/// overwrites the whole record; successful verification removes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingPasscode {
    pub email: String,
    pub code: String,
    pub expires_at: DateTime<Utc>,
}

impl PendingPasscode {
    /// Build a pending passcode for `email` expiring `PASSCODE_TTL_MINUTES`
    /// after `now`.
    pub fn issue(email: &str, code: String, now: DateTime<Utc>) -> Self {
        Self {
            email: email.to_string(),
            code,
            expires_at: now + Duration::minutes(PASSCODE_TTL_MINUTES),
        }
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expires_five_minutes_after_issue() {
        let now = Utc::now();
        let pending = PendingPasscode::issue("a@b.com", "123456".to_string(), now);

        assert!(!pending.is_expired(now));
        assert!(!pending.is_expired(now + Duration::minutes(PASSCODE_TTL_MINUTES)));
        assert!(pending.is_expired(now + Duration::minutes(PASSCODE_TTL_MINUTES) + Duration::seconds(1)));
    }
}
