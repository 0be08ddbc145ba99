use chrono::Utc;
use log::{info, warn};
use rand::Rng;
use thiserror::Error;

use crate::backend::domain::commands::passcode::{
    SendPasscodeCommand, SendPasscodeResult, VerifyPasscodeCommand, VerifyPasscodeResult,
};
use crate::backend::domain::models::donor::DonorRecord;
use crate::backend::domain::models::passcode::PendingPasscode;
use crate::backend::domain::schema::is_valid_email;
use crate::backend::storage::{keys, RecordStore};

pub const PASSCODE_LEN: usize = 6;

/// Why a passcode could not be sent. Messages are user-visible.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SendPasscodeError {
    #[error("Enter a valid email")]
    InvalidEmail,
    #[error("No donor profile for this email. Please sign up first.")]
    ProfileMismatch,
}

/// Why a passcode verification failed. Each variant is distinct and
/// user-visible; an absent slot reports as expired.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VerifyPasscodeError {
    #[error("OTP expired. Send again.")]
    Expired,
    #[error("Email mismatch. Use the same email.")]
    EmailMismatch,
    #[error("Invalid OTP.")]
    InvalidCode,
}

/// Where the passcode flow currently stands. Verification navigating
/// away is the terminal state, so only the pre-verification states are
/// observable here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasscodeStatus {
    NotSent,
    Sent,
}

/// One-time-passcode login for donors.
///
/// The sender must already hold a donor profile whose email matches the
/// entered one. The pending code lives in the session-scoped store and
/// dies with it; a resend overwrites code and expiry, verification is
/// single-use.
#[derive(Clone)]
pub struct PasscodeService {
    records: RecordStore,
    session: RecordStore,
}

impl PasscodeService {
    pub fn new(records: RecordStore, session: RecordStore) -> Self {
        Self { records, session }
    }

    /// Generate and hold a 6-digit code for `email`, valid for five
    /// minutes. Overwrites any pending code.
    pub fn send(
        &self,
        command: SendPasscodeCommand,
    ) -> Result<SendPasscodeResult, SendPasscodeError> {
        if !is_valid_email(&command.email) {
            return Err(SendPasscodeError::InvalidEmail);
        }

        let profile: Option<DonorRecord> = self.records.read_slot(keys::DONOR_PROFILE);
        let email_matches = profile.map(|p| p.email == command.email).unwrap_or(false);
        if !email_matches {
            return Err(SendPasscodeError::ProfileMismatch);
        }

        let mut rng = rand::thread_rng();
        let code: String = (0..PASSCODE_LEN)
            .map(|_| char::from(b'0' + rng.gen_range(0..10)))
            .collect();
        let pending = PendingPasscode::issue(&command.email, code, Utc::now());

        if let Err(e) = self.session.replace_slot(keys::PASSCODE, &pending) {
            warn!("Failed to hold pending passcode: {}", e);
        }
        info!(
            "Issued passcode for {} expiring at {}",
            pending.email, pending.expires_at
        );
        Ok(SendPasscodeResult {
            expires_at: pending.expires_at,
        })
    }

    /// Verify a code. Success clears the slot, so a second attempt with
    /// the same code reports expired.
    pub fn verify(
        &self,
        command: VerifyPasscodeCommand,
    ) -> Result<VerifyPasscodeResult, VerifyPasscodeError> {
        let pending: PendingPasscode = self
            .session
            .read_slot(keys::PASSCODE)
            .ok_or(VerifyPasscodeError::Expired)?;

        if pending.is_expired(Utc::now()) {
            return Err(VerifyPasscodeError::Expired);
        }
        if command.email != pending.email {
            return Err(VerifyPasscodeError::EmailMismatch);
        }
        if command.code != pending.code {
            return Err(VerifyPasscodeError::InvalidCode);
        }

        self.session.clear(keys::PASSCODE);
        info!("Passcode verified for {}", pending.email);
        Ok(VerifyPasscodeResult {
            email: pending.email,
        })
    }

    pub fn status(&self) -> PasscodeStatus {
        if self
            .session
            .read_slot::<PendingPasscode>(keys::PASSCODE)
            .is_some()
        {
            PasscodeStatus::Sent
        } else {
            PasscodeStatus::NotSent
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::storage::MemoryStore;
    use chrono::Duration;
    use shared::{BloodGroup, Organ};
    use std::sync::Arc;

    const EMAIL: &str = "asha@example.com";

    fn setup() -> (PasscodeService, RecordStore, RecordStore) {
        let records = RecordStore::new(Arc::new(MemoryStore::new()));
        let session = RecordStore::new(Arc::new(MemoryStore::new()));
        (
            PasscodeService::new(records.clone(), session.clone()),
            records,
            session,
        )
    }

    fn store_profile(records: &RecordStore, email: &str) {
        let profile = DonorRecord {
            donor_id: "DON250101AB12".to_string(),
            full_name: "Asha Verma".to_string(),
            blood_group: BloodGroup::OPos,
            organs: vec![Organ::Kidneys],
            email: email.to_string(),
            phone: "9876543210".to_string(),
        };
        records.replace_slot(keys::DONOR_PROFILE, &profile).unwrap();
    }

    fn pending_code(session: &RecordStore) -> PendingPasscode {
        session.read_slot(keys::PASSCODE).unwrap()
    }

    #[test]
    fn send_requires_matching_profile_email() {
        let (service, records, _session) = setup();

        // No profile at all.
        let err = service
            .send(SendPasscodeCommand {
                email: EMAIL.to_string(),
            })
            .unwrap_err();
        assert_eq!(err, SendPasscodeError::ProfileMismatch);

        // Profile with a different email.
        store_profile(&records, "other@example.com");
        let err = service
            .send(SendPasscodeCommand {
                email: EMAIL.to_string(),
            })
            .unwrap_err();
        assert_eq!(err, SendPasscodeError::ProfileMismatch);

        assert_eq!(service.status(), PasscodeStatus::NotSent);
    }

    #[test]
    fn send_rejects_malformed_email() {
        let (service, _records, _session) = setup();
        let err = service
            .send(SendPasscodeCommand {
                email: "not-an-email".to_string(),
            })
            .unwrap_err();
        assert_eq!(err, SendPasscodeError::InvalidEmail);
    }

    #[test]
    fn send_holds_a_six_digit_code() {
        let (service, records, session) = setup();
        store_profile(&records, EMAIL);

        service
            .send(SendPasscodeCommand {
                email: EMAIL.to_string(),
            })
            .unwrap();

        assert_eq!(service.status(), PasscodeStatus::Sent);
        let pending = pending_code(&session);
        assert_eq!(pending.email, EMAIL);
        assert_eq!(pending.code.len(), PASSCODE_LEN);
        assert!(pending.code.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn verify_succeeds_exactly_once() {
        let (service, records, session) = setup();
        store_profile(&records, EMAIL);
        service
            .send(SendPasscodeCommand {
                email: EMAIL.to_string(),
            })
            .unwrap();
        let code = pending_code(&session).code;

        let result = service
            .verify(VerifyPasscodeCommand {
                email: EMAIL.to_string(),
                code: code.clone(),
            })
            .unwrap();
        assert_eq!(result.email, EMAIL);
        assert_eq!(service.status(), PasscodeStatus::NotSent);

        // The slot is cleared, so the same code no longer verifies.
        let err = service
            .verify(VerifyPasscodeCommand {
                email: EMAIL.to_string(),
                code,
            })
            .unwrap_err();
        assert_eq!(err, VerifyPasscodeError::Expired);
    }

    #[test]
    fn expired_code_reports_expired_not_success() {
        let (service, records, session) = setup();
        store_profile(&records, EMAIL);

        // A code issued six minutes ago is past its five-minute window.
        let stale = PendingPasscode::issue(
            EMAIL,
            "123456".to_string(),
            Utc::now() - Duration::minutes(6),
        );
        session.replace_slot(keys::PASSCODE, &stale).unwrap();

        let err = service
            .verify(VerifyPasscodeCommand {
                email: EMAIL.to_string(),
                code: "123456".to_string(),
            })
            .unwrap_err();
        assert_eq!(err, VerifyPasscodeError::Expired);
    }

    #[test]
    fn wrong_code_and_wrong_email_are_distinct_errors() {
        let (service, records, session) = setup();
        store_profile(&records, EMAIL);
        service
            .send(SendPasscodeCommand {
                email: EMAIL.to_string(),
            })
            .unwrap();
        let code = pending_code(&session).code;
        let wrong_code = if code == "000000" { "000001" } else { "000000" };

        let err = service
            .verify(VerifyPasscodeCommand {
                email: "other@example.com".to_string(),
                code: code.clone(),
            })
            .unwrap_err();
        assert_eq!(err, VerifyPasscodeError::EmailMismatch);

        let err = service
            .verify(VerifyPasscodeCommand {
                email: EMAIL.to_string(),
                code: wrong_code.to_string(),
            })
            .unwrap_err();
        assert_eq!(err, VerifyPasscodeError::InvalidCode);

        // Failed attempts leave the slot in place for a valid retry.
        assert_eq!(service.status(), PasscodeStatus::Sent);
        service
            .verify(VerifyPasscodeCommand {
                email: EMAIL.to_string(),
                code,
            })
            .unwrap();
    }

    #[test]
    fn resend_overwrites_pending_code_and_expiry() {
        let (service, records, session) = setup();
        store_profile(&records, EMAIL);

        // Hold a nearly expired code, then resend.
        let old = PendingPasscode::issue(
            EMAIL,
            "111111".to_string(),
            Utc::now() - Duration::minutes(4),
        );
        session.replace_slot(keys::PASSCODE, &old).unwrap();

        service
            .send(SendPasscodeCommand {
                email: EMAIL.to_string(),
            })
            .unwrap();

        let fresh = pending_code(&session);
        assert!(fresh.expires_at > old.expires_at);

        // The old code only verifies if the resend happened to mint the
        // same digits; the fresh one always does.
        service
            .verify(VerifyPasscodeCommand {
                email: EMAIL.to_string(),
                code: fresh.code.clone(),
            })
            .unwrap();
    }
}
