use crate::backend::domain::commands::passcode::{
    SendPasscodeCommand, SendPasscodeResult, VerifyPasscodeCommand,
};
use crate::backend::domain::passcode_service::{
    PasscodeStatus, SendPasscodeError, VerifyPasscodeError,
};
use crate::backend::io::router::{Navigation, Route};
use crate::backend::AppState;

/// Where the donor login screen currently is: `NotSent` shows the send
/// button, `Sent` shows the code entry with resend.
pub fn passcode_status(state: &AppState) -> PasscodeStatus {
    state.passcode_service.status()
}

/// Send (or resend) the one-time passcode for the entered email.
pub fn send_passcode(
    state: &AppState,
    command: SendPasscodeCommand,
) -> Result<SendPasscodeResult, SendPasscodeError> {
    state.passcode_service.send(command)
}

/// Verify the entered code; success navigates to the donor home.
pub fn verify_passcode(
    state: &AppState,
    command: VerifyPasscodeCommand,
) -> Result<Navigation, VerifyPasscodeError> {
    state.passcode_service.verify(command)?;
    Ok(Navigation::to(Route::DonorHome))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::domain::commands::donor::RegisterDonorCommand;
    use crate::backend::domain::models::passcode::PendingPasscode;
    use crate::backend::initialize_backend_with_stores;
    use crate::backend::storage::{keys, MemoryStore, RecordStore};
    use shared::{BloodGroup, Gender, Organ};
    use std::sync::Arc;

    const EMAIL: &str = "asha@example.com";

    fn setup() -> (AppState, RecordStore) {
        let session = Arc::new(MemoryStore::new());
        let state = initialize_backend_with_stores(
            Arc::new(MemoryStore::new()),
            session.clone(),
        );
        (state, RecordStore::new(session))
    }

    fn register(state: &AppState) {
        state
            .donor_service
            .register_donor(RegisterDonorCommand {
                full_name: "Asha Verma".to_string(),
                email: EMAIL.to_string(),
                phone: "9876543210".to_string(),
                age: 29,
                gender: Gender::Female,
                blood_group: BloodGroup::OPos,
                address: "14 Lake View Road, Pune".to_string(),
                organs: vec![Organ::Kidneys],
                emergency_name: "Ravi Verma".to_string(),
                emergency_phone: "9876543211".to_string(),
                consent: true,
            })
            .unwrap();
    }

    #[test]
    fn full_flow_send_then_verify_navigates_home() {
        let (state, session) = setup();
        register(&state);

        assert_eq!(passcode_status(&state), PasscodeStatus::NotSent);
        send_passcode(
            &state,
            SendPasscodeCommand {
                email: EMAIL.to_string(),
            },
        )
        .unwrap();
        assert_eq!(passcode_status(&state), PasscodeStatus::Sent);

        let code = session
            .read_slot::<PendingPasscode>(keys::PASSCODE)
            .unwrap()
            .code;
        let nav = verify_passcode(
            &state,
            VerifyPasscodeCommand {
                email: EMAIL.to_string(),
                code,
            },
        )
        .unwrap();
        assert_eq!(nav.route, Route::DonorHome);
        assert_eq!(passcode_status(&state), PasscodeStatus::NotSent);
    }

    #[test]
    fn send_without_profile_reports_mismatch() {
        let (state, _session) = setup();
        let err = send_passcode(
            &state,
            SendPasscodeCommand {
                email: EMAIL.to_string(),
            },
        )
        .unwrap_err();
        assert_eq!(err, SendPasscodeError::ProfileMismatch);
        assert_eq!(
            err.to_string(),
            "No donor profile for this email. Please sign up first."
        );
    }
}
