use std::sync::atomic::{AtomicBool, Ordering};

use crate::backend::domain::commands::donor::RegisterDonorCommand;
use crate::backend::domain::commands::organization::RegisterOrganizationCommand;
use crate::backend::domain::commands::recipient::RegisterRecipientCommand;
use crate::backend::domain::commands::staff::RegisterStaffCommand;
use crate::backend::domain::schema::ValidationErrors;
use crate::backend::io::mappers::{
    DonorMapper, OrganizationMapper, RecipientMapper, StaffMapper,
};
use crate::backend::io::router::{Navigation, Route};
use crate::backend::AppState;

/// Outcome of a guarded form submission.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// The record was stored; navigate to the success screen with the
    /// transient summary payload attached.
    Accepted(Navigation),
    /// One or more fields failed validation; nothing was written.
    Rejected(ValidationErrors),
    /// Another submit on this handler is still running; ignored.
    InFlight,
}

/// Re-entrancy guard: a submit started while another is active on the
/// same handler is dropped instead of double-writing.
#[derive(Debug, Default)]
pub struct SubmissionGuard {
    in_flight: AtomicBool,
}

impl SubmissionGuard {
    /// Claim the guard. Returns false if a submit is already in flight.
    pub fn begin(&self) -> bool {
        !self.in_flight.swap(true, Ordering::SeqCst)
    }

    pub fn finish(&self) {
        self.in_flight.store(false, Ordering::SeqCst);
    }
}

/// One handler per mounted signup form.
#[derive(Debug, Default)]
pub struct SignupHandler {
    guard: SubmissionGuard,
}

impl SignupHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn submit_donor(&self, state: &AppState, command: RegisterDonorCommand) -> SubmitOutcome {
        self.guarded(|| match state.donor_service.register_donor(command) {
            Ok(result) => SubmitOutcome::Accepted(Navigation::with_summary(
                Route::DonorSuccess,
                DonorMapper::registration_summary(&result.record),
            )),
            Err(errors) => SubmitOutcome::Rejected(errors),
        })
    }

    pub fn submit_recipient(
        &self,
        state: &AppState,
        command: RegisterRecipientCommand,
    ) -> SubmitOutcome {
        self.guarded(
            || match state.recipient_service.register_recipient(command) {
                Ok(result) => SubmitOutcome::Accepted(Navigation::with_summary(
                    Route::RecipientSuccess,
                    RecipientMapper::registration_summary(&result.record),
                )),
                Err(errors) => SubmitOutcome::Rejected(errors),
            },
        )
    }

    pub fn submit_staff(&self, state: &AppState, command: RegisterStaffCommand) -> SubmitOutcome {
        self.guarded(|| match state.staff_service.register_staff(command) {
            Ok(result) => SubmitOutcome::Accepted(Navigation::with_summary(
                Route::StaffSuccess,
                StaffMapper::registration_summary(&result.record),
            )),
            Err(errors) => SubmitOutcome::Rejected(errors),
        })
    }

    pub fn submit_organization(
        &self,
        state: &AppState,
        command: RegisterOrganizationCommand,
    ) -> SubmitOutcome {
        self.guarded(
            || match state.organization_service.register_organization(command) {
                Ok(result) => SubmitOutcome::Accepted(Navigation::with_summary(
                    Route::OrganizationSuccess,
                    OrganizationMapper::registration_summary(&result.record),
                )),
                Err(errors) => SubmitOutcome::Rejected(errors),
            },
        )
    }

    fn guarded(&self, submit: impl FnOnce() -> SubmitOutcome) -> SubmitOutcome {
        if !self.guard.begin() {
            return SubmitOutcome::InFlight;
        }
        let outcome = submit();
        self.guard.finish();
        outcome
    }
}
