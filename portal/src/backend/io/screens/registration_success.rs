use shared::RegistrationSummary;

/// The shared success screen, parameterized entirely by the transient
/// payload from whichever signup just ran. Entered without the payload
/// (back/forward navigation, a typed address) it must show `NoData`;
/// the summary is never re-read from storage.
#[derive(Debug, Clone, PartialEq)]
pub enum SuccessScreen {
    Details(RegistrationSummary),
    NoData,
}

pub fn registration_success_screen(payload: Option<RegistrationSummary>) -> SuccessScreen {
    match payload {
        Some(summary) => SuccessScreen::Details(summary),
        None => SuccessScreen::NoData,
    }
}
