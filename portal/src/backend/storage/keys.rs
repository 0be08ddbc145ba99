//! Fixed storage key names. Every persisted list and profile slot lives
//! under one of these keys; the names are part of the stored layout and
//! must not change.

/// Ordered list of every registered donor.
pub const DONORS: &str = "lifechain-donors";

/// Ordered list of every registered recipient.
pub const RECIPIENTS: &str = "lifechain-recipients";

/// Ordered list of every registered hospital staff member.
pub const STAFF: &str = "lifechain-staff";

/// Ordered list of every registered organization.
pub const ORGANIZATIONS: &str = "lifechain-organizations";

/// Single-record slot holding the currently loaded donor profile.
pub const DONOR_PROFILE: &str = "lifechain-donor-profile";

/// Single-record slot holding the currently loaded recipient profile.
pub const RECIPIENT_PROFILE: &str = "lifechain-recipient-profile";

/// Single-record slot holding the admin display name.
pub const ADMIN: &str = "lifechain-admin";

/// Raw string slot holding the donor's credit token.
pub const CREDIT_TOKEN: &str = "lifechain-credit-token";

/// Session-scoped slot holding the pending one-time passcode.
pub const PASSCODE: &str = "lifechain-otp";
