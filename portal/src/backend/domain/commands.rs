//! Domain-level command and result types.
//!
//! These structs are the inputs and outputs of the domain services. The
//! io layer maps them to the DTOs in the `shared` crate; nothing here is
//! part of the persisted layout except through the records the services
//! build from them.

pub mod donor {
    use crate::backend::domain::models::donor::DonorRecord;
    use crate::backend::domain::schema::{FieldValue, FormFields};
    use shared::{BloodGroup, Gender, Organ};

    /// Input of the donor signup form.
    #[derive(Debug, Clone)]
    pub struct RegisterDonorCommand {
        pub full_name: String,
        pub email: String,
        pub phone: String,
        pub age: u32,
        pub gender: Gender,
        pub blood_group: BloodGroup,
        pub address: String,
        pub organs: Vec<Organ>,
        pub emergency_name: String,
        pub emergency_phone: String,
        pub consent: bool,
    }

    impl FormFields for RegisterDonorCommand {
        fn field(&self, name: &str) -> FieldValue<'_> {
            match name {
                "fullName" => FieldValue::Text(&self.full_name),
                "email" => FieldValue::Text(&self.email),
                "phone" => FieldValue::Text(&self.phone),
                "age" => FieldValue::Int(self.age as i64),
                "gender" => FieldValue::Choice(self.gender.as_str()),
                "bloodGroup" => FieldValue::Choice(self.blood_group.as_str()),
                "address" => FieldValue::Text(&self.address),
                "organs" => FieldValue::Count(self.organs.len()),
                "emergencyName" => FieldValue::Text(&self.emergency_name),
                "emergencyPhone" => FieldValue::Text(&self.emergency_phone),
                "consent" => FieldValue::Flag(self.consent),
                _ => FieldValue::Missing,
            }
        }
    }

    /// Result of a successful donor registration.
    #[derive(Debug, Clone)]
    pub struct RegisterDonorResult {
        pub record: DonorRecord,
    }
}

pub mod recipient {
    use crate::backend::domain::models::recipient::RecipientRecord;
    use crate::backend::domain::schema::{FieldValue, FormFields};
    use shared::{BloodGroup, Gender};

    /// Input of the recipient signup form.
    #[derive(Debug, Clone)]
    pub struct RegisterRecipientCommand {
        pub full_name: String,
        pub email: String,
        pub phone: String,
        pub age: u32,
        pub gender: Gender,
        pub blood_group: BloodGroup,
        pub address: String,
        pub need_details: String,
        pub consent: bool,
    }

    impl FormFields for RegisterRecipientCommand {
        fn field(&self, name: &str) -> FieldValue<'_> {
            match name {
                "fullName" => FieldValue::Text(&self.full_name),
                "email" => FieldValue::Text(&self.email),
                "phone" => FieldValue::Text(&self.phone),
                "age" => FieldValue::Int(self.age as i64),
                "gender" => FieldValue::Choice(self.gender.as_str()),
                "bloodGroup" => FieldValue::Choice(self.blood_group.as_str()),
                "address" => FieldValue::Text(&self.address),
                "needDetails" => FieldValue::Text(&self.need_details),
                "consent" => FieldValue::Flag(self.consent),
                _ => FieldValue::Missing,
            }
        }
    }

    #[derive(Debug, Clone)]
    pub struct RegisterRecipientResult {
        pub record: RecipientRecord,
    }
}

pub mod staff {
    use crate::backend::domain::models::staff::StaffRecord;
    use crate::backend::domain::schema::{FieldValue, FormFields};
    use shared::StaffRole;

    /// Input of the hospital-staff signup form.
    #[derive(Debug, Clone)]
    pub struct RegisterStaffCommand {
        pub hospital_name: String,
        pub staff_name: String,
        pub role: StaffRole,
        pub email: String,
        pub phone: String,
        pub hospital_reg_id: String,
        pub address: String,
        pub notes: Option<String>,
        pub consent: bool,
    }

    impl FormFields for RegisterStaffCommand {
        fn field(&self, name: &str) -> FieldValue<'_> {
            match name {
                "hospitalName" => FieldValue::Text(&self.hospital_name),
                "staffName" => FieldValue::Text(&self.staff_name),
                "role" => FieldValue::Choice(self.role.as_str()),
                "email" => FieldValue::Text(&self.email),
                "phone" => FieldValue::Text(&self.phone),
                "hospitalRegId" => FieldValue::Text(&self.hospital_reg_id),
                "address" => FieldValue::Text(&self.address),
                "notes" => FieldValue::OptionalText(self.notes.as_deref()),
                "consent" => FieldValue::Flag(self.consent),
                _ => FieldValue::Missing,
            }
        }
    }

    #[derive(Debug, Clone)]
    pub struct RegisterStaffResult {
        pub record: StaffRecord,
    }
}

pub mod organization {
    use crate::backend::domain::models::organization::OrganizationRecord;
    use crate::backend::domain::schema::{FieldValue, FormFields};
    use shared::OrgType;

    /// Input of the organization signup form.
    #[derive(Debug, Clone)]
    pub struct RegisterOrganizationCommand {
        pub org_type: OrgType,
        pub organization_name: String,
        pub registration_id: String,
        pub contact_name: String,
        pub email: String,
        pub phone: String,
        pub address: String,
        pub about: Option<String>,
        pub consent: bool,
    }

    impl FormFields for RegisterOrganizationCommand {
        fn field(&self, name: &str) -> FieldValue<'_> {
            match name {
                "orgType" => FieldValue::Choice(self.org_type.as_str()),
                "organizationName" => FieldValue::Text(&self.organization_name),
                "registrationId" => FieldValue::Text(&self.registration_id),
                "contactName" => FieldValue::Text(&self.contact_name),
                "email" => FieldValue::Text(&self.email),
                "phone" => FieldValue::Text(&self.phone),
                "address" => FieldValue::Text(&self.address),
                "about" => FieldValue::OptionalText(self.about.as_deref()),
                "consent" => FieldValue::Flag(self.consent),
                _ => FieldValue::Missing,
            }
        }
    }

    #[derive(Debug, Clone)]
    pub struct RegisterOrganizationResult {
        pub record: OrganizationRecord,
    }
}

pub mod auth {
    use crate::backend::domain::models::admin::AdminSession;
    use crate::backend::domain::models::donor::DonorRecord;
    use crate::backend::domain::models::recipient::RecipientRecord;

    /// Role selected on the existing-user login screen.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum LoginRole {
        Donor,
        Recipient,
        /// Hospital/NGO/Government: stores a display name, no lookup.
        Admin,
    }

    /// Input of the existing-user login form.
    #[derive(Debug, Clone)]
    pub struct NameLoginCommand {
        pub role: LoginRole,
        pub name: String,
    }

    /// The record loaded as "current profile" by a successful login.
    #[derive(Debug, Clone)]
    pub enum NameLoginResult {
        Donor(DonorRecord),
        Recipient(RecipientRecord),
        Admin(AdminSession),
    }
}

pub mod passcode {
    use chrono::{DateTime, Utc};

    /// Input of the "send OTP" action on the donor login screen.
    #[derive(Debug, Clone)]
    pub struct SendPasscodeCommand {
        pub email: String,
    }

    #[derive(Debug, Clone)]
    pub struct SendPasscodeResult {
        pub expires_at: DateTime<Utc>,
    }

    /// Input of the "verify OTP" action.
    #[derive(Debug, Clone)]
    pub struct VerifyPasscodeCommand {
        pub email: String,
        pub code: String,
    }

    #[derive(Debug, Clone)]
    pub struct VerifyPasscodeResult {
        pub email: String,
    }
}
