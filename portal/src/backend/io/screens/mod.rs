//! Screen view-model builders.
//!
//! Each function reads the services and returns a plain data structure
//! for a frontend to render. Fallback states are explicit variants, so
//! a screen entered without its data can never assume a shape.

pub mod admin_dashboard;
pub mod donor_home;
pub mod donor_login;
pub mod login;
pub mod recipient_home;
pub mod registration_success;
