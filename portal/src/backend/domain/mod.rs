//! # Domain Module
//!
//! Business logic for the LifeChain portal, independent of any UI
//! framework or storage backend.
//!
//! ## Module Organization
//!
//! - **identifier**: display-id generation (`DON25012309AB` style)
//! - **schema**: declarative form schemas and field validation
//! - **commands**: command/result types consumed by the services
//! - **donor_service / recipient_service / staff_service /
//!   organization_service**: one registration service per role
//! - **matching_service**: blood-group matching and display masking
//! - **auth_service**: name-based login surrogate
//! - **passcode_service**: session-scoped one-time-passcode flow
//!
//! ## Business Rules
//!
//! - Every submitted registration appends exactly one record to its
//!   role's list; donor and recipient signups also overwrite the
//!   "current profile" slot.
//! - Lists are append-only and insertion-ordered; nothing deletes or
//!   deduplicates them.
//! - Identifiers are display-grade and only probabilistically unique.
//! - Matching uses exact blood-group equality, no compatibility matrix.
//! - Storage failures degrade to no-ops or empty reads; they never
//!   abort a flow.

pub mod auth_service;
pub mod commands;
pub mod donor_service;
pub mod identifier;
pub mod matching_service;
pub mod models;
pub mod organization_service;
pub mod passcode_service;
pub mod recipient_service;
pub mod schema;
pub mod staff_service;

pub use auth_service::*;
pub use donor_service::*;
pub use matching_service::*;
pub use organization_service::*;
pub use passcode_service::*;
pub use recipient_service::*;
pub use staff_service::*;
