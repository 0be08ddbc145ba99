//! # IO Module
//!
//! The navigable surface of the portal: route resolution, the guarded
//! form submission handlers, screen view-model builders, and mappers
//! from domain records to the display DTOs in `shared`.
//!
//! Screens are data, not widgets. A frontend renders what these
//! builders return and feeds user actions back into the handlers; every
//! fallback state ("no profile", "no data") is explicit in the types.

pub mod mappers;
pub mod router;
pub mod screens;
pub mod submission;

pub use router::{Navigation, Route};
pub use submission::{SignupHandler, SubmitOutcome};
