//! # LifeChain Portal
//!
//! UI-agnostic backend for the LifeChain organ-donation coordination
//! portal. Registration forms, the local record store, blood-group
//! matching, and the naive login flows all live here; a frontend renders
//! the screen view models produced by [`backend::io`] and feeds user
//! input back through the submission handlers.
//!
//! Everything operates against a local key-value store. There is no
//! server, no real authentication, and no cross-user data exchange.

pub mod backend;

pub use backend::{initialize_backend, initialize_backend_with_stores, AppState};
