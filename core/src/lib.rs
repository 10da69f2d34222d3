//! # TrackMail Core
//!
//! Core business logic and domain layer for the TrackMail backend.
//! This crate contains the verification token entity, the token store
//! interface, the verification and notification services, and the error
//! types that form the foundation of the application architecture.

pub mod domain;
pub mod errors;
pub mod services;
pub mod store;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use services::*;
pub use store::*;
