//! Verification service module for email verification tokens
//!
//! This module provides the complete token lifecycle:
//! - Token minting with a 24-hour TTL, or pass-through of provider-issued
//!   action links detected by the typed recognizer
//! - One-time consumption with lazy eviction of expired records
//! - Side-effect-free status inspection
//! - Unconditional revocation

pub mod action_link;
mod config;
mod service;
mod types;

#[cfg(test)]
pub(crate) mod tests;

pub use config::VerificationServiceConfig;
pub use service::VerificationService;
pub use types::{
    ConsumedToken, TokenStatus, VerificationOutcome, VerificationRequest, WelcomePurchaseRequest,
};
