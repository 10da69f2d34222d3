//! # Infrastructure Layer
//!
//! This crate implements the infrastructure layer for the TrackMail
//! application. It provides concrete implementations for the collaborators
//! the core treats as opaque capabilities:
//!
//! - **Mail**: the Resend HTTP mailer, a logging mock mailer, and the
//!   transactional email templates
//! - **Store**: the in-memory token store

pub mod mail;
pub mod store;

use thiserror::Error;

/// Errors raised by infrastructure services
#[derive(Error, Debug)]
pub enum InfrastructureError {
    /// The mail provider rejected the request
    #[error("Mail provider error: {0}")]
    MailProvider(String),

    /// The HTTP transport to the provider failed
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),
}
