//! Mail delivery integrations
//!
//! Implementations of the core [`Mailer`](tm_core::services::mail::Mailer)
//! trait plus the transactional email templates:
//! - [`ResendMailer`]: the Resend HTTP API
//! - [`MockMailer`]: console/tracing output for development and testing
//! - [`TrackMailTemplates`]: HTML and plain-text bodies for every email kind

pub mod mock;
pub mod resend;
pub mod templates;

pub use mock::MockMailer;
pub use resend::ResendMailer;
pub use templates::TrackMailTemplates;
