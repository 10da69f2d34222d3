//! Configuration for the verification service

use crate::domain::entities::verification_token::DEFAULT_TTL_HOURS;

/// Configuration for the verification service
#[derive(Debug, Clone)]
pub struct VerificationServiceConfig {
    /// Hours before a minted token expires
    pub token_ttl_hours: i64,
    /// Sender for outgoing mail, e.g. `TrackMail <no-reply@trackmail.app>`
    pub from: String,
    /// Base URL used to build fallback verification links
    pub frontend_base_url: String,
    /// Whether outcomes include the raw token (debug behaviour, off in production)
    pub expose_token: bool,
}

impl Default for VerificationServiceConfig {
    fn default() -> Self {
        Self {
            token_ttl_hours: DEFAULT_TTL_HOURS,
            from: String::from("TrackMail <no-reply@trackmail.app>"),
            frontend_base_url: String::from("http://localhost:3000"),
            expose_token: false,
        }
    }
}
