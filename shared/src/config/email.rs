//! Email delivery configuration module

use serde::{Deserialize, Serialize};
use std::env;

use super::environment::Environment;

/// Configuration for outgoing transactional email
///
/// Covers the sender identity, the frontend base URL used to build fallback
/// verification links, and the mail provider credentials. When no provider
/// API key is configured, the server falls back to the logging mock mailer.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EmailConfig {
    /// Sender address for all outgoing mail
    pub from_address: String,

    /// Display name paired with the sender address
    pub from_name: String,

    /// Base URL for locally generated verification links
    pub frontend_base_url: String,

    /// Mail provider API key; `None` selects the mock mailer
    #[serde(skip_serializing)]
    pub resend_api_key: Option<String>,

    /// Whether success responses include the raw token.
    ///
    /// Tokens are capability secrets, so this is off outside development
    /// unless explicitly enabled.
    pub expose_token: bool,
}

impl EmailConfig {
    /// Load email configuration from environment variables
    ///
    /// Reads `EMAIL_FROM_ADDRESS`, `EMAIL_FROM_NAME`, `FRONTEND_BASE_URL`,
    /// `RESEND_API_KEY` and `EXPOSE_TOKEN`. The `expose_token` default
    /// follows the environment: on in development, off elsewhere.
    pub fn from_env(environment: Environment) -> Self {
        Self {
            from_address: env::var("EMAIL_FROM_ADDRESS")
                .unwrap_or_else(|_| String::from("no-reply@trackmail.app")),
            from_name: env::var("EMAIL_FROM_NAME").unwrap_or_else(|_| String::from("TrackMail")),
            frontend_base_url: env::var("FRONTEND_BASE_URL")
                .unwrap_or_else(|_| String::from("http://localhost:3000")),
            resend_api_key: env::var("RESEND_API_KEY").ok().filter(|k| !k.is_empty()),
            expose_token: env::var("EXPOSE_TOKEN")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or_else(|| environment.is_development()),
        }
    }

    /// Formatted sender, e.g. `TrackMail <no-reply@trackmail.app>`
    pub fn sender(&self) -> String {
        format!("{} <{}>", self.from_name, self.from_address)
    }
}
