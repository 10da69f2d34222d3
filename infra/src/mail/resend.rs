//! Resend mail delivery implementation
//!
//! Sends structured messages through the Resend HTTP API
//! (`POST https://api.resend.com/emails` with bearer authentication).

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use tm_core::services::mail::{EmailMessage, Mailer};

use crate::InfrastructureError;

/// Default Resend API endpoint
const RESEND_API_URL: &str = "https://api.resend.com/emails";

/// Mailer backed by the Resend transactional email API
#[derive(Clone)]
pub struct ResendMailer {
    client: reqwest::Client,
    api_key: String,
    api_url: String,
}

#[derive(Serialize)]
struct SendEmailBody<'a> {
    from: &'a str,
    to: [&'a str; 1],
    subject: &'a str,
    html: &'a str,
    text: &'a str,
}

#[derive(Deserialize)]
struct SendEmailResponse {
    id: String,
}

impl ResendMailer {
    /// Create a mailer using the default Resend endpoint
    pub fn new(api_key: String) -> Self {
        Self::with_api_url(api_key, RESEND_API_URL.to_string())
    }

    /// Create a mailer against a custom endpoint (used in tests)
    pub fn with_api_url(api_key: String, api_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            api_url,
        }
    }

    /// Deliver a message, returning the provider message id
    ///
    /// A non-success status becomes [`InfrastructureError::MailProvider`]
    /// carrying the provider's response body for diagnostics.
    pub async fn deliver(&self, message: &EmailMessage) -> Result<String, InfrastructureError> {
        let body = SendEmailBody {
            from: &message.from,
            to: [message.to.as_str()],
            subject: &message.subject,
            html: &message.html,
            text: &message.text,
        };

        debug!(to = %message.to, subject = %message.subject, "Sending email via Resend");

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            warn!(%status, detail = %detail, "Resend rejected the message");
            return Err(InfrastructureError::MailProvider(format!(
                "provider returned {}: {}",
                status, detail
            )));
        }

        let parsed: SendEmailResponse = response.json().await?;

        Ok(parsed.id)
    }
}

#[async_trait]
impl Mailer for ResendMailer {
    async fn send(&self, message: &EmailMessage) -> Result<String, String> {
        self.deliver(message).await.map_err(|e| e.to_string())
    }

    fn provider_name(&self) -> &str {
        "Resend"
    }
}
