//! Types for verification service requests and results

use chrono::{DateTime, Utc};

/// Request to start an email verification flow
#[derive(Debug, Clone)]
pub struct VerificationRequest {
    /// Target email address
    pub email: String,
    /// Opaque correlation id, passed through untouched
    pub user_id: Option<String>,
    /// Caller-supplied callback or ready-made action link
    pub callback_url: Option<String>,
}

/// Request to send the welcome-after-purchase email
///
/// Uses the same token/URL decision procedure as the verification flow;
/// only the rendered email differs.
#[derive(Debug, Clone)]
pub struct WelcomePurchaseRequest {
    pub email: String,
    pub user_id: Option<String>,
    pub first_name: String,
    pub plan_name: Option<String>,
    pub plan_price: Option<f64>,
    pub vehicle_name: Option<String>,
    pub callback_url: Option<String>,
}

/// Outcome of starting a verification or welcome flow
#[derive(Debug, Clone)]
pub struct VerificationOutcome {
    /// The link embedded in the email
    pub verification_url: String,
    /// The raw minted token; `None` for pass-through links or when token
    /// exposure is disabled
    pub token: Option<String>,
    /// Provider message id of the sent email
    pub message_id: String,
}

/// Result of consuming a token
#[derive(Debug, Clone)]
pub struct ConsumedToken {
    pub email: String,
    pub user_id: Option<String>,
}

/// Read-only status report for a token
#[derive(Debug, Clone)]
pub struct TokenStatus {
    pub email: String,
    pub verified: bool,
    pub expired: bool,
    pub expires_at: DateTime<Utc>,
}
