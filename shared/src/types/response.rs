//! API response types and wrappers

use serde::{Deserialize, Serialize};

/// Uniform error body returned by every failing endpoint
///
/// All errors, whatever their origin, are reported to clients as
/// `{"success": false, "error": "...", "details": {...}}`. The `details`
/// object is optional and never carries internal stack detail.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Always `false` for error responses
    pub success: bool,

    /// Short machine-readable error description
    pub error: String,

    /// Optional structured detail (field names, provider message)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorBody {
    /// Create an error body with no detail
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
            details: None,
        }
    }

    /// Attach structured detail to the error body
    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }
}
