//! Mock mail delivery implementation
//!
//! Logs messages instead of sending them. Used in development when no
//! provider API key is configured, and in tests.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};
use uuid::Uuid;

use tm_core::services::mail::{EmailMessage, Mailer};

/// Mock mailer for development and testing
///
/// This implementation:
/// - Logs outgoing messages via tracing
/// - Generates mock message ids
/// - Tracks the send count for assertions
#[derive(Clone)]
pub struct MockMailer {
    /// Counter for tracking number of messages sent
    message_count: Arc<AtomicU64>,
    /// Whether to simulate delivery failures (for testing)
    simulate_failure: bool,
}

impl MockMailer {
    /// Create a new mock mailer
    pub fn new() -> Self {
        Self {
            message_count: Arc::new(AtomicU64::new(0)),
            simulate_failure: false,
        }
    }

    /// Create a mock mailer that fails every send
    pub fn failing() -> Self {
        Self {
            message_count: Arc::new(AtomicU64::new(0)),
            simulate_failure: true,
        }
    }

    /// Total number of messages sent
    pub fn message_count(&self) -> u64 {
        self.message_count.load(Ordering::SeqCst)
    }
}

impl Default for MockMailer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Mailer for MockMailer {
    async fn send(&self, message: &EmailMessage) -> Result<String, String> {
        if self.simulate_failure {
            warn!(to = %message.to, "Mock mailer simulating delivery failure");
            return Err("simulated delivery failure".to_string());
        }

        let count = self.message_count.fetch_add(1, Ordering::SeqCst) + 1;
        let message_id = format!("mock-{}", Uuid::new_v4());

        info!(
            to = %message.to,
            subject = %message.subject,
            message_id = %message_id,
            total_sent = count,
            "Mock mailer delivered message"
        );

        Ok(message_id)
    }

    fn provider_name(&self) -> &str {
        "Mock"
    }
}
