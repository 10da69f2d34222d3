//! Business services containing domain logic and use cases.

pub mod mail;
pub mod notification;
pub mod verification;

// Re-export commonly used types
pub use mail::{
    DeviceAddedEmail, EmailMessage, InvoiceEmail, Mailer, RenderedEmail, TemplateSet,
    TransferNotificationEmail, VerificationEmail, WelcomePurchaseEmail,
};
pub use notification::{
    DeviceAddedRequest, InvoiceRequest, NotificationService, TransferNotificationRequest,
};
pub use verification::{
    ConsumedToken, TokenStatus, VerificationOutcome, VerificationRequest, VerificationService,
    VerificationServiceConfig, WelcomePurchaseRequest,
};

use crate::errors::{DomainError, DomainResult};

/// Reject empty or whitespace-only required fields
pub(crate) fn require_field(field: &'static str, value: &str) -> DomainResult<()> {
    if value.trim().is_empty() {
        Err(DomainError::missing_field(field))
    } else {
        Ok(())
    }
}
