//! Traits for mail delivery and template rendering integration
//!
//! Both collaborators are external to the core: the mailer hands a
//! structured message to a delivery provider, and the template set turns
//! flow-specific fields into subject and bodies. Services compose the two
//! after their own decision logic completes.

use async_trait::async_trait;

/// Structured message handed to the delivery provider
#[derive(Debug, Clone)]
pub struct EmailMessage {
    /// Recipient address
    pub to: String,
    /// Sender, e.g. `TrackMail <no-reply@trackmail.app>`
    pub from: String,
    /// Subject line
    pub subject: String,
    /// Plain-text body
    pub text: String,
    /// HTML body
    pub html: String,
}

/// Rendered subject and bodies for one email kind
#[derive(Debug, Clone)]
pub struct RenderedEmail {
    pub subject: String,
    pub text: String,
    pub html: String,
}

/// Trait for mail delivery integration
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Send a message, returning the provider message id
    async fn send(&self, message: &EmailMessage) -> Result<String, String>;

    /// Name of the delivery provider (e.g. "Resend", "Mock")
    fn provider_name(&self) -> &str;
}

/// Data for the verification email template
#[derive(Debug, Clone)]
pub struct VerificationEmail {
    pub verification_url: String,
}

/// Data for the welcome-after-purchase email template
#[derive(Debug, Clone)]
pub struct WelcomePurchaseEmail {
    pub first_name: String,
    pub plan_name: Option<String>,
    pub plan_price: Option<f64>,
    pub vehicle_name: Option<String>,
    pub verification_url: Option<String>,
}

/// Data for the tracker-transfer notification template
#[derive(Debug, Clone)]
pub struct TransferNotificationEmail {
    pub transfer_id: String,
    pub imei: String,
    pub vehicle_name: String,
    pub registration_number: Option<String>,
    pub from_user_name: Option<String>,
}

/// Data for the device-added confirmation template
#[derive(Debug, Clone)]
pub struct DeviceAddedEmail {
    pub first_name: String,
    pub vehicle_name: String,
    pub plan_name: String,
    pub plan_price: Option<f64>,
}

/// Data for the invoice email template
#[derive(Debug, Clone)]
pub struct InvoiceEmail {
    pub invoice_id: String,
    pub amount: f64,
    pub invoice_url: String,
    pub invoice_pdf: Option<String>,
}

/// Template renderer producing message bodies for each transactional email
pub trait TemplateSet: Send + Sync {
    fn verification(&self, email: &VerificationEmail) -> RenderedEmail;
    fn welcome_purchase(&self, email: &WelcomePurchaseEmail) -> RenderedEmail;
    fn transfer_notification(&self, email: &TransferNotificationEmail) -> RenderedEmail;
    fn device_added(&self, email: &DeviceAddedEmail) -> RenderedEmail;
    fn invoice(&self, email: &InvoiceEmail) -> RenderedEmail;
}
