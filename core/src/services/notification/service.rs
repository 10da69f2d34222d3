//! Notification service implementation

use std::sync::Arc;

use crate::errors::{DomainError, DomainResult};
use crate::services::mail::{
    DeviceAddedEmail, EmailMessage, InvoiceEmail, Mailer, RenderedEmail, TemplateSet,
    TransferNotificationEmail,
};
use crate::services::require_field;

use super::types::{DeviceAddedRequest, InvoiceRequest, TransferNotificationRequest};

/// Service for the token-free transactional email flows
pub struct NotificationService<M: Mailer, T: TemplateSet> {
    /// Mail delivery provider
    mailer: Arc<M>,
    /// Template renderer for message bodies
    templates: Arc<T>,
    /// Sender for outgoing mail
    from: String,
}

impl<M: Mailer, T: TemplateSet> NotificationService<M, T> {
    /// Create a new notification service
    pub fn new(mailer: Arc<M>, templates: Arc<T>, from: String) -> Self {
        Self {
            mailer,
            templates,
            from,
        }
    }

    /// Notify a user that a tracker is being transferred to them
    pub async fn send_transfer_notification(
        &self,
        request: TransferNotificationRequest,
    ) -> DomainResult<String> {
        require_field("email", &request.email)?;
        require_field("transferId", &request.transfer_id)?;
        require_field("trackerDetails.imei", &request.imei)?;
        require_field("trackerDetails.vehicleName", &request.vehicle_name)?;

        let rendered = self.templates.transfer_notification(&TransferNotificationEmail {
            transfer_id: request.transfer_id,
            imei: request.imei,
            vehicle_name: request.vehicle_name,
            registration_number: request.registration_number,
            from_user_name: request.from_user_name,
        });

        self.deliver(&request.email, rendered, "transfer notification").await
    }

    /// Confirm a newly added tracker device
    pub async fn send_device_added(&self, request: DeviceAddedRequest) -> DomainResult<String> {
        require_field("email", &request.email)?;
        require_field("firstName", &request.first_name)?;
        require_field("vehicleName", &request.vehicle_name)?;
        require_field("planName", &request.plan_name)?;

        let rendered = self.templates.device_added(&DeviceAddedEmail {
            first_name: request.first_name,
            vehicle_name: request.vehicle_name,
            plan_name: request.plan_name,
            plan_price: request.plan_price,
        });

        self.deliver(&request.email, rendered, "device-added confirmation").await
    }

    /// Send an invoice email
    pub async fn send_invoice(&self, request: InvoiceRequest) -> DomainResult<String> {
        require_field("email", &request.email)?;
        require_field("invoiceId", &request.invoice_id)?;
        require_field("invoiceUrl", &request.invoice_url)?;

        let rendered = self.templates.invoice(&InvoiceEmail {
            invoice_id: request.invoice_id,
            amount: request.amount,
            invoice_url: request.invoice_url,
            invoice_pdf: request.invoice_pdf,
        });

        self.deliver(&request.email, rendered, "invoice").await
    }

    async fn deliver(
        &self,
        to: &str,
        rendered: RenderedEmail,
        kind: &'static str,
    ) -> DomainResult<String> {
        let message = EmailMessage {
            to: to.to_string(),
            from: self.from.clone(),
            subject: rendered.subject,
            text: rendered.text,
            html: rendered.html,
        };

        let message_id = self.mailer.send(&message).await.map_err(|provider_error| {
            tracing::error!(
                provider = self.mailer.provider_name(),
                error = %provider_error,
                kind,
                "Mail delivery failed"
            );
            DomainError::Delivery {
                message: provider_error,
            }
        })?;

        tracing::info!(email = %to, kind, message_id = %message_id, "Notification email sent");

        Ok(message_id)
    }
}
