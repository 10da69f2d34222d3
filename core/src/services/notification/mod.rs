//! Notification service module for token-free transactional emails
//!
//! Covers the flows that carry no verification capability: tracker-transfer
//! notifications, device-added confirmations and invoices. Each flow
//! validates its required fields, renders through the template set and
//! hands the message to the mail provider.

mod service;
mod types;

#[cfg(test)]
mod tests;

pub use service::NotificationService;
pub use types::{DeviceAddedRequest, InvoiceRequest, TransferNotificationRequest};
