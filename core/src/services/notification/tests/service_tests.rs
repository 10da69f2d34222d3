//! Unit tests for the token-free email flows

use std::sync::Arc;

use crate::errors::DomainError;
use crate::services::notification::{
    DeviceAddedRequest, InvoiceRequest, NotificationService, TransferNotificationRequest,
};
use crate::services::verification::tests::mocks::{MockMailer, MockTemplates};

fn service(mailer: Arc<MockMailer>) -> NotificationService<MockMailer, MockTemplates> {
    NotificationService::new(
        mailer,
        Arc::new(MockTemplates),
        "TrackMail <no-reply@trackmail.app>".to_string(),
    )
}

fn transfer_request() -> TransferNotificationRequest {
    TransferNotificationRequest {
        email: "new-owner@example.com".to_string(),
        transfer_id: "tr-42".to_string(),
        imei: "356938035643809".to_string(),
        vehicle_name: "Van 3".to_string(),
        registration_number: Some("AB12 CDE".to_string()),
        from_user_name: Some("Ada".to_string()),
    }
}

#[tokio::test]
async fn test_transfer_notification_success() {
    let mailer = Arc::new(MockMailer::new(false));
    let service = service(mailer.clone());

    let message_id = service
        .send_transfer_notification(transfer_request())
        .await
        .unwrap();

    assert!(message_id.starts_with("mock-msg-"));
    let message = mailer.last_message().unwrap();
    assert_eq!(message.to, "new-owner@example.com");
    assert!(message.text.contains("356938035643809"));
}

#[tokio::test]
async fn test_transfer_notification_missing_imei() {
    let service = service(Arc::new(MockMailer::new(false)));

    let mut request = transfer_request();
    request.imei = String::new();

    match service.send_transfer_notification(request).await.unwrap_err() {
        DomainError::Validation { field } => assert_eq!(field, "trackerDetails.imei"),
        other => panic!("Expected validation error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_device_added_success() {
    let mailer = Arc::new(MockMailer::new(false));
    let service = service(mailer.clone());

    service
        .send_device_added(DeviceAddedRequest {
            email: "owner@example.com".to_string(),
            first_name: "Ada".to_string(),
            vehicle_name: "Van 3".to_string(),
            plan_name: "Fleet".to_string(),
            plan_price: Some(29.0),
        })
        .await
        .unwrap();

    let message = mailer.last_message().unwrap();
    assert_eq!(message.subject, "Device added: Van 3");
}

#[tokio::test]
async fn test_device_added_missing_plan() {
    let service = service(Arc::new(MockMailer::new(false)));

    let result = service
        .send_device_added(DeviceAddedRequest {
            email: "owner@example.com".to_string(),
            first_name: "Ada".to_string(),
            vehicle_name: "Van 3".to_string(),
            plan_name: "".to_string(),
            plan_price: None,
        })
        .await;

    match result.unwrap_err() {
        DomainError::Validation { field } => assert_eq!(field, "planName"),
        other => panic!("Expected validation error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_invoice_success() {
    let mailer = Arc::new(MockMailer::new(false));
    let service = service(mailer.clone());

    service
        .send_invoice(InvoiceRequest {
            email: "owner@example.com".to_string(),
            invoice_id: "inv-2024-001".to_string(),
            amount: 29.99,
            invoice_url: "https://billing.example.com/inv-2024-001".to_string(),
            invoice_pdf: None,
        })
        .await
        .unwrap();

    let message = mailer.last_message().unwrap();
    assert_eq!(message.subject, "Invoice inv-2024-001");
    assert!(message.text.contains("29.99"));
}

#[tokio::test]
async fn test_delivery_failure_maps_to_delivery_error() {
    let service = service(Arc::new(MockMailer::new(true)));

    let result = service.send_transfer_notification(transfer_request()).await;

    match result.unwrap_err() {
        DomainError::Delivery { message } => assert!(message.contains("Mail provider error")),
        other => panic!("Expected delivery error, got {:?}", other),
    }
}
