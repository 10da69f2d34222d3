//! DTOs for the email-sending endpoints
//!
//! Field names follow the JSON casing of the public API (camelCase).
//! `validator` checks presence of required fields; everything beyond
//! presence is left to the services.

use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SendVerificationRequest {
    #[validate(length(min = 1, message = "email is required"))]
    pub email: String,
    pub user_id: Option<String>,
    pub callback_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct WelcomePurchaseRequest {
    #[validate(length(min = 1, message = "email is required"))]
    pub email: String,
    pub user_id: Option<String>,
    #[validate(length(min = 1, message = "firstName is required"))]
    pub first_name: String,
    pub plan_name: Option<String>,
    pub plan_price: Option<f64>,
    pub vehicle_name: Option<String>,
    pub callback_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TrackerDetails {
    #[validate(length(min = 1, message = "trackerDetails.imei is required"))]
    pub imei: String,
    #[validate(length(min = 1, message = "trackerDetails.vehicleName is required"))]
    pub vehicle_name: String,
    pub registration_number: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TransferNotificationRequest {
    #[validate(length(min = 1, message = "email is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "transferId is required"))]
    pub transfer_id: String,
    #[validate(nested)]
    pub tracker_details: TrackerDetails,
    pub from_user_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct DeviceAddedRequest {
    #[validate(length(min = 1, message = "email is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "firstName is required"))]
    pub first_name: String,
    #[validate(length(min = 1, message = "vehicleName is required"))]
    pub vehicle_name: String,
    #[validate(length(min = 1, message = "planName is required"))]
    pub plan_name: String,
    pub plan_price: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceRequest {
    #[validate(length(min = 1, message = "email is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "invoiceId is required"))]
    pub invoice_id: String,
    pub amount: f64,
    #[validate(length(min = 1, message = "invoiceUrl is required"))]
    pub invoice_url: String,
    pub invoice_pdf: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendVerificationResponse {
    pub success: bool,
    pub verification_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WelcomePurchaseResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

/// Plain acknowledgement for the token-free email endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentResponse {
    pub success: bool,
}
