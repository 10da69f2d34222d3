//! Types for notification service requests

/// Request to notify a user of an incoming tracker transfer
#[derive(Debug, Clone)]
pub struct TransferNotificationRequest {
    pub email: String,
    pub transfer_id: String,
    pub imei: String,
    pub vehicle_name: String,
    pub registration_number: Option<String>,
    pub from_user_name: Option<String>,
}

/// Request to confirm a newly added tracker device
#[derive(Debug, Clone)]
pub struct DeviceAddedRequest {
    pub email: String,
    pub first_name: String,
    pub vehicle_name: String,
    pub plan_name: String,
    pub plan_price: Option<f64>,
}

/// Request to send an invoice email
#[derive(Debug, Clone)]
pub struct InvoiceRequest {
    pub email: String,
    pub invoice_id: String,
    pub amount: f64,
    pub invoice_url: String,
    pub invoice_pdf: Option<String>,
}
