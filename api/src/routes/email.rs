//! Handlers for the email-sending endpoints

use actix_web::{web, HttpResponse};
use validator::Validate;

use tm_core::services::mail::Mailer;
use tm_core::services::notification as core_notification;
use tm_core::services::verification as core_verification;

use crate::app::AppState;
use crate::dto::email::{
    DeviceAddedRequest, InvoiceRequest, SendVerificationRequest, SendVerificationResponse,
    SentResponse, TransferNotificationRequest, WelcomePurchaseRequest, WelcomePurchaseResponse,
};
use crate::handlers::error::{domain_error_response, validation_error_response};

/// Handler for POST /verification
///
/// Starts an email verification flow: either relays a caller-supplied
/// action link or mints a token and builds a local verification URL, then
/// sends the verification email.
///
/// # Responses
/// - 200 `{success, verificationUrl, token?}`
/// - 400 missing email
/// - 500 mail delivery failure
pub async fn send_verification<M: Mailer + 'static>(
    state: web::Data<AppState<M>>,
    request: web::Json<SendVerificationRequest>,
) -> HttpResponse {
    if let Err(errors) = request.validate() {
        return validation_error_response(&errors);
    }

    let request = request.into_inner();
    let result = state
        .verification
        .send_verification(core_verification::VerificationRequest {
            email: request.email,
            user_id: request.user_id,
            callback_url: request.callback_url,
        })
        .await;

    match result {
        Ok(outcome) => HttpResponse::Ok().json(SendVerificationResponse {
            success: true,
            verification_url: outcome.verification_url,
            token: outcome.token,
        }),
        Err(error) => domain_error_response(error),
    }
}

/// Handler for POST /welcome-purchase
///
/// Same token/URL decision procedure as `/verification`, different email
/// content, and additionally requires a first name.
pub async fn welcome_purchase<M: Mailer + 'static>(
    state: web::Data<AppState<M>>,
    request: web::Json<WelcomePurchaseRequest>,
) -> HttpResponse {
    if let Err(errors) = request.validate() {
        return validation_error_response(&errors);
    }

    let request = request.into_inner();
    let result = state
        .verification
        .send_welcome_purchase(core_verification::WelcomePurchaseRequest {
            email: request.email,
            user_id: request.user_id,
            first_name: request.first_name,
            plan_name: request.plan_name,
            plan_price: request.plan_price,
            vehicle_name: request.vehicle_name,
            callback_url: request.callback_url,
        })
        .await;

    match result {
        Ok(outcome) => HttpResponse::Ok().json(WelcomePurchaseResponse {
            success: true,
            token: outcome.token,
        }),
        Err(error) => domain_error_response(error),
    }
}

/// Handler for POST /transfer-notification
pub async fn transfer_notification<M: Mailer + 'static>(
    state: web::Data<AppState<M>>,
    request: web::Json<TransferNotificationRequest>,
) -> HttpResponse {
    if let Err(errors) = request.validate() {
        return validation_error_response(&errors);
    }

    let request = request.into_inner();
    let result = state
        .notification
        .send_transfer_notification(core_notification::TransferNotificationRequest {
            email: request.email,
            transfer_id: request.transfer_id,
            imei: request.tracker_details.imei,
            vehicle_name: request.tracker_details.vehicle_name,
            registration_number: request.tracker_details.registration_number,
            from_user_name: request.from_user_name,
        })
        .await;

    match result {
        Ok(_) => HttpResponse::Ok().json(SentResponse { success: true }),
        Err(error) => domain_error_response(error),
    }
}

/// Handler for POST /device-added
pub async fn device_added<M: Mailer + 'static>(
    state: web::Data<AppState<M>>,
    request: web::Json<DeviceAddedRequest>,
) -> HttpResponse {
    if let Err(errors) = request.validate() {
        return validation_error_response(&errors);
    }

    let request = request.into_inner();
    let result = state
        .notification
        .send_device_added(core_notification::DeviceAddedRequest {
            email: request.email,
            first_name: request.first_name,
            vehicle_name: request.vehicle_name,
            plan_name: request.plan_name,
            plan_price: request.plan_price,
        })
        .await;

    match result {
        Ok(_) => HttpResponse::Ok().json(SentResponse { success: true }),
        Err(error) => domain_error_response(error),
    }
}

/// Handler for POST /invoice
pub async fn invoice<M: Mailer + 'static>(
    state: web::Data<AppState<M>>,
    request: web::Json<InvoiceRequest>,
) -> HttpResponse {
    if let Err(errors) = request.validate() {
        return validation_error_response(&errors);
    }

    let request = request.into_inner();
    let result = state
        .notification
        .send_invoice(core_notification::InvoiceRequest {
            email: request.email,
            invoice_id: request.invoice_id,
            amount: request.amount,
            invoice_url: request.invoice_url,
            invoice_pdf: request.invoice_pdf,
        })
        .await;

    match result {
        Ok(_) => HttpResponse::Ok().json(SentResponse { success: true }),
        Err(error) => domain_error_response(error),
    }
}
