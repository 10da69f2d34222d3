//! Translation of domain errors into HTTP responses
//!
//! Every error crosses the request boundary exactly once, here, and comes
//! out as the uniform `{success:false, error, details?}` body with the
//! status code the taxonomy prescribes. Provider detail is forwarded for
//! diagnostics; nothing else internal leaks.

use actix_web::HttpResponse;
use validator::ValidationErrors;

use tm_core::errors::DomainError;
use tm_shared::types::ErrorBody;

/// Convert a domain error into its HTTP response
pub fn domain_error_response(error: DomainError) -> HttpResponse {
    match error {
        DomainError::Validation { field } => {
            log::warn!("Validation failed: missing field {}", field);
            HttpResponse::BadRequest().json(
                ErrorBody::new("validation_error")
                    .with_details(serde_json::json!({ "field": field })),
            )
        }
        DomainError::TokenNotFound => {
            HttpResponse::NotFound().json(ErrorBody::new("token_not_found"))
        }
        DomainError::TokenExpired => HttpResponse::Gone().json(ErrorBody::new("token_expired")),
        DomainError::AlreadyVerified => {
            HttpResponse::BadRequest().json(ErrorBody::new("already_verified"))
        }
        DomainError::Delivery { message } => {
            log::error!("Mail delivery failed: {}", message);
            HttpResponse::InternalServerError().json(
                ErrorBody::new("delivery_failed")
                    .with_details(serde_json::json!({ "provider": message })),
            )
        }
    }
}

/// Convert DTO validation failures into a 400 with per-field detail
pub fn validation_error_response(errors: &ValidationErrors) -> HttpResponse {
    let fields: std::collections::HashMap<String, Vec<String>> = errors
        .field_errors()
        .iter()
        .map(|(field, errors)| {
            let messages = errors
                .iter()
                .map(|e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string())
                })
                .collect();
            (field.to_string(), messages)
        })
        .collect();

    log::warn!("Request validation failed: {:?}", fields);

    HttpResponse::BadRequest().json(
        ErrorBody::new("validation_error")
            .with_details(serde_json::json!({ "fields": fields })),
    )
}
