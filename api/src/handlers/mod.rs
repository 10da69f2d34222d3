//! Request-boundary helpers

pub mod error;

use actix_web::HttpResponse;
use tm_shared::types::ErrorBody;

/// Default handler for unknown routes
pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorBody::new("not_found"))
}
