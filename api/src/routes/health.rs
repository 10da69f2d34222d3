//! Health check endpoint

use actix_web::{web, HttpResponse};
use chrono::Utc;

use tm_core::services::mail::Mailer;

use crate::app::AppState;
use crate::dto::token::HealthResponse;

/// Handler for GET /health
///
/// Liveness probe. The token count is informational only; it reflects
/// the in-memory store of this process.
pub async fn health<M: Mailer + 'static>(state: web::Data<AppState<M>>) -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: "ok".to_string(),
        timestamp: Utc::now(),
        tokens_in_memory: state.verification.token_count().await,
    })
}
