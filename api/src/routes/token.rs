//! Handlers for the token lifecycle endpoints

use actix_web::{web, HttpResponse};
use validator::Validate;

use tm_core::services::mail::Mailer;

use crate::app::AppState;
use crate::dto::token::{
    CheckTokenResponse, RevokeTokenResponse, VerifyTokenRequest, VerifyTokenResponse,
};
use crate::handlers::error::{domain_error_response, validation_error_response};

/// Handler for GET /verify/{token}
///
/// Consumes the token: marks the underlying email verified, so a second
/// call with the same token reports it as already used.
///
/// # Responses
/// - 200 `{success, email, userId?}`
/// - 400 token already used
/// - 404 unknown token
/// - 410 expired token
pub async fn verify_by_path<M: Mailer + 'static>(
    state: web::Data<AppState<M>>,
    path: web::Path<String>,
) -> HttpResponse {
    consume_token(&state, &path.into_inner()).await
}

/// Handler for POST /verify
///
/// Body-based variant of `GET /verify/{token}` for clients that cannot
/// put the token in the path.
pub async fn verify_by_body<M: Mailer + 'static>(
    state: web::Data<AppState<M>>,
    request: web::Json<VerifyTokenRequest>,
) -> HttpResponse {
    if let Err(errors) = request.validate() {
        return validation_error_response(&errors);
    }

    consume_token(&state, &request.token).await
}

async fn consume_token<M: Mailer>(state: &AppState<M>, token: &str) -> HttpResponse {
    match state.verification.consume(token).await {
        Ok(consumed) => HttpResponse::Ok().json(VerifyTokenResponse {
            success: true,
            email: consumed.email,
            user_id: consumed.user_id,
        }),
        Err(error) => domain_error_response(error),
    }
}

/// Handler for GET /check/{token}
///
/// Read-only status report. Never mutates the record, even when it is
/// already expired.
pub async fn check<M: Mailer + 'static>(
    state: web::Data<AppState<M>>,
    path: web::Path<String>,
) -> HttpResponse {
    match state.verification.inspect(&path.into_inner()).await {
        Ok(status) => HttpResponse::Ok().json(CheckTokenResponse {
            success: true,
            email: status.email,
            verified: status.verified,
            expired: status.expired,
            expires_at: status.expires_at,
        }),
        Err(error) => domain_error_response(error),
    }
}

/// Handler for DELETE /token/{token}
///
/// Removes the record regardless of its state.
pub async fn revoke<M: Mailer + 'static>(
    state: web::Data<AppState<M>>,
    path: web::Path<String>,
) -> HttpResponse {
    if state.verification.revoke(&path.into_inner()).await {
        HttpResponse::Ok().json(RevokeTokenResponse { success: true })
    } else {
        HttpResponse::NotFound().json(tm_shared::types::ErrorBody::new("token_not_found"))
    }
}
