//! Application state and route wiring

use std::sync::Arc;

use actix_web::web;

use tm_core::services::mail::Mailer;
use tm_core::services::notification::NotificationService;
use tm_core::services::verification::{VerificationService, VerificationServiceConfig};
use tm_infra::mail::TrackMailTemplates;
use tm_infra::store::MemoryTokenStore;
use tm_shared::config::EmailConfig;

use crate::routes;

/// The verification service as wired in this binary
pub type AppVerificationService<M> = VerificationService<M, TrackMailTemplates, MemoryTokenStore>;

/// The notification service as wired in this binary
pub type AppNotificationService<M> = NotificationService<M, TrackMailTemplates>;

/// Application state shared across request handlers
pub struct AppState<M: Mailer> {
    pub verification: Arc<AppVerificationService<M>>,
    pub notification: Arc<AppNotificationService<M>>,
}

/// Build the application state from configuration
///
/// The token store is created here and lives for the process lifetime;
/// there is no persistence across restarts.
pub fn build_state<M: Mailer>(mailer: Arc<M>, email_config: &EmailConfig) -> AppState<M> {
    let templates = Arc::new(TrackMailTemplates);
    let store = Arc::new(MemoryTokenStore::new());

    let verification_config = VerificationServiceConfig {
        from: email_config.sender(),
        frontend_base_url: email_config.frontend_base_url.clone(),
        expose_token: email_config.expose_token,
        ..VerificationServiceConfig::default()
    };

    AppState {
        verification: Arc::new(VerificationService::new(
            mailer.clone(),
            templates.clone(),
            store,
            verification_config,
        )),
        notification: Arc::new(NotificationService::new(
            mailer,
            templates,
            email_config.sender(),
        )),
    }
}

/// Register all routes
pub fn configure<M: Mailer + 'static>(cfg: &mut web::ServiceConfig) {
    cfg
        // Email flows
        .route("/verification", web::post().to(routes::email::send_verification::<M>))
        .route("/welcome-purchase", web::post().to(routes::email::welcome_purchase::<M>))
        .route(
            "/transfer-notification",
            web::post().to(routes::email::transfer_notification::<M>),
        )
        .route("/device-added", web::post().to(routes::email::device_added::<M>))
        .route("/invoice", web::post().to(routes::email::invoice::<M>))
        // Token lifecycle
        .route("/verify/{token}", web::get().to(routes::token::verify_by_path::<M>))
        .route("/verify", web::post().to(routes::token::verify_by_body::<M>))
        .route("/check/{token}", web::get().to(routes::token::check::<M>))
        .route("/token/{token}", web::delete().to(routes::token::revoke::<M>))
        // Diagnostics
        .route("/health", web::get().to(routes::health::health::<M>));
}
