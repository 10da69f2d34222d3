//! Unit tests for the verification token lifecycle

use std::sync::Arc;
use std::time::Duration as StdDuration;

use crate::domain::entities::verification_token::TOKEN_BYTES;
use crate::errors::DomainError;
use crate::services::verification::{
    VerificationRequest, VerificationService, VerificationServiceConfig, WelcomePurchaseRequest,
};
use crate::store::TokenStore;

use super::mocks::{MockMailer, MockTemplates, MockTokenStore};

fn config(expose_token: bool) -> VerificationServiceConfig {
    VerificationServiceConfig {
        token_ttl_hours: 24,
        from: "TrackMail <no-reply@trackmail.app>".to_string(),
        frontend_base_url: "https://app.trackmail.app".to_string(),
        expose_token,
    }
}

fn service(
    mailer: Arc<MockMailer>,
    store: Arc<MockTokenStore>,
    config: VerificationServiceConfig,
) -> VerificationService<MockMailer, MockTemplates, MockTokenStore> {
    VerificationService::new(mailer, Arc::new(MockTemplates), store, config)
}

fn verification_request(callback_url: Option<&str>) -> VerificationRequest {
    VerificationRequest {
        email: "a@b.com".to_string(),
        user_id: Some("user-1".to_string()),
        callback_url: callback_url.map(String::from),
    }
}

#[tokio::test]
async fn test_send_verification_mints_token() {
    let mailer = Arc::new(MockMailer::new(false));
    let store = Arc::new(MockTokenStore::new());
    let service = service(mailer.clone(), store.clone(), config(true));

    let outcome = service
        .send_verification(verification_request(None))
        .await
        .unwrap();

    let token = outcome.token.expect("token should be exposed");
    assert_eq!(token.len(), TOKEN_BYTES * 2);
    assert_eq!(
        outcome.verification_url,
        format!("https://app.trackmail.app/verify?token={}", token)
    );
    assert!(outcome.message_id.starts_with("mock-msg-"));

    // Exactly one store entry, keyed by the minted token
    assert_eq!(store.size().await, 1);
    let record = store.get(&token).await.unwrap();
    assert_eq!(record.email, "a@b.com");
    assert!(!record.verified);

    // The email carries the verification link
    let message = mailer.last_message().unwrap();
    assert_eq!(message.to, "a@b.com");
    assert!(message.text.contains(&outcome.verification_url));
}

#[tokio::test]
async fn test_send_verification_missing_email() {
    let service = service(
        Arc::new(MockMailer::new(false)),
        Arc::new(MockTokenStore::new()),
        config(true),
    );

    let result = service
        .send_verification(VerificationRequest {
            email: "  ".to_string(),
            user_id: None,
            callback_url: None,
        })
        .await;

    match result.unwrap_err() {
        DomainError::Validation { field } => assert_eq!(field, "email"),
        other => panic!("Expected validation error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_action_link_passes_through_untouched() {
    let mailer = Arc::new(MockMailer::new(false));
    let store = Arc::new(MockTokenStore::new());
    let service = service(mailer.clone(), store.clone(), config(true));

    let link = "https://idp.firebaseapp.com/__/auth/action?mode=verifyEmail&oobCode=abc";
    let outcome = service
        .send_verification(verification_request(Some(link)))
        .await
        .unwrap();

    assert_eq!(outcome.verification_url, link);
    assert!(outcome.token.is_none());
    // Pass-through bypasses the store entirely
    assert_eq!(store.size().await, 0);
    assert_eq!(mailer.sent_count(), 1);

    // Verifying by the embedded code must fail: no token was minted from it
    assert!(matches!(
        service.consume("abc").await.unwrap_err(),
        DomainError::TokenNotFound
    ));
}

#[tokio::test]
async fn test_plain_callback_gets_token_appended() {
    let store = Arc::new(MockTokenStore::new());
    let service = service(Arc::new(MockMailer::new(false)), store.clone(), config(true));

    let outcome = service
        .send_verification(verification_request(Some("https://partner.example.com/confirm")))
        .await
        .unwrap();

    let token = outcome.token.unwrap();
    assert_eq!(
        outcome.verification_url,
        format!("https://partner.example.com/confirm?token={}", token)
    );
    assert_eq!(store.size().await, 1);
}

#[tokio::test]
async fn test_delivery_failure_keeps_minted_token() {
    let store = Arc::new(MockTokenStore::new());
    let service = service(Arc::new(MockMailer::new(true)), store.clone(), config(true));

    let result = service.send_verification(verification_request(None)).await;

    match result.unwrap_err() {
        DomainError::Delivery { message } => assert!(message.contains("Mail provider error")),
        other => panic!("Expected delivery error, got {:?}", other),
    }

    // The record stays; clients retry by re-requesting (a new token each time)
    assert_eq!(store.size().await, 1);
}

#[tokio::test]
async fn test_consume_is_single_use() {
    let service = service(
        Arc::new(MockMailer::new(false)),
        Arc::new(MockTokenStore::new()),
        config(true),
    );

    let outcome = service
        .send_verification(verification_request(None))
        .await
        .unwrap();
    let token = outcome.token.unwrap();

    let consumed = service.consume(&token).await.unwrap();
    assert_eq!(consumed.email, "a@b.com");
    assert_eq!(consumed.user_id, Some("user-1".to_string()));

    assert!(matches!(
        service.consume(&token).await.unwrap_err(),
        DomainError::AlreadyVerified
    ));
}

#[tokio::test]
async fn test_consume_unknown_token() {
    let service = service(
        Arc::new(MockMailer::new(false)),
        Arc::new(MockTokenStore::new()),
        config(true),
    );

    assert!(matches!(
        service.consume("deadbeef").await.unwrap_err(),
        DomainError::TokenNotFound
    ));
}

#[tokio::test]
async fn test_expired_token_is_lazily_evicted() {
    let store = Arc::new(MockTokenStore::new());
    let mut zero_ttl = config(true);
    zero_ttl.token_ttl_hours = 0;
    let service = service(Arc::new(MockMailer::new(false)), store.clone(), zero_ttl);

    let outcome = service
        .send_verification(verification_request(None))
        .await
        .unwrap();
    let token = outcome.token.unwrap();

    tokio::time::sleep(StdDuration::from_millis(10)).await;

    assert!(matches!(
        service.consume(&token).await.unwrap_err(),
        DomainError::TokenExpired
    ));

    // Eviction took effect: every later read sees nothing
    assert_eq!(store.size().await, 0);
    assert!(matches!(
        service.inspect(&token).await.unwrap_err(),
        DomainError::TokenNotFound
    ));
    assert!(matches!(
        service.consume(&token).await.unwrap_err(),
        DomainError::TokenNotFound
    ));
}

#[tokio::test]
async fn test_inspect_never_mutates() {
    let store = Arc::new(MockTokenStore::new());
    let service = service(Arc::new(MockMailer::new(false)), store.clone(), config(true));

    let outcome = service
        .send_verification(verification_request(None))
        .await
        .unwrap();
    let token = outcome.token.unwrap();

    for _ in 0..3 {
        let status = service.inspect(&token).await.unwrap();
        assert_eq!(status.email, "a@b.com");
        assert!(!status.verified);
        assert!(!status.expired);
    }

    // First consume still succeeds as if inspect had never been called
    assert!(service.consume(&token).await.is_ok());

    let status = service.inspect(&token).await.unwrap();
    assert!(status.verified);
}

#[tokio::test]
async fn test_inspect_reports_expiry_without_evicting() {
    let store = Arc::new(MockTokenStore::new());
    let mut zero_ttl = config(true);
    zero_ttl.token_ttl_hours = 0;
    let service = service(Arc::new(MockMailer::new(false)), store.clone(), zero_ttl);

    let token = service
        .send_verification(verification_request(None))
        .await
        .unwrap()
        .token
        .unwrap();

    tokio::time::sleep(StdDuration::from_millis(10)).await;

    let status = service.inspect(&token).await.unwrap();
    assert!(status.expired);
    // Reported, not enforced: the record is still there
    assert_eq!(store.size().await, 1);
}

#[tokio::test]
async fn test_revoke() {
    let service = service(
        Arc::new(MockMailer::new(false)),
        Arc::new(MockTokenStore::new()),
        config(true),
    );

    assert!(!service.revoke("unknown").await);

    let token = service
        .send_verification(verification_request(None))
        .await
        .unwrap()
        .token
        .unwrap();

    assert!(service.revoke(&token).await);
    assert!(matches!(
        service.inspect(&token).await.unwrap_err(),
        DomainError::TokenNotFound
    ));
    assert!(matches!(
        service.consume(&token).await.unwrap_err(),
        DomainError::TokenNotFound
    ));
}

#[tokio::test]
async fn test_token_hidden_when_exposure_disabled() {
    let store = Arc::new(MockTokenStore::new());
    let service = service(Arc::new(MockMailer::new(false)), store.clone(), config(false));

    let outcome = service
        .send_verification(verification_request(None))
        .await
        .unwrap();

    assert!(outcome.token.is_none());
    // The link itself still carries the token; only the response omits it
    assert!(outcome.verification_url.contains("token="));
    assert_eq!(store.size().await, 1);
}

#[tokio::test]
async fn test_welcome_purchase_requires_first_name() {
    let service = service(
        Arc::new(MockMailer::new(false)),
        Arc::new(MockTokenStore::new()),
        config(true),
    );

    let result = service
        .send_welcome_purchase(WelcomePurchaseRequest {
            email: "x@y.com".to_string(),
            user_id: None,
            first_name: "".to_string(),
            plan_name: Some("Fleet".to_string()),
            plan_price: Some(29.0),
            vehicle_name: None,
            callback_url: None,
        })
        .await;

    match result.unwrap_err() {
        DomainError::Validation { field } => assert_eq!(field, "firstName"),
        other => panic!("Expected validation error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_welcome_purchase_uses_token_logic() {
    let mailer = Arc::new(MockMailer::new(false));
    let store = Arc::new(MockTokenStore::new());
    let service = service(mailer.clone(), store.clone(), config(true));

    let outcome = service
        .send_welcome_purchase(WelcomePurchaseRequest {
            email: "x@y.com".to_string(),
            user_id: Some("user-9".to_string()),
            first_name: "Ada".to_string(),
            plan_name: Some("Fleet".to_string()),
            plan_price: Some(29.0),
            vehicle_name: Some("Van 3".to_string()),
            callback_url: None,
        })
        .await
        .unwrap();

    let token = outcome.token.expect("welcome flow mints a token");
    assert_eq!(store.size().await, 1);

    let message = mailer.last_message().unwrap();
    assert_eq!(message.to, "x@y.com");
    assert_eq!(message.subject, "Welcome, Ada");

    // The minted token resolves like any verification token
    let consumed = service.consume(&token).await.unwrap();
    assert_eq!(consumed.email, "x@y.com");
    assert_eq!(consumed.user_id, Some("user-9".to_string()));
}

#[tokio::test]
async fn test_end_to_end_lifecycle() {
    let service = service(
        Arc::new(MockMailer::new(false)),
        Arc::new(MockTokenStore::new()),
        config(true),
    );

    // create -> check -> consume -> consume again
    let outcome = service
        .send_verification(VerificationRequest {
            email: "a@b.com".to_string(),
            user_id: None,
            callback_url: None,
        })
        .await
        .unwrap();
    let token = outcome.token.unwrap();
    assert!(outcome.verification_url.ends_with(&format!("/verify?token={}", token)));

    let status = service.inspect(&token).await.unwrap();
    assert_eq!(status.email, "a@b.com");
    assert!(!status.verified);
    assert!(!status.expired);

    let consumed = service.consume(&token).await.unwrap();
    assert_eq!(consumed.email, "a@b.com");

    assert!(matches!(
        service.consume(&token).await.unwrap_err(),
        DomainError::AlreadyVerified
    ));
}
