//! Main verification service implementation

use std::sync::Arc;

use crate::domain::entities::verification_token::VerificationToken;
use crate::errors::{DomainError, DomainResult};
use crate::services::mail::{EmailMessage, Mailer, TemplateSet, VerificationEmail, WelcomePurchaseEmail};
use crate::services::require_field;
use crate::store::TokenStore;

use super::action_link;
use super::config::VerificationServiceConfig;
use super::types::{
    ConsumedToken, TokenStatus, VerificationOutcome, VerificationRequest, WelcomePurchaseRequest,
};

/// Verification service handling the token lifecycle and the two
/// token-bearing email flows (verification, welcome-after-purchase)
pub struct VerificationService<M: Mailer, T: TemplateSet, S: TokenStore> {
    /// Mail delivery provider
    mailer: Arc<M>,
    /// Template renderer for message bodies
    templates: Arc<T>,
    /// Authoritative token storage
    store: Arc<S>,
    /// Service configuration
    config: VerificationServiceConfig,
}

impl<M: Mailer, T: TemplateSet, S: TokenStore> VerificationService<M, T, S> {
    /// Create a new verification service
    ///
    /// # Arguments
    ///
    /// * `mailer` - Mail delivery implementation
    /// * `templates` - Template renderer implementation
    /// * `store` - Token store implementation
    /// * `config` - Service configuration
    pub fn new(
        mailer: Arc<M>,
        templates: Arc<T>,
        store: Arc<S>,
        config: VerificationServiceConfig,
    ) -> Self {
        Self {
            mailer,
            templates,
            store,
            config,
        }
    }

    /// Start an email verification flow
    ///
    /// If the caller supplied a recognized action link, it is relayed into
    /// the email unchanged and no token is minted. Otherwise a fresh token
    /// is stored and a local verification URL built from it. The email is
    /// then rendered and handed to the mail provider.
    ///
    /// A provider failure surfaces as [`DomainError::Delivery`]; any token
    /// minted before the failure stays stored, so the caller may simply
    /// retry (each retry mints a new token).
    pub async fn send_verification(
        &self,
        request: VerificationRequest,
    ) -> DomainResult<VerificationOutcome> {
        require_field("email", &request.email)?;

        let (verification_url, token) = self
            .resolve_verification_url(&request.email, request.user_id, request.callback_url.as_deref())
            .await;

        let rendered = self.templates.verification(&VerificationEmail {
            verification_url: verification_url.clone(),
        });

        let message_id = self.deliver(&request.email, rendered).await?;

        tracing::info!(
            email = %request.email,
            minted = token.is_some(),
            message_id = %message_id,
            "Verification email sent"
        );

        Ok(VerificationOutcome {
            verification_url,
            token: self.exposed(token),
            message_id,
        })
    }

    /// Send the welcome-after-purchase email
    ///
    /// Reuses the verification decision procedure for the embedded link;
    /// only the required fields and the rendered content differ.
    pub async fn send_welcome_purchase(
        &self,
        request: WelcomePurchaseRequest,
    ) -> DomainResult<VerificationOutcome> {
        require_field("email", &request.email)?;
        require_field("firstName", &request.first_name)?;

        let (verification_url, token) = self
            .resolve_verification_url(&request.email, request.user_id, request.callback_url.as_deref())
            .await;

        let rendered = self.templates.welcome_purchase(&WelcomePurchaseEmail {
            first_name: request.first_name,
            plan_name: request.plan_name,
            plan_price: request.plan_price,
            vehicle_name: request.vehicle_name,
            verification_url: Some(verification_url.clone()),
        });

        let message_id = self.deliver(&request.email, rendered).await?;

        tracing::info!(
            email = %request.email,
            minted = token.is_some(),
            message_id = %message_id,
            "Welcome email sent"
        );

        Ok(VerificationOutcome {
            verification_url,
            token: self.exposed(token),
            message_id,
        })
    }

    /// Consume a token, marking its record verified
    ///
    /// Exactly one consumption succeeds per token. An expired record is
    /// deleted on detection (lazy eviction), after which the token reads as
    /// not found.
    pub async fn consume(&self, token: &str) -> DomainResult<ConsumedToken> {
        let mut record = self
            .store
            .get(token)
            .await
            .ok_or(DomainError::TokenNotFound)?;

        if record.is_expired() {
            self.store.delete(token).await;
            tracing::info!(email = %record.email, "Evicted expired verification token");
            return Err(DomainError::TokenExpired);
        }

        if record.verified {
            return Err(DomainError::AlreadyVerified);
        }

        record.mark_verified();
        let consumed = ConsumedToken {
            email: record.email.clone(),
            user_id: record.user_id.clone(),
        };
        self.store.put(record).await;

        tracing::info!(email = %consumed.email, "Verification token consumed");

        Ok(consumed)
    }

    /// Report a token's status without side effects
    ///
    /// Unlike [`consume`](Self::consume), expiry is reported here, not
    /// enforced: the record is neither evicted nor mutated, so callers may
    /// poll freely.
    pub async fn inspect(&self, token: &str) -> DomainResult<TokenStatus> {
        let record = self
            .store
            .get(token)
            .await
            .ok_or(DomainError::TokenNotFound)?;

        let expired = record.is_expired();

        Ok(TokenStatus {
            email: record.email,
            verified: record.verified,
            expired,
            expires_at: record.expires_at,
        })
    }

    /// Remove a token unconditionally, reporting whether it existed
    ///
    /// No expiry or verified-state check; revocation is cleanup for
    /// cancelled flows.
    pub async fn revoke(&self, token: &str) -> bool {
        let existed = self.store.delete(token).await;
        if existed {
            tracing::info!("Verification token revoked");
        }
        existed
    }

    /// Number of records currently in the store (diagnostics)
    pub async fn token_count(&self) -> usize {
        self.store.size().await
    }

    /// Decide between a pass-through action link and a locally minted token
    ///
    /// The pass-through branch touches the store not at all; the fallback
    /// branch performs exactly one `put`.
    async fn resolve_verification_url(
        &self,
        email: &str,
        user_id: Option<String>,
        callback_url: Option<&str>,
    ) -> (String, Option<String>) {
        if let Some(callback) = callback_url {
            if action_link::is_action_link(callback) {
                tracing::debug!(email = %email, "Relaying provider-issued action link");
                return (callback.to_string(), None);
            }
        }

        let record = VerificationToken::new_with_ttl(
            email.to_string(),
            user_id,
            self.config.token_ttl_hours,
        );
        let token = record.token.clone();

        let verification_url = match callback_url {
            Some(callback) => format!("{}?token={}", callback, token),
            None => format!("{}/verify?token={}", self.config.frontend_base_url, token),
        };

        self.store.put(record).await;

        (verification_url, Some(token))
    }

    /// Render target plus delivery, mapping provider failures
    async fn deliver(
        &self,
        to: &str,
        rendered: crate::services::mail::RenderedEmail,
    ) -> DomainResult<String> {
        let message = EmailMessage {
            to: to.to_string(),
            from: self.config.from.clone(),
            subject: rendered.subject,
            text: rendered.text,
            html: rendered.html,
        };

        self.mailer.send(&message).await.map_err(|provider_error| {
            tracing::error!(
                provider = self.mailer.provider_name(),
                error = %provider_error,
                "Mail delivery failed"
            );
            DomainError::Delivery {
                message: provider_error,
            }
        })
    }

    /// Apply the token-exposure policy to an outcome
    fn exposed(&self, token: Option<String>) -> Option<String> {
        if self.config.expose_token {
            token
        } else {
            None
        }
    }
}
