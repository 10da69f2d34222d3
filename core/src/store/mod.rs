//! Token store abstraction
//!
//! The store is a deliberately dumb keyed map: it performs no expiry
//! handling and no uniqueness checks. Expiry and consumption rules live in
//! the verification service, and token uniqueness is guaranteed by the
//! collision-resistant generator in the entity. Keeping the store this thin
//! means a later swap to an external keyed store (Redis, a database table)
//! touches no service code.

use async_trait::async_trait;

use crate::domain::entities::verification_token::VerificationToken;

/// Authoritative mapping from token string to verification record
///
/// Operations are atomic with respect to each other; implementations backed
/// by real parallelism must serialize access (a single coarse lock is
/// enough at expected load).
#[async_trait]
pub trait TokenStore: Send + Sync {
    /// Insert or overwrite a record, keyed by its token
    ///
    /// Overwriting an existing token silently replaces it; callers are
    /// expected to supply fresh tokens from the generator.
    async fn put(&self, record: VerificationToken);

    /// Pure lookup with no side effects and no expiry handling
    async fn get(&self, token: &str) -> Option<VerificationToken>;

    /// Remove the record if present, reporting whether it existed
    async fn delete(&self, token: &str) -> bool;

    /// Count of live entries, used for diagnostics only
    async fn size(&self) -> usize;
}
