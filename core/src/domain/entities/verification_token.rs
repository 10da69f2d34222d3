//! Verification token entity for email verification flows.

use chrono::{DateTime, Duration, Utc};
use rand::{rngs::OsRng, RngCore};
use serde::{Deserialize, Serialize};

/// Number of random bytes in a token (hex-encoded to twice this length)
pub const TOKEN_BYTES: usize = 32;

/// Default validity window for verification tokens (24 hours)
pub const DEFAULT_TTL_HOURS: i64 = 24;

/// A single email-verification request
///
/// Created when a token is minted and mutated exactly once: the `verified`
/// flag only ever transitions from `false` to `true`. An expired record is
/// logically dead even while it still sits in the store; expiry is checked
/// at read time by the verification service, never by a background sweep.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationToken {
    /// Opaque, unguessable identifier; primary key in the token store
    pub token: String,

    /// Email address this verification request targets
    pub email: String,

    /// Opaque correlation id supplied by the caller, passed through untouched
    pub user_id: Option<String>,

    /// Timestamp when the token was minted
    pub created_at: DateTime<Utc>,

    /// Timestamp when the token expires
    pub expires_at: DateTime<Utc>,

    /// Whether the token has been consumed
    pub verified: bool,
}

impl VerificationToken {
    /// Creates a new verification token with the default 24-hour TTL
    ///
    /// # Arguments
    ///
    /// * `email` - The address the verification email goes to
    /// * `user_id` - Optional caller-supplied correlation id
    pub fn new(email: String, user_id: Option<String>) -> Self {
        Self::new_with_ttl(email, user_id, DEFAULT_TTL_HOURS)
    }

    /// Creates a new verification token with a custom TTL in hours
    pub fn new_with_ttl(email: String, user_id: Option<String>, ttl_hours: i64) -> Self {
        let now = Utc::now();

        Self {
            token: Self::generate_token(),
            email,
            user_id,
            created_at: now,
            expires_at: now + Duration::hours(ttl_hours),
            verified: false,
        }
    }

    /// Generates a collision-resistant token from 32 CSPRNG bytes
    fn generate_token() -> String {
        let mut bytes = [0u8; TOKEN_BYTES];
        OsRng.fill_bytes(&mut bytes);
        hex::encode(bytes)
    }

    /// Checks whether the token has passed its expiry timestamp
    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }

    /// Marks the token as verified. This transition is one-way.
    pub fn mark_verified(&mut self) {
        self.verified = true;
    }

    /// Time remaining until expiration, or zero if already expired
    pub fn time_until_expiration(&self) -> Duration {
        let now = Utc::now();
        if self.expires_at > now {
            self.expires_at - now
        } else {
            Duration::zero()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::Duration as StdDuration;

    #[test]
    fn test_new_verification_token() {
        let token = VerificationToken::new("a@b.com".to_string(), Some("user-1".to_string()));

        assert_eq!(token.email, "a@b.com");
        assert_eq!(token.user_id, Some("user-1".to_string()));
        assert_eq!(token.token.len(), TOKEN_BYTES * 2);
        assert!(!token.verified);
        assert!(!token.is_expired());
        assert_eq!(token.expires_at, token.created_at + Duration::hours(24));
    }

    #[test]
    fn test_token_is_hex() {
        let token = VerificationToken::new("a@b.com".to_string(), None);
        assert!(token.token.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_token_uniqueness() {
        let tokens: Vec<String> = (0..100)
            .map(|_| VerificationToken::new("a@b.com".to_string(), None).token)
            .collect();

        let unique_count = tokens.iter().collect::<std::collections::HashSet<_>>().len();
        assert_eq!(unique_count, tokens.len());
    }

    #[test]
    fn test_custom_ttl() {
        let token = VerificationToken::new_with_ttl("a@b.com".to_string(), None, 48);
        assert_eq!(token.expires_at, token.created_at + Duration::hours(48));
    }

    #[test]
    fn test_is_expired() {
        let token = VerificationToken::new_with_ttl("a@b.com".to_string(), None, 0);

        thread::sleep(StdDuration::from_millis(10));

        assert!(token.is_expired());
        assert_eq!(token.time_until_expiration(), Duration::zero());
    }

    #[test]
    fn test_mark_verified_is_monotonic() {
        let mut token = VerificationToken::new("a@b.com".to_string(), None);
        assert!(!token.verified);

        token.mark_verified();
        assert!(token.verified);

        token.mark_verified();
        assert!(token.verified);
    }

    #[test]
    fn test_time_until_expiration() {
        let token = VerificationToken::new("a@b.com".to_string(), None);

        let remaining = token.time_until_expiration();
        assert!(remaining <= Duration::hours(DEFAULT_TTL_HOURS));
        assert!(remaining > Duration::hours(DEFAULT_TTL_HOURS - 1));
    }

    #[test]
    fn test_serialization() {
        let token = VerificationToken::new("a@b.com".to_string(), Some("user-1".to_string()));

        let json = serde_json::to_string(&token).unwrap();
        let deserialized: VerificationToken = serde_json::from_str(&json).unwrap();

        assert_eq!(token, deserialized);
    }
}
