//! In-memory token store
//!
//! Process-wide map with no persistence: state is lost on restart, which is
//! an accepted limitation for 24-hour security tokens. A single coarse lock
//! serializes access; per-token locking is unnecessary at expected load.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use tm_core::domain::entities::verification_token::VerificationToken;
use tm_core::store::TokenStore;

/// Production token store backed by a `HashMap` behind an `RwLock`
pub struct MemoryTokenStore {
    records: RwLock<HashMap<String, VerificationToken>>,
}

impl MemoryTokenStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for MemoryTokenStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TokenStore for MemoryTokenStore {
    async fn put(&self, record: VerificationToken) {
        self.records
            .write()
            .await
            .insert(record.token.clone(), record);
    }

    async fn get(&self, token: &str) -> Option<VerificationToken> {
        self.records.read().await.get(token).cloned()
    }

    async fn delete(&self, token: &str) -> bool {
        self.records.write().await.remove(token).is_some()
    }

    async fn size(&self) -> usize {
        self.records.read().await.len()
    }
}
