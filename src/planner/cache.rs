//! Process-wide plan cache (spec §4.7 step 1 and step 9: "identical
//! messages within the TTL window reuse the cached plan"). Grounded on the
//! teacher's shared-state shape in `state.rs` — a `HashMap` behind an
//! `Arc<RwLock<..>>` that every request handler clones a reference to,
//! rather than the per-request `ComponentRegistry`, which is deliberately
//! not shared.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use sha2::{Digest, Sha256};
use tokio::sync::RwLock;

use super::PlannedComponent;

struct CacheEntry {
    plan: Vec<PlannedComponent>,
    expires_at: Instant,
}

#[derive(Clone, Default)]
pub struct PlanCache {
    entries: Arc<RwLock<HashMap<String, CacheEntry>>>,
}

impl PlanCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached plan for `key` if present and not yet expired.
    /// Lazily evicts the entry if it has expired (no background sweeper).
    pub async fn get(&self, key: &str) -> Option<Vec<PlannedComponent>> {
        {
            let entries = self.entries.read().await;
            match entries.get(key) {
                Some(entry) if entry.expires_at > Instant::now() => return Some(entry.plan.clone()),
                Some(_) => {}
                None => return None,
            }
        }
        self.entries.write().await.remove(key);
        None
    }

    pub async fn insert(&self, key: String, plan: Vec<PlannedComponent>, ttl: Duration) {
        let entry = CacheEntry {
            plan,
            expires_at: Instant::now() + ttl,
        };
        self.entries.write().await.insert(key, entry);
    }

    #[cfg(test)]
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }
}

/// Normalizes `message` (trim, lowercase) and hashes it so cache keys don't
/// depend on the exact byte representation a client happened to send.
pub fn cache_key(message: &str) -> String {
    let normalized = message.trim().to_lowercase();
    let mut hasher = Sha256::new();
    hasher.update(normalized.as_bytes());
    hex::encode(hasher.finalize())
}
