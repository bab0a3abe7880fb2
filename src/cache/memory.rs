// ABOUTME: In-memory cache implementation with LRU eviction and TTL support
// ABOUTME: Includes an optional background cleanup task for expired entries
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::num::NonZeroUsize;
use std::sync::Arc;
use std::time::{Duration, Instant};

use lru::LruCache;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use super::{CacheConfig, CacheProvider, ScheduleFingerprint};
use strider_core::AppResult;

/// In-memory cache entry with expiration
#[derive(Debug, Clone)]
struct CacheEntry {
    data: Vec<u8>,
    expires_at: Instant,
}

impl CacheEntry {
    fn new(data: Vec<u8>, ttl: Duration) -> Self {
        Self {
            data,
            expires_at: Instant::now() + ttl,
        }
    }

    fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

/// In-memory cache with LRU eviction and optional background cleanup.
///
/// The store is shared behind `Arc<RwLock<..>>` because the cleanup task
/// needs concurrent ownership to drop expired entries. `LruCache` keeps the
/// entry count bounded; pushing a fresh entry for an existing fingerprint
/// replaces the old one, which gives the "most recent write wins" read
/// semantics the schedule cache requires.
#[derive(Clone)]
pub struct InMemoryCache {
    store: Arc<RwLock<LruCache<String, CacheEntry>>>,
}

impl InMemoryCache {
    /// Capacity fallback when the config specifies zero entries
    const DEFAULT_CAPACITY: NonZeroUsize = match NonZeroUsize::new(1000) {
        Some(n) => n,
        None => unreachable!(),
    };

    /// Create a new in-memory cache, spawning the cleanup task if enabled
    #[must_use]
    pub fn new(config: &CacheConfig) -> Self {
        let capacity = NonZeroUsize::new(config.max_entries).unwrap_or(Self::DEFAULT_CAPACITY);
        let store = Arc::new(RwLock::new(LruCache::new(capacity)));

        if config.enable_background_cleanup {
            let store_clone = Arc::clone(&store);
            let cleanup_interval = config.cleanup_interval;
            tokio::spawn(async move {
                let mut interval = tokio::time::interval(cleanup_interval);
                loop {
                    interval.tick().await;
                    Self::cleanup_expired(&store_clone).await;
                }
            });
        }

        Self { store }
    }

    /// Remove all expired entries
    async fn cleanup_expired(store: &Arc<RwLock<LruCache<String, CacheEntry>>>) {
        let mut guard = store.write().await;

        // Collect first; the cache cannot be mutated while iterating.
        let expired: Vec<String> = guard
            .iter()
            .filter(|(_, entry)| entry.is_expired())
            .map(|(key, _)| key.clone())
            .collect();
        for key in &expired {
            guard.pop(key);
        }

        let removed = expired.len();
        drop(guard);
        if removed > 0 {
            tracing::debug!("cleaned up {removed} expired cache entries");
        }
    }
}

#[async_trait::async_trait]
impl CacheProvider for InMemoryCache {
    async fn set<T: Serialize + Send + Sync>(
        &self,
        key: &ScheduleFingerprint,
        value: &T,
        ttl: Duration,
    ) -> AppResult<()> {
        let serialized = serde_json::to_vec(value)?;
        let entry = CacheEntry::new(serialized, ttl);
        self.store.write().await.push(key.to_string(), entry);
        Ok(())
    }

    async fn get<T: for<'de> Deserialize<'de>>(
        &self,
        key: &ScheduleFingerprint,
    ) -> AppResult<Option<T>> {
        let mut store = self.store.write().await;

        // LruCache::get is mutable: it refreshes the entry's recency.
        match store.get(&key.to_string()) {
            Some(entry) if !entry.is_expired() => {
                let value = serde_json::from_slice(&entry.data)?;
                Ok(Some(value))
            }
            Some(_) => {
                // Expired hit counts as a miss; drop it eagerly.
                store.pop(&key.to_string());
                Ok(None)
            }
            None => Ok(None),
        }
    }

    async fn invalidate(&self, key: &ScheduleFingerprint) -> AppResult<()> {
        self.store.write().await.pop(&key.to_string());
        Ok(())
    }

    async fn exists(&self, key: &ScheduleFingerprint) -> AppResult<bool> {
        let store = self.store.read().await;
        Ok(store
            .peek(&key.to_string())
            .is_some_and(|entry| !entry.is_expired()))
    }

    async fn clear_all(&self) -> AppResult<()> {
        self.store.write().await.clear();
        Ok(())
    }
}
