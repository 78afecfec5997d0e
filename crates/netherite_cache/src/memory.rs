//! In-process TTL cache implementation.

use crate::{CacheStore, LookupKey};
use async_trait::async_trait;
use derive_getters::Getters;
use netherite_error::CacheError;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;

/// Cache entry with value and expiration.
#[derive(Debug, Clone, Getters)]
struct CacheEntry {
    value: JsonValue,
    created_at: Instant,
    ttl: Duration,
}

impl CacheEntry {
    /// Check if this entry is expired.
    fn is_expired(&self) -> bool {
        self.created_at.elapsed() > self.ttl
    }

    /// Get remaining time until expiration.
    fn time_remaining(&self) -> Option<Duration> {
        self.ttl.checked_sub(self.created_at.elapsed())
    }
}

/// Configuration for the in-process cache.
#[derive(
    Debug,
    Clone,
    Serialize,
    Deserialize,
    Getters,
    derive_setters::Setters,
    derive_builder::Builder,
)]
#[setters(prefix = "with_")]
pub struct CacheConfig {
    /// Maximum cache size (number of entries)
    #[serde(default = "default_max_size")]
    max_size: usize,

    /// Whether caching is enabled
    #[serde(default = "default_enabled")]
    enabled: bool,
}

fn default_max_size() -> usize {
    1000
}

fn default_enabled() -> bool {
    true
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_size: default_max_size(),
            enabled: default_enabled(),
        }
    }
}

struct Inner {
    entries: HashMap<String, CacheEntry>,
    access_order: Vec<String>,
}

/// In-process expiring key-value store.
///
/// Stores JSON blobs under rendered [`LookupKey`]s with TTL-based passive
/// expiry and LRU eviction at capacity. Shared across command tasks behind
/// an async mutex; every operation is a single short critical section, so
/// per-key set stays atomic from the callers' point of view.
///
/// # Example
///
/// ```no_run
/// use netherite_cache::{CacheConfig, CacheStore, LookupKey, MemoryCache};
/// use serde_json::json;
/// use std::time::Duration;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let cache = MemoryCache::new(CacheConfig::default());
///     let key = LookupKey::new("server", "play.example.com");
///
///     cache
///         .set_ex(&key, json!({"online": 5}), Duration::from_secs(300))
///         .await?;
///     assert!(cache.exists(&key).await?);
///     Ok(())
/// }
/// ```
pub struct MemoryCache {
    config: CacheConfig,
    inner: Mutex<Inner>,
}

impl MemoryCache {
    /// Create a new cache with configuration.
    pub fn new(config: CacheConfig) -> Self {
        tracing::debug!(
            max_size = config.max_size,
            enabled = config.enabled,
            "Creating new MemoryCache"
        );
        Self {
            config,
            inner: Mutex::new(Inner {
                entries: HashMap::new(),
                access_order: Vec::new(),
            }),
        }
    }

    /// Remove expired entries, returning how many were dropped.
    pub async fn cleanup_expired(&self) -> usize {
        let mut inner = self.inner.lock().await;
        let before = inner.entries.len();

        let expired: Vec<String> = inner
            .entries
            .iter()
            .filter(|(_, entry)| entry.is_expired())
            .map(|(key, _)| key.clone())
            .collect();
        for key in &expired {
            inner.entries.remove(key);
            if let Some(pos) = inner.access_order.iter().position(|k| k == key) {
                inner.access_order.remove(pos);
            }
        }

        let removed = before - inner.entries.len();
        if removed > 0 {
            tracing::info!(
                removed,
                remaining = inner.entries.len(),
                "Cleaned up expired cache entries"
            );
        }
        removed
    }

    /// Clear all cache entries.
    pub async fn clear(&self) {
        let mut inner = self.inner.lock().await;
        let count = inner.entries.len();
        inner.entries.clear();
        inner.access_order.clear();
        tracing::info!(cleared = count, "Cleared cache");
    }

    /// Get number of cached entries, expired or not.
    pub async fn len(&self) -> usize {
        self.inner.lock().await.entries.len()
    }

    /// Check if cache is empty.
    pub async fn is_empty(&self) -> bool {
        self.inner.lock().await.entries.is_empty()
    }
}

impl Inner {
    /// Evict least recently used entry.
    fn evict_lru(&mut self) {
        if let Some(key) = self.access_order.first().cloned() {
            tracing::debug!(key = %key, "Evicting LRU entry");
            self.entries.remove(&key);
            self.access_order.remove(0);
        }
    }

    fn touch(&mut self, key: &str) {
        if let Some(pos) = self.access_order.iter().position(|k| k == key) {
            let key = self.access_order.remove(pos);
            self.access_order.push(key);
        }
    }
}

impl Default for MemoryCache {
    fn default() -> Self {
        Self::new(CacheConfig::default())
    }
}

#[async_trait]
impl CacheStore for MemoryCache {
    #[tracing::instrument(skip(self), fields(key = %key))]
    async fn exists(&self, key: &LookupKey) -> Result<bool, CacheError> {
        Ok(self.get(key).await?.is_some())
    }

    #[tracing::instrument(skip(self), fields(key = %key))]
    async fn get(&self, key: &LookupKey) -> Result<Option<JsonValue>, CacheError> {
        if !self.config.enabled() {
            tracing::debug!("Cache disabled, returning None");
            return Ok(None);
        }

        let rendered = key.to_string();
        let mut inner = self.inner.lock().await;

        let expired = match inner.entries.get(&rendered) {
            Some(entry) => entry.is_expired(),
            None => return Ok(None),
        };
        if expired {
            tracing::debug!("Cache entry expired, removing");
            inner.entries.remove(&rendered);
            if let Some(pos) = inner.access_order.iter().position(|k| k == &rendered) {
                inner.access_order.remove(pos);
            }
            return Ok(None);
        }

        inner.touch(&rendered);
        let entry = inner
            .entries
            .get(&rendered)
            .ok_or_else(|| CacheError::new("entry vanished during lookup"))?;
        tracing::debug!(time_remaining = ?entry.time_remaining(), "Cache hit");
        Ok(Some(entry.value().clone()))
    }

    #[tracing::instrument(skip(self, value), fields(key = %key, ttl = ?ttl))]
    async fn set_ex(
        &self,
        key: &LookupKey,
        value: JsonValue,
        ttl: Duration,
    ) -> Result<(), CacheError> {
        if !self.config.enabled() {
            tracing::debug!("Cache disabled, skipping insert");
            return Ok(());
        }

        let rendered = key.to_string();
        let mut inner = self.inner.lock().await;

        // Evict if at capacity
        if inner.entries.len() >= *self.config.max_size()
            && !inner.entries.contains_key(&rendered)
        {
            inner.evict_lru();
        }

        // Track access order for LRU
        if let Some(pos) = inner.access_order.iter().position(|k| k == &rendered) {
            inner.access_order.remove(pos);
        }
        inner.access_order.push(rendered.clone());

        let entry = CacheEntry {
            value,
            created_at: Instant::now(),
            ttl,
        };
        tracing::debug!(
            overwrote = inner.entries.contains_key(&rendered),
            "Inserted entry into cache"
        );
        inner.entries.insert(rendered, entry);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn key(namespace: &str, subject: &str) -> LookupKey {
        LookupKey::new(namespace, subject)
    }

    #[tokio::test]
    async fn get_returns_stored_value() {
        let cache = MemoryCache::default();
        let key = key("username", "Notch");
        cache
            .set_ex(&key, json!({"id": "069a79f4"}), Duration::from_secs(60))
            .await
            .unwrap();

        let value = cache.get(&key).await.unwrap();
        assert_eq!(value, Some(json!({"id": "069a79f4"})));
        assert!(cache.exists(&key).await.unwrap());
    }

    #[tokio::test]
    async fn miss_returns_none() {
        let cache = MemoryCache::default();
        assert_eq!(cache.get(&key("username", "nobody")).await.unwrap(), None);
        assert!(!cache.exists(&key("username", "nobody")).await.unwrap());
    }

    #[tokio::test]
    async fn entries_expire_passively() {
        let cache = MemoryCache::default();
        let key = key("server", "play.example.com");
        cache
            .set_ex(&key, json!(1), Duration::from_millis(20))
            .await
            .unwrap();

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(cache.get(&key).await.unwrap(), None);
        // The expired entry was dropped on read.
        assert!(cache.is_empty().await);
    }

    #[tokio::test]
    async fn overwrite_replaces_value_and_ttl() {
        let cache = MemoryCache::default();
        let key = key("status", "mojang");
        cache
            .set_ex(&key, json!("old"), Duration::from_millis(10))
            .await
            .unwrap();
        cache
            .set_ex(&key, json!("new"), Duration::from_secs(60))
            .await
            .unwrap();

        tokio::time::sleep(Duration::from_millis(30)).await;
        assert_eq!(cache.get(&key).await.unwrap(), Some(json!("new")));
    }

    #[tokio::test]
    async fn capacity_evicts_least_recently_used() {
        let config = CacheConfig::default().with_max_size(2);
        let cache = MemoryCache::new(config);
        let a = key("ns", "a");
        let b = key("ns", "b");
        let c = key("ns", "c");

        cache.set_ex(&a, json!(1), Duration::from_secs(60)).await.unwrap();
        cache.set_ex(&b, json!(2), Duration::from_secs(60)).await.unwrap();
        // Touch `a` so `b` becomes the eviction candidate.
        cache.get(&a).await.unwrap();
        cache.set_ex(&c, json!(3), Duration::from_secs(60)).await.unwrap();

        assert!(cache.exists(&a).await.unwrap());
        assert!(!cache.exists(&b).await.unwrap());
        assert!(cache.exists(&c).await.unwrap());
    }

    #[tokio::test]
    async fn disabled_cache_stores_nothing() {
        let config = CacheConfig::default().with_enabled(false);
        let cache = MemoryCache::new(config);
        let key = key("ns", "a");
        cache.set_ex(&key, json!(1), Duration::from_secs(60)).await.unwrap();
        assert_eq!(cache.get(&key).await.unwrap(), None);
    }

    #[tokio::test]
    async fn cleanup_drops_only_expired_entries() {
        let cache = MemoryCache::default();
        cache
            .set_ex(&key("ns", "stale"), json!(1), Duration::from_millis(10))
            .await
            .unwrap();
        cache
            .set_ex(&key("ns", "fresh"), json!(2), Duration::from_secs(60))
            .await
            .unwrap();

        tokio::time::sleep(Duration::from_millis(30)).await;
        assert_eq!(cache.cleanup_expired().await, 1);
        assert_eq!(cache.len().await, 1);
    }
}
