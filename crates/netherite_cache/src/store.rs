//! Cache store wire contract.

use crate::LookupKey;
use async_trait::async_trait;
use netherite_error::CacheError;
use serde_json::Value as JsonValue;
use std::time::Duration;

/// Async contract for an expiring key-value store.
///
/// Mirrors the three operations the bot needs from a networked cache:
/// existence-check, get, and set-with-expiry. Values are opaque JSON blobs;
/// the caller owns serialization on both sides of the boundary.
///
/// Implementations must treat keys as independent: a set on one key never
/// requires coordination with another, so per-key atomicity is the only
/// discipline required.
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// Check whether an unexpired entry exists for `key`.
    async fn exists(&self, key: &LookupKey) -> Result<bool, CacheError>;

    /// Get the value stored under `key`, or `None` on a miss or after
    /// expiry.
    async fn get(&self, key: &LookupKey) -> Result<Option<JsonValue>, CacheError>;

    /// Store `value` under `key`, expiring after `ttl`. Overwrites any
    /// existing entry.
    async fn set_ex(&self, key: &LookupKey, value: JsonValue, ttl: Duration)
        -> Result<(), CacheError>;
}
