//! The cache-aside lookup.

use crate::{FetchResult, Fetched, Fetcher};
use netherite_cache::{CacheStore, LookupKey};
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// Resolve `subject` through the cache, fetching on a miss.
///
/// 1. Compose the key from the fetcher's namespace and the subject.
/// 2. On a cache hit, deserialize and return without invoking the fetcher.
/// 3. On a miss, fetch. A found record is written back under `ttl` before
///    returning; `NotFound` is returned **without** caching so the next
///    invocation retries (absence may be transient). Errors are likewise
///    never cached.
///
/// A cached value that no longer deserializes into the fetcher's record type
/// is treated as a miss and overwritten. Cache backend failures degrade to a
/// direct fetch rather than failing the command.
///
/// There is no single-flight guarantee: concurrent lookups for one key may
/// both miss and fetch redundantly. Per-user command cooldowns bound the
/// request rate, so the inefficiency is accepted.
#[instrument(skip(store, fetcher), fields(namespace = fetcher.namespace(), subject))]
pub async fn lookup<F: Fetcher>(
    store: &dyn CacheStore,
    fetcher: &F,
    subject: &str,
    ttl: Duration,
) -> FetchResult<F::Record> {
    let key = LookupKey::new(fetcher.namespace(), subject);

    match store.get(&key).await {
        Ok(Some(value)) => match serde_json::from_value(value) {
            Ok(record) => {
                debug!(key = %key, "Cache hit");
                return Ok(Fetched::Found(record));
            }
            Err(e) => {
                warn!(key = %key, error = %e, "Cached value failed to deserialize, refetching");
            }
        },
        Ok(None) => debug!(key = %key, "Cache miss"),
        Err(e) => warn!(key = %key, error = %e, "Cache read failed, falling through to fetch"),
    }

    match fetcher.fetch(subject).await? {
        Fetched::Found(record) => {
            match serde_json::to_value(&record) {
                Ok(value) => {
                    if let Err(e) = store.set_ex(&key, value, ttl).await {
                        warn!(key = %key, error = %e, "Cache write failed");
                    }
                }
                Err(e) => warn!(key = %key, error = %e, "Record not serializable, skipping cache"),
            }
            Ok(Fetched::Found(record))
        }
        Fetched::NotFound => Ok(Fetched::NotFound),
    }
}
