//! Integration tests for the cache-aside lookup against the in-process
//! cache, using spy fetchers that count their own invocations.

use async_trait::async_trait;
use netherite_cache::{CacheConfig, CacheStore, LookupKey, MemoryCache};
use netherite_fetch::{
    lookup, FetchError, FetchErrorKind, FetchResult, Fetched, Fetcher, JavaPlayers,
    JavaServerStatus,
};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct StubRecord {
    subject: String,
    detail: Vec<u32>,
}

/// Fetcher spy returning a fixed outcome and counting calls.
struct SpyFetcher {
    outcome: fn(&str) -> FetchResult<StubRecord>,
    calls: AtomicUsize,
}

impl SpyFetcher {
    fn returning(outcome: fn(&str) -> FetchResult<StubRecord>) -> Self {
        Self {
            outcome,
            calls: AtomicUsize::new(0),
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Fetcher for SpyFetcher {
    type Record = StubRecord;

    fn namespace(&self) -> &'static str {
        "stub"
    }

    async fn fetch(&self, subject: &str) -> FetchResult<StubRecord> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        (self.outcome)(subject)
    }
}

fn found(subject: &str) -> FetchResult<StubRecord> {
    Ok(Fetched::Found(StubRecord {
        subject: subject.to_string(),
        detail: vec![1, 2, 3],
    }))
}

fn not_found(_subject: &str) -> FetchResult<StubRecord> {
    Ok(Fetched::NotFound)
}

fn transport_error(_subject: &str) -> FetchResult<StubRecord> {
    Err(FetchError::new(FetchErrorKind::Transport(
        "connection refused".to_string(),
    )))
}

#[tokio::test]
async fn miss_fetches_and_populates_cache() {
    let cache = MemoryCache::default();
    let fetcher = SpyFetcher::returning(found);

    let outcome = lookup(&cache, &fetcher, "steve", Duration::from_secs(300))
        .await
        .unwrap();

    assert!(outcome.is_found());
    assert_eq!(fetcher.calls(), 1);
    assert!(cache
        .exists(&LookupKey::new("stub", "steve"))
        .await
        .unwrap());
}

#[tokio::test]
async fn second_lookup_within_ttl_skips_the_fetcher() {
    let cache = MemoryCache::default();
    let fetcher = SpyFetcher::returning(found);

    let first = lookup(&cache, &fetcher, "steve", Duration::from_secs(300))
        .await
        .unwrap();
    let second = lookup(&cache, &fetcher, "steve", Duration::from_secs(300))
        .await
        .unwrap();

    assert_eq!(fetcher.calls(), 1);
    assert_eq!(first, second);
}

#[tokio::test]
async fn expired_entry_triggers_a_refetch() {
    let cache = MemoryCache::default();
    let fetcher = SpyFetcher::returning(found);
    let ttl = Duration::from_millis(20);

    lookup(&cache, &fetcher, "steve", ttl).await.unwrap();
    tokio::time::sleep(Duration::from_millis(50)).await;
    lookup(&cache, &fetcher, "steve", ttl).await.unwrap();

    assert_eq!(fetcher.calls(), 2);
}

#[tokio::test]
async fn not_found_is_returned_and_never_cached() {
    let cache = MemoryCache::default();
    let fetcher = SpyFetcher::returning(not_found);

    let outcome = lookup(&cache, &fetcher, "ghost", Duration::from_secs(300))
        .await
        .unwrap();

    assert_eq!(outcome, Fetched::NotFound);
    assert!(!cache
        .exists(&LookupKey::new("stub", "ghost"))
        .await
        .unwrap());

    // Absence may be transient, so a retry goes back upstream.
    lookup(&cache, &fetcher, "ghost", Duration::from_secs(300))
        .await
        .unwrap();
    assert_eq!(fetcher.calls(), 2);
}

#[tokio::test]
async fn transport_error_propagates_and_never_caches() {
    let cache = MemoryCache::default();
    let fetcher = SpyFetcher::returning(transport_error);

    let err = lookup(&cache, &fetcher, "steve", Duration::from_secs(300))
        .await
        .unwrap_err();

    assert!(matches!(err.kind(), FetchErrorKind::Transport(_)));
    assert!(cache.is_empty().await);
}

#[tokio::test]
async fn cached_record_round_trips_structurally() {
    let cache = MemoryCache::default();
    let fetcher = SpyFetcher::returning(found);

    let first = lookup(&cache, &fetcher, "steve", Duration::from_secs(300))
        .await
        .unwrap()
        .found()
        .unwrap();
    let second = lookup(&cache, &fetcher, "steve", Duration::from_secs(300))
        .await
        .unwrap()
        .found()
        .unwrap();

    // Nested structure survives the serialize/store/deserialize cycle.
    assert_eq!(second.subject, first.subject);
    assert_eq!(second.detail, vec![1, 2, 3]);
}

#[tokio::test]
async fn corrupt_cache_entry_is_refetched_and_overwritten() {
    let cache = MemoryCache::default();
    let fetcher = SpyFetcher::returning(found);
    let key = LookupKey::new("stub", "steve");

    // Poison the key with a blob that does not decode into StubRecord.
    cache
        .set_ex(&key, serde_json::json!("not a record"), Duration::from_secs(300))
        .await
        .unwrap();

    let outcome = lookup(&cache, &fetcher, "steve", Duration::from_secs(300))
        .await
        .unwrap();

    assert!(outcome.is_found());
    assert_eq!(fetcher.calls(), 1);
    // The overwrite means the next lookup hits the cache.
    lookup(&cache, &fetcher, "steve", Duration::from_secs(300))
        .await
        .unwrap();
    assert_eq!(fetcher.calls(), 1);
}

/// Java server fetcher stub for the end-to-end scenario from the status API
/// contract: two lookups within the TTL, one upstream call.
struct StubServerFetcher {
    calls: AtomicUsize,
}

#[async_trait]
impl Fetcher for StubServerFetcher {
    type Record = JavaServerStatus;

    fn namespace(&self) -> &'static str {
        "server"
    }

    async fn fetch(&self, _subject: &str) -> FetchResult<JavaServerStatus> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(Fetched::Found(JavaServerStatus {
            description: None,
            players: JavaPlayers {
                online: 5,
                max: 20,
                sample: None,
            },
            version: None,
            favicon: None,
        }))
    }
}

#[tokio::test]
async fn server_lookup_end_to_end() {
    let cache = MemoryCache::new(CacheConfig::default());
    let fetcher = StubServerFetcher {
        calls: AtomicUsize::new(0),
    };
    let ttl = Duration::from_secs(300);

    let first = lookup(&cache, &fetcher, "play.example.com:25565", ttl)
        .await
        .unwrap()
        .found()
        .unwrap();
    assert_eq!(fetcher.calls.load(Ordering::SeqCst), 1);
    assert_eq!(first.players.online, 5);
    assert_eq!(first.players.max, 20);

    let second = lookup(&cache, &fetcher, "play.example.com:25565", ttl)
        .await
        .unwrap()
        .found()
        .unwrap();
    assert_eq!(fetcher.calls.load(Ordering::SeqCst), 1);
    assert_eq!(second, first);
}
