//! The fetcher capability trait.

use crate::FetchResult;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Capability to fetch a record by subject identifier over HTTP.
///
/// One implementation exists per third-party service. Fetchers hold a clone
/// of the process-wide [`reqwest::Client`] (connection pool) injected at
/// startup, and decode into their own record type at the HTTP boundary so a
/// malformed payload becomes a [`FetchError`](crate::FetchError) in exactly
/// one place.
///
/// The `namespace` scopes cache keys; two fetchers must not share one unless
/// they produce the same record type for the same subjects.
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Decoded record type, serializable for cache round trips.
    type Record: Serialize + DeserializeOwned + Send + Sync;

    /// Cache key namespace for this service.
    fn namespace(&self) -> &'static str;

    /// Resolve `subject` against the upstream service.
    ///
    /// One-shot: no retry or backoff beyond what the connection pool does.
    async fn fetch(&self, subject: &str) -> FetchResult<Self::Record>;
}
