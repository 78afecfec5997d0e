//! Shared HTTP response classification.

use crate::{FetchError, FetchErrorKind, FetchResult, Fetched};
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;

/// Classify a response and decode the body into `T`.
///
/// Status mapping shared by all fetchers: 404 and 204 are well-formed
/// absence signals and become `NotFound`; any other non-success status is a
/// `Status` error; a 2xx body that fails to decode is `Malformed`.
pub(crate) async fn decode<T: DeserializeOwned>(resp: Response) -> FetchResult<T> {
    let status = resp.status();
    if status == StatusCode::NOT_FOUND || status == StatusCode::NO_CONTENT {
        debug!(%status, "Upstream reports no such subject");
        return Ok(Fetched::NotFound);
    }
    if !status.is_success() {
        return Err(FetchError::new(FetchErrorKind::Status(status.as_u16())));
    }

    let bytes = resp.bytes().await?;
    match serde_json::from_slice(&bytes) {
        Ok(record) => Ok(Fetched::Found(record)),
        Err(e) => Err(FetchError::new(FetchErrorKind::Malformed(e.to_string()))),
    }
}

/// Like [`decode`], for endpoints that answer 200 with a JSON `null` body
/// when the subject is absent (the server status API does this for offline
/// servers).
pub(crate) async fn decode_nullable<T: DeserializeOwned>(resp: Response) -> FetchResult<T> {
    match decode::<Option<T>>(resp).await? {
        Fetched::Found(Some(record)) => Ok(Fetched::Found(record)),
        Fetched::Found(None) | Fetched::NotFound => Ok(Fetched::NotFound),
    }
}
