//! Fetch error types.

use crate::Fetched;
use derive_getters::Getters;

/// Fetch error variants.
///
/// Distinguishes the failure modes of an upstream HTTP call. An absent
/// subject is not an error; see [`Fetched::NotFound`](crate::Fetched).
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum FetchErrorKind {
    /// Upstream answered with a non-success status.
    #[display("Upstream returned status {_0}")]
    Status(u16),

    /// Upstream answered 2xx but the payload did not decode.
    #[display("Malformed payload: {_0}")]
    Malformed(String),

    /// Upstream was unreachable or the connection failed mid-flight.
    #[display("Transport failure: {_0}")]
    Transport(String),

    /// The subject identifier could not be interpreted (e.g. a bad port).
    #[display("Invalid subject: {_0}")]
    InvalidSubject(String),
}

/// Fetch error with source location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error, Getters)]
#[display("Fetch Error: {} at line {} in {}", kind, line, file)]
pub struct FetchError {
    kind: FetchErrorKind,
    line: u32,
    file: &'static str,
}

impl FetchError {
    /// Create a new FetchError with automatic location tracking.
    ///
    /// # Example
    /// ```
    /// use netherite_fetch::{FetchError, FetchErrorKind};
    ///
    /// let err = FetchError::new(FetchErrorKind::Status(502));
    /// ```
    #[track_caller]
    pub fn new(kind: FetchErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

/// Result type for fetch operations: a discriminated outcome or an error.
pub type FetchResult<T> = std::result::Result<Fetched<T>, FetchError>;

impl From<reqwest::Error> for FetchError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        FetchError::new(FetchErrorKind::Transport(err.to_string()))
    }
}

// Crate boundary conversion into the workspace aggregate, preserving the
// original capture location. Decode failures count as JSON errors, the rest
// as HTTP. Targeting the kind lets the aggregate's blanket `From` lift this
// to `NetheriteError`.
impl From<FetchError> for netherite_error::NetheriteErrorKind {
    fn from(err: FetchError) -> Self {
        let message = err.kind.to_string();
        match err.kind {
            FetchErrorKind::Malformed(_) => netherite_error::JsonError {
                message,
                line: err.line,
                file: err.file,
            }
            .into(),
            _ => netherite_error::HttpError {
                message,
                line: err.line,
                file: err.file,
            }
            .into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use netherite_error::{NetheriteError, NetheriteErrorKind};

    #[test]
    fn malformed_payloads_aggregate_as_json_errors() {
        let err = FetchError::new(FetchErrorKind::Malformed("trailing comma".to_string()));
        let aggregated: NetheriteError = err.into();
        assert!(matches!(aggregated.kind(), NetheriteErrorKind::Json(_)));
        assert!(aggregated.to_string().contains("trailing comma"));
    }

    #[test]
    fn transport_failures_aggregate_as_http_errors() {
        let err = FetchError::new(FetchErrorKind::Transport("connection refused".to_string()));
        let aggregated: NetheriteError = err.into();
        assert!(matches!(aggregated.kind(), NetheriteErrorKind::Http(_)));
    }
}
