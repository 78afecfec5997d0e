//! Top-level error wrapper types.

use crate::{CacheError, ConfigError, HttpError, JsonError};

/// This is the foundation error enum. Crate-local error types elsewhere in
/// the workspace convert into these variants at crate boundaries.
///
/// # Examples
///
/// ```
/// use netherite_error::{NetheriteError, HttpError};
///
/// let http_err = HttpError::new("Connection failed");
/// let err: NetheriteError = http_err.into();
/// assert!(format!("{}", err).contains("HTTP Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum NetheriteErrorKind {
    /// HTTP error
    #[from(HttpError)]
    Http(HttpError),
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Cache store error
    #[from(CacheError)]
    Cache(CacheError),
}

/// Netherite error with kind discrimination.
///
/// # Examples
///
/// ```
/// use netherite_error::{NetheriteResult, ConfigError};
///
/// fn might_fail() -> NetheriteResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Netherite Error: {}", _0)]
pub struct NetheriteError(Box<NetheriteErrorKind>);

impl NetheriteError {
    /// Create a new error from a kind.
    pub fn new(kind: NetheriteErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &NetheriteErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to NetheriteErrorKind
impl<T> From<T> for NetheriteError
where
    T: Into<NetheriteErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Netherite operations.
///
/// # Examples
///
/// ```
/// use netherite_error::{NetheriteResult, HttpError};
///
/// fn fetch_data() -> NetheriteResult<String> {
///     Err(HttpError::new("404 Not Found"))?
/// }
/// ```
pub type NetheriteResult<T> = std::result::Result<T, NetheriteError>;

// External library errors convert through their wrapper type, so `?` works
// on reqwest/serde_json/config results in functions returning
// NetheriteResult.
impl From<reqwest::Error> for NetheriteErrorKind {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        NetheriteErrorKind::Http(err.into())
    }
}

impl From<serde_json::Error> for NetheriteErrorKind {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        NetheriteErrorKind::Json(err.into())
    }
}

impl From<config::ConfigError> for NetheriteErrorKind {
    #[track_caller]
    fn from(err: config::ConfigError) -> Self {
        NetheriteErrorKind::Config(err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_json_errors_aggregate_as_json() {
        let parse_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: NetheriteError = parse_err.into();
        assert!(matches!(err.kind(), NetheriteErrorKind::Json(_)));
    }

    #[test]
    fn config_errors_aggregate_as_config() {
        let load_err = config::ConfigError::Message("missing field".to_string());
        let err: NetheriteError = load_err.into();
        assert!(matches!(err.kind(), NetheriteErrorKind::Config(_)));
        assert!(err.to_string().contains("missing field"));
    }

    #[test]
    fn cache_errors_aggregate_as_cache() {
        let err: NetheriteError = CacheError::new("store unavailable").into();
        assert!(matches!(err.kind(), NetheriteErrorKind::Cache(_)));
    }
}
