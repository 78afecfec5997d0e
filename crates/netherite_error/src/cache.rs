//! Cache store error types.

/// Cache store error with source location.
///
/// Raised when a cache backend fails to read or write an entry. A cache
/// miss is not an error and is represented as `None` by the store API.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Cache Error: {} at line {} in {}", message, line, file)]
pub struct CacheError {
    /// The underlying error message
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl CacheError {
    /// Create a new CacheError with the given message at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use netherite_error::CacheError;
    ///
    /// let err = CacheError::new("store unavailable");
    /// assert!(err.message.contains("unavailable"));
    /// ```
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
