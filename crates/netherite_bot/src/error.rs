//! Bot-specific error types.
//!
//! Covers the Serenity client lifecycle and configuration loading. Command
//! failures never reach this type; they are translated into user-facing
//! replies at the dispatch boundary.

use derive_getters::Getters;

/// Bot error variants.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum BotErrorKind {
    /// Serenity API error (e.g. HTTP error, gateway error).
    #[display("Serenity API error: {_0}")]
    SerenityError(String),

    /// Connection to the Discord gateway failed.
    #[display("Connection failed: {_0}")]
    ConnectionFailed(String),

    /// Bot token is missing, invalid, or expired.
    #[display("Invalid or missing bot token")]
    InvalidToken,

    /// Message failed to send.
    #[display("Message send failed: {_0}")]
    MessageSendFailed(String),

    /// Configuration error (missing file, bad env vars, invalid settings).
    #[display("Configuration error: {_0}")]
    ConfigurationError(String),
}

/// Bot error with source location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error, Getters)]
#[display("Bot Error: {} at line {} in {}", kind, line, file)]
pub struct BotError {
    kind: BotErrorKind,
    line: u32,
    file: &'static str,
}

impl BotError {
    /// Create a new BotError with automatic location tracking.
    ///
    /// # Example
    /// ```
    /// use netherite_bot::{BotError, BotErrorKind};
    ///
    /// let err = BotError::new(BotErrorKind::InvalidToken);
    /// ```
    #[track_caller]
    pub fn new(kind: BotErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

/// Result type for bot operations.
pub type BotResult<T> = Result<T, BotError>;

impl From<serenity::Error> for BotError {
    #[track_caller]
    fn from(err: serenity::Error) -> Self {
        BotError::new(BotErrorKind::SerenityError(err.to_string()))
    }
}

impl From<config::ConfigError> for BotError {
    #[track_caller]
    fn from(err: config::ConfigError) -> Self {
        BotError::new(BotErrorKind::ConfigurationError(err.to_string()))
    }
}

// Crate boundary conversion into the workspace aggregate, preserving the
// original capture location. Configuration problems keep their category;
// gateway and send failures count as HTTP.
impl From<BotError> for netherite_error::NetheriteErrorKind {
    fn from(err: BotError) -> Self {
        let message = err.kind.to_string();
        match err.kind {
            BotErrorKind::ConfigurationError(_) => netherite_error::ConfigError {
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
    fn configuration_failures_aggregate_as_config_errors() {
        let err = BotError::new(BotErrorKind::ConfigurationError("no token".to_string()));
        let aggregated: NetheriteError = err.into();
        assert!(matches!(aggregated.kind(), NetheriteErrorKind::Config(_)));
        assert!(aggregated.to_string().contains("no token"));
    }

    #[test]
    fn gateway_failures_aggregate_as_http_errors() {
        let err = BotError::new(BotErrorKind::ConnectionFailed("handshake".to_string()));
        let aggregated: NetheriteError = err.into();
        assert!(matches!(aggregated.kind(), NetheriteErrorKind::Http(_)));
    }
}
