//! Error types for the Netherite workspace.
//!
//! This crate provides the foundation error types used throughout the
//! Netherite ecosystem.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern for clean error
//! handling:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use netherite_error::{NetheriteResult, HttpError};
//!
//! fn fetch_data() -> NetheriteResult<String> {
//!     Err(HttpError::new("Connection refused"))?
//! }
//!
//! match fetch_data() {
//!     Ok(data) => println!("Got: {}", data),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod cache;
mod config;
mod error;
mod http;
mod json;

pub use cache::CacheError;
pub use config::ConfigError;
pub use error::{NetheriteError, NetheriteErrorKind, NetheriteResult};
pub use http::HttpError;
pub use json::JsonError;
