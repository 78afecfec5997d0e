//! Expiring key-value cache for upstream lookups.
//!
//! Nearly every externally-facing Netherite command follows the same
//! cache-aside pattern: check the cache, fetch from the upstream service on a
//! miss, and write the result back with a time-to-live. This crate provides
//! the storage half of that pattern:
//!
//! - [`LookupKey`] - composite key of a service namespace and a subject
//!   identifier (e.g. `username:Notch`)
//! - [`CacheStore`] - async trait over the store wire contract
//!   (existence-check, get, set-with-expiry)
//! - [`MemoryCache`] - in-process TTL store with LRU capacity eviction
//!
//! Entries expire passively and are independent of one another; no operation
//! coordinates across keys.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod key;
mod memory;
mod store;

pub use key::LookupKey;
pub use memory::{CacheConfig, CacheConfigBuilder, MemoryCache};
pub use store::CacheStore;
