//! Netherite: a Minecraft-themed Discord chat bot.
//!
//! This facade re-exports the workspace crates:
//!
//! - [`netherite_error`] - foundation error types
//! - [`netherite_cache`] - expiring key-value lookup cache
//! - [`netherite_fetch`] - upstream fetchers and the cache-aside lookup
//! - [`netherite_format`] - pure presentation formatting
//! - [`netherite_bot`] - Discord client, dispatcher, and command handlers

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub use netherite_bot::{
    execute, parse, BotContext, BotError, BotErrorKind, BotResult, Command, CommandClass,
    CooldownGate, GatewayInfo, Invocation, NetheriteBot, NetheriteHandler, Reply, Settings,
};
pub use netherite_cache::{CacheConfig, CacheStore, LookupKey, MemoryCache};
pub use netherite_error::{NetheriteError, NetheriteErrorKind, NetheriteResult};
pub use netherite_fetch::{lookup, FetchError, FetchErrorKind, FetchResult, Fetched, Fetcher};
pub use netherite_format::{Card, CardAttachment, CardField};
