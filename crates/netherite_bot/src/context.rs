//! Shared command-handler state.

use crate::{CooldownGate, Settings};
use chrono::{DateTime, Utc};
use netherite_cache::{CacheStore, MemoryCache};
use std::sync::Arc;

/// Dependencies shared by every command handler.
///
/// Built once at startup and handed to the event handler behind an `Arc`.
/// The cache is held as a trait object so tests and future deployments can
/// substitute another [`CacheStore`] backend.
pub struct BotContext {
    settings: Settings,
    cache: Arc<dyn CacheStore>,
    http: reqwest::Client,
    cooldowns: CooldownGate,
    started_at: DateTime<Utc>,
}

impl BotContext {
    /// Build the context from loaded settings.
    pub fn new(settings: Settings) -> Self {
        let cache = Arc::new(MemoryCache::new(settings.cache.clone()));
        Self {
            settings,
            cache,
            http: reqwest::Client::new(),
            cooldowns: CooldownGate::new(),
            started_at: Utc::now(),
        }
    }

    /// Runtime settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// The lookup cache.
    pub fn cache(&self) -> &dyn CacheStore {
        self.cache.as_ref()
    }

    /// Shared HTTP connection pool.
    pub fn http(&self) -> &reqwest::Client {
        &self.http
    }

    /// Per-user cooldown gate.
    pub fn cooldowns(&self) -> &CooldownGate {
        &self.cooldowns
    }

    /// Seconds the bot has been up.
    pub fn uptime_seconds(&self) -> u64 {
        (Utc::now() - self.started_at).num_seconds().max(0) as u64
    }
}
