//! Wynncraft player statistics fetcher.

use crate::http::decode;
use crate::{FetchResult, Fetcher};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::instrument;

const WYNNCRAFT_API: &str = "https://api.wynncraft.com/v3";

/// One character (class) on a Wynncraft account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WynncraftCharacter {
    /// Class archetype, e.g. `MAGE`.
    #[serde(rename = "type")]
    pub class: String,
    /// Combat level.
    pub level: u32,
    /// Lifetime deaths, when tracked.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub deaths: Option<u32>,
}

/// Per-class statistics for a Wynncraft player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WynncraftStats {
    /// Canonical username.
    pub username: String,
    /// Characters keyed by character id.
    #[serde(default)]
    pub characters: BTreeMap<String, WynncraftCharacter>,
}

impl WynncraftStats {
    /// Profile page for the player.
    pub fn profile_url(&self) -> String {
        format!("https://wynncraft.com/stats/player/{}", self.username)
    }
}

/// Fetches player class statistics from the Wynncraft API.
///
/// Subjects are usernames; players who never logged in answer 404.
#[derive(Debug, Clone)]
pub struct WynncraftFetcher {
    client: reqwest::Client,
}

impl WynncraftFetcher {
    /// Create a fetcher over the shared connection pool.
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Fetcher for WynncraftFetcher {
    type Record = WynncraftStats;

    // Key spelling is historical; changing it would orphan live cache
    // entries for deployments that migrate in place.
    fn namespace(&self) -> &'static str {
        "wyncraft"
    }

    #[instrument(skip(self))]
    async fn fetch(&self, subject: &str) -> FetchResult<WynncraftStats> {
        let url = format!("{WYNNCRAFT_API}/player/{subject}");
        let resp = self
            .client
            .get(&url)
            .query(&[("fullResult", "True")])
            .send()
            .await?;
        decode(resp).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_decode_and_round_trip() {
        let raw = r#"{
            "username": "Salted",
            "characters": {
                "b90e9892-af2f-4b5e-a4ba-46b0b27c3f4f": {"type": "MAGE", "level": 106, "deaths": 42},
                "f7e43f7e-2c0b-4d4a-9ed3-0f0a97c12a2e": {"type": "ARCHER", "level": 30}
            }
        }"#;
        let stats: WynncraftStats = serde_json::from_str(raw).unwrap();
        assert_eq!(stats.characters.len(), 2);
        assert_eq!(stats.profile_url(), "https://wynncraft.com/stats/player/Salted");

        let value = serde_json::to_value(&stats).unwrap();
        let back: WynncraftStats = serde_json::from_value(value).unwrap();
        assert_eq!(back, stats);
    }
}
