//! Mojang API fetchers: profiles, name history, service health, sales.

use crate::http::decode;
use crate::{FetchResult, Fetcher};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::instrument;

const MOJANG_API: &str = "https://api.mojang.com";

/// A Minecraft player profile: the UUID behind a username.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinecraftProfile {
    /// Undashed UUID, e.g. `069a79f444e94726a5befca90e38aaf5`.
    pub id: String,
    /// Canonical spelling of the username.
    pub name: String,
}

impl MinecraftProfile {
    /// The dashed (long) form of the UUID.
    pub fn long_id(&self) -> String {
        let id = &self.id;
        if id.len() != 32 {
            return id.clone();
        }
        format!(
            "{}-{}-{}-{}-{}",
            &id[0..8],
            &id[8..12],
            &id[12..16],
            &id[16..20],
            &id[20..]
        )
    }

    /// Bust render URL for the player's skin.
    pub fn skin_url(&self) -> String {
        format!("https://visage.surgeplay.com/bust/{}", self.id)
    }
}

/// Resolves usernames to profiles via the Mojang API.
///
/// Subjects are usernames; absent usernames answer 204/404 upstream and map
/// to `NotFound`.
#[derive(Debug, Clone)]
pub struct ProfileFetcher {
    client: reqwest::Client,
}

impl ProfileFetcher {
    /// Create a fetcher over the shared connection pool.
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Fetcher for ProfileFetcher {
    type Record = MinecraftProfile;

    fn namespace(&self) -> &'static str {
        "username"
    }

    #[instrument(skip(self))]
    async fn fetch(&self, subject: &str) -> FetchResult<MinecraftProfile> {
        let url = format!("{MOJANG_API}/users/profiles/minecraft/{subject}");
        let resp = self.client.get(&url).send().await?;
        decode(resp).await
    }
}

/// One entry in a player's username history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameChange {
    /// The username taken.
    pub name: String,
    /// Unix millis of the change; absent for the original name.
    #[serde(rename = "changedToAt", skip_serializing_if = "Option::is_none", default)]
    pub changed_to_at: Option<i64>,
}

/// Resolves UUIDs to username histories via the Mojang API.
///
/// Subjects are undashed UUIDs.
#[derive(Debug, Clone)]
pub struct NameHistoryFetcher {
    client: reqwest::Client,
}

impl NameHistoryFetcher {
    /// Create a fetcher over the shared connection pool.
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Fetcher for NameHistoryFetcher {
    type Record = Vec<NameChange>;

    fn namespace(&self) -> &'static str {
        "names"
    }

    #[instrument(skip(self))]
    async fn fetch(&self, subject: &str) -> FetchResult<Vec<NameChange>> {
        let url = format!("{MOJANG_API}/user/profiles/{subject}/names");
        let resp = self.client.get(&url).send().await?;
        decode(resp).await
    }
}

/// Health of the Mojang service fleet, service name to traffic-light color
/// (`green`, `yellow`, `red`).
///
/// A `BTreeMap` keeps the rendering order stable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServiceHealth(pub BTreeMap<String, String>);

/// Fetches Mojang service health from the status API.
///
/// The subject is ignored upstream (the check covers the whole fleet); by
/// convention callers pass `"mojang"`.
#[derive(Debug, Clone)]
pub struct ServiceHealthFetcher {
    client: reqwest::Client,
    base_url: String,
}

impl ServiceHealthFetcher {
    /// Create a fetcher against a status API base URL.
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl Fetcher for ServiceHealthFetcher {
    type Record = ServiceHealth;

    fn namespace(&self) -> &'static str {
        "status"
    }

    #[instrument(skip(self))]
    async fn fetch(&self, _subject: &str) -> FetchResult<ServiceHealth> {
        let url = format!("{}/mojang/check", self.base_url);
        let resp = self.client.get(&url).send().await?;
        decode(resp).await
    }
}

/// Minecraft game sales totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSales {
    /// All-time sales counted over the requested metrics.
    pub total: u64,
    /// Sales in the last 24 hours.
    pub last24h: u64,
    /// Rolling average of sales per second, when reported.
    #[serde(
        rename = "saleVelocityPerSeconds",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub sale_velocity_per_seconds: Option<f64>,
}

/// Fetches game sales statistics from the Mojang orders API.
///
/// Only Minecraft sale metrics are requested; Cobalt and Scrolls are
/// excluded. The subject is ignored; callers pass `"minecraft"`.
#[derive(Debug, Clone)]
pub struct OrderStatisticsFetcher {
    client: reqwest::Client,
}

impl OrderStatisticsFetcher {
    /// Create a fetcher over the shared connection pool.
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Fetcher for OrderStatisticsFetcher {
    type Record = GameSales;

    fn namespace(&self) -> &'static str {
        "sales"
    }

    #[instrument(skip(self))]
    async fn fetch(&self, _subject: &str) -> FetchResult<GameSales> {
        let url = format!("{MOJANG_API}/orders/statistics");
        let payload = serde_json::json!({
            "metricKeys": ["item_sold_minecraft", "prepaid_card_redeemed_minecraft"],
        });
        let resp = self.client.post(&url).json(&payload).send().await?;
        decode(resp).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_id_inserts_dashes() {
        let profile = MinecraftProfile {
            id: "069a79f444e94726a5befca90e38aaf5".to_string(),
            name: "Notch".to_string(),
        };
        assert_eq!(profile.long_id(), "069a79f4-44e9-4726-a5be-fca90e38aaf5");
    }

    #[test]
    fn long_id_passes_through_odd_lengths() {
        let profile = MinecraftProfile {
            id: "short".to_string(),
            name: "x".to_string(),
        };
        assert_eq!(profile.long_id(), "short");
    }

    #[test]
    fn name_change_round_trips_through_json() {
        let history = vec![
            NameChange {
                name: "original".to_string(),
                changed_to_at: None,
            },
            NameChange {
                name: "renamed".to_string(),
                changed_to_at: Some(1_420_070_400_000),
            },
        ];
        let value = serde_json::to_value(&history).unwrap();
        let back: Vec<NameChange> = serde_json::from_value(value).unwrap();
        assert_eq!(back, history);
        // Wire casing preserved for the cache round trip.
        let raw = serde_json::to_string(&history).unwrap();
        assert!(raw.contains("changedToAt"));
    }

    #[test]
    fn sales_decode_from_wire_casing() {
        let sales: GameSales = serde_json::from_str(
            r#"{"total": 200000, "last24h": 5000, "saleVelocityPerSeconds": 1.32}"#,
        )
        .unwrap();
        assert_eq!(sales.total, 200_000);
        assert_eq!(sales.last24h, 5_000);
    }
}
