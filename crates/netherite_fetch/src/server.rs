//! Java and Bedrock server status fetchers.
//!
//! Both talk to the status API configured at startup, which answers 200 with
//! a JSON `null` body for servers that are offline or unreachable; that maps
//! to `NotFound` so the user gets the "not online" message rather than a
//! failure.

use crate::http::decode_nullable;
use crate::{FetchResult, Fetcher, ServerAddress};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A named entry from a Java server's player sample.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSample {
    /// Player username.
    pub name: String,
}

/// Player counts reported by a Java server ping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JavaPlayers {
    /// Players currently online.
    pub online: u64,
    /// Server capacity.
    pub max: u64,
    /// Partial list of online players, when the server exposes one.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub sample: Option<Vec<PlayerSample>>,
}

/// Version information reported by a Java server ping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerVersion {
    /// Human-readable version name.
    pub name: String,
    /// Protocol number.
    pub protocol: i64,
}

/// Status summary of a Java edition server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JavaServerStatus {
    /// Message of the day.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub description: Option<String>,
    /// Player counts and sample.
    pub players: JavaPlayers,
    /// Version info, absent on some proxies.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub version: Option<ServerVersion>,
    /// Server icon as a base64 PNG data URI.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub favicon: Option<String>,
}

/// Player counts reported by a Bedrock server ping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BedrockPlayers {
    /// Players currently online.
    pub online: u64,
    /// Server capacity.
    pub max: u64,
    /// Names of online players, when exposed.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub names: Option<Vec<String>>,
}

/// Server software reported by a Bedrock ping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerSoftware {
    /// Software version string.
    pub version: String,
}

/// Status summary of a Bedrock edition server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BedrockServerStatus {
    /// Message of the day.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub motd: Option<String>,
    /// Player counts and names.
    pub players: BedrockPlayers,
    /// Software info, absent on some servers.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub software: Option<ServerSoftware>,
    /// Current world/map name.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub map: Option<String>,
}

fn address_query(address: &ServerAddress) -> Vec<(&'static str, String)> {
    let mut query = vec![("server", address.host().clone())];
    if let Some(port) = address.port() {
        query.push(("port", port.to_string()));
    }
    query
}

/// Pings Java edition servers through the status API.
///
/// Subjects are rendered [`ServerAddress`]es (`host` or `host:port`).
#[derive(Debug, Clone)]
pub struct JavaServerFetcher {
    client: reqwest::Client,
    base_url: String,
}

impl JavaServerFetcher {
    /// Create a fetcher against a status API base URL.
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl Fetcher for JavaServerFetcher {
    type Record = JavaServerStatus;

    fn namespace(&self) -> &'static str {
        "server"
    }

    #[instrument(skip(self))]
    async fn fetch(&self, subject: &str) -> FetchResult<JavaServerStatus> {
        let address = ServerAddress::parse(subject, None)?;
        let url = format!("{}/server/java", self.base_url);
        let resp = self
            .client
            .get(&url)
            .query(&address_query(&address))
            .send()
            .await?;
        decode_nullable(resp).await
    }
}

/// Pings Bedrock edition servers through the status API.
#[derive(Debug, Clone)]
pub struct BedrockServerFetcher {
    client: reqwest::Client,
    base_url: String,
}

impl BedrockServerFetcher {
    /// Create a fetcher against a status API base URL.
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl Fetcher for BedrockServerFetcher {
    type Record = BedrockServerStatus;

    fn namespace(&self) -> &'static str {
        "bserver"
    }

    #[instrument(skip(self))]
    async fn fetch(&self, subject: &str) -> FetchResult<BedrockServerStatus> {
        let address = ServerAddress::parse(subject, None)?;
        let url = format!("{}/server/bedrock", self.base_url);
        let resp = self
            .client
            .get(&url)
            .query(&address_query(&address))
            .send()
            .await?;
        decode_nullable(resp).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn java_status_round_trips_without_optional_fields() {
        let status = JavaServerStatus {
            description: None,
            players: JavaPlayers {
                online: 5,
                max: 20,
                sample: None,
            },
            version: None,
            favicon: None,
        };
        let value = serde_json::to_value(&status).unwrap();
        // Absent fields are omitted from the cached blob entirely.
        assert_eq!(
            value,
            serde_json::json!({"players": {"online": 5, "max": 20}})
        );
        let back: JavaServerStatus = serde_json::from_value(value).unwrap();
        assert_eq!(back, status);
    }

    #[test]
    fn bedrock_status_decodes_full_payload() {
        let status: BedrockServerStatus = serde_json::from_str(
            r#"{
                "motd": "Welcome!",
                "players": {"online": 12, "max": 100, "names": ["steve", "alex"]},
                "software": {"version": "1.20.1"},
                "map": "world"
            }"#,
        )
        .unwrap();
        assert_eq!(status.players.online, 12);
        assert_eq!(status.players.names.as_deref(), Some(&["steve".to_string(), "alex".to_string()][..]));
    }

    #[test]
    fn query_includes_port_only_when_present() {
        let bare = ServerAddress::parse("mc.example.com", None).unwrap();
        assert_eq!(address_query(&bare).len(), 1);

        let with_port = ServerAddress::parse("mc.example.com:25565", None).unwrap();
        let query = address_query(&with_port);
        assert_eq!(query[1], ("port", "25565".to_string()));
    }
}
