//! Mojira bug tracker fetcher.

use crate::http::decode;
use crate::{FetchResult, Fetcher};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::instrument;

const MOJIRA_API: &str = "https://bugs.mojang.com/rest/api/latest";

/// A named Mojira entity (project, issue type, status, resolution, version).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Named {
    /// Display name.
    pub name: String,
}

/// The fields block of a Mojira issue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IssueFields {
    /// One-line summary.
    pub summary: String,
    /// Long-form description, absent on some issues.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub description: Option<String>,
    /// Project the issue belongs to (e.g. MC, MCPE).
    pub project: Named,
    /// Reporter display name.
    pub creator: Creator,
    /// Creation timestamp as reported by Jira.
    pub created: String,
    /// Last-update timestamp as reported by Jira.
    pub updated: String,
    /// Vote tally.
    pub votes: Votes,
    /// Watcher tally.
    pub watches: Watches,
    /// Issue type (bug, wish, ...).
    pub issuetype: Named,
    /// Workflow status.
    pub status: Named,
    /// Resolution once closed.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub resolution: Option<Named>,
    /// Affected versions.
    #[serde(default)]
    pub versions: Vec<Named>,
    /// Versions the fix landed in.
    #[serde(rename = "fixVersions", default)]
    pub fix_versions: Vec<Named>,
}

/// Issue reporter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Creator {
    /// Public display name.
    #[serde(rename = "displayName")]
    pub display_name: String,
}

/// Vote tally wrapper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Votes {
    /// Number of votes.
    pub votes: u64,
}

/// Watcher tally wrapper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Watches {
    /// Number of watchers.
    #[serde(rename = "watchCount")]
    pub watch_count: u64,
}

/// A Mojira issue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MojiraIssue {
    /// Issue key, e.g. `MC-4`.
    pub key: String,
    /// Issue fields.
    pub fields: IssueFields,
}

impl MojiraIssue {
    /// Browse URL for the issue.
    pub fn browse_url(&self) -> String {
        format!("https://bugs.mojang.com/browse/{}", self.key)
    }
}

/// Fetches issues from the Mojira bug tracker.
///
/// Subjects are issue keys such as `MC-4`; unknown keys answer 404 upstream.
/// Results are not cached by the bot, so this fetcher is called directly
/// rather than through the cache-aside lookup.
#[derive(Debug, Clone)]
pub struct BugReportFetcher {
    client: reqwest::Client,
}

impl BugReportFetcher {
    /// Create a fetcher over the shared connection pool.
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Fetcher for BugReportFetcher {
    type Record = MojiraIssue;

    fn namespace(&self) -> &'static str {
        "mcbug"
    }

    #[instrument(skip(self))]
    async fn fetch(&self, subject: &str) -> FetchResult<MojiraIssue> {
        let url = format!("{MOJIRA_API}/issue/{subject}");
        let resp = self.client.get(&url).send().await?;
        decode(resp).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issue_decodes_with_sparse_fields() {
        let issue: MojiraIssue = serde_json::from_str(
            r#"{
                "key": "MC-4",
                "fields": {
                    "summary": "Item position desync",
                    "project": {"name": "Minecraft: Java Edition"},
                    "creator": {"displayName": "herobrine"},
                    "created": "2012-10-23T21:00:00.000+0000",
                    "updated": "2023-01-11T09:30:00.000+0000",
                    "votes": {"votes": 1312},
                    "watches": {"watchCount": 420},
                    "issuetype": {"name": "Bug"},
                    "status": {"name": "Open"}
                }
            }"#,
        )
        .unwrap();
        assert_eq!(issue.browse_url(), "https://bugs.mojang.com/browse/MC-4");
        assert!(issue.fields.resolution.is_none());
        assert!(issue.fields.fix_versions.is_empty());
    }
}
