//! Minecraft wiki article fetcher.

use crate::http::decode;
use crate::{FetchResult, Fetched, Fetcher};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::instrument;

const WIKI_API: &str = "https://minecraft.gamepedia.com/api.php";

/// A wiki article's intro extract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WikiArticle {
    /// Resolved article title (after redirects).
    pub title: String,
    /// Plaintext intro extract.
    pub extract: String,
}

impl WikiArticle {
    /// Canonical article URL.
    pub fn url(&self) -> String {
        format!(
            "https://minecraft.gamepedia.com/{}",
            self.title.replace(' ', "_")
        )
    }
}

#[derive(Debug, Deserialize)]
struct QueryEnvelope {
    query: Option<PageList>,
}

#[derive(Debug, Deserialize)]
struct PageList {
    pages: Vec<Page>,
}

#[derive(Debug, Deserialize)]
struct Page {
    title: String,
    extract: Option<String>,
    #[serde(default)]
    missing: bool,
}

/// Fetches article intro extracts from the Minecraft wiki.
///
/// Subjects are search titles; spaces become underscores and redirects are
/// followed. Unknown titles come back flagged `missing` and map to
/// `NotFound`. Results are not cached by the bot.
#[derive(Debug, Clone)]
pub struct WikiFetcher {
    client: reqwest::Client,
}

impl WikiFetcher {
    /// Create a fetcher over the shared connection pool.
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Fetcher for WikiFetcher {
    type Record = WikiArticle;

    fn namespace(&self) -> &'static str {
        "wiki"
    }

    #[instrument(skip(self))]
    async fn fetch(&self, subject: &str) -> FetchResult<WikiArticle> {
        let title = subject.replace(' ', "_");
        let query = [
            ("action", "query"),
            ("titles", title.as_str()),
            ("format", "json"),
            // formatversion 2 yields pages as a clean array
            ("formatversion", "2"),
            ("prop", "extracts"),
            // only the summary paragraphs before the main content
            ("exintro", "1"),
            ("redirects", "1"),
            ("explaintext", "1"),
        ];
        let resp = self.client.get(WIKI_API).query(&query).send().await?;

        let envelope = match decode::<QueryEnvelope>(resp).await? {
            Fetched::Found(envelope) => envelope,
            Fetched::NotFound => return Ok(Fetched::NotFound),
        };
        let page = envelope
            .query
            .and_then(|list| list.pages.into_iter().last());
        match page {
            Some(page) if !page.missing => match page.extract {
                Some(extract) => Ok(Fetched::Found(WikiArticle {
                    title: page.title,
                    extract,
                })),
                None => Ok(Fetched::NotFound),
            },
            _ => Ok(Fetched::NotFound),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_replaces_spaces() {
        let article = WikiArticle {
            title: "Redstone Dust".to_string(),
            extract: String::new(),
        };
        assert_eq!(article.url(), "https://minecraft.gamepedia.com/Redstone_Dust");
    }

    #[test]
    fn missing_pages_flag_decodes() {
        let envelope: QueryEnvelope = serde_json::from_str(
            r#"{"query": {"pages": [{"title": "Nope", "missing": true}]}}"#,
        )
        .unwrap();
        let page = envelope.query.unwrap().pages.into_iter().next().unwrap();
        assert!(page.missing);
        assert!(page.extract.is_none());
    }
}
