//! Upstream data fetchers and the cache-aside lookup.
//!
//! Every externally-facing Netherite command resolves its data through the
//! same path: compose a cache key from the fetcher's namespace and the
//! subject identifier, return the cached record on a hit, otherwise invoke
//! the fetcher over HTTP and write the result back with a TTL. That
//! algorithm lives in [`lookup`]; the rest of the crate is one typed
//! [`Fetcher`] per third-party service.
//!
//! Outcomes are discriminated rather than exceptional: an absent subject is
//! [`Fetched::NotFound`], never an error. Transport failures, non-success
//! statuses, and undecodable payloads are a [`FetchError`]. Each fetcher
//! decodes into its own serde record type at the HTTP boundary, so malformed
//! payloads surface in exactly one place.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod address;
mod error;
mod fetcher;
mod http;
mod lookup;
mod mojang;
mod mojira;
mod outcome;
mod server;
mod wiki;
mod wynncraft;

pub use address::ServerAddress;
pub use error::{FetchError, FetchErrorKind, FetchResult};
pub use fetcher::Fetcher;
pub use lookup::lookup;
pub use mojang::{
    GameSales, MinecraftProfile, NameChange, NameHistoryFetcher, OrderStatisticsFetcher,
    ProfileFetcher, ServiceHealth, ServiceHealthFetcher,
};
pub use mojira::{BugReportFetcher, Creator, IssueFields, MojiraIssue, Named, Votes, Watches};
pub use outcome::Fetched;
pub use server::{
    BedrockPlayers, BedrockServerFetcher, BedrockServerStatus, JavaPlayers, JavaServerFetcher,
    JavaServerStatus, PlayerSample, ServerSoftware, ServerVersion,
};
pub use wiki::{WikiArticle, WikiFetcher};
pub use wynncraft::{WynncraftCharacter, WynncraftFetcher, WynncraftStats};
