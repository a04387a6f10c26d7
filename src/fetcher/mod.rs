//! UserSource trait and the HTTP-backed user fetcher.
//!
//! [`UserSource`] decouples consumers (renderers, the CLI) from the
//! transport so they can be exercised against in-memory doubles.

pub mod http;

use async_trait::async_trait;
use thiserror::Error;

use crate::config::ApiConfig;
use crate::models::{UserRecord, UserSummary};

pub use http::UserFetcher;

/// Failure of a single page fetch.
///
/// The underlying `reqwest` or `serde_json` error is kept as the source so
/// callers can inspect the original cause.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Connection, DNS, timeout or non-success status.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Body was not a JSON envelope carrying a `results` array of users.
    #[error("failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// The HTTP client could not be constructed (e.g. TLS backend setup).
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

impl FetchError {
    /// HTTP status of the response, when the server answered with one.
    pub fn status(&self) -> Option<reqwest::StatusCode> {
        match self {
            FetchError::Transport(e) => e.status(),
            _ => None,
        }
    }
}

/// A paginated source of user records.
#[async_trait]
pub trait UserSource: Send + Sync {
    /// Fetch one page of full records, optionally narrowed by a field selector.
    async fn page(
        &self,
        page: u32,
        include_fields: Option<&str>,
    ) -> Result<Vec<UserRecord>, FetchError>;

    /// Fetch one page projected to [`UserSummary`].
    async fn summaries(&self, page: u32) -> Result<Vec<UserSummary>, FetchError>;
}

/// Fetch one page from the default endpoint with a one-off client.
///
/// Prefer holding a [`UserFetcher`] when making more than one call.
pub async fn fetch_users(
    page: u32,
    include_fields: Option<&str>,
) -> Result<Vec<UserRecord>, FetchError> {
    let fetcher = UserFetcher::new(ApiConfig::default()).inspect_err(|err| {
        tracing::error!(page, error = %err, "error while fetching users");
    })?;
    fetcher.fetch(page, include_fields).await
}
