//! reqwest-backed implementation of [`UserSource`].
//!
//! Each call is a single GET with no retry. Failures are logged once at
//! `ERROR` and handed back to the caller unchanged.

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use super::{FetchError, UserSource};
use crate::config::ApiConfig;
use crate::constants::{PAGE_SIZE, SUMMARY_FIELDS, USER_AGENT};
use crate::models::{Envelope, UserRecord, UserSummary};

/// Fetches pages of users from the configured endpoint.
///
/// Holds no mutable state. Cloning shares the underlying connection pool,
/// and concurrent calls do not coordinate with each other.
#[derive(Clone, Debug)]
pub struct UserFetcher {
    client: reqwest::Client,
    config: ApiConfig,
}

impl UserFetcher {
    /// Build a fetcher for `config`.
    ///
    /// The base URL is used as given; run [`ApiConfig::validate`] first if
    /// it comes from user input.
    pub fn new(config: ApiConfig) -> Result<Self, FetchError> {
        let mut builder = reqwest::Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(FetchError::Client)?;
        Ok(Self { client, config })
    }

    /// Settings this fetcher was built with.
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Fetch page `page` (1-based) of full user records.
    ///
    /// `include_fields` is forwarded verbatim as `inc`. When `None`, the
    /// configured default selector is used; when that is unset too, no
    /// `inc` is sent and the upstream returns every field.
    pub async fn fetch(
        &self,
        page: u32,
        include_fields: Option<&str>,
    ) -> Result<Vec<UserRecord>, FetchError> {
        let include_fields = include_fields.or(self.config.include_fields.as_deref());
        self.fetch_page(page, include_fields).await
    }

    /// Fetch page `page` restricted to the fields of [`UserSummary`].
    pub async fn fetch_summaries(&self, page: u32) -> Result<Vec<UserSummary>, FetchError> {
        self.fetch_page(page, Some(SUMMARY_FIELDS)).await
    }

    async fn fetch_page<T: DeserializeOwned>(
        &self,
        page: u32,
        include_fields: Option<&str>,
    ) -> Result<Vec<T>, FetchError> {
        self.request_page(page, include_fields)
            .await
            .inspect_err(|err| {
                tracing::error!(page, error = %err, "error while fetching users");
            })
    }

    async fn request_page<T: DeserializeOwned>(
        &self,
        page: u32,
        include_fields: Option<&str>,
    ) -> Result<Vec<T>, FetchError> {
        tracing::debug!(
            url = %self.config.base_url,
            page,
            inc = include_fields.unwrap_or(""),
            "requesting user page"
        );

        let response = self
            .client
            .get(self.config.base_url.as_str())
            .query(&page_query(page, include_fields))
            .send()
            .await?
            .error_for_status()?;

        let body = response.bytes().await?;
        let envelope: Envelope<T> = serde_json::from_slice(&body)?;
        Ok(envelope.results)
    }
}

#[async_trait]
impl UserSource for UserFetcher {
    async fn page(
        &self,
        page: u32,
        include_fields: Option<&str>,
    ) -> Result<Vec<UserRecord>, FetchError> {
        self.fetch(page, include_fields).await
    }

    async fn summaries(&self, page: u32) -> Result<Vec<UserSummary>, FetchError> {
        self.fetch_summaries(page).await
    }
}

/// Query pairs for one page request, in wire order.
fn page_query(page: u32, include_fields: Option<&str>) -> Vec<(&'static str, String)> {
    let mut query = vec![
        ("results", PAGE_SIZE.to_string()),
        ("page", page.to_string()),
    ];
    if let Some(inc) = include_fields {
        query.push(("inc", inc.to_string()));
    }
    query
}
