//! GitHub events API client

use std::time::Duration;

use async_trait::async_trait;
use commitgrid_core::ActivitySource;
use commitgrid_domain::{ActivityRecord, CommitGridError, FetchError, SourceConfig};
use reqwest::header::ACCEPT;
use tracing::{debug, warn};

use super::types::GithubEvent;
use crate::errors::{classify_status, classify_transport_error};

pub const GITHUB_API_URL: &str = "https://api.github.com";
const ACCEPT_HEADER: &str = "application/vnd.github.v3+json";
const USER_AGENT: &str = concat!("commitgrid/", env!("CARGO_PKG_VERSION"));

/// Client for the GitHub events endpoint, implementing the core
/// [`ActivitySource`] port.
///
/// One invocation issues one HTTP request; the configured timeout aborts
/// the request in flight and surfaces as [`FetchError::Timeout`].
pub struct GithubClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
    timeout: Duration,
}

impl GithubClient {
    /// Build a client from the source configuration.
    ///
    /// # Errors
    /// Returns `CommitGridError::Config` if the underlying HTTP client
    /// cannot be constructed.
    pub fn new(config: &SourceConfig) -> Result<Self, CommitGridError> {
        let timeout = Duration::from_secs(config.timeout_secs);
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|err| {
                CommitGridError::Config(format!("failed to build HTTP client: {err}"))
            })?;

        Ok(Self {
            http,
            base_url: GITHUB_API_URL.to_string(),
            token: config.token.clone(),
            timeout,
        })
    }

    /// Override the API base URL (mock servers in tests).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }
}

#[async_trait]
impl ActivitySource for GithubClient {
    async fn recent_events(
        &self,
        login: &str,
        limit: usize,
    ) -> Result<Vec<ActivityRecord>, FetchError> {
        let url = format!("{}/users/{}/events", self.base_url, login);
        debug!(%url, limit, "fetching activity events");

        let mut request = self
            .http
            .get(&url)
            .query(&[("per_page", limit)])
            .header(ACCEPT, ACCEPT_HEADER);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|err| classify_transport_error(&err, self.timeout))?;

        let status = response.status();
        if let Some(err) = classify_status(status) {
            debug!(%url, %status, "upstream rejected events request");
            return Err(err);
        }

        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|err| classify_transport_error(&err, self.timeout))?;
        let items = body
            .as_array()
            .ok_or_else(|| FetchError::MalformedResponse("expected a list of events".into()))?;

        // One bad element never blanks the whole batch.
        let mut records = Vec::with_capacity(items.len());
        for item in items {
            match serde_json::from_value::<GithubEvent>(item.clone()) {
                Ok(event) => records.push(ActivityRecord::from(event)),
                Err(err) => warn!(error = %err, "skipping malformed event record"),
            }
        }

        debug!(count = records.len(), "fetched activity events");
        Ok(records)
    }
}
