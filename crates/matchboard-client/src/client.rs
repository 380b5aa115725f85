//! HTTP client for the scores API.
//!
//! Wraps `reqwest` with one operation, [`MatchesClient::fetch_matches`]. The
//! request is sent once: no retry, no backoff. Every record in the returned
//! list goes through the lenient [`MatchRecord`] adapter, so only transport
//! and envelope problems surface as errors.

use std::num::FpCategory;
use std::time::Duration;

use matchboard_core::config::DEFAULT_USER_AGENT;
use matchboard_core::{AppConfig, MatchRecord};
use reqwest::{Client, Url};
use serde_json::Value;

use crate::error::FetchError;

const MATCHES_PATH: &str = "api/matches";

/// Client for the scores API.
///
/// Use [`MatchesClient::from_config`] in the binary or
/// [`MatchesClient::with_base_url`] to point at a mock server in tests.
pub struct MatchesClient {
    client: Client,
    base_url: Url,
}

impl MatchesClient {
    /// Creates a client from the API settings in `config`.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`FetchError::InvalidBaseUrl`] if the
    /// configured base URL does not parse.
    pub fn from_config(config: &AppConfig) -> Result<Self, FetchError> {
        Self::build(
            &config.api_base_url,
            config.request_timeout_secs,
            &config.user_agent,
        )
    }

    /// Creates a client with a custom base URL and the default user agent.
    ///
    /// # Errors
    ///
    /// Same as [`MatchesClient::from_config`].
    pub fn with_base_url(base_url: &str, timeout_secs: u64) -> Result<Self, FetchError> {
        Self::build(base_url, timeout_secs, DEFAULT_USER_AGENT)
    }

    fn build(base_url: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        // Exactly one trailing slash so `join` appends instead of replacing
        // the last path segment.
        let normalised = format!("{}/", base_url.trim().trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| FetchError::InvalidBaseUrl {
            url: base_url.to_owned(),
            reason: e.to_string(),
        })?;

        Ok(Self { client, base_url })
    }

    /// URL of the match list endpoint.
    #[must_use]
    pub fn matches_url(&self) -> Url {
        // `join` with a relative path cannot fail against a base that parsed.
        self.base_url
            .join(MATCHES_PATH)
            .unwrap_or_else(|_| self.base_url.clone())
    }

    /// Fetches every match record.
    ///
    /// # Errors
    ///
    /// - [`FetchError::Http`] on network failure.
    /// - [`FetchError::Status`] on a non-2xx status.
    /// - [`FetchError::Deserialize`] if the body is not JSON.
    /// - [`FetchError::Api`] if the body is an object carrying an `error`.
    /// - [`FetchError::InvalidShape`] for any other non-list body.
    pub async fn fetch_matches(&self) -> Result<Vec<MatchRecord>, FetchError> {
        let url = self.matches_url();
        tracing::debug!(%url, "fetching matches");

        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%url, status = status.as_u16(), "matches request failed");
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        let payload: Value =
            serde_json::from_str(&body).map_err(|e| FetchError::Deserialize {
                context: url.to_string(),
                source: e,
            })?;

        let records = parse_match_list(payload)?;
        tracing::info!(count = records.len(), "fetched matches");
        Ok(records)
    }
}

/// Interprets a decoded response body as a list of match records.
///
/// # Errors
///
/// Returns [`FetchError::Api`] when the body is an object with an `error`
/// field and [`FetchError::InvalidShape`] for any other non-array body.
pub fn parse_match_list(payload: Value) -> Result<Vec<MatchRecord>, FetchError> {
    match payload {
        Value::Array(items) => Ok(items.iter().map(MatchRecord::from_value).collect()),
        other => Err(api_error_message(&other).map_or(FetchError::InvalidShape, FetchError::Api)),
    }
}

/// Message carried by an `error` field. Falsy values (`null`, `false`, `0`,
/// blank strings) mean there is no error to report.
fn api_error_message(payload: &Value) -> Option<String> {
    match payload.get("error")? {
        Value::Null | Value::Bool(false) => None,
        Value::Number(n) if n.as_f64().map(f64::classify) == Some(FpCategory::Zero) => None,
        Value::String(s) if s.trim().is_empty() => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
