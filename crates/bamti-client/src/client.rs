//! HTTP client for the dashboard analytics API.
//!
//! Wraps `reqwest` with status mapping and typed, date-converted responses.
//! This layer never substitutes fallback data; see [`crate::Acquirer`].

use std::time::Duration;

use bamti_core::{AppConfig, Comment, DateRange, SentimentDetails, SentimentOverview, Video};
use chrono::Utc;
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;

use crate::error::ClientError;
use crate::wire::{convert_all, Items, WireComment, WireDetails, WireVideo};

const DATE_PARAM_FORMAT: &str = "%Y-%m-%d";

/// Client for the analytics API.
///
/// Use [`DashboardClient::new`] with the loaded configuration or
/// [`DashboardClient::with_base_url`] to point at a mock server in tests.
#[derive(Debug, Clone)]
pub struct DashboardClient {
    client: Client,
    base_url: Url,
}

impl DashboardClient {
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] if the `reqwest::Client` cannot be built,
    /// or [`ClientError::InvalidBaseUrl`] for an unusable base URL.
    pub fn new(config: &AppConfig) -> Result<Self, ClientError> {
        Self::with_base_url(
            &config.api_base_url,
            config.request_timeout_secs,
            &config.user_agent,
        )
    }

    /// # Errors
    ///
    /// Returns [`ClientError::Http`] if the `reqwest::Client` cannot be built,
    /// or [`ClientError::InvalidBaseUrl`] for an unusable base URL.
    pub fn with_base_url(
        base_url: &str,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(timeout_secs.min(5)))
            .user_agent(user_agent)
            .build()?;

        // Exactly one trailing slash, so joining a relative path appends to
        // the base path instead of replacing its last segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let parsed = Url::parse(&normalised).map_err(|e| ClientError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;
        if parsed.cannot_be_a_base() {
            return Err(ClientError::InvalidBaseUrl {
                url: base_url.to_string(),
                reason: "URL cannot be used as a base".to_string(),
            });
        }

        Ok(Self {
            client,
            base_url: parsed,
        })
    }

    /// Fetches the analyzed comments for `keyword` inside `range`.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Http`] on network failure or timeout.
    /// - [`ClientError::NotFound`], [`ClientError::BadRequest`] or
    ///   [`ClientError::UnexpectedStatus`] on a non-2xx status.
    /// - [`ClientError::Deserialize`] or [`ClientError::InvalidDate`] if the
    ///   body does not match the expected shape.
    pub async fn comments(
        &self,
        keyword: &str,
        range: &DateRange,
    ) -> Result<Vec<Comment>, ClientError> {
        let url = self.build_url("comments", &window_params(keyword, range))?;
        let envelope: Items<WireComment> = self.get_json(&url).await?;
        convert_all(envelope.items)
    }

    /// Fetches monitored videos; `platform` narrows to one channel.
    ///
    /// # Errors
    ///
    /// Same as [`DashboardClient::comments`].
    pub async fn videos(
        &self,
        keyword: &str,
        range: &DateRange,
        platform: Option<&str>,
    ) -> Result<Vec<Video>, ClientError> {
        let mut params = window_params(keyword, range);
        if let Some(platform) = platform {
            params.push(("platform", platform.to_string()));
        }
        let url = self.build_url("videos", &params)?;
        let envelope: Items<WireVideo> = self.get_json(&url).await?;
        convert_all(envelope.items)
    }

    /// # Errors
    ///
    /// Same as [`DashboardClient::comments`].
    pub async fn sentiment_overview(
        &self,
        keyword: &str,
        range: &DateRange,
    ) -> Result<SentimentOverview, ClientError> {
        let url = self.build_url("sentiment/overview", &window_params(keyword, range))?;
        self.get_json(&url).await
    }

    /// Fetches the positive/negative comment groups. `top` asks the server
    /// to pre-select the top N% by likes; `None` returns whole groups.
    ///
    /// # Errors
    ///
    /// Same as [`DashboardClient::comments`]. The API declares an unregistered
    /// keyword with 404 ([`ClientError::NotFound`]) and a range without liked
    /// comments with 400 ([`ClientError::BadRequest`]).
    pub async fn sentiment_details(
        &self,
        keyword: &str,
        range: &DateRange,
        top: Option<u32>,
    ) -> Result<SentimentDetails, ClientError> {
        let mut params = window_params(keyword, range);
        if let Some(top) = top {
            params.push(("top", top.to_string()));
        }
        let url = self.build_url("sentiment/details", &params)?;
        let wire: WireDetails = self.get_json(&url).await?;
        wire.try_into()
    }

    /// Builds the request URL with percent-encoded query parameters.
    fn build_url(&self, path: &str, params: &[(&str, String)]) -> Result<Url, ClientError> {
        let mut url = self
            .base_url
            .join(path)
            .map_err(|e| ClientError::InvalidBaseUrl {
                url: self.base_url.to_string(),
                reason: e.to_string(),
            })?;
        {
            let mut pairs = url.query_pairs_mut();
            for (k, v) in params {
                pairs.append_pair(k, v);
            }
        }
        Ok(url)
    }

    /// Sends a GET request, maps non-2xx statuses, and decodes the body.
    async fn get_json<T: DeserializeOwned>(&self, url: &Url) -> Result<T, ClientError> {
        tracing::debug!(url = %url, "requesting");
        let response = self.client.get(url.clone()).send().await?;

        match response.status() {
            StatusCode::NOT_FOUND => {
                return Err(ClientError::NotFound {
                    url: url.to_string(),
                })
            }
            StatusCode::BAD_REQUEST => {
                return Err(ClientError::BadRequest {
                    url: url.to_string(),
                })
            }
            status if !status.is_success() => {
                return Err(ClientError::UnexpectedStatus {
                    status: status.as_u16(),
                    url: url.to_string(),
                })
            }
            _ => {}
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| ClientError::Deserialize {
            context: url.path().to_string(),
            source: e,
        })
    }
}

/// `product`, `from` and `to` query parameters. An open end is sent as today.
fn window_params(keyword: &str, range: &DateRange) -> Vec<(&'static str, String)> {
    let to = range.end_or(Utc::now());
    vec![
        ("product", keyword.to_string()),
        ("from", range.from.format(DATE_PARAM_FORMAT).to_string()),
        ("to", to.format(DATE_PARAM_FORMAT).to_string()),
    ]
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
