//! Brave Search API client.

use async_trait::async_trait;
use reqwest::Url;
use reqwest::header::{ACCEPT, HeaderValue};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, instrument, warn};

use super::{QueryParams, SearchClientError, SearchError};
use crate::core::config::{API_KEY_ENV, SearchConfig};

/// Header carrying the provider API key.
pub const SUBSCRIPTION_TOKEN_HEADER: &str = "X-Subscription-Token";

/// Adapter interface injected into every search tool handler.
///
/// Implementations perform exactly one request per call and never retry.
#[async_trait]
pub trait SearchApi: Send + Sync {
    /// GET `endpoint` (relative to the provider base URL) with `params` and
    /// return the decoded JSON body unchanged.
    async fn fetch_json(&self, endpoint: &str, params: &QueryParams) -> Result<Value, SearchError>;
}

/// reqwest-backed [`SearchApi`] for the Brave Search API.
///
/// Built once from an immutable [`SearchConfig`]. The inner client pools
/// connections, so a single instance is shared by all handlers.
#[derive(Clone)]
pub struct BraveSearchClient {
    http: reqwest::Client,
    base_url: Url,
    api_key: Option<String>,
}

impl std::fmt::Debug for BraveSearchClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BraveSearchClient")
            .field("base_url", &self.base_url.as_str())
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl BraveSearchClient {
    /// Create a client from the search configuration.
    pub fn new(config: &SearchConfig) -> Result<Self, SearchClientError> {
        let base_url =
            Url::parse(&config.base_url).map_err(|e| SearchClientError::InvalidBaseUrl {
                url: config.base_url.clone(),
                reason: e.to_string(),
            })?;

        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            http: builder.build()?,
            base_url,
            api_key: config.api_key.clone(),
        })
    }

    /// Build the full request URL for `endpoint` with `params` as query string.
    pub fn endpoint_url(&self, endpoint: &str, params: &QueryParams) -> Result<Url, SearchError> {
        let joined = format!(
            "{}/{}",
            self.base_url.as_str().trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        );
        let mut url = Url::parse(&joined).map_err(|e| SearchError::transport(e.to_string()))?;

        let query = params
            .to_query_string()
            .map_err(|e| SearchError::transport(e.to_string()))?;
        if !query.is_empty() {
            url.set_query(Some(&query));
        }

        Ok(url)
    }
}

#[async_trait]
impl SearchApi for BraveSearchClient {
    #[instrument(skip(self, params), fields(params = params.len()))]
    async fn fetch_json(&self, endpoint: &str, params: &QueryParams) -> Result<Value, SearchError> {
        let Some(api_key) = self.api_key.as_deref() else {
            return Err(SearchError::MissingCredential { key: API_KEY_ENV });
        };

        let url = self.endpoint_url(endpoint, params)?;
        debug!("GET {}", url);

        // reqwest's gzip feature adds `Accept-Encoding: gzip` and decodes the body.
        let response = self
            .http
            .get(url)
            .header(ACCEPT, HeaderValue::from_static("application/json"))
            .header(SUBSCRIPTION_TOKEN_HEADER, api_key)
            .send()
            .await
            .map_err(|e| {
                warn!("Search request failed: {}", e);
                SearchError::transport(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .map_err(|e| SearchError::transport(e.to_string()))?;
            warn!("Search API returned {}", status);
            return Err(SearchError::status(status.as_u16(), body));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| SearchError::transport(e.to_string()))?;

        debug!("Search API response received: {} bytes", bytes.len());

        serde_json::from_slice(&bytes)
            .map_err(|e| SearchError::transport(format!("JSON parse error: {e}")))
    }
}
