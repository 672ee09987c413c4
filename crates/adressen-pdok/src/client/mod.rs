//! HTTP client for the PDOK Locatieserver `free` search endpoint.

mod fetch_all;
mod lookup;

use std::time::Duration;

use reqwest::{Client, Url};

use crate::error::PdokError;
use crate::pagination::QueryBatch;
use crate::types::{RawDocument, SearchEnvelope, SearchPage};

/// HTTP client for the PDOK Locatieserver.
///
/// Non-2xx responses become typed errors. There is no retry: a failed
/// request is reported to the caller, which decides whether to move on.
pub struct PdokClient {
    pub(super) client: Client,
    pub(super) endpoint: Url,
}

impl PdokClient {
    /// Creates a `PdokClient` with explicit request and connect timeouts.
    ///
    /// # Errors
    ///
    /// Returns [`PdokError::InvalidEndpoint`] if `endpoint` is not a valid
    /// URL, or [`PdokError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(
        endpoint: &str,
        timeout_secs: u64,
        connect_timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, PdokError> {
        let endpoint = Url::parse(endpoint).map_err(|e| PdokError::InvalidEndpoint {
            endpoint: endpoint.to_owned(),
            reason: e.to_string(),
        })?;
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(connect_timeout_secs))
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client, endpoint })
    }

    /// Creates a client from the application configuration.
    ///
    /// # Errors
    ///
    /// See [`PdokClient::new`].
    pub fn from_config(config: &adressen_core::AppConfig) -> Result<Self, PdokError> {
        Self::new(
            &config.pdok_endpoint,
            config.request_timeout_secs,
            config.connect_timeout_secs,
            &config.user_agent,
        )
    }

    /// Fetches the page `batch` currently points at.
    ///
    /// Returns `Ok(None)` when the body is JSON but lacks `response.docs`;
    /// callers treat that as end-of-data. Documents that do not deserialize
    /// into [`RawDocument`] are skipped.
    ///
    /// # Errors
    ///
    /// - [`PdokError::RateLimited`] on HTTP 429.
    /// - [`PdokError::UnexpectedStatus`] on any other non-2xx status.
    /// - [`PdokError::Http`] on network or TLS failure.
    /// - [`PdokError::Deserialize`] if the body is not JSON.
    pub async fn fetch_page(&self, batch: &QueryBatch<'_>) -> Result<Option<SearchPage>, PdokError> {
        let url = self.search_url(&batch.params());
        tracing::debug!(%url, "requesting PDOK page");

        let response = self
            .client
            .get(url.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;
        let status = response.status();

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let retry_after_secs = response
                .headers()
                .get(reqwest::header::RETRY_AFTER)
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse::<u64>().ok())
                .unwrap_or(60);
            return Err(PdokError::RateLimited { retry_after_secs });
        }

        if !status.is_success() {
            return Err(PdokError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        let value = serde_json::from_str::<serde_json::Value>(&body).map_err(|e| {
            PdokError::Deserialize {
                context: format!("search page for q={}", batch.query().q),
                source: e,
            }
        })?;

        Ok(decode_page(value))
    }

    /// Builds the search URL for the given parameters.
    ///
    /// Repeated keys (such as `fq`) are appended, never replaced.
    fn search_url(&self, params: &[(&str, String)]) -> Url {
        let mut url = self.endpoint.clone();
        {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in params {
                pairs.append_pair(key, value);
            }
        }
        url
    }
}

/// Decodes a parsed body into a page, or `None` if the envelope is missing.
fn decode_page(value: serde_json::Value) -> Option<SearchPage> {
    let envelope = match serde_json::from_value::<SearchEnvelope>(value) {
        Ok(envelope) => envelope,
        Err(e) => {
            tracing::warn!(error = %e, "unexpected PDOK response shape; treating as end of data");
            return None;
        }
    };

    let Some(body) = envelope.response else {
        tracing::warn!("PDOK response has no `response` object; treating as end of data");
        return None;
    };
    let Some(raw_docs) = body.docs else {
        tracing::warn!("PDOK response has no `docs` list; treating as end of data");
        return None;
    };

    let returned = raw_docs.len();
    let docs = raw_docs
        .into_iter()
        .filter_map(|raw| match serde_json::from_value::<RawDocument>(raw) {
            Ok(doc) => Some(doc),
            Err(e) => {
                tracing::debug!(error = %e, "skipping undecodable PDOK document");
                None
            }
        })
        .collect();

    Some(SearchPage {
        docs,
        returned,
        num_found: body.num_found,
    })
}

#[cfg(test)]
#[path = "../client_test.rs"]
mod tests;
