//! HTTP client for the portfolio API server.
//!
//! Every call is awaited independently and surfaces its failure exactly
//! once: there are no retries and no optimistic local state, so a failed
//! request leaves the caller's last good state untouched.

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use serde::Serialize;

use folio_core::backup::{BackupPayload, ImportStrategy};
use folio_core::errors::{Error, Result};
use folio_core::portfolio::holdings::Holding;
use folio_core::portfolio::snapshot::PortfolioSnapshot;
use folio_core::portfolio::summary::PortfolioSummary;

use crate::models::{MutationAck, SnapshotCreated};

/// Default timeout for API requests.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default base URL for a locally running portfolio API server.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Error body shape the API server uses: `{"detail": "..."}`.
#[derive(Debug, serde::Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    detail: Option<String>,
}

/// The portfolio API surface.
///
/// Mirrors the server's endpoints one-to-one; implemented by
/// [`PortfolioApiClient`] and by test doubles.
#[async_trait]
pub trait PortfolioApi: Send + Sync {
    async fn list_holdings(&self) -> Result<Vec<Holding>>;
    async fn create_holding(&self, holding: &Holding) -> Result<MutationAck>;
    async fn update_holding(&self, id: &str, holding: &Holding) -> Result<MutationAck>;
    async fn delete_holding(&self, id: &str) -> Result<MutationAck>;
    async fn get_summary(&self) -> Result<PortfolioSummary>;
    async fn create_snapshot(&self) -> Result<SnapshotCreated>;
    async fn get_history(&self) -> Result<Vec<PortfolioSnapshot>>;
    async fn delete_snapshot(&self, id: &str) -> Result<MutationAck>;
    async fn restore_snapshot(&self, id: &str) -> Result<MutationAck>;
    async fn export_data(&self) -> Result<BackupPayload>;
    async fn import_data(
        &self,
        payload: &BackupPayload,
        strategy: ImportStrategy,
    ) -> Result<MutationAck>;
}

/// HTTP client for the portfolio API.
///
/// # Example
///
/// ```ignore
/// let client = PortfolioApiClient::new("http://localhost:8000")?;
/// let summary = client.get_summary().await?;
/// ```
#[derive(Debug, Clone)]
pub struct PortfolioApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl PortfolioApiClient {
    /// Create a client with the default request timeout.
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_timeout(base_url, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Create a client with an explicit request timeout.
    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Gateway(format!("Failed to initialize HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!("[PortfolioApi] GET {}", url);

        let response = self
            .client
            .get(&url)
            .headers(self.headers())
            .send()
            .await
            .map_err(|e| Error::Gateway(format!("Request failed: {e}")))?;

        self.parse_response(response).await
    }

    async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: Option<&B>,
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!("[PortfolioApi] POST {}", url);

        let mut request = self.client.post(&url).headers(self.headers());
        if let Some(body) = body {
            request = request.json(body);
        }
        let response = request
            .send()
            .await
            .map_err(|e| Error::Gateway(format!("Request failed: {e}")))?;

        self.parse_response(response).await
    }

    async fn put<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!("[PortfolioApi] PUT {}", url);

        let response = self
            .client
            .put(&url)
            .headers(self.headers())
            .json(body)
            .send()
            .await
            .map_err(|e| Error::Gateway(format!("Request failed: {e}")))?;

        self.parse_response(response).await
    }

    async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!("[PortfolioApi] DELETE {}", url);

        let response = self
            .client
            .delete(&url)
            .headers(self.headers())
            .send()
            .await
            .map_err(|e| Error::Gateway(format!("Request failed: {e}")))?;

        self.parse_response(response).await
    }

    /// Parse an HTTP response, extracting the server's error detail when
    /// the status is not a success.
    async fn parse_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| Error::Gateway(format!("Failed to read response: {e}")))?;

        if !status.is_success() {
            if let Ok(err) = serde_json::from_str::<ApiErrorBody>(&body) {
                if let Some(detail) = err.detail {
                    return Err(Error::Gateway(format!("API error: {detail}")));
                }
            }
            return Err(Error::Gateway(format!(
                "API error {}: {}",
                status,
                body.chars().take(200).collect::<String>()
            )));
        }

        serde_json::from_str(&body)
            .map_err(|e| Error::Gateway(format!("Failed to parse response: {e}")))
    }
}

#[async_trait]
impl PortfolioApi for PortfolioApiClient {
    async fn list_holdings(&self) -> Result<Vec<Holding>> {
        self.get("/holdings").await
    }

    async fn create_holding(&self, holding: &Holding) -> Result<MutationAck> {
        self.post("/holdings", Some(holding)).await
    }

    async fn update_holding(&self, id: &str, holding: &Holding) -> Result<MutationAck> {
        self.put(&format!("/holdings/{id}"), holding).await
    }

    async fn delete_holding(&self, id: &str) -> Result<MutationAck> {
        self.delete(&format!("/holdings/{id}")).await
    }

    async fn get_summary(&self) -> Result<PortfolioSummary> {
        self.get("/portfolio/summary").await
    }

    async fn create_snapshot(&self) -> Result<SnapshotCreated> {
        self.post::<(), _>("/snapshot", None).await
    }

    async fn get_history(&self) -> Result<Vec<PortfolioSnapshot>> {
        self.get("/history").await
    }

    async fn delete_snapshot(&self, id: &str) -> Result<MutationAck> {
        self.delete(&format!("/history/{id}")).await
    }

    async fn restore_snapshot(&self, id: &str) -> Result<MutationAck> {
        self.post::<(), _>(&format!("/snapshot/{id}/restore"), None)
            .await
    }

    async fn export_data(&self) -> Result<BackupPayload> {
        self.get("/export").await
    }

    async fn import_data(
        &self,
        payload: &BackupPayload,
        strategy: ImportStrategy,
    ) -> Result<MutationAck> {
        self.post(&format!("/import?strategy={}", strategy.as_str()), Some(payload))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = PortfolioApiClient::new(DEFAULT_API_URL);
        assert!(client.is_ok());
    }

    #[test]
    fn test_client_url_normalization() {
        let client = PortfolioApiClient::new("http://localhost:8000/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:8000");
    }
}
