use reqwest::Client;
use std::time::Duration;

use crate::backend::models::{CurrentResponse, HistoricalResponse, SummaryResponse};
use crate::config::Config;
use crate::error::{AppError, AppResult};

pub struct BackendClient {
    http_client: Client,
    base_url: String,
}

impl BackendClient {
    #[must_use]
    pub fn new(config: &Config) -> Self {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_seconds))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            http_client,
            base_url: config.backend_base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Get the latest reading of every sensor.
    ///
    /// # Errors
    ///
    /// Returns `AppError::BackendApi` if the request fails or returns an error status.
    pub async fn current(&self) -> AppResult<CurrentResponse> {
        let url = format!("{}/api/data/current", self.base_url);

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::BackendApi(format!("Request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(AppError::BackendApi(format!(
                "HTTP {}: {}",
                response.status(),
                response.text().await.unwrap_or_default()
            )));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::BackendApi(format!("Failed to parse response: {e}")))
    }

    /// Get the PPFD time series of every sensor over the requested day range.
    ///
    /// `range_days` of 1 means "since local midnight" on the backend side.
    ///
    /// # Errors
    ///
    /// Returns `AppError::BackendApi` if the request fails or returns an error status,
    /// including the 404 the backend sends when the range holds no data.
    pub async fn historical(&self, range_days: u32) -> AppResult<HistoricalResponse> {
        let url = format!(
            "{}/api/data/historical?range_days={}",
            self.base_url, range_days
        );

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::BackendApi(format!("Request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(AppError::BackendApi(format!(
                "HTTP {}: {}",
                response.status(),
                response.text().await.unwrap_or_default()
            )));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::BackendApi(format!("Failed to parse response: {e}")))
    }

    /// Get aggregated DLI and average R:FR per sensor over the requested day range.
    ///
    /// # Errors
    ///
    /// Returns `AppError::BackendApi` if the request fails or returns an error status.
    pub async fn summary(&self, range_days: u32) -> AppResult<SummaryResponse> {
        let url = format!(
            "{}/api/data/summary?range_days={}",
            self.base_url, range_days
        );

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::BackendApi(format!("Request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(AppError::BackendApi(format!(
                "HTTP {}: {}",
                response.status(),
                response.text().await.unwrap_or_default()
            )));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::BackendApi(format!("Failed to parse response: {e}")))
    }
}
