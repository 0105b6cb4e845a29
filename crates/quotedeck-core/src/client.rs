//! API gateway client.
//!
//! Single point of contact with the dashboard backend: one named operation
//! per route, every failure normalized into [`ApiError`]. No retry, no
//! caching, no business validation of the returned numbers; callers get
//! exactly what the backend sent, decoded.

use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::config::ApiConfig;
use crate::domain::{
    CompanyInfo, CompanyList, ComparisonResult, CorrelationMatrix, Prediction, SeriesResponse,
    StockSummary, TopMovers,
};
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpTransport, ReqwestTransport};

/// Gateway to the dashboard backend.
#[derive(Clone)]
pub struct DashboardClient {
    config: ApiConfig,
    transport: Arc<dyn HttpTransport>,
}

impl DashboardClient {
    /// Production client: base URL from the environment, reqwest transport.
    pub fn from_env() -> Self {
        Self::new(ApiConfig::from_env(), Arc::new(ReqwestTransport::new()))
    }

    pub fn new(config: ApiConfig, transport: Arc<dyn HttpTransport>) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// GET `/companies`: the full instrument universe.
    pub async fn list_companies(&self) -> Result<CompanyList, ApiError> {
        self.get_json("/companies").await
    }

    /// GET `/companies/{symbol}`: one instrument's snapshot.
    pub async fn company(&self, symbol: &str) -> Result<CompanyInfo, ApiError> {
        self.get_json(&format!("/companies/{}", urlencoding::encode(symbol)))
            .await
    }

    /// GET `/data/{symbol}?days=N`: price history, ascending by date.
    ///
    /// Omitting `days` leaves the window to the backend default.
    pub async fn series(
        &self,
        symbol: &str,
        days: Option<u32>,
    ) -> Result<SeriesResponse, ApiError> {
        let mut path = format!("/data/{}", urlencoding::encode(symbol));
        if let Some(days) = days {
            path.push_str(&format!("?days={days}"));
        }
        self.get_json(&path).await
    }

    /// GET `/summary/{symbol}`: statistics snapshot.
    pub async fn summary(&self, symbol: &str) -> Result<StockSummary, ApiError> {
        self.get_json(&format!("/summary/{}", urlencoding::encode(symbol)))
            .await
    }

    /// GET `/compare?symbol1=&symbol2=`: pairwise comparison.
    pub async fn compare(&self, symbol1: &str, symbol2: &str) -> Result<ComparisonResult, ApiError> {
        let path = format!(
            "/compare?symbol1={}&symbol2={}",
            urlencoding::encode(symbol1),
            urlencoding::encode(symbol2)
        );
        self.get_json(&path).await
    }

    /// GET `/compare/correlation-matrix`: universe-wide correlation grid.
    pub async fn correlation_matrix(&self) -> Result<CorrelationMatrix, ApiError> {
        self.get_json("/compare/correlation-matrix").await
    }

    /// GET `/top-movers`: latest-session gainers and losers.
    pub async fn top_movers(&self) -> Result<TopMovers, ApiError> {
        self.get_json("/top-movers").await
    }

    /// GET `/predict/{symbol}?days=N`: ML forecast (backend default 7 days).
    pub async fn predict(&self, symbol: &str, days: Option<u32>) -> Result<Prediction, ApiError> {
        let mut path = format!("/predict/{}", urlencoding::encode(symbol));
        if let Some(days) = days {
            path.push_str(&format!("?days={days}"));
        }
        self.get_json(&path).await
    }

    /// POST `/predict/train`: kick off model training.
    ///
    /// Fire-and-forget: the backend trains asynchronously and this call does
    /// not await completion. The ack payload is opaque to this layer.
    pub async fn train_models(&self) -> Result<serde_json::Value, ApiError> {
        let url = format!("{}/predict/train", self.config.base_url());
        let request = HttpRequest::post(url).with_timeout(self.config.timeout());
        self.dispatch(request).await
    }

    /// GET `/predict/status/{symbol}`: opaque trained-model status.
    pub async fn model_status(&self, symbol: &str) -> Result<serde_json::Value, ApiError> {
        self.get_json(&format!("/predict/status/{}", urlencoding::encode(symbol)))
            .await
    }

    /// GET `/health`: backend liveness probe.
    pub async fn health(&self) -> Result<serde_json::Value, ApiError> {
        self.get_json("/health").await
    }

    async fn get_json<T: DeserializeOwned>(&self, path_and_query: &str) -> Result<T, ApiError> {
        let url = format!("{}{}", self.config.base_url(), path_and_query);
        let request = HttpRequest::get(url).with_timeout(self.config.timeout());
        self.dispatch(request).await
    }

    async fn dispatch<T: DeserializeOwned>(&self, request: HttpRequest) -> Result<T, ApiError> {
        let url = request.url.clone();
        let response = self
            .transport
            .execute(request)
            .await
            .map_err(|e| ApiError::transport(e.message()))?;

        if !response.is_success() {
            tracing::warn!(url = %url, status = response.status, "backend request failed");
            return Err(ApiError::status(
                response.status,
                error_detail(&response.body),
            ));
        }

        serde_json::from_str(&response.body)
            .map_err(|e| ApiError::decode(format!("failed to decode response from {url}: {e}")))
    }
}

/// Pull the FastAPI `detail` field out of an error body when present.
fn error_detail(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            value
                .get("detail")
                .and_then(|detail| detail.as_str().map(str::to_owned))
        })
        .unwrap_or_else(|| {
            let trimmed = body.trim();
            if trimmed.is_empty() {
                String::from("no error detail")
            } else {
                trimmed.chars().take(200).collect()
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_fastapi_detail() {
        let body = r#"{"detail": "Stock TCS.NS not found"}"#;
        assert_eq!(error_detail(body), "Stock TCS.NS not found");
    }

    #[test]
    fn falls_back_to_raw_body() {
        assert_eq!(error_detail("gateway exploded"), "gateway exploded");
        assert_eq!(error_detail("   "), "no error detail");
    }
}
