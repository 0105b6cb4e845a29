//! Shared fixtures for the quotedeck behavioral tests.
//!
//! [`ScriptedTransport`] stands in for the network: each route is keyed by
//! its path-and-query suffix and can delay its response, which is how the
//! stale-response guard is exercised deterministically offline.

use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use quotedeck_core::{
    ApiConfig, CompanyInfo, DashboardClient, HttpError, HttpRequest, HttpResponse, HttpTransport,
};

pub const TEST_BASE_URL: &str = "http://backend.test";

#[derive(Debug, Clone)]
struct ScriptedResponse {
    status: u16,
    body: String,
    delay: Duration,
}

/// Offline transport answering from a scripted route table.
#[derive(Debug, Default)]
pub struct ScriptedTransport {
    routes: Mutex<HashMap<String, ScriptedResponse>>,
    requests: Mutex<Vec<String>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script a route by its path-and-query, e.g. `/data/TCS.NS?days=30`.
    pub fn on(self, path_and_query: &str, status: u16, body: &str) -> Self {
        self.on_delayed(path_and_query, status, body, Duration::ZERO)
    }

    pub fn on_delayed(
        self,
        path_and_query: &str,
        status: u16,
        body: &str,
        delay: Duration,
    ) -> Self {
        self.routes.lock().unwrap().insert(
            path_and_query.to_owned(),
            ScriptedResponse {
                status,
                body: body.to_owned(),
                delay,
            },
        );
        self
    }

    /// URLs seen so far, in request order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    fn lookup(&self, url: &str) -> Option<ScriptedResponse> {
        let routes = self.routes.lock().unwrap();
        routes
            .iter()
            .find(|(path, _)| url.ends_with(path.as_str()))
            .map(|(_, response)| response.clone())
    }
}

impl HttpTransport for ScriptedTransport {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> Pin<Box<dyn Future<Output = Result<HttpResponse, HttpError>> + Send + 'a>> {
        self.requests.lock().unwrap().push(request.url.clone());
        let scripted = self.lookup(&request.url);
        Box::pin(async move {
            match scripted {
                Some(response) => {
                    if !response.delay.is_zero() {
                        tokio::time::sleep(response.delay).await;
                    }
                    Ok(HttpResponse {
                        status: response.status,
                        body: response.body,
                    })
                }
                None => Err(HttpError::new("connection refused")),
            }
        })
    }
}

/// Client wired to a scripted transport.
pub fn scripted_client(transport: Arc<ScriptedTransport>) -> Arc<DashboardClient> {
    Arc::new(DashboardClient::new(
        ApiConfig::with_base_url(TEST_BASE_URL),
        transport,
    ))
}

pub fn company(symbol: &str) -> CompanyInfo {
    CompanyInfo {
        symbol: String::from(symbol),
        name: format!("{symbol} Ltd"),
        current_price: Some(1000.0),
        daily_change: Some(1.2),
    }
}

pub fn companies_body() -> String {
    String::from(
        r#"{
        "count": 2,
        "companies": [
            {"symbol": "TCS.NS", "name": "Tata Consultancy Services",
             "current_price": 3500.5, "daily_change": 1.25},
            {"symbol": "INFY.NS", "name": "Infosys",
             "current_price": 1450.0, "daily_change": -0.4}
        ]
    }"#,
    )
}

pub fn series_body(symbol: &str, dates: &[(&str, f64)]) -> String {
    let points: Vec<String> = dates
        .iter()
        .map(|(date, close)| {
            format!(
                r#"{{"date": "{date}", "open": {close}, "high": {close},
                    "low": {close}, "close": {close}, "volume": 100000,
                    "ma_7": null, "ma_20": null}}"#
            )
        })
        .collect();
    format!(
        r#"{{"symbol": "{symbol}", "name": "{symbol} Ltd", "days": {},
            "data": [{}]}}"#,
        dates.len(),
        points.join(",")
    )
}

pub fn comparison_body() -> String {
    String::from(
        r#"{
        "symbols": ["A", "B"],
        "period": {"start": "2024-01-01", "end": "2024-01-02"},
        "correlation": {"price": 0.91, "returns": 0.78},
        "performance": {
            "A": {"total_return": 12.5, "avg_daily_return": 0.06, "volatility": 1.1},
            "B": {"total_return": 8.25, "avg_daily_return": 0.04, "volatility": 0.9}
        },
        "chart_data": {
            "dates": ["d1", "d2"],
            "A": [1.0, 2.0],
            "B": [3.0, 4.0]
        }
    }"#,
    )
}

pub fn prediction_body() -> String {
    String::from(
        r#"{
        "symbol": "TCS.NS",
        "current_price": 3500.0,
        "prediction_days": 3,
        "predictions": [3510.0, 3522.0, 3530.0],
        "dates": ["2024-02-01", "2024-02-02", "2024-02-03"],
        "confidence": {
            "lower": [3480.0, 3490.0, 3495.0],
            "upper": [3540.0, 3555.0, 3565.0]
        },
        "summary": {
            "expected_price": 3530.0,
            "expected_return": 0.86,
            "trend": "bullish",
            "min_prediction": 3510.0,
            "max_prediction": 3530.0
        }
    }"#,
    )
}
