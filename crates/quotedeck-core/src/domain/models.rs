//! Wire payload models for the dashboard backend.
//!
//! Every type here mirrors a backend response verbatim; nothing is computed
//! client-side. Field ordering inside arrays (dates ascending) is
//! significant and preserved as returned.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One instrument in the fixed universe, with its latest market snapshot.
///
/// Identity is the exchange-qualified `symbol`; price fields are absent when
/// the backend has no fresh data for the instrument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyInfo {
    pub symbol: String,
    pub name: String,
    pub current_price: Option<f64>,
    /// Daily change as a percentage.
    pub daily_change: Option<f64>,
}

/// Response wrapper for the company list endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyList {
    pub count: usize,
    pub companies: Vec<CompanyInfo>,
}

/// One trading day of price history with backend-derived indicators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    /// ISO date, `YYYY-MM-DD`.
    pub date: String,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
    #[serde(default)]
    pub daily_return: Option<f64>,
    #[serde(default)]
    pub ma_7: Option<f64>,
    #[serde(default)]
    pub ma_20: Option<f64>,
    #[serde(default)]
    pub volatility: Option<f64>,
    #[serde(default)]
    pub momentum: Option<f64>,
}

/// Price history for one symbol, ascending by date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesResponse {
    pub symbol: String,
    pub name: String,
    pub days: u32,
    pub data: Vec<SeriesPoint>,
}

/// Point-in-time statistics snapshot for one symbol. No history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockSummary {
    pub symbol: String,
    pub name: String,
    pub current_price: f64,
    pub daily_return: f64,
    pub high_52w: f64,
    pub low_52w: f64,
    pub avg_close: f64,
    pub avg_volume: u64,
    pub volatility: f64,
    pub momentum: f64,
    pub trend_strength: f64,
}

/// Date window covered by a comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodWindow {
    pub start: String,
    pub end: String,
}

/// Pairwise correlation coefficients, pre-rounded by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrelationPair {
    pub price: f64,
    pub returns: f64,
}

/// Per-symbol performance block inside a comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymbolPerformance {
    pub total_return: f64,
    pub avg_daily_return: f64,
    pub volatility: f64,
}

/// Overlay chart payload: shared `dates` plus one value array per symbol.
///
/// The symbol keys are dynamic, so everything except `dates` flattens into
/// a map keyed by symbol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub dates: Vec<String>,
    #[serde(flatten)]
    pub series: BTreeMap<String, Vec<f64>>,
}

/// Full two-symbol comparison result.
///
/// Invariant (validated by the overlay transformer, not on decode): each
/// symbol's series in `chart_data` has the same length as `dates`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub symbols: Vec<String>,
    pub period: PeriodWindow,
    pub correlation: CorrelationPair,
    pub performance: BTreeMap<String, SymbolPerformance>,
    pub chart_data: ChartData,
}

/// Cross-universe correlation grid.
///
/// Expected square and symmetric with unit diagonal; the cell transformer
/// verifies this before exposing lookups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrelationMatrix {
    pub symbols: Vec<String>,
    pub matrix: Vec<Vec<f64>>,
}

/// Gainers/losers snapshot for the most recent trading day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopMovers {
    pub date: String,
    pub gainers: Vec<CompanyInfo>,
    pub losers: Vec<CompanyInfo>,
}

/// Forecast direction as labelled by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Bullish,
    Bearish,
    Neutral,
}

/// Confidence envelope around the point forecasts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceInterval {
    pub lower: Vec<f64>,
    pub upper: Vec<f64>,
}

/// Backend-computed digest of a forecast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionSummary {
    pub expected_price: f64,
    /// Expected return over the horizon, percent.
    pub expected_return: f64,
    pub trend: Trend,
    pub min_prediction: f64,
    pub max_prediction: f64,
}

/// ML price forecast for one symbol.
///
/// `dates`, `predictions`, `confidence.lower` and `confidence.upper` are
/// parallel arrays; the band transformer rejects payloads where they
/// disagree or where a band fails to contain its point forecast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub symbol: String,
    pub current_price: f64,
    pub prediction_days: u32,
    pub predictions: Vec<f64>,
    pub dates: Vec<String>,
    pub confidence: ConfidenceInterval,
    pub summary: PredictionSummary,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chart_data_flattens_symbol_keys() {
        let payload = r#"{
            "dates": ["2024-01-01", "2024-01-02"],
            "TCS.NS": [1.0, 2.0],
            "INFY.NS": [3.0, 4.0]
        }"#;

        let chart: ChartData = serde_json::from_str(payload).expect("chart data decodes");
        assert_eq!(chart.dates.len(), 2);
        assert_eq!(chart.series["TCS.NS"], vec![1.0, 2.0]);
        assert_eq!(chart.series["INFY.NS"], vec![3.0, 4.0]);
    }

    #[test]
    fn trend_decodes_lowercase_labels() {
        let trend: Trend = serde_json::from_str(r#""bullish""#).expect("trend decodes");
        assert_eq!(trend, Trend::Bullish);
    }

    #[test]
    fn company_tolerates_null_market_fields() {
        let payload = r#"{"symbol": "WIPRO.NS", "name": "Wipro",
                          "current_price": null, "daily_change": null}"#;
        let company: CompanyInfo = serde_json::from_str(payload).expect("company decodes");
        assert!(company.current_price.is_none());
        assert!(company.daily_change.is_none());
    }
}
