//! # Quotedeck Core
//!
//! Data-orchestration layer for the quotedeck equities dashboard.
//!
//! ## Overview
//!
//! This crate owns everything between the remote analytics backend and a
//! presentational consumer:
//!
//! - **Gateway client**: one named operation per backend route, every
//!   failure normalized to a single error type
//! - **Resource observers**: per-resource fetch lifecycles with a
//!   stale-response guard
//! - **Selection store**: the shared selection/compare/time-range state
//!   with a fixed mutation surface
//! - **View-model transformers**: pure payload reshaping with integrity
//!   validation
//! - **Formatters**: total display-string helpers
//!
//! Rendering, routing, and the backend's metric/model computation are out
//! of scope; consumers read state snapshots and rows, nothing more.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | API gateway client |
//! | [`config`] | Base URL and timeout configuration |
//! | [`domain`] | Wire payload models |
//! | [`error`] | Gateway and integrity error types |
//! | [`format`] | Display formatting utilities |
//! | [`http`] | Transport trait and reqwest implementation |
//! | [`resource`] | Async resource observers |
//! | [`selection`] | Selection/compare state store |
//! | [`supervise`] | Panic-supervised derivation regions |
//! | [`view`] | View-model transformers |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use quotedeck_core::{resource, DashboardClient, SeriesParams};
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = Arc::new(DashboardClient::from_env());
//!     let history = resource::series(&client);
//!     let mut updates = history.observe();
//!
//!     history.set_params(Some(SeriesParams {
//!         symbol: String::from("TCS.NS"),
//!         days: 30,
//!     }));
//!
//!     while updates.changed().await.is_ok() {
//!         let state = updates.borrow().clone();
//!         if let Some(series) = state.data {
//!             println!("{} points", series.data.len());
//!             break;
//!         }
//!     }
//! }
//! ```

pub mod client;
pub mod config;
pub mod domain;
pub mod error;
pub mod format;
pub mod http;
pub mod resource;
pub mod selection;
pub mod supervise;
pub mod view;

pub use client::DashboardClient;
pub use config::{ApiConfig, BASE_URL_ENV, DEFAULT_BASE_URL, REQUEST_TIMEOUT};
pub use domain::{
    ChartData, CompanyInfo, CompanyList, ComparisonResult, ConfidenceInterval, CorrelationMatrix,
    CorrelationPair, PeriodWindow, Prediction, PredictionSummary, SeriesPoint, SeriesResponse,
    StockSummary, SymbolPerformance, TopMovers, Trend,
};
pub use error::{ApiError, ApiErrorKind, IntegrityError};
pub use format::{
    display_symbol, format_currency, format_date, format_number, format_percent, format_volume,
    ChangeDirection, EXCHANGE_SUFFIX,
};
pub use http::{
    HttpError, HttpMethod, HttpRequest, HttpResponse, HttpTransport, ReqwestTransport,
};
pub use resource::{
    CompareParams, FetchState, PredictionParams, Resource, ResourceParams, SeriesParams,
    SymbolParams,
};
pub use selection::{
    SelectionState, SelectionStore, COMPARE_CAPACITY, DEFAULT_TIME_RANGE, TIME_RANGES,
};
pub use supervise::{supervised, RegionFailure, Supervised};
pub use view::{
    bucket, chart_rows, comparison_overlay, correlation_cells, prediction_bands, BandRow,
    ChartRow, ComparisonOverlay, CorrelationBucket, CorrelationCells, OverlayRow,
};
