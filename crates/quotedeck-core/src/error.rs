use std::fmt::{Display, Formatter};

use thiserror::Error;

/// Gateway-level error classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    /// Network unreachable, timeout, or unreadable body.
    Transport,
    /// Backend answered with a non-2xx status.
    Status,
    /// Body received but not decodable into the expected payload.
    Decode,
}

/// Normalized gateway error: one kind, one human-readable message.
///
/// The gateway never retries and never panics; every failure mode collapses
/// into this type and is folded into `FetchState.error` by the resource
/// layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    kind: ApiErrorKind,
    message: String,
}

impl ApiError {
    pub fn transport(message: impl Into<String>) -> Self {
        Self {
            kind: ApiErrorKind::Transport,
            message: message.into(),
        }
    }

    pub fn status(code: u16, detail: impl Into<String>) -> Self {
        Self {
            kind: ApiErrorKind::Status,
            message: format!("backend returned {code}: {}", detail.into()),
        }
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self {
            kind: ApiErrorKind::Decode,
            message: message.into(),
        }
    }

    pub const fn kind(&self) -> ApiErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Display for ApiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ApiError {}

/// Data-shape violations detected by the view-model transformers.
///
/// Distinct from [`ApiError`]: the payload arrived and decoded, but its
/// internal structure breaks an invariant. Never silently truncated or
/// padded.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum IntegrityError {
    #[error("series '{series}' has {actual} values for {expected} dates")]
    LengthMismatch {
        series: String,
        expected: usize,
        actual: usize,
    },

    #[error("comparison payload is missing chart series for '{symbol}'")]
    MissingSeries { symbol: String },

    #[error("comparison payload must name exactly two symbols, got {count}")]
    SymbolCountMismatch { count: usize },

    #[error("correlation matrix is not square: {rows} rows for {symbols} symbols")]
    NotSquare { rows: usize, symbols: usize },

    #[error("correlation matrix row {row} has {actual} columns, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("correlation matrix diagonal at index {index} is {value}, expected 1.0")]
    BadDiagonal { index: usize, value: f64 },

    #[error("correlation matrix is asymmetric at ({row}, {col})")]
    Asymmetric { row: usize, col: usize },

    #[error("correlation value at ({row}, {col}) is {value}, outside [-1, 1]")]
    OutOfRange { row: usize, col: usize, value: f64 },

    #[error("prediction confidence band at index {index} does not contain the point forecast")]
    ConfidenceOrder { index: usize },
}
