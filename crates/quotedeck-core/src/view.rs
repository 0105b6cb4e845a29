//! View-model transformers.
//!
//! Pure reshaping of fetched payloads into the row/cell structures a chart
//! or table consumes. Transformers tolerate empty input (empty in, empty
//! out) but refuse structurally broken payloads with an [`IntegrityError`]
//! rather than truncating or padding.

use std::collections::BTreeMap;

use serde::ser::{SerializeMap, SerializeSeq, SerializeStruct};
use serde::{Serialize, Serializer};

use crate::domain::{ComparisonResult, CorrelationMatrix, Prediction, SeriesPoint};
use crate::error::IntegrityError;

/// Backend rounds to 4 decimals; float comparisons allow for that.
const EPSILON: f64 = 1e-9;

/// One chart row of a single-symbol price series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartRow {
    pub date: String,
    pub close: f64,
    pub ma7: Option<f64>,
    pub ma20: Option<f64>,
}

/// Map a price series to chart rows, preserving source order.
pub fn chart_rows(points: &[SeriesPoint]) -> Vec<ChartRow> {
    points
        .iter()
        .map(|point| ChartRow {
            date: point.date.clone(),
            close: point.close,
            ma7: point.ma_7,
            ma20: point.ma_20,
        })
        .collect()
}

/// One date of a dual-line overlay. `first`/`second` follow the order of
/// [`ComparisonOverlay::symbols`].
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayRow {
    pub date: String,
    pub first: f64,
    pub second: f64,
}

/// Dual-line overlay derived from a comparison payload.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonOverlay {
    pub symbols: [String; 2],
    pub rows: Vec<OverlayRow>,
}

/// Rows serialize keyed by symbol, e.g. `{"date": "d1", "A": 1.0, "B": 3.0}`,
/// so JSON consumers see the symbols rather than positional fields.
impl Serialize for ComparisonOverlay {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        struct RowBySymbol<'a> {
            symbols: &'a [String; 2],
            row: &'a OverlayRow,
        }

        impl Serialize for RowBySymbol<'_> {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                let mut map = serializer.serialize_map(Some(3))?;
                map.serialize_entry("date", &self.row.date)?;
                map.serialize_entry(&self.symbols[0], &self.row.first)?;
                map.serialize_entry(&self.symbols[1], &self.row.second)?;
                map.end()
            }
        }

        struct Rows<'a>(&'a ComparisonOverlay);

        impl Serialize for Rows<'_> {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                let mut seq = serializer.serialize_seq(Some(self.0.rows.len()))?;
                for row in &self.0.rows {
                    seq.serialize_element(&RowBySymbol {
                        symbols: &self.0.symbols,
                        row,
                    })?;
                }
                seq.end()
            }
        }

        let mut state = serializer.serialize_struct("ComparisonOverlay", 2)?;
        state.serialize_field("symbols", &self.symbols)?;
        state.serialize_field("rows", &Rows(self))?;
        state.end()
    }
}

/// Build the overlay: one row per date with both symbols' values.
///
/// A missing series or a series whose length disagrees with `dates` is a
/// data-integrity error, surfaced distinctly from transport failures.
pub fn comparison_overlay(result: &ComparisonResult) -> Result<ComparisonOverlay, IntegrityError> {
    let [first, second] = match result.symbols.as_slice() {
        [a, b] => [a.clone(), b.clone()],
        other => {
            return Err(IntegrityError::SymbolCountMismatch {
                count: other.len(),
            })
        }
    };

    let dates = &result.chart_data.dates;
    let first_values = symbol_series(&result.chart_data.series, &first, dates.len())?;
    let second_values = symbol_series(&result.chart_data.series, &second, dates.len())?;

    let rows = dates
        .iter()
        .zip(first_values.iter().zip(second_values))
        .map(|(date, (first, second))| OverlayRow {
            date: date.clone(),
            first: *first,
            second: *second,
        })
        .collect();

    Ok(ComparisonOverlay {
        symbols: [first, second],
        rows,
    })
}

fn symbol_series<'a>(
    series: &'a BTreeMap<String, Vec<f64>>,
    symbol: &str,
    expected: usize,
) -> Result<&'a [f64], IntegrityError> {
    let values = series
        .get(symbol)
        .ok_or_else(|| IntegrityError::MissingSeries {
            symbol: symbol.to_owned(),
        })?;
    if values.len() != expected {
        return Err(IntegrityError::LengthMismatch {
            series: symbol.to_owned(),
            expected,
            actual: values.len(),
        });
    }
    Ok(values)
}

/// One forecasted date with its confidence band.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BandRow {
    pub date: String,
    pub predicted: f64,
    pub lower: f64,
    pub upper: f64,
}

/// Map the parallel forecast arrays into band rows.
///
/// Rejects payloads whose arrays disagree in length or where a band fails
/// to contain its point forecast.
pub fn prediction_bands(prediction: &Prediction) -> Result<Vec<BandRow>, IntegrityError> {
    let expected = prediction.dates.len();
    for (series, actual) in [
        ("predictions", prediction.predictions.len()),
        ("confidence.lower", prediction.confidence.lower.len()),
        ("confidence.upper", prediction.confidence.upper.len()),
    ] {
        if actual != expected {
            return Err(IntegrityError::LengthMismatch {
                series: String::from(series),
                expected,
                actual,
            });
        }
    }

    let mut rows = Vec::with_capacity(expected);
    for (index, date) in prediction.dates.iter().enumerate() {
        let predicted = prediction.predictions[index];
        let lower = prediction.confidence.lower[index];
        let upper = prediction.confidence.upper[index];
        if lower > predicted + EPSILON || predicted > upper + EPSILON {
            return Err(IntegrityError::ConfidenceOrder { index });
        }
        rows.push(BandRow {
            date: date.clone(),
            predicted,
            lower,
            upper,
        });
    }
    Ok(rows)
}

/// Discrete display bucket for a correlation value, ordered from strongest
/// negative to strongest positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CorrelationBucket {
    StrongNegative,
    Negative,
    WeakNegative,
    Neutral,
    WeakPositive,
    Positive,
    StrongPositive,
}

/// Classify a correlation value into one of seven buckets, symmetric around
/// zero: ≥0.7, ≥0.4, ≥0.1, ≥-0.1, ≥-0.4, ≥-0.7, else.
pub fn bucket(value: f64) -> CorrelationBucket {
    if value >= 0.7 {
        CorrelationBucket::StrongPositive
    } else if value >= 0.4 {
        CorrelationBucket::Positive
    } else if value >= 0.1 {
        CorrelationBucket::WeakPositive
    } else if value >= -0.1 {
        CorrelationBucket::Neutral
    } else if value >= -0.4 {
        CorrelationBucket::WeakNegative
    } else if value >= -0.7 {
        CorrelationBucket::Negative
    } else {
        CorrelationBucket::StrongNegative
    }
}

/// Validated cell-lookup view over a correlation matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct CorrelationCells {
    symbols: Vec<String>,
    matrix: Vec<Vec<f64>>,
}

impl CorrelationCells {
    pub fn symbols(&self) -> &[String] {
        &self.symbols
    }

    /// Value at `(row_symbol, col_symbol)`, `None` for unknown symbols.
    pub fn value(&self, row_symbol: &str, col_symbol: &str) -> Option<f64> {
        let row = self.symbols.iter().position(|s| s == row_symbol)?;
        let col = self.symbols.iter().position(|s| s == col_symbol)?;
        Some(self.matrix[row][col])
    }

    /// Display bucket at `(row_symbol, col_symbol)`.
    pub fn bucket(&self, row_symbol: &str, col_symbol: &str) -> Option<CorrelationBucket> {
        self.value(row_symbol, col_symbol).map(bucket)
    }
}

/// Validate a correlation matrix and expose cell lookups.
///
/// Enforces the payload invariants: square, row lengths matching the symbol
/// count, unit diagonal, symmetry, and all values in [-1, 1].
pub fn correlation_cells(matrix: &CorrelationMatrix) -> Result<CorrelationCells, IntegrityError> {
    let n = matrix.symbols.len();
    if matrix.matrix.len() != n {
        return Err(IntegrityError::NotSquare {
            rows: matrix.matrix.len(),
            symbols: n,
        });
    }

    for (row, values) in matrix.matrix.iter().enumerate() {
        if values.len() != n {
            return Err(IntegrityError::RaggedRow {
                row,
                expected: n,
                actual: values.len(),
            });
        }
        for (col, &value) in values.iter().enumerate() {
            if !(-1.0 - EPSILON..=1.0 + EPSILON).contains(&value) {
                return Err(IntegrityError::OutOfRange { row, col, value });
            }
        }
        if (values[row] - 1.0).abs() > EPSILON {
            return Err(IntegrityError::BadDiagonal {
                index: row,
                value: values[row],
            });
        }
    }

    for row in 0..n {
        for col in (row + 1)..n {
            if (matrix.matrix[row][col] - matrix.matrix[col][row]).abs() > EPSILON {
                return Err(IntegrityError::Asymmetric { row, col });
            }
        }
    }

    Ok(CorrelationCells {
        symbols: matrix.symbols.clone(),
        matrix: matrix.matrix.clone(),
    })
}
