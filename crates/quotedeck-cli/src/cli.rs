//! CLI argument definitions for quotedeck.
//!
//! One subcommand per backend operation. The base URL comes from
//! `QUOTEDECK_API_URL` (fallback `http://localhost:8000`) unless overridden
//! with `--api-url`.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `companies` | List the instrument universe |
//! | `company` | One instrument's snapshot |
//! | `series` | Price history for one symbol |
//! | `summary` | Statistics snapshot for one symbol |
//! | `compare` | Pairwise comparison with correlation |
//! | `matrix` | Universe-wide correlation matrix |
//! | `movers` | Top gainers and losers |
//! | `predict` | ML price forecast |
//! | `train` | Trigger backend model training |
//! | `status` | Trained-model status for one symbol |
//! | `health` | Backend liveness check |

use clap::{Args, Parser, Subcommand};

/// Terminal client for the quotedeck equities dashboard backend.
#[derive(Debug, Parser)]
#[command(
    name = "quotedeck",
    version,
    about = "Browse equities, compare instruments, and request price forecasts"
)]
pub struct Cli {
    /// Backend base URL; overrides QUOTEDECK_API_URL.
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Emit the raw JSON payload instead of formatted output.
    #[arg(long, global = true, default_value_t = false)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the instrument universe with latest prices.
    Companies,
    /// Latest snapshot for one instrument.
    Company(SymbolArgs),
    /// Price history for one symbol.
    Series(SeriesArgs),
    /// Statistics snapshot for one symbol.
    Summary(SymbolArgs),
    /// Compare two instruments.
    Compare(CompareArgs),
    /// Universe-wide correlation matrix.
    Matrix,
    /// Top gainers and losers for the latest session.
    Movers,
    /// ML price forecast for one symbol.
    Predict(PredictArgs),
    /// Trigger backend model training (fire-and-forget).
    Train,
    /// Trained-model status for one symbol (raw JSON).
    Status(SymbolArgs),
    /// Check backend liveness.
    Health,
}

#[derive(Debug, Args)]
pub struct SymbolArgs {
    /// Instrument symbol, with or without the .NS suffix.
    pub symbol: String,
}

#[derive(Debug, Args)]
pub struct SeriesArgs {
    /// Instrument symbol, with or without the .NS suffix.
    pub symbol: String,

    /// History window in days.
    #[arg(long, default_value_t = 30)]
    pub days: u32,
}

#[derive(Debug, Args)]
pub struct CompareArgs {
    /// First instrument symbol.
    pub symbol1: String,

    /// Second instrument symbol.
    pub symbol2: String,
}

#[derive(Debug, Args)]
pub struct PredictArgs {
    /// Instrument symbol, with or without the .NS suffix.
    pub symbol: String,

    /// Forecast horizon in days.
    #[arg(long, default_value_t = 7)]
    pub days: u32,
}
