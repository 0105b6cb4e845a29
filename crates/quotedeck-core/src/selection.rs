//! Selection and compare-mode state.
//!
//! The one shared mutable resource in the orchestration layer. All mutation
//! goes through the operations below; each is atomic from the caller's point
//! of view (`watch::Sender::send_modify` holds the channel's internal lock
//! for the whole closure). Consumers subscribe read-only.

use tokio::sync::watch;

use crate::domain::CompanyInfo;

/// Time ranges the dashboard offers, in days.
pub const TIME_RANGES: [u32; 4] = [7, 30, 90, 365];

/// Initial time-range filter.
pub const DEFAULT_TIME_RANGE: u32 = 30;

/// Maximum number of instruments in a comparison.
pub const COMPARE_CAPACITY: usize = 2;

/// Process-wide selection state. Never persisted across sessions.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionState {
    pub selected: Option<CompanyInfo>,
    pub compare_mode: bool,
    /// At most [`COMPARE_CAPACITY`] entries, unique by symbol.
    pub compare_stocks: Vec<CompanyInfo>,
    pub time_range: u32,
}

impl Default for SelectionState {
    fn default() -> Self {
        Self {
            selected: None,
            compare_mode: false,
            compare_stocks: Vec::new(),
            time_range: DEFAULT_TIME_RANGE,
        }
    }
}

/// Owner of [`SelectionState`]. The five operations below are the only
/// mutation entry points.
pub struct SelectionStore {
    tx: watch::Sender<SelectionState>,
}

impl SelectionStore {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(SelectionState::default());
        Self { tx }
    }

    /// Read-only subscription for consumers.
    pub fn subscribe(&self) -> watch::Receiver<SelectionState> {
        self.tx.subscribe()
    }

    pub fn snapshot(&self) -> SelectionState {
        self.tx.borrow().clone()
    }

    /// Select an instrument.
    ///
    /// Outside compare mode the selection is replaced unconditionally. In
    /// compare mode the instrument joins the comparison set unless the set
    /// is full or already contains the symbol, in which case the call is
    /// silently ignored.
    pub fn select_stock(&self, company: CompanyInfo) {
        self.tx.send_modify(|state| {
            if state.compare_mode {
                let duplicate = state
                    .compare_stocks
                    .iter()
                    .any(|entry| entry.symbol == company.symbol);
                if state.compare_stocks.len() < COMPARE_CAPACITY && !duplicate {
                    state.compare_stocks.push(company);
                }
            } else {
                state.selected = Some(company);
            }
        });
    }

    /// Flip compare mode. Leaving compare mode discards the in-progress
    /// comparison; entering it leaves the single selection untouched.
    pub fn toggle_compare_mode(&self) {
        self.tx.send_modify(|state| {
            state.compare_mode = !state.compare_mode;
            if !state.compare_mode {
                state.compare_stocks.clear();
            }
        });
    }

    /// Drop one symbol from the comparison set; no-op when absent.
    pub fn remove_from_compare(&self, symbol: &str) {
        self.tx.send_modify(|state| {
            state.compare_stocks.retain(|entry| entry.symbol != symbol);
        });
    }

    /// Reset both the single selection and the comparison set, independent
    /// of compare mode.
    pub fn clear_selection(&self) {
        self.tx.send_modify(|state| {
            state.selected = None;
            state.compare_stocks.clear();
        });
    }

    /// Replace the time-range filter. Values outside [`TIME_RANGES`] are
    /// accepted as-is; validation, if any, belongs to the caller.
    pub fn set_time_range(&self, days: u32) {
        self.tx.send_modify(|state| {
            state.time_range = days;
        });
    }
}

impl Default for SelectionStore {
    fn default() -> Self {
        Self::new()
    }
}
