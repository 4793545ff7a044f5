//! History request parameters.

use crate::{BarInterval, HistoryWindow};

/// A host request for history records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRequest {
    /// Symbol name as used in the cache (e.g., "EURUSD").
    pub symbol: String,
    /// Time window to walk backward through.
    pub window: HistoryWindow,
    /// Raw ticks or bar width.
    pub interval: BarInterval,
    /// Maximum number of records to return.
    pub max_count: usize,
}

impl HistoryRequest {
    /// Creates a new request.
    #[must_use]
    pub fn new(
        symbol: impl Into<String>,
        window: HistoryWindow,
        interval: BarInterval,
        max_count: usize,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            window,
            interval,
            max_count,
        }
    }

    /// Returns a copy of this request with a different record limit.
    #[must_use]
    pub fn with_max_count(mut self, max_count: usize) -> Self {
        self.max_count = max_count;
        self
    }
}

impl std::fmt::Display for HistoryRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} x{} ({})",
            self.symbol, self.interval, self.max_count, self.window
        )
    }
}
