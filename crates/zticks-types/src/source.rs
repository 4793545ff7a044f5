//! Day loading abstraction.

use chrono::NaiveDate;

use crate::{DayLoadError, TickSeries};

/// Loads one calendar day of ticks for a symbol.
///
/// A load either fully succeeds or reports why the day is unavailable;
/// partially decoded days are never returned.
pub trait DaySource {
    /// Loads the ticks of `symbol` on `day`.
    ///
    /// # Errors
    ///
    /// Returns [`DayLoadError::NotFound`] when no data exists for the day,
    /// or an open/decode error when the stored data is unusable.
    fn load_day(&self, symbol: &str, day: NaiveDate) -> Result<TickSeries, DayLoadError>;
}

impl<T: DaySource + ?Sized> DaySource for &T {
    fn load_day(&self, symbol: &str, day: NaiveDate) -> Result<TickSeries, DayLoadError> {
        (**self).load_day(symbol, day)
    }
}
