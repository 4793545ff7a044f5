//! Persistent backward read position over a tick cache.

use chrono::{Days, NaiveDate};
use tracing::{debug, trace, warn};
use zticks_types::{DaySearch, DaySource, RawTick, TickSeries};

/// Where the cursor stands in its backward walk.
#[derive(Debug, Clone, Default)]
pub enum CursorState {
    /// Freshly reset; the next request starts searching at its window end.
    #[default]
    Idle,
    /// About to look for the latest loadable day at or before `from`.
    Searching {
        /// First day to try.
        from: NaiveDate,
    },
    /// Reading a loaded day from its latest tick toward its earliest.
    Streaming {
        /// The loaded day.
        day: NaiveDate,
        /// The day's ticks.
        series: TickSeries,
        /// Ticks not yet consumed; the current tick is at `remaining - 1`.
        remaining: usize,
    },
    /// No loadable day was found down to the search floor.
    Exhausted {
        /// Day a later request resumes searching from.
        resume: NaiveDate,
    },
}

/// Backward read position shared by successive history requests.
///
/// The cursor remembers the symbol it is walking, the loaded day and the
/// index of the next tick to hand out. It is reset on login and when a
/// request names a different symbol.
#[derive(Debug, Clone, Default)]
pub struct Cursor {
    symbol: Option<String>,
    origin: Option<NaiveDate>,
    state: CursorState,
}

impl Cursor {
    /// Creates an idle cursor.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            symbol: None,
            origin: None,
            state: CursorState::Idle,
        }
    }

    /// Forgets the current position.
    pub fn reset(&mut self) {
        self.symbol = None;
        self.origin = None;
        self.state = CursorState::Idle;
    }

    /// Returns the current state.
    #[must_use]
    pub const fn state(&self) -> &CursorState {
        &self.state
    }

    /// Returns the symbol being walked.
    #[must_use]
    pub fn symbol(&self) -> Option<&str> {
        self.symbol.as_deref()
    }

    /// Returns the day the current walk started searching from.
    #[must_use]
    pub const fn origin(&self) -> Option<NaiveDate> {
        self.origin
    }

    /// Returns the loaded day, if streaming.
    #[must_use]
    pub const fn day(&self) -> Option<NaiveDate> {
        match &self.state {
            CursorState::Streaming { day, .. } => Some(*day),
            _ => None,
        }
    }

    /// Returns the number of unconsumed ticks in the loaded day.
    #[must_use]
    pub const fn remaining(&self) -> usize {
        match &self.state {
            CursorState::Streaming { remaining, .. } => *remaining,
            _ => 0,
        }
    }

    /// Readies the cursor for a request on `symbol` ending on `end_day`.
    ///
    /// A new symbol restarts the walk. An idle cursor starts searching at
    /// `end_day`. An exhausted one resumes below the floor it last reached,
    /// unless `end_day` is later than the day its walk started from, in
    /// which case the walk restarts at `end_day`.
    pub fn prepare(&mut self, symbol: &str, end_day: NaiveDate) {
        if self.symbol.as_deref() != Some(symbol) {
            if let Some(previous) = &self.symbol {
                debug!(previous = %previous, symbol, "symbol changed, restarting walk");
            }
            self.symbol = Some(symbol.to_string());
            self.state = CursorState::Idle;
        }

        match self.state {
            CursorState::Idle => self.start_walk(end_day),
            CursorState::Exhausted { .. } if self.origin.is_some_and(|origin| end_day > origin) => {
                debug!(symbol, %end_day, "newer window after exhaustion, restarting walk");
                self.start_walk(end_day);
            }
            CursorState::Exhausted { resume } => {
                self.state = CursorState::Searching { from: resume };
            }
            CursorState::Searching { .. } | CursorState::Streaming { .. } => {}
        }
    }

    fn start_walk(&mut self, end_day: NaiveDate) {
        self.origin = Some(end_day);
        self.state = CursorState::Searching { from: end_day };
    }

    /// Returns the current tick without consuming it, loading earlier days
    /// as needed.
    ///
    /// Returns `None` once no day down to `floor` can be loaded.
    pub fn peek<S>(&mut self, source: &S, floor: NaiveDate) -> Option<RawTick>
    where
        S: DaySource + ?Sized,
    {
        loop {
            let next = match &self.state {
                CursorState::Streaming {
                    series, remaining, ..
                } if *remaining > 0 => return series.get(*remaining - 1),
                CursorState::Streaming { day, .. } => match day.checked_sub_days(Days::new(1)) {
                    Some(from) => CursorState::Searching { from },
                    None => CursorState::Exhausted { resume: *day },
                },
                CursorState::Searching { from } => {
                    let symbol = self.symbol.as_deref().unwrap_or_default();
                    search(source, symbol, *from, floor)
                }
                CursorState::Idle | CursorState::Exhausted { .. } => return None,
            };
            self.state = next;
        }
    }

    /// Consumes the current tick.
    pub fn advance(&mut self) {
        if let CursorState::Streaming { remaining, .. } = &mut self.state {
            *remaining = remaining.saturating_sub(1);
        }
    }

    /// Consumes and returns the current tick.
    pub fn next_tick<S>(&mut self, source: &S, floor: NaiveDate) -> Option<RawTick>
    where
        S: DaySource + ?Sized,
    {
        let tick = self.peek(source, floor)?;
        self.advance();
        Some(tick)
    }
}

/// Finds the latest loadable, non-empty day in `[floor, from]`.
fn search<S>(source: &S, symbol: &str, from: NaiveDate, floor: NaiveDate) -> CursorState
where
    S: DaySource + ?Sized,
{
    for day in DaySearch::new(from, floor) {
        match source.load_day(symbol, day) {
            Ok(series) if series.is_empty() => {
                debug!(symbol, %day, "day file holds no ticks, skipping");
            }
            Ok(series) => {
                debug!(symbol, %day, ticks = series.len(), "loaded day");
                return CursorState::Streaming {
                    day,
                    remaining: series.len(),
                    series,
                };
            }
            Err(e) if e.is_not_found() => {
                trace!(symbol, %day, "no day file");
            }
            Err(e) => {
                warn!(symbol, %day, error = %e, "skipping unreadable day");
            }
        }
    }

    let resume = floor
        .checked_sub_days(Days::new(1))
        .map_or(from, |below| below.min(from));
    debug!(symbol, %from, %floor, "no more data in search range");
    CursorState::Exhausted { resume }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::path::PathBuf;
    use zticks_types::DayLoadError;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    /// In-memory source that records which days were requested.
    #[derive(Default)]
    struct MemorySource {
        days: HashMap<NaiveDate, TickSeries>,
        requested: RefCell<Vec<NaiveDate>>,
    }

    impl MemorySource {
        fn with_day(mut self, d: NaiveDate, millis: &[i64]) -> Self {
            let series = TickSeries::from_raw(millis.iter().map(|&m| RawTick::new(m, 1, 2)));
            self.days.insert(d, series);
            self
        }
    }

    impl DaySource for MemorySource {
        fn load_day(&self, _symbol: &str, d: NaiveDate) -> Result<TickSeries, DayLoadError> {
            self.requested.borrow_mut().push(d);
            self.days.get(&d).cloned().ok_or(DayLoadError::NotFound {
                path: PathBuf::from(d.to_string()),
            })
        }
    }

    #[test]
    fn test_walks_back_across_gap() {
        let source = MemorySource::default()
            .with_day(day(8), &[30, 40])
            .with_day(day(5), &[10, 20]);
        let mut cursor = Cursor::new();
        cursor.prepare("EURUSD", day(8));

        let millis: Vec<_> = std::iter::from_fn(|| cursor.next_tick(&source, day(1)))
            .map(|t| t.millis)
            .collect();

        assert_eq!(millis, vec![40, 30, 20, 10]);
        assert_eq!(
            *source.requested.borrow(),
            vec![day(8), day(7), day(6), day(5), day(4), day(3), day(2), day(1)]
        );
        assert!(matches!(cursor.state(), CursorState::Exhausted { resume } if *resume == day(1).pred_opt().unwrap()));
    }

    #[test]
    fn test_peek_does_not_consume() {
        let source = MemorySource::default().with_day(day(8), &[1, 2]);
        let mut cursor = Cursor::new();
        cursor.prepare("EURUSD", day(8));

        assert_eq!(cursor.peek(&source, day(8)).unwrap().millis, 2);
        assert_eq!(cursor.peek(&source, day(8)).unwrap().millis, 2);
        assert_eq!(cursor.remaining(), 2);
        assert_eq!(cursor.day(), Some(day(8)));
    }

    #[test]
    fn test_resume_continues_after_loaded_day() {
        let source = MemorySource::default()
            .with_day(day(8), &[3])
            .with_day(day(7), &[2]);
        let mut cursor = Cursor::new();
        cursor.prepare("EURUSD", day(8));
        assert_eq!(cursor.next_tick(&source, day(1)).unwrap().millis, 3);

        // A later request with a different end keeps the position.
        cursor.prepare("EURUSD", day(20));
        assert_eq!(cursor.next_tick(&source, day(1)).unwrap().millis, 2);
    }

    #[test]
    fn test_exhausted_cursor_stays_exhausted_for_same_end() {
        let source = MemorySource::default().with_day(day(8), &[3]);
        let mut cursor = Cursor::new();
        cursor.prepare("EURUSD", day(8));
        assert_eq!(cursor.next_tick(&source, day(6)).unwrap().millis, 3);
        assert!(cursor.next_tick(&source, day(6)).is_none());

        cursor.prepare("EURUSD", day(8));
        assert!(cursor.next_tick(&source, day(6)).is_none());
        assert_eq!(cursor.origin(), Some(day(8)));
    }

    #[test]
    fn test_newer_window_after_exhaustion_restarts() {
        let source = MemorySource::default()
            .with_day(day(22), &[7])
            .with_day(day(8), &[3]);
        let mut cursor = Cursor::new();
        cursor.prepare("EURUSD", day(8));
        assert_eq!(cursor.next_tick(&source, day(6)).unwrap().millis, 3);
        assert!(cursor.next_tick(&source, day(6)).is_none());

        cursor.prepare("EURUSD", day(22));
        assert_eq!(cursor.origin(), Some(day(22)));
        assert_eq!(cursor.next_tick(&source, day(20)).unwrap().millis, 7);
    }

    #[test]
    fn test_symbol_change_resets() {
        let source = MemorySource::default().with_day(day(8), &[3]);
        let mut cursor = Cursor::new();
        cursor.prepare("EURUSD", day(8));
        cursor.next_tick(&source, day(8)).unwrap();

        cursor.prepare("GBPUSD", day(8));
        assert_eq!(cursor.symbol(), Some("GBPUSD"));
        assert!(matches!(cursor.state(), CursorState::Searching { from } if *from == day(8)));
    }

    #[test]
    fn test_empty_day_is_skipped() {
        let source = MemorySource::default()
            .with_day(day(8), &[])
            .with_day(day(7), &[5]);
        let mut cursor = Cursor::new();
        cursor.prepare("EURUSD", day(8));

        assert_eq!(cursor.next_tick(&source, day(1)).unwrap().millis, 5);
    }

    #[test]
    fn test_unprepared_cursor_yields_nothing() {
        let source = MemorySource::default().with_day(day(8), &[1]);
        let mut cursor = Cursor::new();
        assert!(cursor.peek(&source, day(1)).is_none());
        assert!(source.requested.borrow().is_empty());
    }

    #[test]
    fn test_reset() {
        let source = MemorySource::default().with_day(day(8), &[1]);
        let mut cursor = Cursor::new();
        cursor.prepare("EURUSD", day(8));
        cursor.peek(&source, day(1));

        cursor.reset();
        assert!(matches!(cursor.state(), CursorState::Idle));
        assert_eq!(cursor.symbol(), None);
        assert_eq!(cursor.origin(), None);
    }
}
