//! History request serving.

use std::num::NonZeroU32;

use tracing::debug;
use zticks_types::{Bar, BarInterval, DaySource, HistoryRequest};

use crate::{BackwardAggregator, Cursor};

/// Default number of days searched below a window's start.
pub const DEFAULT_SLACK_DAYS: u32 = 10;

/// Serves history requests backward in time from a [`DaySource`].
///
/// Successive calls continue where the previous call stopped. A call that
/// finds no more data returns an empty vector.
#[derive(Debug, Clone)]
pub struct Resampler {
    cursor: Cursor,
    slack_days: u32,
}

impl Default for Resampler {
    fn default() -> Self {
        Self::new(DEFAULT_SLACK_DAYS)
    }
}

impl Resampler {
    /// Creates a resampler that searches `slack_days` below each window start.
    #[must_use]
    pub const fn new(slack_days: u32) -> Self {
        Self {
            cursor: Cursor::new(),
            slack_days,
        }
    }

    /// Returns the slack window in days.
    #[must_use]
    pub const fn slack_days(&self) -> u32 {
        self.slack_days
    }

    /// Returns the read position.
    #[must_use]
    pub const fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    /// Restarts the walk; the next request searches from its window end.
    pub fn reset(&mut self) {
        self.cursor.reset();
    }

    /// Produces up to `request.max_count` records, newest first.
    ///
    /// Ticks newer than the window end are skipped. Raw-tick requests stop
    /// after the first record at or before the window start; bar requests
    /// stop at the bucket boundary after the bar that reaches it.
    pub fn resample<S>(&mut self, source: &S, request: &HistoryRequest, tick_scale: f64) -> Vec<Bar>
    where
        S: DaySource + ?Sized,
    {
        if request.max_count == 0 {
            return Vec::new();
        }

        self.cursor.prepare(&request.symbol, request.window.end_day());

        let bars = match request.interval {
            BarInterval::Tick => self.raw_ticks(source, request, tick_scale),
            BarInterval::Minutes(minutes) => self.bars(source, request, minutes, tick_scale),
        };

        debug!(
            symbol = %request.symbol,
            interval = %request.interval,
            records = bars.len(),
            newest = bars.first().map(|b| b.close_ms),
            oldest = bars.last().map(|b| b.close_ms),
            "resampled history"
        );
        bars
    }

    fn raw_ticks<S>(&mut self, source: &S, request: &HistoryRequest, tick_scale: f64) -> Vec<Bar>
    where
        S: DaySource + ?Sized,
    {
        let floor = request.window.search_floor(self.slack_days);
        let start_ms = request.window.start_millis();
        let end_ms = request.window.end.timestamp_millis();
        let mut bars = Vec::with_capacity(request.max_count.min(4096));

        while let Some(tick) = self.cursor.next_tick(source, floor) {
            if tick.millis > end_ms {
                continue;
            }
            bars.push(Bar::from_tick(
                tick.millis,
                tick.ask_price(tick_scale),
                tick.spread(tick_scale),
            ));
            if bars.len() >= request.max_count || tick.millis <= start_ms {
                break;
            }
        }
        bars
    }

    fn bars<S>(
        &mut self,
        source: &S,
        request: &HistoryRequest,
        minutes: NonZeroU32,
        tick_scale: f64,
    ) -> Vec<Bar>
    where
        S: DaySource + ?Sized,
    {
        let floor = request.window.search_floor(self.slack_days);
        let start_ms = request.window.start_millis();
        let end_ms = request.window.end.timestamp_millis();
        let mut aggregator = BackwardAggregator::new(minutes, tick_scale);
        let mut bars = Vec::new();
        let mut reached_start = false;

        while let Some(tick) = self.cursor.peek(source, floor) {
            if tick.millis > end_ms {
                self.cursor.advance();
                continue;
            }
            if aggregator.opens_bar(&tick) {
                bars.extend(aggregator.take_bar());
                // The boundary tick stays unconsumed for the next call.
                if bars.len() >= request.max_count || reached_start {
                    return bars;
                }
            }
            aggregator.process(tick);
            self.cursor.advance();
            reached_start |= tick.millis <= start_ms;
        }

        bars.extend(aggregator.finish());
        bars
    }
}
