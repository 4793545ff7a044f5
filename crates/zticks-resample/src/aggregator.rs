//! Backward tick-to-bar aggregation.

use std::num::NonZeroU32;

use zticks_types::{Bar, BarInterval, RawTick};

/// Streaming aggregator for ticks visited newest-first.
///
/// The first tick seen in a bucket closes the bar; every older tick in the
/// same bucket moves the open back and widens high/low. A bar is completed
/// when a tick from an earlier bucket arrives.
#[derive(Debug)]
pub struct BackwardAggregator {
    interval: BarInterval,
    tick_scale: f64,
    current_bar: Option<BarBuilder>,
}

impl BackwardAggregator {
    /// Creates a new aggregator for bars of `minutes` width.
    #[must_use]
    pub const fn new(minutes: NonZeroU32, tick_scale: f64) -> Self {
        Self {
            interval: BarInterval::Minutes(minutes),
            tick_scale,
            current_bar: None,
        }
    }

    /// Returns the bar interval being aggregated to.
    #[must_use]
    pub const fn interval(&self) -> BarInterval {
        self.interval
    }

    /// Returns true if `tick` would start a new bar.
    ///
    /// Only a strictly earlier bucket starts a new bar; out-of-order ticks
    /// from a later bucket are folded into the current one.
    #[must_use]
    pub fn opens_bar(&self, tick: &RawTick) -> bool {
        self.current_bar
            .as_ref()
            .is_none_or(|bar| self.interval.bucket_of(tick.millis) < bar.bucket)
    }

    /// Removes and returns the bar in progress.
    pub fn take_bar(&mut self) -> Option<Bar> {
        self.current_bar.take().map(BarBuilder::finish)
    }

    /// Processes a tick, potentially emitting a completed bar.
    ///
    /// Returns `Some(bar)` when this tick starts an earlier bucket and the
    /// previous bar is complete, `None` otherwise.
    pub fn process(&mut self, tick: RawTick) -> Option<Bar> {
        let bucket = self.interval.bucket_of(tick.millis);

        if let Some(builder) = self.current_bar.as_mut().filter(|b| bucket >= b.bucket) {
            builder.update(&tick, self.tick_scale);
            return None;
        }

        let completed = self.take_bar();
        self.current_bar = Some(BarBuilder::new(bucket, &tick, self.tick_scale));
        completed
    }

    /// Finishes aggregation, returning any remaining partial bar.
    #[must_use]
    pub fn finish(mut self) -> Option<Bar> {
        self.take_bar()
    }
}

/// Builder for bars assembled backward in time.
#[derive(Debug)]
struct BarBuilder {
    bucket: i64,
    close_ms: i64,
    open: f64,
    high: f64,
    low: f64,
    close: f64,
    spread: f64,
    volume: u32,
}

impl BarBuilder {
    /// Creates a new builder from the latest tick of the bucket.
    fn new(bucket: i64, tick: &RawTick, tick_scale: f64) -> Self {
        let ask = tick.ask_price(tick_scale);
        Self {
            bucket,
            close_ms: tick.millis,
            open: ask,
            high: ask,
            low: ask,
            close: ask,
            spread: tick.spread(tick_scale),
            volume: 1,
        }
    }

    /// Updates the builder with an older tick of the same bucket.
    fn update(&mut self, tick: &RawTick, tick_scale: f64) {
        let ask = tick.ask_price(tick_scale);
        self.high = self.high.max(ask);
        self.low = self.low.min(ask);
        self.open = ask;
        self.spread = tick.spread(tick_scale);
        self.volume += 1;
    }

    /// Finishes building and returns the bar.
    const fn finish(self) -> Bar {
        Bar::new(
            self.close_ms,
            self.open,
            self.high,
            self.low,
            self.close,
            self.spread,
            self.volume,
        )
    }
}
