//! Tick data representation.

use chrono::{DateTime, Utc};

/// Raw tick as stored in a `.zticks` day file.
///
/// Each record is 24 bytes little-endian:
/// - `i64`: milliseconds since the Unix epoch
/// - `i64`: bid in tick units (only the low 32 bits are meaningful)
/// - `i64`: ask in tick units (only the low 32 bits are meaningful)
///
/// A zero bid or ask means "unchanged" and is resolved by [`zero_fill`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawTick {
    /// Milliseconds since the Unix epoch (UTC).
    pub millis: i64,
    /// Bid in tick units.
    pub bid: u32,
    /// Ask in tick units.
    pub ask: u32,
}

impl RawTick {
    /// Size in bytes of a raw tick record.
    pub const SIZE: usize = 24;

    /// Creates a new raw tick.
    #[must_use]
    pub const fn new(millis: i64, bid: u32, ask: u32) -> Self {
        Self { millis, bid, ask }
    }

    /// Returns the tick timestamp, or `None` if it is outside chrono's range.
    #[must_use]
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.millis)
    }

    /// Returns the ask as a real price.
    #[must_use]
    pub fn ask_price(&self, tick_scale: f64) -> f64 {
        f64::from(self.ask) * tick_scale
    }

    /// Returns the bid as a real price.
    #[must_use]
    pub fn bid_price(&self, tick_scale: f64) -> f64 {
        f64::from(self.bid) * tick_scale
    }

    /// Returns the spread (ask - bid) as a real price difference.
    #[must_use]
    pub fn spread(&self, tick_scale: f64) -> f64 {
        (f64::from(self.ask) - f64::from(self.bid)) * tick_scale
    }
}

/// Replaces zero bid/ask values with the last known price on the same side.
///
/// On the first record a zero side is taken from the opposite side of that
/// same record. Afterwards a zero side repeats the previous corrected value.
/// Record order is preserved.
pub fn zero_fill<I>(raw: I) -> impl Iterator<Item = RawTick>
where
    I: IntoIterator<Item = RawTick>,
{
    raw.into_iter()
        .scan(None, |carry: &mut Option<(u32, u32)>, tick| {
            let (bid, ask) = match *carry {
                None => (
                    if tick.bid == 0 { tick.ask } else { tick.bid },
                    if tick.ask == 0 { tick.bid } else { tick.ask },
                ),
                Some((prev_bid, prev_ask)) => (
                    if tick.bid == 0 { prev_bid } else { tick.bid },
                    if tick.ask == 0 { prev_ask } else { tick.ask },
                ),
            };
            *carry = Some((bid, ask));
            Some(RawTick::new(tick.millis, bid, ask))
        })
}

/// One day of ticks stored as three parallel arrays.
///
/// Index 0 is the earliest tick of the day. All arrays always have the same
/// length.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickSeries {
    timestamps: Vec<i64>,
    bids: Vec<u32>,
    asks: Vec<u32>,
}

impl TickSeries {
    /// Creates an empty series.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            timestamps: Vec::new(),
            bids: Vec::new(),
            asks: Vec::new(),
        }
    }

    /// Creates an empty series with room for `capacity` ticks.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            timestamps: Vec::with_capacity(capacity),
            bids: Vec::with_capacity(capacity),
            asks: Vec::with_capacity(capacity),
        }
    }

    /// Builds a series from raw records, applying [`zero_fill`].
    pub fn from_raw<I>(raw: I) -> Self
    where
        I: IntoIterator<Item = RawTick>,
    {
        let raw = raw.into_iter();
        let mut series = Self::with_capacity(raw.size_hint().0);
        for tick in zero_fill(raw) {
            series.push(tick);
        }
        series
    }

    fn push(&mut self, tick: RawTick) {
        self.timestamps.push(tick.millis);
        self.bids.push(tick.bid);
        self.asks.push(tick.ask);
    }

    /// Returns the number of ticks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    /// Returns true if the series holds no ticks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    /// Returns the tick at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<RawTick> {
        Some(RawTick::new(
            *self.timestamps.get(index)?,
            *self.bids.get(index)?,
            *self.asks.get(index)?,
        ))
    }

    /// Timestamps in milliseconds since the Unix epoch.
    #[must_use]
    pub fn timestamps(&self) -> &[i64] {
        &self.timestamps
    }

    /// Bids in tick units.
    #[must_use]
    pub fn bids(&self) -> &[u32] {
        &self.bids
    }

    /// Asks in tick units.
    #[must_use]
    pub fn asks(&self) -> &[u32] {
        &self.asks
    }

    /// Iterates ticks from earliest to latest.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = RawTick> + ExactSizeIterator + '_ {
        self.timestamps
            .iter()
            .zip(&self.bids)
            .zip(&self.asks)
            .map(|((&millis, &bid), &ask)| RawTick::new(millis, bid, ask))
    }

    /// Returns the earliest timestamp of the day.
    #[must_use]
    pub fn first_millis(&self) -> Option<i64> {
        self.timestamps.first().copied()
    }

    /// Returns the latest timestamp of the day.
    #[must_use]
    pub fn last_millis(&self) -> Option<i64> {
        self.timestamps.last().copied()
    }
}
