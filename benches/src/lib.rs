//! Benchmark fixtures for zticks.

use chrono::{Datelike, Days, NaiveDate, NaiveTime, Weekday};
use std::io;
use std::path::Path;
use tempfile::TempDir;
use zticks_lib::encode::{compress_zticks, encode_ticks, write_day_file};
use zticks_lib::{RawTick, TickStore};

/// Synthetic ticks for one day, spread evenly over the trading hours.
///
/// Prices random-walk around 1.10000 with roughly one zero side in fifty
/// records, the way real cache files repeat unchanged quotes.
pub fn synthetic_day(day: NaiveDate, ticks: usize) -> Vec<RawTick> {
    let open = day.and_time(NaiveTime::MIN).and_utc().timestamp_millis();
    let step = 86_400_000 / ticks.max(1) as i64;
    let mut state: u32 = 0x2545_f491;
    let mut ask: u32 = 110_000;

    (0..ticks)
        .map(|i| {
            // xorshift32
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            ask = match state % 3 {
                0 => ask.saturating_sub(1).max(100_000),
                1 => ask + 1,
                _ => ask,
            };
            let spread = 1 + state % 4;
            let (bid, ask_out) = match state % 50 {
                0 => (0, ask),
                1 => (ask - spread, 0),
                _ => (ask - spread, ask),
            };
            RawTick::new(open + i as i64 * step, bid, ask_out)
        })
        .collect()
}

/// One compressed day file in memory.
pub fn compressed_day(day: NaiveDate, ticks: usize) -> io::Result<Vec<u8>> {
    compress_zticks(&encode_ticks(&synthetic_day(day, ticks)))
}

/// A temporary cache holding `days` consecutive weekdays for `symbol`
/// ending on `last_day`.
#[derive(Debug)]
pub struct BenchCache {
    dir: TempDir,
}

impl BenchCache {
    /// Writes the cache.
    pub fn new(symbol: &str, last_day: NaiveDate, days: u64, ticks_per_day: usize) -> io::Result<Self> {
        let dir = TempDir::new()?;
        let store = TickStore::new(dir.path());

        for back in 0..days {
            let Some(day) = last_day.checked_sub_days(Days::new(back)) else {
                break;
            };
            if matches!(day.weekday(), Weekday::Sat | Weekday::Sun) {
                continue;
            }
            write_day_file(&store.day_path(symbol, day), &synthetic_day(day, ticks_per_day))?;
        }
        Ok(Self { dir })
    }

    /// Returns the cache directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Returns a store over the cache.
    pub fn store(&self) -> TickStore {
        TickStore::new(self.dir.path())
    }
}
