//! Cache directory access.

use chrono::NaiveDate;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;
use zticks_types::{DayLoadError, DaySource, TickSeries, day_from_file_name};

use crate::parse::{decode_ticks, trailing_bytes};
use crate::path::{TICK_DIR, day_file_path, symbol_dir};
use crate::decompress_zticks;

/// Reads and decodes one day file.
///
/// # Errors
///
/// - [`DayLoadError::NotFound`] if the file does not exist
/// - [`DayLoadError::Open`] if it exists but cannot be read
/// - [`DayLoadError::Decode`] if the gzip stream is corrupt
pub fn read_day_file(path: &Path) -> Result<TickSeries, DayLoadError> {
    if !path.exists() {
        return Err(DayLoadError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let compressed = fs::read(path).map_err(|source| DayLoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let decompressed = decompress_zticks(&compressed).map_err(|e| DayLoadError::Decode {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    let trailing = trailing_bytes(decompressed.len());
    if trailing != 0 {
        debug!(path = %path.display(), trailing, "ignoring partial trailing record");
    }

    let series = decode_ticks(&decompressed);
    debug!(
        path = %path.display(),
        compressed = compressed.len(),
        ticks = series.len(),
        "decoded day file"
    );
    Ok(series)
}

/// A cTrader backtesting cache directory.
///
/// Layout: `<cache_dir>/<SYMBOL>/t1/<YYYYMMDD>.zticks`.
#[derive(Debug, Clone)]
pub struct TickStore {
    cache_dir: PathBuf,
}

impl TickStore {
    /// Creates a store rooted at the given cache directory.
    #[must_use]
    pub fn new(cache_dir: impl Into<PathBuf>) -> Self {
        Self {
            cache_dir: cache_dir.into(),
        }
    }

    /// Returns the cache directory.
    #[must_use]
    pub fn cache_dir(&self) -> &Path {
        &self.cache_dir
    }

    /// Returns the tick directory of a symbol.
    #[must_use]
    pub fn symbol_dir(&self, symbol: &str) -> PathBuf {
        symbol_dir(&self.cache_dir, symbol)
    }

    /// Returns the path of a symbol's day file.
    #[must_use]
    pub fn day_path(&self, symbol: &str, day: NaiveDate) -> PathBuf {
        day_file_path(&self.symbol_dir(symbol), day)
    }

    /// Lists the days with a tick file for `symbol`, oldest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the symbol directory cannot be read.
    pub fn available_days(&self, symbol: &str) -> io::Result<Vec<NaiveDate>> {
        let mut days: Vec<NaiveDate> = fs::read_dir(self.symbol_dir(symbol))?
            .filter_map(|entry| entry.ok())
            .filter_map(|entry| day_from_file_name(entry.file_name().to_str()?))
            .collect();
        days.sort_unstable();
        Ok(days)
    }

    /// Lists symbols that have a tick directory, sorted alphabetically.
    ///
    /// # Errors
    ///
    /// Returns an error if the cache directory cannot be read.
    pub fn symbols(&self) -> io::Result<Vec<String>> {
        let mut symbols: Vec<String> = fs::read_dir(&self.cache_dir)?
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.path().join(TICK_DIR).is_dir())
            .filter_map(|entry| entry.file_name().into_string().ok())
            .collect();
        symbols.sort();
        Ok(symbols)
    }
}

impl DaySource for TickStore {
    fn load_day(&self, symbol: &str, day: NaiveDate) -> Result<TickSeries, DayLoadError> {
        read_day_file(&self.day_path(symbol, day))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode::write_day_file;
    use tempfile::TempDir;
    use zticks_types::RawTick;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    #[test]
    fn test_missing_day_is_not_found() {
        let dir = TempDir::new().unwrap();
        let store = TickStore::new(dir.path());

        let err = store.load_day("EURUSD", day(6)).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_round_trip_day() {
        let dir = TempDir::new().unwrap();
        let store = TickStore::new(dir.path());
        let raw: Vec<_> = (0..100)
            .map(|i| RawTick::new(1_704_412_800_000 + i * 250, 110_000 + i as u32, 110_010 + i as u32))
            .collect();
        write_day_file(&store.day_path("EURUSD", day(5)), &raw).unwrap();

        let series = store.load_day("EURUSD", day(5)).unwrap();
        assert_eq!(series.len(), 100);
        assert!(series.iter().eq(raw.iter().copied()));
    }

    #[test]
    fn test_zero_prices_filled_on_load() {
        let dir = TempDir::new().unwrap();
        let store = TickStore::new(dir.path());
        let raw = [
            RawTick::new(1, 0, 120),
            RawTick::new(2, 118, 0),
            RawTick::new(3, 0, 0),
        ];
        write_day_file(&store.day_path("EURUSD", day(5)), &raw).unwrap();

        let series = store.load_day("EURUSD", day(5)).unwrap();
        assert!(series.bids().iter().all(|&b| b != 0));
        assert!(series.asks().iter().all(|&a| a != 0));
        assert_eq!(series.bids(), &[120, 118, 118]);
        assert_eq!(series.asks(), &[120, 120, 120]);
    }

    #[test]
    fn test_unreadable_day_is_open_error() {
        let dir = TempDir::new().unwrap();
        let store = TickStore::new(dir.path());
        // A directory where the file should be exists but cannot be read as a file.
        fs::create_dir_all(store.day_path("EURUSD", day(5))).unwrap();

        let err = store.load_day("EURUSD", day(5)).unwrap_err();
        assert!(matches!(err, DayLoadError::Open { .. }));
    }

    #[test]
    fn test_corrupt_day_is_decode_error() {
        let dir = TempDir::new().unwrap();
        let store = TickStore::new(dir.path());
        let path = store.day_path("EURUSD", day(5));
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, [0x1f, 0x8b, 0x08, 0x00, 0x01]).unwrap();

        let err = store.load_day("EURUSD", day(5)).unwrap_err();
        assert!(matches!(err, DayLoadError::Decode { .. }));
    }

    #[test]
    fn test_available_days_and_symbols() {
        let dir = TempDir::new().unwrap();
        let store = TickStore::new(dir.path());
        let tick = [RawTick::new(0, 1, 1)];
        write_day_file(&store.day_path("EURUSD", day(9)), &tick).unwrap();
        write_day_file(&store.day_path("EURUSD", day(2)), &tick).unwrap();
        write_day_file(&store.day_path("GBPUSD", day(3)), &tick).unwrap();
        fs::write(store.symbol_dir("EURUSD").join("notes.txt"), "x").unwrap();
        fs::create_dir_all(dir.path().join("logs")).unwrap();

        assert_eq!(store.available_days("EURUSD").unwrap(), vec![day(2), day(9)]);
        assert_eq!(store.symbols().unwrap(), vec!["EURUSD", "GBPUSD"]);
        assert!(store.available_days("USDJPY").is_err());
    }
}
