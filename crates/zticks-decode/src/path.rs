//! Cache path construction.

use chrono::NaiveDate;
use std::path::{Path, PathBuf};

/// File extension of day tick files.
pub const DAY_FILE_EXTENSION: &str = "zticks";

/// Subdirectory of a symbol directory that holds tick (T1) day files.
pub const TICK_DIR: &str = "t1";

/// Builds the file name for a day: `YYYYMMDD.zticks`.
///
/// # Example
///
/// ```
/// use zticks_decode::path::day_file_name;
/// use chrono::NaiveDate;
///
/// let day = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
/// assert_eq!(day_file_name(day), "20240115.zticks");
/// ```
#[must_use]
pub fn day_file_name(day: NaiveDate) -> String {
    format!("{}.{DAY_FILE_EXTENSION}", day.format("%Y%m%d"))
}

/// Builds the directory holding a symbol's tick files: `<cache>/<SYMBOL>/t1`.
#[must_use]
pub fn symbol_dir(cache_dir: &Path, symbol: &str) -> PathBuf {
    cache_dir.join(symbol).join(TICK_DIR)
}

/// Builds the full path of a day file inside a symbol directory.
#[must_use]
pub fn day_file_path(symbol_dir: &Path, day: NaiveDate) -> PathBuf {
    symbol_dir.join(day_file_name(day))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_file_name_padding() {
        let day = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(day_file_name(day), "20240305.zticks");
    }

    #[test]
    fn test_day_file_path() {
        let day = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
        let dir = symbol_dir(Path::new("cache"), "EURUSD");
        assert_eq!(
            day_file_path(&dir, day),
            Path::new("cache").join("EURUSD").join("t1").join("20241231.zticks")
        );
    }
}
