//! CSV output format.

use std::io::Write;
use zticks_types::Bar;

use crate::{FormatError, Formatter};

/// Timestamp layout used in text output.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

/// CSV formatter.
#[derive(Debug, Clone)]
pub struct CsvFormatter {
    /// Field delimiter (default: comma).
    delimiter: char,
    /// Whether to include header row.
    include_header: bool,
}

impl Default for CsvFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl CsvFormatter {
    /// Creates a new CSV formatter with default settings.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            delimiter: ',',
            include_header: true,
        }
    }

    /// Sets the field delimiter.
    #[must_use]
    pub const fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Sets whether to include a header row.
    #[must_use]
    pub const fn with_header(mut self, include: bool) -> Self {
        self.include_header = include;
        self
    }

    /// Creates a tab-separated values (TSV) formatter.
    #[must_use]
    pub const fn tsv() -> Self {
        Self {
            delimiter: '\t',
            include_header: true,
        }
    }
}

impl Formatter for CsvFormatter {
    fn write_bars<W: Write + Send>(&self, bars: &[Bar], mut writer: W) -> Result<(), FormatError> {
        let d = self.delimiter;

        if self.include_header {
            writeln!(
                writer,
                "timestamp{d}ole_time{d}open{d}high{d}low{d}close{d}spread{d}volume"
            )?;
        }

        for bar in bars {
            let timestamp = bar.timestamp().map_or_else(
                || bar.close_ms.to_string(),
                |t| t.format(TIMESTAMP_FORMAT).to_string(),
            );
            writeln!(
                writer,
                "{timestamp}{d}{}{d}{}{d}{}{d}{}{d}{}{d}{}{d}{}",
                bar.ole_time(),
                bar.open,
                bar.high,
                bar.low,
                bar.close,
                bar.spread,
                bar.volume
            )?;
        }

        Ok(())
    }

    fn extension(&self) -> &str {
        if self.delimiter == '\t' { "tsv" } else { "csv" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use std::io::Cursor;

    fn create_test_bar() -> Bar {
        let close_ms = Utc
            .with_ymd_and_hms(2024, 1, 15, 12, 30, 45)
            .unwrap()
            .timestamp_millis();
        Bar::new(close_ms + 250, 1.0999, 1.1010, 1.0990, 1.1000, 0.0001, 3)
    }

    #[test]
    fn test_csv_bars() {
        let formatter = CsvFormatter::new();
        let mut output = Cursor::new(Vec::new());

        formatter.write_bars(&[create_test_bar()], &mut output).unwrap();

        let result = String::from_utf8(output.into_inner()).unwrap();
        assert!(result.starts_with("timestamp,ole_time,open,high,low,close,spread,volume\n"));
        assert!(result.contains("2024-01-15T12:30:45.250Z"));
        assert!(result.contains(",1.101,"));
        assert!(result.trim_end().ends_with(",3"));
    }

    #[test]
    fn test_csv_no_header() {
        let formatter = CsvFormatter::new().with_header(false);
        let mut output = Cursor::new(Vec::new());

        formatter.write_bars(&[create_test_bar()], &mut output).unwrap();

        let result = String::from_utf8(output.into_inner()).unwrap();
        assert!(!result.contains("timestamp,ole_time"));
        assert_eq!(result.lines().count(), 1);
    }

    #[test]
    fn test_tsv() {
        let formatter = CsvFormatter::tsv();
        let mut output = Cursor::new(Vec::new());

        formatter.write_bars(&[create_test_bar()], &mut output).unwrap();

        let result = String::from_utf8(output.into_inner()).unwrap();
        assert!(result.contains("timestamp\tole_time\topen"));
        assert_eq!(formatter.extension(), "tsv");
    }
}
