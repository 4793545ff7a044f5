//! Display utilities and output formatting for the zticks CLI.

use anyhow::{Context, Result, bail};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use clap::ValueEnum;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use zticks_lib::prelude::*;

use crate::SessionArgs;

/// Output format for history records.
#[derive(Clone, Copy, ValueEnum)]
pub(crate) enum Format {
    Csv,
    Tsv,
    Json,
    Ndjson,
    Parquet,
}

impl Format {
    /// Returns the library format this flag selects.
    pub(crate) const fn output_format(self) -> OutputFormat {
        match self {
            Self::Csv => OutputFormat::Csv,
            Self::Tsv => OutputFormat::Tsv,
            Self::Json => OutputFormat::Json,
            Self::Ndjson => OutputFormat::Ndjson,
            Self::Parquet => OutputFormat::Parquet,
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.output_format().extension())
    }
}

/// Builds the session configuration from the config file and flags.
pub(crate) fn session_config(args: &SessionArgs) -> Result<SessionConfig> {
    let mut config = match &args.config {
        Some(path) => SessionConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => SessionConfig::default(),
    };

    if let Some(root) = &args.cache_root {
        config = config.with_cache_root(root);
    }
    if let Some(scale) = args.tick_scale {
        config = config.with_default_tick_scale(scale);
    }
    if let Some(days) = args.slack_days {
        config = config.with_slack_days(days);
    }
    Ok(config)
}

/// Logs in to the account cache named by the flags.
pub(crate) fn open_session(args: &SessionArgs) -> Result<Session> {
    let (Some(broker), Some(account)) = (&args.broker, &args.account) else {
        bail!("Both --broker and --account are required");
    };

    let config = session_config(args)?;
    let credentials = Credentials::new(broker, account);
    Session::login(config, &credentials)
        .with_context(|| format!("Failed to open cache for {broker}/{account}"))
}

/// Parses a window bound given as a date, an RFC 3339 timestamp,
/// `YYYY-MM-DD HH:MM[:SS]` or an OLE Automation date.
pub(crate) fn parse_time(s: &str) -> Result<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    for layout in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, layout) {
            return Ok(dt.and_utc());
        }
    }
    if let Ok(day) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(day.and_time(chrono::NaiveTime::MIN).and_utc());
    }
    if let Ok(days) = s.parse::<f64>() {
        return OleDate::new(days)
            .to_datetime()
            .with_context(|| format!("OLE date out of range: {s}"));
    }
    bail!("Invalid time: {s}. Use YYYY-MM-DD, RFC 3339 or an OLE date")
}

/// Parses a day argument.
pub(crate) fn parse_day(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").with_context(|| format!("Invalid day: {s}"))
}

/// Writes records to `output`, or to stdout when `None`.
pub(crate) fn write_bars(bars: &[Bar], output: Option<&Path>, format: Format) -> Result<()> {
    match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            write_with(bars, BufWriter::new(file), format)
        }
        None => write_with(bars, BufWriter::new(std::io::stdout()), format),
    }
}

fn write_with<W: Write + Send>(bars: &[Bar], mut writer: W, format: Format) -> Result<()> {
    match format {
        Format::Csv => CsvFormatter::new().write_bars(bars, &mut writer)?,
        Format::Tsv => CsvFormatter::tsv().write_bars(bars, &mut writer)?,
        Format::Json => JsonFormatter::new().write_bars(bars, &mut writer)?,
        Format::Ndjson => JsonFormatter::ndjson().write_bars(bars, &mut writer)?,
        Format::Parquet => {
            #[cfg(feature = "parquet")]
            {
                ParquetFormatter::new().write_bars(bars, &mut writer)?;
            }
            #[cfg(not(feature = "parquet"))]
            {
                bail!("Parquet support not compiled in");
            }
        }
    }
    writer.flush()?;
    Ok(())
}

/// Formats a millisecond timestamp for display.
pub(crate) fn format_millis(millis: i64) -> String {
    DateTime::from_timestamp_millis(millis).map_or_else(
        || millis.to_string(),
        |dt| dt.format("%Y-%m-%d %H:%M:%S%.3f").to_string(),
    )
}
