//! History command implementation.
//!
//! Pages through the resampler the way a trading host does and writes the
//! collected records newest first.

use anyhow::{Context, Result, anyhow};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;
use zticks_lib::prelude::*;

use crate::SessionArgs;
use crate::display::{Format, format_millis, open_session, parse_time, write_bars};

/// Walks `symbol` backward through `[start, end]` and writes up to `count` records.
#[allow(clippy::too_many_arguments)]
pub(crate) fn history(
    args: &SessionArgs,
    symbol: &str,
    start_str: &str,
    end_str: Option<&str>,
    interval_str: &str,
    count: usize,
    output: Option<PathBuf>,
    format: Format,
    quiet: bool,
) -> Result<()> {
    let mut session = open_session(args)?;

    let start = parse_time(start_str)?;
    let end = match end_str {
        Some(s) => parse_time(s)?,
        None => chrono::Utc::now(),
    };
    let window = HistoryWindow::new(start, end)?;

    let interval = interval_str
        .parse::<BarInterval>()
        .map_err(|e| anyhow!("{e}"))?;

    // Binary formats go to a file named after the symbol
    let output = output.or_else(|| {
        format
            .output_format()
            .is_binary()
            .then(|| PathBuf::from(format!("{}.{}", symbol.to_lowercase(), format)))
    });

    let page = session.config().max_ticks.max(1);
    let request = HistoryRequest::new(symbol, window, interval, page);

    let progress = if quiet {
        ProgressBar::hidden()
    } else {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} [{elapsed_precise}] {pos} records {msg}")
                .context("Invalid progress template")?,
        );
        pb.enable_steady_tick(Duration::from_millis(100));
        pb.set_message(format!("{symbol} {interval}"));
        pb
    };

    let bars = collect_pages(&mut session, &request, count, |chunk| {
        if let Some(oldest) = chunk.last() {
            progress.set_message(format!("{symbol} {interval} back to {}", format_millis(oldest.close_ms)));
        }
        progress.inc(chunk.len() as u64);
    });
    progress.finish_with_message(format!("{symbol} {interval} done"));

    info!(symbol, records = bars.len(), %window, "history collected");
    write_bars(&bars, output.as_deref(), format)?;

    if !quiet {
        if let Some(path) = &output {
            eprintln!("Wrote {} records to {}", bars.len(), path.display());
        }
    }

    Ok(())
}

/// Pages through `session` in chunks of `request.max_count`.
///
/// Stops at `count` records, at exhaustion, or once a page reaches the
/// bucket holding the window start.
pub(crate) fn collect_pages(
    session: &mut Session,
    request: &HistoryRequest,
    count: usize,
    mut on_chunk: impl FnMut(&[Bar]),
) -> Vec<Bar> {
    let page = request.max_count.max(1);
    let start_ms = request.window.start_millis();

    let mut bars: Vec<Bar> = Vec::new();
    while bars.len() < count {
        let wanted = page.min(count - bars.len());
        let chunk = session.history(&request.clone().with_max_count(wanted));
        let Some(oldest) = chunk.last().copied() else {
            break;
        };

        on_chunk(&chunk);
        bars.extend(chunk);
        if request.interval.bucket_start(oldest.close_ms) <= start_ms {
            break;
        }
    }
    bars
}
