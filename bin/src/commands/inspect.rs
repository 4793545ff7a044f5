//! Inspect command implementation.
//!
//! Decodes a single day file and prints what the resampler would see.

use anyhow::{Context, Result};
use zticks_lib::{decode_ticks, decompress_zticks, parse_ticks, tick_count, trailing_bytes};

use crate::SessionArgs;
use crate::display::{format_millis, open_session, parse_day};

/// Prints record counts, time span, price range and zero-price counts of one day.
pub(crate) fn inspect(args: &SessionArgs, symbol: &str, day_str: &str) -> Result<()> {
    let session = open_session(args)?;
    let day = parse_day(day_str)?;
    let path = session.store().day_path(symbol, day);
    let scale = session.config().tick_scale(symbol);

    let compressed =
        std::fs::read(&path).with_context(|| format!("Failed to read {}", path.display()))?;
    let data = decompress_zticks(&compressed)
        .with_context(|| format!("Failed to decompress {}", path.display()))?;

    let (zero_bids, zero_asks) = parse_ticks(&data).fold((0usize, 0usize), |(b, a), tick| {
        (b + usize::from(tick.bid == 0), a + usize::from(tick.ask == 0))
    });
    let series = decode_ticks(&data);

    println!("File:         {}", path.display());
    println!("Compressed:   {} bytes", compressed.len());
    println!("Uncompressed: {} bytes", data.len());
    println!("Records:      {}", tick_count(data.len()));
    println!("Trailing:     {} bytes", trailing_bytes(data.len()));
    println!("Zero bids:    {zero_bids}");
    println!("Zero asks:    {zero_asks}");

    let (Some(first), Some(last)) = (series.first_millis(), series.last_millis()) else {
        println!("No ticks.");
        return Ok(());
    };
    println!("First tick:   {}", format_millis(first));
    println!("Last tick:    {}", format_millis(last));

    let asks = series.asks();
    let min_ask = asks.iter().copied().min().unwrap_or(0);
    let max_ask = asks.iter().copied().max().unwrap_or(0);
    let mean_spread = series
        .iter()
        .map(|t| t.spread(scale))
        .sum::<f64>()
        / series.len() as f64;

    println!("Tick scale:   {scale}");
    println!(
        "Ask range:    {} .. {}",
        f64::from(min_ask) * scale,
        f64::from(max_ask) * scale
    );
    println!("Mean spread:  {mean_spread:.6}");

    Ok(())
}
