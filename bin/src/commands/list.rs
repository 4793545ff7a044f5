//! Symbol and day listing.

use anyhow::Result;

use crate::SessionArgs;
use crate::display::open_session;

/// Lists the symbols cached for the account.
pub(crate) fn list_symbols(args: &SessionArgs) -> Result<()> {
    let session = open_session(args)?;
    let symbols = session.symbols()?;

    if symbols.is_empty() {
        println!("No symbols found.");
        return Ok(());
    }

    for symbol in &symbols {
        println!("{symbol}");
    }
    println!("\nTotal: {} symbols", symbols.len());
    Ok(())
}

/// Lists the cached days of a symbol, oldest first.
pub(crate) fn list_days(args: &SessionArgs, symbol: &str) -> Result<()> {
    let session = open_session(args)?;
    let days = session.available_days(symbol)?;

    println!("{:<12} {:>12}", "DAY", "SIZE");
    println!("{}", "-".repeat(25));

    for day in &days {
        let size = std::fs::metadata(session.store().day_path(symbol, *day))
            .map(|m| m.len())
            .unwrap_or(0);
        println!("{:<12} {:>12}", day.format("%Y-%m-%d"), size);
    }

    println!("\nTotal: {} days", days.len());
    Ok(())
}
