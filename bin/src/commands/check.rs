//! Check command implementation.

use anyhow::Result;

use crate::SessionArgs;
use crate::display::open_session;

/// Logs in to the account cache and prints a short summary.
pub(crate) fn check(args: &SessionArgs) -> Result<()> {
    let session = open_session(args)?;
    let symbols = session.symbols()?;

    println!("Cache:   {}", session.cache_dir().display());
    println!("Symbols: {}", symbols.len());

    for symbol in &symbols {
        let days = session.available_days(symbol)?;
        match (days.first(), days.last()) {
            (Some(first), Some(last)) => {
                println!("  {symbol:<12} {:>5} days  {first} .. {last}", days.len());
            }
            _ => println!("  {symbol:<12} no day files"),
        }
    }

    Ok(())
}
