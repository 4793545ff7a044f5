//! zticks CLI - Reader for cTrader backtesting tick caches.

use anyhow::Result;
use clap::{Args, CommandFactory, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod display;

use display::Format;

#[derive(Parser)]
#[command(name = "zticks")]
#[command(about = "Reader for cTrader .zticks backtesting caches", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    session: SessionArgs,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Quiet mode (errors only, no progress output)
    #[arg(short, long, global = true)]
    quiet: bool,
}

/// Options locating and configuring an account cache.
#[derive(Args, Debug, Clone)]
pub(crate) struct SessionArgs {
    /// Broker directory name under the cache root
    #[arg(short, long, global = true)]
    pub(crate) broker: Option<String>,

    /// Account directory name under the broker's backtesting cache
    #[arg(short, long, global = true)]
    pub(crate) account: Option<String>,

    /// Cache root (defaults to the platform Spotware/Cache directory)
    #[arg(long, global = true)]
    pub(crate) cache_root: Option<PathBuf>,

    /// JSON session configuration file
    #[arg(long, global = true)]
    pub(crate) config: Option<PathBuf>,

    /// Price multiplier for symbols without a configured scale
    #[arg(long, global = true)]
    pub(crate) tick_scale: Option<f64>,

    /// Days searched below the window start
    #[arg(long, global = true)]
    pub(crate) slack_days: Option<u32>,
}

#[derive(Subcommand)]
enum Commands {
    /// Check that an account cache exists and summarize it
    Check,

    /// List cached symbols
    Symbols,

    /// List cached days of a symbol
    Days {
        /// Symbol name (e.g., EURUSD)
        symbol: String,
    },

    /// Decode one day file and print its statistics
    Inspect {
        /// Symbol name (e.g., EURUSD)
        symbol: String,

        /// Day (YYYY-MM-DD)
        day: String,
    },

    /// Walk history backward and write ticks or bars
    History {
        /// Symbol name (e.g., EURUSD)
        symbol: String,

        /// Window start (YYYY-MM-DD, RFC 3339 or OLE date)
        #[arg(short, long)]
        start: String,

        /// Window end (YYYY-MM-DD, RFC 3339 or OLE date). Defaults to now.
        #[arg(short, long)]
        end: Option<String>,

        /// Bar interval (tick, m1, m5, h1, d1 or minutes)
        #[arg(short, long, default_value = "tick")]
        interval: String,

        /// Maximum number of records to produce
        #[arg(short = 'n', long, default_value = "10000")]
        count: usize,

        /// Output file path. Defaults to stdout (text formats) or <symbol>.<format>
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "csv")]
        format: Format,
    },
}

/// Installs the stderr log subscriber.
///
/// `RUST_LOG` takes precedence over the verbosity flags.
fn init_tracing(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, 2) => "debug",
        (false, _) => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    // Show help if no command provided
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Check => commands::check::check(&cli.session),
        Commands::Symbols => commands::list::list_symbols(&cli.session),
        Commands::Days { symbol } => commands::list::list_days(&cli.session, &symbol),
        Commands::Inspect { symbol, day } => commands::inspect::inspect(&cli.session, &symbol, &day),
        Commands::History {
            symbol,
            start,
            end,
            interval,
            count,
            output,
            format,
        } => commands::history::history(
            &cli.session,
            &symbol,
            &start,
            end.as_deref(),
            &interval,
            count,
            output,
            format,
            cli.quiet,
        ),
    }
}
