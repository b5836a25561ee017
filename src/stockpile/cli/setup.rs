use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "stockpile", bin_name = "stockpile", version)]
#[command(about = "Interactive in-memory inventory manager", long_about = None)]
pub struct Cli {
    /// JSON config file (max_items, low_stock_threshold)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Maximum number of items the inventory may hold
    #[arg(long, value_name = "N")]
    pub max_items: Option<usize>,

    /// Quantity at or below which an item counts as low stock
    #[arg(long = "low-stock", value_name = "N")]
    pub low_stock: Option<u32>,

    /// Debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

/// Logs go to stderr so they never interleave with the menu on stdout.
/// `RUST_LOG` takes precedence over `--verbose`.
pub fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
