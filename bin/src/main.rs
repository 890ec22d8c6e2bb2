//! stocksync CLI - sync Ozon seller stock and prices from a supplier feed.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::num::NonZeroUsize;
use std::path::PathBuf;

mod commands;
mod display;
mod logging;

use display::Format;

#[derive(Parser)]
#[command(name = "stocksync")]
#[command(about = "Sync Ozon seller stock and prices from a supplier feed", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    sync: SyncArgs,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Quiet mode (suppress progress output)
    #[arg(short, long, global = true)]
    quiet: bool,
}

/// Settings shared by every subcommand.
#[derive(Args)]
struct SyncArgs {
    /// Seller client id
    #[arg(long, env = "CLIENT_ID", global = true, hide_env_values = true)]
    client_id: Option<String>,

    /// Seller API key
    #[arg(long, env = "SELLER_TOKEN", global = true, hide_env_values = true)]
    seller_token: Option<String>,

    /// Supplier feed URL
    #[arg(long, global = true)]
    feed_url: Option<String>,

    /// Directory for the extracted spreadsheet
    #[arg(long, global = true)]
    work_dir: Option<PathBuf>,

    /// Stock updates per import call
    #[arg(long, global = true)]
    stock_batch: Option<NonZeroUsize>,

    /// Price updates per import call during a full run
    #[arg(long, global = true)]
    price_batch: Option<NonZeroUsize>,

    /// Price updates per import call for `prices`
    #[arg(long, global = true)]
    price_upload_batch: Option<NonZeroUsize>,
}

#[derive(Subcommand)]
enum Commands {
    /// Push stock and prices for every listed offer (default)
    Run,

    /// Push stock only
    Stocks,

    /// Push prices only
    Prices,

    /// Print every listed offer id
    Offers,

    /// Write the payloads a run would push, without pushing them
    Export {
        /// Output format
        #[arg(short, long, value_enum, default_value = "csv")]
        format: Format,

        /// Output directory. Files named stocks.<format> and prices.<format>
        #[arg(short, long, default_value = ".")]
        output: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    logging::init(cli.verbose)?;

    let ctx = commands::Context::from_args(cli.sync, cli.quiet)?;

    let outcome = match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => commands::run::run(&ctx).await,
        Commands::Stocks => commands::stocks::stocks(&ctx).await,
        Commands::Prices => commands::prices::prices(&ctx).await,
        Commands::Offers => commands::offers::offers(&ctx).await,
        Commands::Export { format, output } => commands::export::export(&ctx, format, &output).await,
    };

    // Failures after configuration are reported, not propagated.
    if let Err(err) = outcome {
        display::report_failure(&err);
    }
    Ok(())
}
