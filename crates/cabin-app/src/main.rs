use std::path::PathBuf;

use cabin_app::feed::{project_file, render, sync_feeds};
use cabin_core::config::load_config;
use cabin_core::types::ReservationSource;
use cabin_ical::GuestNameRules;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt};

/// Turns booking-platform calendar exports into reservation records.
#[derive(Parser)]
#[command(name = "cabin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbosity level (overrides the configured log level)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Configuration file (defaults to ./config.toml if present)
    #[arg(short, long, global = true, env = "CABIN_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Project a single .ics file and print the reservations as JSON
    ///
    /// Example: cabin parse airbnb.ics --source Airbnb
    Parse {
        /// Already-fetched calendar feed
        file: PathBuf,

        /// Booking source label (Airbnb, Booking.com, Directo)
        #[arg(short, long)]
        source: ReservationSource,

        /// Print an object with drop and night counts instead of a bare array
        #[arg(long)]
        report: bool,
    },

    /// Project every [[feeds]] entry from the configuration
    Sync {
        /// Print an object with drop and night counts instead of a bare array
        #[arg(long)]
        report: bool,
    },
}

fn main() -> anyhow::Result<()> {
    // Before parsing, so CABIN_CONFIG can come from .env
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let (filter_layer, filter_handle) = reload::Layer::new(EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true),
        )
        .init();

    let config = load_config(cli.config.as_deref())?;

    tracing::debug!(config = ?config, "Configuration loaded");

    let level = match cli.verbose {
        0 => config.logging.level.as_str(),
        1 => "debug",
        _ => "trace",
    };

    if let Ok(filter) = EnvFilter::try_new(level) {
        if let Err(e) = filter_handle.modify(|current| *current = filter) {
            tracing::warn!(error = %e, "Failed to update log filter");
        }
    } else {
        tracing::warn!(%level, "Invalid log level in config, keeping info");
    }

    let rules = GuestNameRules::from(&config.guest);

    let (projection, report) = match cli.command {
        Commands::Parse {
            file,
            source,
            report,
        } => (project_file(&file, source, &rules)?, report),
        Commands::Sync { report } => (sync_feeds(&config.feeds, &rules)?, report),
    };

    println!("{}", render(&projection, report)?);

    Ok(())
}
