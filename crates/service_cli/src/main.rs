//! Skyfare CLI - Command Line Operations for the Fare-Calendar Engine
//!
//! This is the operational entry point for the Skyfare pricing kernel.
//!
//! # Commands
//!
//! - `skyfare calendar --origin LHR --destination JFK --month 2025-06` -
//!   Generate a month fare calendar
//! - `skyfare quote --origin LHR --destination JFK --date 2025-06-15` -
//!   Quote a single day
//! - `skyfare check` - Validate the pricing policy and print its parameters
//!
//! # Architecture
//!
//! As part of the service layer, this crate orchestrates the foundation and
//! kernel layers to provide a unified command-line interface.

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod error;

pub use error::{CliError, Result};

/// Skyfare Fare-Calendar Engine CLI
#[derive(Parser)]
#[command(name = "skyfare")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Pricing-policy file path (TOML format)
    #[arg(long, global = true, value_name = "FILE")]
    policy: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a month fare calendar for a route
    Calendar {
        /// Origin location code (e.g. LHR)
        #[arg(short, long)]
        origin: String,

        /// Destination location code (e.g. JFK)
        #[arg(short, long)]
        destination: String,

        /// Month to price (YYYY-MM), defaults to the current month
        #[arg(short, long)]
        month: Option<String>,

        /// Cabin class (economy, premium, business)
        #[arg(short, long, default_value = "economy")]
        cabin: String,

        /// Booking date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        booking_date: Option<String>,

        /// Output format (json, csv, table)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Quote a single travel day for a route
    Quote {
        /// Origin location code (e.g. LHR)
        #[arg(short, long)]
        origin: String,

        /// Destination location code (e.g. JFK)
        #[arg(short, long)]
        destination: String,

        /// Travel date (YYYY-MM-DD)
        #[arg(long)]
        date: String,

        /// Cabin class (economy, premium, business)
        #[arg(short, long, default_value = "economy")]
        cabin: String,

        /// Booking date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        booking_date: Option<String>,
    },

    /// Validate the pricing policy and print its effective parameters
    Check,
}

fn main() -> Result<()> {
    // Initialise tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    match cli.command {
        Commands::Calendar {
            origin,
            destination,
            month,
            cabin,
            booking_date,
            format,
        } => commands::calendar::run(
            &origin,
            &destination,
            month.as_deref(),
            &cabin,
            booking_date.as_deref(),
            cli.policy.as_deref(),
            &format,
        ),
        Commands::Quote {
            origin,
            destination,
            date,
            cabin,
            booking_date,
        } => commands::quote::run(
            &origin,
            &destination,
            &date,
            &cabin,
            booking_date.as_deref(),
            cli.policy.as_deref(),
        ),
        Commands::Check => commands::check::run(cli.policy.as_deref()),
    }
}
