//! Skyfare Fare Server
//!
//! REST API server for the deterministic fare-calendar engine.

use clap::Parser;
use fare_pricing::PricingPolicy;
use fare_server::config::{build_config, CliArgs as ConfigCliArgs};
use fare_server::server::Server;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Skyfare Fare Server - REST API for fare-calendar generation
#[derive(Parser, Debug)]
#[command(name = "fare_server")]
#[command(version, about, long_about = None)]
struct Args {
    /// Configuration file path (TOML format)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Host address to bind to
    #[arg(long, env = "SKYFARE_HOST")]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = "SKYFARE_PORT")]
    port: Option<u16>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "SKYFARE_LOG_LEVEL")]
    log_level: Option<String>,

    /// Pricing-policy file path (TOML format)
    #[arg(long, env = "SKYFARE_POLICY_FILE", value_name = "FILE")]
    policy: Option<PathBuf>,
}

impl From<Args> for ConfigCliArgs {
    fn from(args: Args) -> Self {
        ConfigCliArgs {
            config_file: args.config,
            host: args.host,
            port: args.port,
            log_level: args.log_level,
            policy_file: args.policy,
        }
    }
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let cli_args: ConfigCliArgs = args.into();
    let config = build_config(&cli_args)?;

    // Initialize tracing
    init_tracing(config.log_level.as_filter_str());

    let policy = match &config.policy_file {
        Some(path) => PricingPolicy::from_file(path)?,
        None => PricingPolicy::default(),
    };

    tracing::info!("Skyfare Fare Server v{}", fare_server::VERSION);
    tracing::info!(
        host = %config.host,
        port = %config.port,
        log_level = %config.log_level,
        environment = %config.environment,
        currency = %policy.currency,
        "Server configuration loaded"
    );

    // Create and start the server
    let server = Server::new(config, policy);
    tracing::info!(address = %server.socket_addr()?, "Starting server");

    server.run().await?;

    Ok(())
}
