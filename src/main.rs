//! `health`: aggregated health endpoint for load balancers.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use health_aggregator::config::{load_config, HealthConfig};
use health_aggregator::lifecycle::startup::{DEFAULT_ADDRESS, DEFAULT_MONITOR_ADDRESS};
use health_aggregator::lifecycle::{serve, ServeOptions};
use health_aggregator::observability::{logging, BuildInfo};

#[derive(Parser)]
#[command(name = "health")]
#[command(about = "Serve /health as the combined health of a set of endpoints", long_about = None)]
struct Cli {
    /// Log level, overridden by RUST_LOG.
    #[arg(long, default_value = "info", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print an example configuration file
    Config,
    /// Parse and validate a configuration file
    Testconfig {
        /// Configuration file (TOML)
        config: PathBuf,
    },
    /// Serve /health, and /metrics and /info on the monitor address
    Serve {
        /// Address to serve /health on
        #[arg(long, default_value = DEFAULT_ADDRESS)]
        address: String,

        /// Address to serve monitoring endpoints on
        #[arg(long, default_value = DEFAULT_MONITOR_ADDRESS)]
        monitor_address: String,

        /// Configuration file (TOML)
        config: PathBuf,
    },
    /// Print the version
    Version,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_logging(&cli.log_level);

    match cli.command {
        Commands::Config => match HealthConfig::describe() {
            Ok(text) => print!("{text}"),
            Err(e) => {
                tracing::error!(error = %e, "describing config");
                return ExitCode::FAILURE;
            }
        },
        Commands::Testconfig { config } => match load_config(&config) {
            Ok(_) => tracing::info!(path = %config.display(), "config OK"),
            Err(e) => {
                tracing::error!(path = %config.display(), error = %e, "parsing config file");
                return ExitCode::FAILURE;
            }
        },
        Commands::Serve {
            address,
            monitor_address,
            config,
        } => {
            let options = ServeOptions {
                address,
                monitor_address,
                config_path: config,
            };
            if let Err(e) = serve(options).await {
                tracing::error!(error = %e, "health stopped");
                return ExitCode::FAILURE;
            }
        }
        Commands::Version => println!("{}", BuildInfo::current().full_version()),
    }

    ExitCode::SUCCESS
}
