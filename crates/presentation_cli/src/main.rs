//! Lagify CLI
//!
//! Command-line interface for trying latency injection without a server.

#![allow(clippy::print_stdout)]

mod simulate;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use domain::LatencyConfig;
use infrastructure::{
    AppConfig, LatencyInjector, LogFormat, RandomSource, TelemetryConfig, init_telemetry,
    random_delay,
};

/// Lagify CLI
#[derive(Parser)]
#[command(name = "lagify-cli")]
#[command(author, version, about = "Latency and fault injection playground", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run sequential mock fetches through a latency wrapper
    ///
    /// Example: lagify-cli simulate --requests 10 --error-rate 0.5
    Simulate {
        /// Number of requests to issue
        #[arg(short = 'n', long, default_value = "5")]
        requests: u32,

        /// Minimum delay in milliseconds
        #[arg(long, default_value = "500")]
        min: u64,

        /// Maximum delay in milliseconds
        #[arg(long, default_value = "1500")]
        max: u64,

        /// Failure probability between 0 and 1
        #[arg(short, long, default_value = "0.2")]
        error_rate: f64,

        /// Seed for reproducible runs
        #[arg(long, env = "LAGIFY_SEED")]
        seed: Option<u64>,
    },

    /// Print delays drawn from a range
    Sample {
        /// Number of delays to draw
        #[arg(short = 'n', long, default_value = "10")]
        count: u32,

        /// Minimum delay in milliseconds
        #[arg(long, default_value = "200")]
        min: u64,

        /// Maximum delay in milliseconds
        #[arg(long, default_value = "800")]
        max: u64,

        /// Seed for reproducible runs
        #[arg(long, env = "LAGIFY_SEED")]
        seed: Option<u64>,
    },

    /// Print the effective configuration as TOML
    ///
    /// Resolves defaults, the config file, and LAGIFY_* environment variables.
    Config {
        /// Config file to read instead of ./lagify.toml
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

/// Determine log filter level from verbosity count
const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Render a resolved configuration as TOML
fn render_config(config: &AppConfig) -> anyhow::Result<String> {
    Ok(toml::to_string_pretty(config)?)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    init_telemetry(&TelemetryConfig::new(
        log_filter_from_verbosity(cli.verbose),
        LogFormat::Text,
    ))?;

    match cli.command {
        Commands::Simulate {
            requests,
            min,
            max,
            error_rate,
            seed,
        } => {
            let config = LatencyConfig::new(min, max, error_rate);
            let injector =
                LatencyInjector::with_rng(config, RandomSource::from_seed_option(seed));

            println!("--- Simulating {requests} requests ---");
            println!(
                "Latency {}-{}ms, error rate {:.0}%",
                config.bounds().0,
                config.bounds().1,
                error_rate * 100.0
            );

            let summary = simulate::run_simulation(&injector, requests, |outcome| {
                let ms = outcome.elapsed.as_millis();
                match &outcome.result {
                    Ok(data) => println!("Request {}: Success ({ms}ms) -> {data}", outcome.index),
                    Err(e) => println!("Request {}: Failed ({ms}ms) -> {e}", outcome.index),
                }
            })
            .await;

            println!();
            println!(
                "--- Finished: {} succeeded, {} failed, mean {}ms ---",
                summary.succeeded,
                summary.failed,
                summary.mean_elapsed().as_millis()
            );
        },

        Commands::Sample {
            count,
            min,
            max,
            seed,
        } => {
            let rng = RandomSource::from_seed_option(seed);
            for _ in 0..count {
                println!("{}", random_delay(min, max, &rng));
            }
        },

        Commands::Config { file } => {
            let config = AppConfig::load_from(file.as_deref())?;
            print!("{}", render_config(&config)?);
        },
    }

    Ok(())
}
