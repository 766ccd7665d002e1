//! City facts CLI
//!
//! Scrapes the configured cities and prints their records as JSON.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use city_facts::{
    error::Result,
    models::Config,
    pipeline::{CityPipeline, FailurePolicy},
    report::LogReporter,
    storage::JsonSink,
};

/// city-facts - Wikipedia city demographics scraper
#[derive(Parser, Debug)]
#[command(
    name = "city-facts",
    version,
    about = "Scrapes population and coordinates of cities from Wikipedia"
)]

struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Scrape cities and print their records
    Run {
        /// Cities to scrape (default: configured list)
        cities: Vec<String>,

        /// Abort on the first city that fails
        #[arg(long)]
        fail_fast: bool,

        /// Print compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Validate the configuration file
    Validate,

    /// Print the default configuration
    Defaults,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Run {
            cities,
            fail_fast,
            compact,
        } => {
            let mut config = Config::load_or_default(&cli.config);
            if !cities.is_empty() {
                config.cities = cities;
            }
            if fail_fast {
                config.pipeline.fail_fast = true;
            }
            config.validate()?;

            log::info!("Scraping {} cities...", config.cities.len());

            let pipeline = CityPipeline::from_config(&config)?;
            let outcome = pipeline
                .run(&config.cities, &JsonSink::new(!compact), &LogReporter)
                .await?;

            if !outcome.is_complete() {
                log::warn!(
                    "{} of {} cities failed: {}",
                    outcome.failures.len(),
                    outcome.stats.requested,
                    outcome
                        .failures
                        .iter()
                        .map(|f| f.city.as_str())
                        .collect::<Vec<_>>()
                        .join(", ")
                );
            }
        }

        Command::Validate => {
            log::info!("Validating configuration...");
            let config = Config::load(&cli.config)?;

            if let Err(e) = config.validate() {
                log::error!("Config validation failed: {}", e);
                return Err(e);
            }
            log::info!("✓ Config OK ({} cities)", config.cities.len());
            log::info!(
                "  policy: {:?}, max concurrent: {}",
                FailurePolicy::from_flag(config.pipeline.fail_fast),
                config.pipeline.max_concurrent
            );
        }

        Command::Defaults => {
            print!("{}", Config::default().to_toml()?);
        }
    }

    Ok(())
}
