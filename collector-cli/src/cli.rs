use std::process::ExitCode;

use clap::Parser;
use collector_core::{Config, SupabaseStore, WeatherApiProvider, collector};
use tracing::error;

/// Top-level CLI struct.
///
/// The collector is a single-shot job intended to be run by an external
/// scheduler; it takes no arguments beyond `--help`/`--version`.
#[derive(Debug, Parser)]
#[command(name = "weather-collector", version, about = "Hyperlocal weather snapshot collector")]
pub struct Cli {}

impl Cli {
    pub async fn run(self) -> ExitCode {
        let config = match Config::from_env() {
            Ok(config) => config,
            Err(err) => {
                error!("Invalid configuration: {err:#}");
                return ExitCode::FAILURE;
            }
        };

        let provider = WeatherApiProvider::new(config.weather_api_key, config.weather_api_base);
        let store = SupabaseStore::new(config.supabase_url, config.supabase_key);

        // Fetch failures are logged inside the pipeline and do not fail the
        // process; only a failed backend write does.
        match collector::run(&provider, &store).await {
            Ok(_) => ExitCode::SUCCESS,
            Err(err) => {
                error!("Error saving data to Supabase: {err}");
                ExitCode::FAILURE
            }
        }
    }
}
