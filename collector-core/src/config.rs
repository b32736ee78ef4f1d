use anyhow::{Context, Result};
use std::env;

/// Public WeatherAPI.com endpoint, used unless `WEATHER_API_BASE` overrides it.
pub const DEFAULT_WEATHER_API_BASE: &str = "http://api.weatherapi.com";

/// Process-wide configuration, read once at startup and passed into the
/// collector entry point.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the Supabase project.
    pub supabase_url: String,

    /// Key sent to Supabase as both `apikey` and bearer token.
    pub supabase_key: String,

    /// WeatherAPI.com API key.
    pub weather_api_key: String,

    /// Base URL of the weather API; overridable for tests and staging.
    pub weather_api_base: String,
}

impl Config {
    /// Load configuration from the process environment.
    ///
    /// `SUPABASE_URL`, `SUPABASE_ANON_KEY` and `WEATHER_API_KEY` are required;
    /// `WEATHER_API_BASE` is optional.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let supabase_url = require(&lookup, "SUPABASE_URL")?;
        let supabase_key = require(&lookup, "SUPABASE_ANON_KEY")?;
        let weather_api_key = require(&lookup, "WEATHER_API_KEY")?;
        let weather_api_base =
            lookup("WEATHER_API_BASE").unwrap_or_else(|| DEFAULT_WEATHER_API_BASE.to_string());

        Ok(Self { supabase_url, supabase_key, weather_api_key, weather_api_base })
    }
}

fn require(lookup: impl Fn(&str) -> Option<String>, name: &str) -> Result<String> {
    lookup(name).with_context(|| format!("Missing required environment variable: {name}"))
}
