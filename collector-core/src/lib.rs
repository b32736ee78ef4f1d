//! Core library for the `weather-collector` job.
//!
//! This crate defines:
//! - Configuration loaded once from the process environment
//! - The static location list and shared domain models
//! - The WeatherAPI.com client and the Supabase report store
//! - The fetch/aggregate/upsert pipeline
//!
//! It is used by `collector-cli`, but can also be reused by other binaries or services.

pub mod collector;
pub mod config;
pub mod error;
pub mod locations;
pub mod model;
pub mod provider;
pub mod store;

pub use config::Config;
pub use error::{FetchError, PersistError};
pub use locations::LOCATIONS;
pub use model::{FetchOutcome, Location, RunResult, WeatherReading};
pub use provider::{CurrentWeather, weatherapi::WeatherApiProvider};
pub use store::SupabaseStore;
