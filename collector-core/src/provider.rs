use async_trait::async_trait;
use std::fmt::Debug;

use crate::{
    error::FetchError,
    model::{Location, WeatherReading},
};

pub mod weatherapi;

/// A source of current weather conditions for a fixed location.
///
/// Implementations must not fail the run as a whole: any error is returned as
/// a [`FetchError`] and handled per location by the collector.
#[async_trait]
pub trait CurrentWeather: Send + Sync + Debug {
    async fn current(&self, location: &Location) -> Result<WeatherReading, FetchError>;
}
