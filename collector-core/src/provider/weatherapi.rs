use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::{
    error::FetchError,
    model::{Location, WeatherReading},
};

use super::CurrentWeather;

/// Client for the WeatherAPI.com `current.json` endpoint.
#[derive(Debug, Clone)]
pub struct WeatherApiProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl WeatherApiProvider {
    pub fn new(api_key: String, base_url: String) -> Self {
        Self { api_key, base_url, http: Client::new() }
    }

    async fn fetch_current(&self, location: &Location) -> Result<WeatherReading, FetchError> {
        let url = format!("{}/v1/current.json", self.base_url);
        let query = format!("{},{}", location.lat, location.lng);

        let res = self
            .http
            .get(&url)
            .query(&[
                ("key", self.api_key.as_str()),
                ("q", query.as_str()),
                ("aqi", "no"),
            ])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(FetchError::Status { status, body: truncate_body(&body) });
        }

        let parsed: WaResponse = serde_json::from_str(&body)?;

        // Coordinates come from the configured location, not the payload.
        Ok(WeatherReading {
            location_name: location.name.to_string(),
            lat: location.lat,
            lng: location.lng,
            temp_c: parsed.current.temp_c,
            precip_mm: parsed.current.precip_mm,
            last_updated: parsed.current.last_updated,
        })
    }
}

#[derive(Debug, Deserialize)]
struct WaCurrent {
    temp_c: f64,
    precip_mm: f64,
    last_updated: String,
}

#[derive(Debug, Deserialize)]
struct WaResponse {
    current: WaCurrent,
}

#[async_trait]
impl CurrentWeather for WeatherApiProvider {
    async fn current(&self, location: &Location) -> Result<WeatherReading, FetchError> {
        self.fetch_current(location).await
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX { format!("{}...", &body[..MAX]) } else { body.to_string() }
}
