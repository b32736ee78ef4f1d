use serde::Serialize;

use crate::error::FetchError;

/// A fixed polling site. The name doubles as the backend's conflict key.
#[derive(Debug, Clone, Copy)]
pub struct Location {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
}

/// One row of the `weather_reports` table.
///
/// Field names match the backend columns. `lat`/`lng` are copied from the
/// configured [`Location`], and `last_updated` is stored exactly as reported
/// by the upstream API.
#[derive(Debug, Clone, Serialize)]
pub struct WeatherReading {
    pub location_name: String,
    pub lat: f64,
    pub lng: f64,
    pub temp_c: f64,
    pub precip_mm: f64,
    pub last_updated: String,
}

/// Per-location outcome of the fetch stage.
#[derive(Debug)]
pub enum FetchOutcome {
    Success(WeatherReading),
    Failure {
        location: &'static str,
        error: FetchError,
    },
}

/// Summary of one collector run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunResult {
    pub success_count: usize,
    pub had_failures: bool,
}
