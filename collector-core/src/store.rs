use reqwest::Client;

use crate::{error::PersistError, model::WeatherReading};

// Table and conflict key are owned by the backend schema.
const REPORTS_TABLE: &str = "weather_reports";
const CONFLICT_KEY: &str = "location_name";

/// Supabase client for the `weather_reports` table, speaking the PostgREST
/// wire protocol directly.
#[derive(Debug, Clone)]
pub struct SupabaseStore {
    base_url: String,
    api_key: String,
    http: Client,
}

impl SupabaseStore {
    pub fn new(base_url: String, api_key: String) -> Self {
        Self { base_url, api_key, http: Client::new() }
    }

    /// Insert-or-replace the given readings, keyed by `location_name`.
    ///
    /// One batch call per run; whether the backend applies it atomically
    /// across rows is its own contract.
    pub async fn upsert_reports(&self, reports: &[WeatherReading]) -> Result<(), PersistError> {
        let url = format!("{}/rest/v1/{REPORTS_TABLE}", self.base_url);

        let res = self
            .http
            .post(&url)
            .query(&[("on_conflict", CONFLICT_KEY)])
            .header("apikey", self.api_key.as_str())
            .bearer_auth(&self.api_key)
            .header("Prefer", "resolution=merge-duplicates")
            .json(reports)
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(PersistError::Rejected { status, body });
        }

        Ok(())
    }
}
