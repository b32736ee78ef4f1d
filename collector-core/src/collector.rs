//! The fetch/aggregate/upsert pipeline.

use futures::future::join_all;
use tracing::{info, warn};

use crate::{
    error::PersistError,
    locations::LOCATIONS,
    model::{FetchOutcome, RunResult, WeatherReading},
    provider::CurrentWeather,
    store::SupabaseStore,
};

/// Fetch every configured location once and upsert the survivors as a batch.
///
/// All fetches run concurrently and settle at a single join point. A failed
/// fetch is logged and dropped without affecting its siblings; only a failure
/// of the batch write itself is returned as an error. When nothing survives
/// the fetch stage, no write is issued at all.
pub async fn run(
    provider: &dyn CurrentWeather,
    store: &SupabaseStore,
) -> Result<RunResult, PersistError> {
    info!("Starting weather fetch for {} locations...", LOCATIONS.len());

    let fetches = LOCATIONS.iter().map(|location| async move {
        match provider.current(location).await {
            Ok(reading) => FetchOutcome::Success(reading),
            Err(error) => FetchOutcome::Failure { location: location.name, error },
        }
    });

    let outcomes = join_all(fetches).await;

    let mut reports: Vec<WeatherReading> = Vec::with_capacity(outcomes.len());
    let mut had_failures = false;

    for outcome in outcomes {
        match outcome {
            FetchOutcome::Success(reading) => reports.push(reading),
            FetchOutcome::Failure { location, error } => {
                had_failures = true;
                warn!("Failed to fetch weather for {location}: {error}");
            }
        }
    }

    if reports.is_empty() {
        info!("No weather data to save");
        return Ok(RunResult { success_count: 0, had_failures });
    }

    store.upsert_reports(&reports).await?;
    info!("Successfully saved {} weather reports", reports.len());

    Ok(RunResult { success_count: reports.len(), had_failures })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FetchError;
    use crate::model::Location;
    use async_trait::async_trait;
    use reqwest::StatusCode;
    use serde_json::Value;
    use std::collections::HashSet;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    /// Provider double that fails for a chosen subset of locations.
    #[derive(Debug, Default)]
    struct ScriptedProvider {
        failing: HashSet<&'static str>,
    }

    impl ScriptedProvider {
        fn failing_for(names: &[&'static str]) -> Self {
            Self { failing: names.iter().copied().collect() }
        }
    }

    #[async_trait]
    impl CurrentWeather for ScriptedProvider {
        async fn current(&self, location: &Location) -> Result<WeatherReading, FetchError> {
            if self.failing.contains(location.name) {
                return Err(FetchError::Status {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    body: "simulated outage".to_string(),
                });
            }

            Ok(WeatherReading {
                location_name: location.name.to_string(),
                lat: location.lat,
                lng: location.lng,
                temp_c: 30.0,
                precip_mm: 0.2,
                last_updated: "2024-06-01 14:30".to_string(),
            })
        }
    }

    async fn store_accepting_upserts(expected_calls: u64) -> (MockServer, SupabaseStore) {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/rest/v1/weather_reports"))
            .respond_with(ResponseTemplate::new(201))
            .expect(expected_calls)
            .mount(&server)
            .await;

        let store = SupabaseStore::new(server.uri(), "anon-key".to_string());
        (server, store)
    }

    async fn upserted_rows(server: &MockServer) -> Vec<Value> {
        let requests = server.received_requests().await.expect("request recording is enabled");
        assert_eq!(requests.len(), 1);

        let body: Value = serde_json::from_slice(&requests[0].body).expect("body should be JSON");
        body.as_array().expect("body should be a JSON array").clone()
    }

    #[tokio::test]
    async fn all_locations_succeed_and_one_batch_is_written() {
        let (server, store) = store_accepting_upserts(1).await;
        let provider = ScriptedProvider::default();

        let result = run(&provider, &store).await.expect("run should succeed");

        assert_eq!(result, RunResult { success_count: LOCATIONS.len(), had_failures: false });

        let rows = upserted_rows(&server).await;
        assert_eq!(rows.len(), LOCATIONS.len());

        let names: HashSet<_> =
            rows.iter().map(|r| r["location_name"].as_str().expect("name is a string")).collect();
        assert_eq!(names.len(), LOCATIONS.len(), "payload must not contain duplicates");
        for location in LOCATIONS {
            assert!(names.contains(location.name));
        }
    }

    #[tokio::test]
    async fn failed_location_is_dropped_from_the_batch() {
        let (server, store) = store_accepting_upserts(1).await;
        let provider = ScriptedProvider::failing_for(&["Uppal"]);

        let result = run(&provider, &store).await.expect("run should succeed");

        assert_eq!(result, RunResult { success_count: LOCATIONS.len() - 1, had_failures: true });

        let rows = upserted_rows(&server).await;
        assert_eq!(rows.len(), LOCATIONS.len() - 1);
        assert!(rows.iter().all(|r| r["location_name"] != "Uppal"));
    }

    #[tokio::test]
    async fn persisted_coordinates_come_from_the_static_list() {
        let (server, store) = store_accepting_upserts(1).await;
        let provider = ScriptedProvider::default();

        run(&provider, &store).await.expect("run should succeed");

        let rows = upserted_rows(&server).await;
        for location in LOCATIONS {
            let row = rows
                .iter()
                .find(|r| r["location_name"] == location.name)
                .expect("every location has a row");
            assert_eq!(row["lat"], location.lat);
            assert_eq!(row["lng"], location.lng);
        }
    }

    #[tokio::test]
    async fn no_write_is_issued_when_every_fetch_fails() {
        let all_names: Vec<_> = LOCATIONS.iter().map(|l| l.name).collect();
        let (_server, store) = store_accepting_upserts(0).await;
        let provider = ScriptedProvider::failing_for(&all_names);

        let result = run(&provider, &store).await.expect("an empty run is not an error");

        assert_eq!(result, RunResult { success_count: 0, had_failures: true });
    }

    #[tokio::test]
    async fn backend_rejection_fails_the_run() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/rest/v1/weather_reports"))
            .respond_with(ResponseTemplate::new(409).set_body_string("constraint violation"))
            .mount(&server)
            .await;

        let store = SupabaseStore::new(server.uri(), "anon-key".to_string());
        let provider = ScriptedProvider::default();

        let err = run(&provider, &store).await.unwrap_err();
        assert!(matches!(err, PersistError::Rejected { .. }));
    }
}
