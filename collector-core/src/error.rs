use reqwest::StatusCode;
use thiserror::Error;

/// Failure of a single location's fetch.
///
/// Recovered locally: the location is dropped from the batch and the run
/// continues with the remaining results.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("unexpected status {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("malformed payload: {0}")]
    Payload(#[from] serde_json::Error),
}

/// Failure of the single batch upsert. Fatal for the whole run.
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("backend rejected upsert with status {status}: {body}")]
    Rejected { status: StatusCode, body: String },
}
