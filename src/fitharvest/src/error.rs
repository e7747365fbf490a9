use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FitbitError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Non-success status, rate limiting (429) included.
    #[error("api responded {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("response has no `{0}`")]
    MissingField(&'static str),

    #[error("`{0}` is out of range")]
    OutOfRange(&'static str),

    #[error("malformed response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("giving up after {attempts} attempts: {source}")]
    RetryExhausted {
        attempts: u32,
        #[source]
        source: Box<FitbitError>,
    },
}

impl FitbitError {
    pub fn is_rate_limit(&self) -> bool {
        matches!(
            self,
            FitbitError::Status { status, .. } if *status == StatusCode::TOO_MANY_REQUESTS
        )
    }
}
