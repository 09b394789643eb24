use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("http client setup failed: {0}")]
    Client(#[source] reqwest::Error),
    #[error("request to {endpoint} failed: {source}")]
    Request {
        endpoint: &'static str,
        source: reqwest::Error,
    },
    #[error("{endpoint} answered with status {status}")]
    Status {
        endpoint: &'static str,
        status: reqwest::StatusCode,
    },
    #[error("could not decode {endpoint} response: {source}")]
    Decode {
        endpoint: &'static str,
        source: reqwest::Error,
    },
}

impl FetchError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Client(_) => "EMBY_CLIENT_SETUP",
            Self::Request { .. } => "EMBY_REQUEST_FAILED",
            Self::Status { .. } => "EMBY_BAD_STATUS",
            Self::Decode { .. } => "EMBY_DECODE_FAILED",
        }
    }
}
