use thiserror::Error;

#[derive(Error, Debug)]
pub enum WardenError {
    #[error("rate limit exceeded")]
    RateLimited,

    #[error("HTTP error {status}: {message}")]
    Http { status: u16, message: String },

    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // GraphQL error message from the backend, passed through verbatim.
    #[error("{0}")]
    Backend(String),

    #[error("malformed response: {0}")]
    Protocol(String),

    #[error("session error: {0}")]
    Session(String),

    #[error("config error: {0}")]
    Config(String),
}

impl WardenError {
    /// Whether this error is the backend's 429 rate-limit signal.
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, WardenError::RateLimited)
    }
}

pub type Result<T> = std::result::Result<T, WardenError>;
