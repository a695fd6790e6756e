use crate::error::{Result, WardenError};

/// Environment variable naming the GraphQL endpoint.
pub const GRAPHQL_URL_ENV: &str = "EW_GRAPHQL_URL";

/// Configuration for the warden client.
#[derive(Debug, Clone)]
pub struct WardenConfig {
    /// GraphQL endpoint URL (e.g. `https://wallet.example.com/graphql`).
    pub graphql_url: String,
}

impl WardenConfig {
    /// Build a config from an explicit endpoint URL.
    pub fn new(graphql_url: impl Into<String>) -> Result<Self> {
        let graphql_url = graphql_url.into();
        url::Url::parse(&graphql_url)
            .map_err(|e| WardenError::Config(format!("invalid GraphQL URL: {e}")))?;
        Ok(Self { graphql_url })
    }

    /// Build a config from the `EW_GRAPHQL_URL` environment variable.
    pub fn from_env() -> Result<Self> {
        let graphql_url = std::env::var(GRAPHQL_URL_ENV)
            .map_err(|_| WardenError::Config(format!("{GRAPHQL_URL_ENV} is not set")))?;
        Self::new(graphql_url)
    }
}
