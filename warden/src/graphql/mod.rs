pub mod operations;

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::error;

use crate::config::WardenConfig;
use crate::error::{Result, WardenError};
use crate::notify::Notifier;
use crate::session::SessionStore;

/// GraphQL transport for the wallet backend.
///
/// Every request carries an `Authorization` header derived from the session
/// store (empty string when unauthenticated, never omitted). Every response
/// goes through the same inspection stage: HTTP 429 raises the rate-limit
/// notification and maps to [`WardenError::RateLimited`]; GraphQL errors are
/// logged here and propagated verbatim for the caller to surface.
#[derive(Debug, Clone)]
pub struct WardenClient {
    client: Client,
    endpoint: String,
    session: SessionStore,
    notifier: Notifier,
}

#[derive(Debug, Deserialize)]
struct GraphQlEnvelope {
    #[serde(default)]
    data: Option<Value>,
    #[serde(default)]
    errors: Option<Vec<GraphQlError>>,
}

#[derive(Debug, Deserialize)]
struct GraphQlError {
    message: String,
    #[serde(default)]
    path: Option<Value>,
}

impl WardenClient {
    pub fn new(config: &WardenConfig, session: SessionStore, notifier: Notifier) -> Self {
        Self {
            client: Client::new(),
            endpoint: config.graphql_url.clone(),
            session,
            notifier,
        }
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    /// Execute a GraphQL operation and decode `data.<field>` into `T`.
    pub(crate) async fn execute<T: DeserializeOwned>(
        &self,
        operation_name: &str,
        query: &str,
        variables: Value,
        field: &str,
    ) -> Result<T> {
        let bearer = match self.session.token() {
            Some(token) => format!("Bearer {token}"),
            None => String::new(),
        };

        let resp = self
            .client
            .post(&self.endpoint)
            .header(reqwest::header::AUTHORIZATION, bearer)
            .json(&json!({
                "operationName": operation_name,
                "query": query,
                "variables": variables,
            }))
            .send()
            .await?;

        let status = resp.status();
        if status.as_u16() == 429 {
            // Inform, never retry: an automatic retry would compound the
            // limiting condition.
            self.notifier.rate_limited();
            return Err(WardenError::RateLimited);
        }
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(WardenError::Http {
                status: status.as_u16(),
                message: body,
            });
        }

        let envelope: GraphQlEnvelope = resp.json().await?;

        if let Some(errors) = envelope.errors {
            if !errors.is_empty() {
                for err in &errors {
                    error!(
                        operation = operation_name,
                        path = ?err.path,
                        message = %err.message,
                        "GraphQL error"
                    );
                }
                let first = errors.into_iter().next().map(|e| e.message);
                return Err(WardenError::Backend(first.unwrap_or_default()));
            }
        }

        let data = envelope
            .data
            .ok_or_else(|| WardenError::Protocol("response has neither data nor errors".into()))?;
        let value = data
            .get(field)
            .cloned()
            .filter(|v| !v.is_null())
            .ok_or_else(|| WardenError::Protocol(format!("missing `{field}` in response data")))?;

        Ok(serde_json::from_value(value)?)
    }
}
