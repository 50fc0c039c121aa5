//! HTTP-backed remote store.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::error::{RepositoryError, Result};
use super::traits::RemoteStore;

#[derive(Deserialize)]
struct StateEnvelope {
    #[serde(default)]
    state: Option<Value>,
}

#[derive(Serialize)]
struct StateBody<'a> {
    state: &'a Value,
}

/// Talks to the scoreboard API: `GET {base}/health`, `GET {base}/state` and
/// `PUT {base}/state`, with the state wrapped in a `{"state": ..}` envelope.
#[derive(Clone)]
pub struct HttpRemoteStore {
    client: Client,
    base_url: String,
}

impl HttpRemoteStore {
    const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder().timeout(Self::REQUEST_TIMEOUT).build()?;
        Ok(Self::with_client(client, base_url))
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    async fn ensure_success(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(RepositoryError::UnexpectedStatus {
            status: status.as_u16(),
            body,
        })
    }
}

#[async_trait]
impl RemoteStore for HttpRemoteStore {
    async fn health(&self) -> Result<()> {
        let response = self.client.get(self.url("health")).send().await?;
        Self::ensure_success(response).await?;
        Ok(())
    }

    async fn fetch(&self) -> Result<Option<Value>> {
        let response = self.client.get(self.url("state")).send().await?;
        let envelope: StateEnvelope = Self::ensure_success(response).await?.json().await?;
        Ok(envelope.state)
    }

    async fn put(&self, state: &Value) -> Result<()> {
        let response = self
            .client
            .put(self.url("state"))
            .json(&StateBody { state })
            .send()
            .await?;
        Self::ensure_success(response).await?;
        tracing::debug!("PUT {}/state accepted", self.base_url);
        Ok(())
    }
}
