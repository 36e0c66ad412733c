use crate::config::BridgeConfig;
use crate::provider::{CapabilityProvider, ResultsQuery};
use crate::types::{Tags, WalletKey};
use crate::utils::PathMapper;
use crate::{Error, ErrorContext, Result};
use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;
use uuid::Uuid;

/// Header carrying our own correlation id. The bridge may ignore it.
pub const REQUEST_ID_HEADER: &str = "x-simple-ao-request-id";

/// Capability provider backed by an aoconnect bridge service over HTTP.
///
/// The bridge owns signing, bundling and scheduler RPC. This type only moves
/// JSON: request bodies out, raw outcomes back. Non-2xx answers become
/// [`Error::Remote`], network failures become [`Error::Transport`].
pub struct HttpBridgeProvider {
    client: reqwest::Client,
    base_url: url::Url,
    token: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SpawnBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    wallet: Option<&'a WalletKey>,
    module: &'a str,
    tags: &'a Tags,
    #[serde(skip_serializing_if = "Option::is_none")]
    scheduler: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<&'a str>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MessageBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    wallet: Option<&'a WalletKey>,
    process: &'a str,
    data: &'a str,
    tags: &'a Tags,
}

impl HttpBridgeProvider {
    pub fn new(config: BridgeConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| Error::Transport(super::TransportError::Other(e.to_string())))?;

        Ok(Self {
            client,
            base_url: config.base_url,
            token: config.token,
        })
    }

    /// Build from `AO_BRIDGE_URL` / `AO_HTTP_TIMEOUT_SECS` / token lookup.
    pub fn from_env() -> Result<Self> {
        Self::new(BridgeConfig::from_env()?)
    }

    pub fn base_url(&self) -> &url::Url {
        &self.base_url
    }

    fn endpoint(&self, segments: &[&str]) -> Result<url::Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                Error::configuration_with_context(
                    "bridge URL cannot be a base",
                    ErrorContext::new()
                        .with_field_path("bridge.base_url")
                        .with_details(self.base_url.to_string()),
                )
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn authorize(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        let req = req.header(REQUEST_ID_HEADER, Uuid::new_v4().to_string());
        match &self.token {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }

    async fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Value> {
        let url = self.endpoint(&[path])?;
        debug!(url = %url, "bridge POST");
        let resp = self
            .authorize(self.client.post(url).json(body))
            .send()
            .await
            .map_err(|e| Error::Transport(super::TransportError::Http(e)))?;
        Self::read_outcome(resp).await
    }

    async fn read_outcome(resp: reqwest::Response) -> Result<Value> {
        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            return Err(Error::Remote {
                status: status.as_u16(),
                message: remote_message(&text),
            });
        }
        resp.json::<Value>()
            .await
            .map_err(|e| Error::Transport(super::TransportError::Http(e)))
    }
}

/// Pull a readable message out of an error body, falling back to the raw text.
fn remote_message(body: &str) -> String {
    if let Ok(v) = serde_json::from_str::<Value>(body) {
        if let Some(msg) = PathMapper::first_str(&v, &["error.message", "error", "message"]) {
            return msg.to_string();
        }
    }
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "empty response body".to_string()
    } else {
        trimmed.chars().take(512).collect()
    }
}

#[async_trait]
impl CapabilityProvider for HttpBridgeProvider {
    async fn create_wallet(&self) -> Result<Value> {
        self.post("wallet", &serde_json::json!({})).await
    }

    async fn spawn_process(
        &self,
        wallet: Option<&WalletKey>,
        module: &str,
        tags: &Tags,
        scheduler: Option<&str>,
        data: Option<&str>,
    ) -> Result<Value> {
        let body = SpawnBody {
            wallet,
            module,
            tags,
            scheduler,
            data,
        };
        self.post("spawn", &body).await
    }

    async fn send_message(
        &self,
        wallet: Option<&WalletKey>,
        process_id: &str,
        data: &str,
        tags: &Tags,
    ) -> Result<Value> {
        let body = MessageBody {
            wallet,
            process: process_id,
            data,
            tags,
        };
        self.post("message", &body).await
    }

    async fn dry_run(
        &self,
        wallet: Option<&WalletKey>,
        process_id: &str,
        data: &str,
        tags: &Tags,
    ) -> Result<Value> {
        let body = MessageBody {
            wallet,
            process: process_id,
            data,
            tags,
        };
        self.post("dry-run", &body).await
    }

    async fn get_results(&self, process_id: &str, query: ResultsQuery) -> Result<Value> {
        let url = self.endpoint(&["results", process_id])?;
        debug!(url = %url, limit = query.limit, "bridge GET");
        let resp = self
            .authorize(self.client.get(url).query(&[("limit", query.limit)]))
            .send()
            .await
            .map_err(|e| Error::Transport(super::TransportError::Http(e)))?;
        Self::read_outcome(resp).await
    }
}
