use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use storefront_logging::{store_debug, store_warn};

use storefront_core::{Record, RecordData, Schema};

use crate::error::GatewayError;
use crate::wire;

#[derive(Debug, Clone)]
pub struct GatewaySettings {
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for GatewaySettings {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

/// The five collection operations. Implementations are pure
/// request/response translators: single attempt, no retries, no shared
/// mutable state.
#[async_trait]
pub trait CollectionGateway: Send + Sync {
    async fn list(&self) -> Result<Vec<Record>, GatewayError>;
    async fn get(&self, id: &str) -> Result<Record, GatewayError>;
    async fn create(&self, data: &RecordData) -> Result<Record, GatewayError>;
    async fn update(&self, id: &str, data: &RecordData) -> Result<Record, GatewayError>;
    async fn delete(&self, id: &str) -> Result<(), GatewayError>;
}

/// Reqwest-backed gateway against `{base}/{collection}`.
#[derive(Debug, Clone)]
pub struct RestGateway {
    client: reqwest::Client,
    base: reqwest::Url,
    schema: &'static Schema,
}

impl RestGateway {
    pub fn new(base_url: &str, schema: &'static Schema) -> Result<Self, GatewayError> {
        Self::with_settings(base_url, schema, GatewaySettings::default())
    }

    pub fn with_settings(
        base_url: &str,
        schema: &'static Schema,
        settings: GatewaySettings,
    ) -> Result<Self, GatewayError> {
        let mut base = reqwest::Url::parse(base_url)
            .map_err(|err| GatewayError::Network(format!("invalid base url: {err}")))?;
        // Joining below replaces the final segment unless the path ends in a
        // slash.
        if !base.path().ends_with('/') {
            base.set_path(&format!("{}/", base.path()));
        }

        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| GatewayError::Network(err.to_string()))?;

        Ok(Self {
            client,
            base,
            schema,
        })
    }

    fn collection_url(&self) -> Result<reqwest::Url, GatewayError> {
        self.base
            .join(self.schema.collection)
            .map_err(|err| GatewayError::Network(err.to_string()))
    }

    fn item_url(&self, id: &str) -> Result<reqwest::Url, GatewayError> {
        self.base
            .join(&format!("{}/{}", self.schema.collection, id))
            .map_err(|err| GatewayError::Network(err.to_string()))
    }

    /// Categorizes a non-success response. Error bodies carry
    /// `{ "error": string }`, optionally with a `"field"`.
    async fn check(&self, response: reqwest::Response) -> Result<reqwest::Response, GatewayError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.bytes().await.unwrap_or_default();
        let parsed: Option<ErrorBody> = serde_json::from_slice(&body).ok();
        store_warn!(
            "{} request failed with status {}",
            self.schema.collection,
            status
        );

        Err(match status.as_u16() {
            404 => GatewayError::NotFound,
            400 | 422 => match parsed {
                Some(body) => GatewayError::Validation {
                    field: body.field,
                    reason: body.error,
                },
                None => GatewayError::Validation {
                    field: None,
                    reason: format!("request rejected ({status})"),
                },
            },
            _ => GatewayError::Network(match parsed {
                Some(body) => body.error,
                None => status.to_string(),
            }),
        })
    }

    async fn json(&self, response: reqwest::Response) -> Result<Value, GatewayError> {
        response
            .json::<Value>()
            .await
            .map_err(|err| GatewayError::Network(format!("malformed response: {err}")))
    }
}

#[async_trait]
impl CollectionGateway for RestGateway {
    async fn list(&self) -> Result<Vec<Record>, GatewayError> {
        let url = self.collection_url()?;
        store_debug!("GET {url}");
        let response = self.client.get(url).send().await.map_err(transport)?;
        let body = self.json(self.check(response).await?).await?;
        wire::decode_collection(self.schema, body)
    }

    async fn get(&self, id: &str) -> Result<Record, GatewayError> {
        let url = self.item_url(id)?;
        store_debug!("GET {url}");
        let response = self.client.get(url).send().await.map_err(transport)?;
        let body = self.json(self.check(response).await?).await?;
        wire::decode_record(self.schema, &body)
    }

    async fn create(&self, data: &RecordData) -> Result<Record, GatewayError> {
        let url = self.collection_url()?;
        store_debug!("POST {url}");
        let response = self
            .client
            .post(url)
            .json(&wire::encode_data(self.schema, data))
            .send()
            .await
            .map_err(transport)?;
        let body = self.json(self.check(response).await?).await?;
        wire::decode_record(self.schema, &body)
    }

    async fn update(&self, id: &str, data: &RecordData) -> Result<Record, GatewayError> {
        let url = self.item_url(id)?;
        store_debug!("PUT {url}");
        let response = self
            .client
            .put(url)
            .json(&wire::encode_data(self.schema, data))
            .send()
            .await
            .map_err(transport)?;
        let body = self.json(self.check(response).await?).await?;
        wire::decode_record(self.schema, &body)
    }

    async fn delete(&self, id: &str) -> Result<(), GatewayError> {
        let url = self.item_url(id)?;
        store_debug!("DELETE {url}");
        let response = self.client.delete(url).send().await.map_err(transport)?;
        self.check(response).await?;
        Ok(())
    }
}

fn transport(err: reqwest::Error) -> GatewayError {
    if err.is_timeout() {
        return GatewayError::Network("request timed out".to_string());
    }
    if err.is_connect() {
        return GatewayError::Network(format!("connection failed: {err}"));
    }
    GatewayError::Network(err.to_string())
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
    #[serde(default)]
    field: Option<String>,
}
