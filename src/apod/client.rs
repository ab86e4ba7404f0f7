use anyhow::Context;
use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use std::time::Duration;
use url::Url;
use validator::Validate;

use crate::config::settings::ApodSettings;
use crate::models::ImageRecord;

/// Errors the fetch step can surface. Callers must branch on the result; a
/// failed fetch never reaches the renderer.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("APOD request failed: {0}")]
    Network(#[from] reqwest::Error),
    #[error("APOD response is not a picture payload: {0}")]
    MalformedPayload(#[from] serde_json::Error),
    #[error("APOD payload is missing required content: {0}")]
    Incomplete(#[from] validator::ValidationErrors),
}

/// Source of the picture of the day. The HTTP implementation talks to the
/// public API; the offline one serves a canned record.
#[async_trait]
pub trait Fetcher: Send + Sync + 'static {
    /// Produce the record to render. Invoked once per page load.
    async fn fetch(&self) -> Result<ImageRecord, FetchError>;
}

pub struct HttpFetcher {
    client: Client,
    endpoint: Url,
    api_key: Secret<String>,
}

impl HttpFetcher {
    pub fn new(settings: &ApodSettings) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_seconds))
            .build()
            .context("Failed to build the APOD HTTP client")?;

        let endpoint =
            Url::parse(&settings.endpoint).context("Invalid APOD endpoint URL")?;

        Ok(Self {
            client,
            endpoint,
            api_key: settings.api_key.clone(),
        })
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self) -> Result<ImageRecord, FetchError> {
        tracing::debug!("requesting picture of the day from {}", self.endpoint);

        let response = self
            .client
            .get(self.endpoint.clone())
            .query(&[("api_key", self.api_key.expose_secret().as_str())])
            .send()
            .await?
            .error_for_status()?;

        let body = response.text().await?;
        let record: ImageRecord = serde_json::from_str(&body)?;
        record.validate()?;

        Ok(record)
    }
}
