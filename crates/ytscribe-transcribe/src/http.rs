//! HTTP transcription backend.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, warn};
use ytscribe_core::DEFAULT_ENDPOINT;

use crate::{Result, TranscribeError, Transcriber, TranscriptionRequest, TranscriptionResult};

/// Configuration for the HTTP transcription client.
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// Service endpoint (defaults to the local development server)
    pub endpoint: Option<String>,
}

impl HttpConfig {
    /// Create a config pointing at the default endpoint.
    pub fn new() -> Self {
        Self { endpoint: None }
    }

    /// Set the endpoint to post to.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Get the endpoint, using default if not set.
    pub fn endpoint(&self) -> &str {
        self.endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT)
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Client for the JSON transcription endpoint.
///
/// The underlying client has no request timeout: a submission runs until the
/// service answers or the connection fails.
#[derive(Debug, Clone)]
pub struct HttpTranscriber {
    client: reqwest::Client,
    config: HttpConfig,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

impl HttpTranscriber {
    /// Create a new client with the given configuration.
    pub fn new(config: HttpConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Create a client for the given endpoint.
    pub fn from_endpoint(endpoint: impl Into<String>) -> Self {
        Self::new(HttpConfig::new().with_endpoint(endpoint))
    }

    /// The endpoint requests are sent to.
    pub fn endpoint(&self) -> &str {
        self.config.endpoint()
    }
}

#[async_trait]
impl Transcriber for HttpTranscriber {
    async fn submit_transcription(
        &self,
        request: &TranscriptionRequest,
    ) -> Result<TranscriptionResult> {
        debug!(
            endpoint = self.config.endpoint(),
            url = %request.url,
            source_language = ?request.source_language,
            "Sending transcription request"
        );

        let response = self
            .client
            .post(self.config.endpoint())
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            // Anything but `{"detail": "<text>"}` falls back to the generic message.
            let detail = serde_json::from_str::<ErrorBody>(&body)
                .ok()
                .and_then(|body| body.detail);
            warn!(status = status.as_u16(), detail = ?detail, "Transcription request failed");
            return Err(TranscribeError::Remote {
                status: status.as_u16(),
                detail,
            });
        }

        let body = response.text().await?;
        let result: TranscriptionResult = serde_json::from_str(&body)
            .map_err(|e| TranscribeError::InvalidResponse(e.to_string()))?;

        debug!(
            original_chars = result.original().len(),
            translated = result.english().is_some(),
            "Transcription response received"
        );

        Ok(result)
    }

    fn name(&self) -> &str {
        "http"
    }
}
