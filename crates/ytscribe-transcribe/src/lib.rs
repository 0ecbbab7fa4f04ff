//! Transcription backend library for ytscribe.
//!
//! This crate provides a trait-based abstraction over the remote
//! transcription service, with an HTTP implementation for the JSON endpoint.

mod http;

use async_trait::async_trait;
pub use http::{HttpConfig, HttpTranscriber};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use ytscribe_core::TargetLanguage;

/// Message shown when a failure carries no backend-provided detail.
pub const GENERIC_FAILURE: &str = "An error occurred";

/// Errors that can occur during transcription.
#[derive(Debug, Error)]
pub enum TranscribeError {
    /// The service answered with a non-success status.
    #[error("API returned {status}: {}", .detail.as_deref().unwrap_or("no detail"))]
    Remote {
        status: u16,
        detail: Option<String>,
    },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// A success status with a body that is not a transcription result.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl TranscribeError {
    /// The text to surface to the user: the backend's `detail` when it sent
    /// one, otherwise a generic message.
    pub fn user_message(&self) -> &str {
        match self {
            Self::Remote {
                detail: Some(detail),
                ..
            } => detail,
            _ => GENERIC_FAILURE,
        }
    }
}

/// Result type for transcription operations.
pub type Result<T> = std::result::Result<T, TranscribeError>;

/// Body of one transcription request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranscriptionRequest {
    pub url: String,
    /// `null` on the wire when auto-detect was selected.
    pub source_language: Option<String>,
    pub api_key: String,
}

impl TranscriptionRequest {
    pub fn new(
        url: impl Into<String>,
        language: TargetLanguage,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            url: url.into(),
            source_language: language.source_language().map(str::to_owned),
            api_key: api_key.into(),
        }
    }
}

/// Text returned by a successful transcription.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct TranscriptionResult {
    /// Transcript in the spoken language
    #[serde(default)]
    pub original_text: Option<String>,
    /// English translation, present only when translation happened
    #[serde(default)]
    pub english_text: Option<String>,
}

impl TranscriptionResult {
    /// The English translation, if present and non-empty.
    pub fn english(&self) -> Option<&str> {
        self.english_text.as_deref().filter(|text| !text.is_empty())
    }

    /// The original transcript, empty when the service omitted it.
    pub fn original(&self) -> &str {
        self.original_text.as_deref().unwrap_or_default()
    }
}

/// Trait for transcription backends.
///
/// The console only ever talks to this trait, so it can be driven by a stub
/// in tests and by [`HttpTranscriber`] in the real client.
#[async_trait]
pub trait Transcriber: Send + Sync {
    /// Submit one request and wait for its outcome. Implementations must
    /// not retry.
    async fn submit_transcription(
        &self,
        request: &TranscriptionRequest,
    ) -> Result<TranscriptionResult>;

    /// Returns the name of this transcriber for logging/debugging.
    fn name(&self) -> &str;
}
