//! Core types and configuration for ytscribe.
//!
//! This crate provides the pieces shared by the transcription backend and
//! the terminal client: the config file, the persisted credential slot and
//! the set of target languages.

mod config;
mod credential;
mod language;

pub use config::{Config, ConfigManager};
pub use credential::{
    ConfigCredentialStore, CredentialStore, MemoryCredentialStore, looks_like_credential,
};
pub use language::{TargetLanguage, UnknownLanguage};

/// Application name
pub const APP_NAME: &str = "ytscribe";

/// Pretty application name for display
pub const APP_NAME_PRETTY: &str = "YouTube Transcriber";

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable holding the log filter
pub const LOG_ENV: &str = "YTSCRIBE_LOG";

/// Name of the persisted slot holding the user's API key
pub const CREDENTIAL_KEY: &str = "vd_user_openai_api_key";

/// Prefix every well-formed API key starts with
pub const CREDENTIAL_PREFIX: &str = "sk-";

/// Transcription service endpoint used when nothing else is configured
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000/api/v1/transcribe";
