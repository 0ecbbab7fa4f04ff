// Re-export from sub-crates
pub use ytscribe_core::{
    APP_NAME, APP_NAME_PRETTY, Config, ConfigCredentialStore, ConfigManager, CredentialStore,
    DEFAULT_LOG_LEVEL, LOG_ENV, MemoryCredentialStore, TargetLanguage,
};
pub use ytscribe_transcribe::{
    HttpConfig, HttpTranscriber, TranscribeError, Transcriber, TranscriptionRequest,
    TranscriptionResult,
};

// App-specific modules
pub mod command;
pub mod console;
pub mod error;
pub mod gate;
pub mod notify;
pub mod render;
pub mod route;
