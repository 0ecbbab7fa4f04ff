//! Errors surfaced by the screens.

use thiserror::Error;
use ytscribe_transcribe::TranscribeError;

/// Input rejected before anything is persisted or sent. The message is the
/// text shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a valid OpenAI API key")]
    InvalidCredential,

    #[error("Please enter a valid YouTube URL")]
    InvalidUrl,

    /// Submit pressed while a request is in flight.
    #[error("A transcription is already in progress")]
    Busy,
}

/// Why the capture form did not advance.
#[derive(Debug, Error)]
pub enum GateError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

/// Why a console submission did not produce a new result.
#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    #[error(transparent)]
    Transcribe(#[from] TranscribeError),
}
