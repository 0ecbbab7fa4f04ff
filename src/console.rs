//! Transcription request and results screen.

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{debug, info, warn};
use ytscribe_core::{CredentialStore, TargetLanguage};
use ytscribe_transcribe::{TranscribeError, Transcriber, TranscriptionRequest, TranscriptionResult};

use crate::error::{ConsoleError, ValidationError};
use crate::notify::{Notification, Notifier};
use crate::route::{Entry, Route};

/// Message shown after a successful transcription.
pub const TRANSCRIPTION_DONE: &str = "Transcription completed successfully";

/// Shown in the results panel before the first result arrives.
pub const RESULTS_PLACEHOLDER: &str = "Enter a YouTube URL to see the transcription results";

/// Hosts a submitted URL must mention.
const VIDEO_HOSTS: [&str; 2] = ["youtube.com", "youtu.be"];

/// Request lifecycle of the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleState {
    /// The form is editable and the submit control enabled.
    Idle,
    /// A request is in flight. The submit control is disabled.
    Submitting,
}

/// The collapsible parts of the results panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultSection {
    English,
    Original,
}

impl ResultSection {
    pub fn title(&self) -> &'static str {
        match self {
            Self::English => "English Translation",
            Self::Original => "Original Text",
        }
    }
}

/// One rendered section of a result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionView<'a> {
    pub section: ResultSection,
    pub text: &'a str,
    pub expanded: bool,
}

/// What the results panel shows right now.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultsPanel<'a> {
    /// A request is in flight; any earlier result is hidden.
    Busy,
    /// Nothing has been transcribed yet.
    Placeholder,
    Result {
        /// Absent when the service sent no (or an empty) translation.
        english: Option<SectionView<'a>>,
        original: SectionView<'a>,
    },
}

/// State of the submit button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitControl {
    pub enabled: bool,
    pub label: &'static str,
}

/// Does the URL point at a YouTube video, as far as a substring check goes.
pub fn looks_like_video_url(url: &str) -> bool {
    VIDEO_HOSTS.iter().any(|host| url.contains(host))
}

/// The transcription console.
pub struct TranscriptionConsole {
    transcriber: Arc<dyn Transcriber>,
    notifier: Arc<dyn Notifier>,
    api_key: String,
    url: String,
    language: TargetLanguage,
    state: ConsoleState,
    result: Option<TranscriptionResult>,
    english_open: bool,
    original_open: bool,
}

impl TranscriptionConsole {
    /// Enters the console. Without a stored key the console is never built
    /// and the user is sent back to the gate.
    pub fn enter(
        store: Arc<dyn CredentialStore>,
        transcriber: Arc<dyn Transcriber>,
        notifier: Arc<dyn Notifier>,
    ) -> Result<Entry<Self>> {
        let stored = store
            .get_non_empty()
            .context("Failed to read stored API key")?;
        let Some(api_key) = stored else {
            debug!("no API key stored, redirecting to gate");
            return Ok(Entry::Redirect(Route::Gate));
        };

        debug!(backend = transcriber.name(), "console ready");
        Ok(Entry::Render(Self {
            transcriber,
            notifier,
            api_key,
            url: String::new(),
            language: TargetLanguage::Auto,
            state: ConsoleState::Idle,
            result: None,
            english_open: true,
            original_open: false,
        }))
    }

    /// Preselects the target language, e.g. the configured default.
    pub fn with_language(mut self, language: TargetLanguage) -> Self {
        self.language = language;
        self
    }

    pub fn state(&self) -> ConsoleState {
        self.state
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn set_url(&mut self, url: impl Into<String>) {
        self.url = url.into();
    }

    pub fn language(&self) -> TargetLanguage {
        self.language
    }

    pub fn set_language(&mut self, language: TargetLanguage) {
        self.language = language;
    }

    /// The last successful result. Kept while a request is in flight and
    /// after a failed one.
    pub fn result(&self) -> Option<&TranscriptionResult> {
        self.result.as_ref()
    }

    pub fn is_expanded(&self, section: ResultSection) -> bool {
        match section {
            ResultSection::English => self.english_open,
            ResultSection::Original => self.original_open,
        }
    }

    /// Flips one section. The other section and the request state are not
    /// touched, and the flags survive later submissions.
    pub fn toggle(&mut self, section: ResultSection) {
        let open = match section {
            ResultSection::English => &mut self.english_open,
            ResultSection::Original => &mut self.original_open,
        };
        *open = !*open;
    }

    pub fn submit_control(&self) -> SubmitControl {
        match self.state {
            ConsoleState::Idle => SubmitControl {
                enabled: true,
                label: "Transcribe Video",
            },
            ConsoleState::Submitting => SubmitControl {
                enabled: false,
                label: "Processing...",
            },
        }
    }

    pub fn panel(&self) -> ResultsPanel<'_> {
        if self.state == ConsoleState::Submitting {
            return ResultsPanel::Busy;
        }
        let Some(result) = &self.result else {
            return ResultsPanel::Placeholder;
        };

        ResultsPanel::Result {
            english: result.english().map(|text| SectionView {
                section: ResultSection::English,
                text,
                expanded: self.english_open,
            }),
            original: SectionView {
                section: ResultSection::Original,
                text: result.original(),
                expanded: self.original_open,
            },
        }
    }

    /// Validates the form and moves to `Submitting`, returning the request
    /// to send. Nothing changes when validation fails.
    pub fn begin_submit(&mut self) -> std::result::Result<TranscriptionRequest, ValidationError> {
        if self.state == ConsoleState::Submitting {
            return Err(ValidationError::Busy);
        }
        if !looks_like_video_url(&self.url) {
            let err = ValidationError::InvalidUrl;
            info!(url = %self.url, "rejected URL");
            self.notifier.notify(Notification::error(err.to_string()));
            return Err(err);
        }

        self.state = ConsoleState::Submitting;
        debug!(url = %self.url, language = %self.language, "submitting transcription");
        Ok(TranscriptionRequest::new(
            self.url.as_str(),
            self.language,
            self.api_key.as_str(),
        ))
    }

    /// Applies the outcome of the request started by [`begin_submit`] and
    /// returns to `Idle`. A failure leaves the previous result in place.
    ///
    /// [`begin_submit`]: Self::begin_submit
    pub fn finish_submit(
        &mut self,
        outcome: ytscribe_transcribe::Result<TranscriptionResult>,
    ) -> std::result::Result<(), TranscribeError> {
        if self.state != ConsoleState::Submitting {
            warn!("received a transcription outcome with no request in flight, ignoring");
            return Ok(());
        }
        self.state = ConsoleState::Idle;

        match outcome {
            Ok(result) => {
                info!(
                    translated = result.english().is_some(),
                    "transcription completed"
                );
                self.result = Some(result);
                self.notifier.notify(Notification::success(TRANSCRIPTION_DONE));
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "transcription failed");
                self.notifier.notify(Notification::error(e.user_message()));
                Err(e)
            }
        }
    }

    /// Sends a request returned by [`begin_submit`] through this console's
    /// transcriber and applies the outcome.
    ///
    /// Callers render the busy panel between the two halves.
    ///
    /// [`begin_submit`]: Self::begin_submit
    pub async fn complete_submit(
        &mut self,
        request: TranscriptionRequest,
    ) -> std::result::Result<(), TranscribeError> {
        let outcome = self.transcriber.submit_transcription(&request).await;
        self.finish_submit(outcome)
    }

    /// Validates, sends one request and applies its outcome.
    ///
    /// The console stays mutably borrowed until the request resolves, so
    /// only one request can be in flight.
    pub async fn submit(&mut self) -> std::result::Result<(), ConsoleError> {
        let request = self.begin_submit()?;
        self.complete_submit(request).await?;
        Ok(())
    }
}
