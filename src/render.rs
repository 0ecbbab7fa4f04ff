//! Plain-text rendering of both screens for the terminal client.

use std::fmt::Write;

use ytscribe_core::{APP_NAME_PRETTY, CREDENTIAL_PREFIX, TargetLanguage};

use crate::console::{RESULTS_PLACEHOLDER, ResultsPanel, SectionView, TranscriptionConsole};
use crate::gate::CredentialGate;

const API_KEYS_PAGE: &str = "https://platform.openai.com/api-keys";

const INSTRUCTIONS: [&str; 5] = [
    "Visit the OpenAI API Keys page",
    "Sign in or create an OpenAI account",
    "Click on \"Create new secret key\"",
    "Give your key a name (e.g., \"YouTube Transcriber\")",
    "Copy your API key immediately (it won't be shown again!)",
];

fn chevron(expanded: bool) -> &'static str {
    if expanded { "v" } else { ">" }
}

/// Renders the capture form.
pub fn gate(gate: &CredentialGate) -> String {
    let mut out = String::new();
    writeln!(out, "Welcome to {}", APP_NAME_PRETTY).ok();
    writeln!(
        out,
        "Enter your OpenAI API key to get started with transcription"
    )
    .ok();
    writeln!(out).ok();

    let open = gate.instructions_open();
    writeln!(out, "{} How to get your API key", chevron(open)).ok();
    if open {
        for (i, step) in INSTRUCTIONS.iter().enumerate() {
            writeln!(out, "  {}. {}", i + 1, step).ok();
        }
        writeln!(out, "  ({})", API_KEYS_PAGE).ok();
        writeln!(
            out,
            "  Note: OpenAI API usage is not free. You'll need to add billing information to your account."
        )
        .ok();
    }
    writeln!(out).ok();

    let masked = gate.masked_candidate();
    let field = if masked.is_empty() {
        format!("{}...", CREDENTIAL_PREFIX)
    } else {
        masked
    };
    writeln!(out, "OpenAI API Key: {}", field).ok();
    writeln!(
        out,
        "  Your API key starts with \"{}\" and contains random letters and numbers",
        CREDENTIAL_PREFIX
    )
    .ok();
    writeln!(
        out,
        "Your API key is stored locally and never sent to our servers"
    )
    .ok();
    out
}

fn section(out: &mut String, view: &SectionView<'_>) {
    writeln!(out, "{} {}", chevron(view.expanded), view.section.title()).ok();
    if view.expanded {
        for line in view.text.lines() {
            writeln!(out, "    {}", line).ok();
        }
    }
}

/// Renders the results panel only.
pub fn panel(panel: &ResultsPanel<'_>) -> String {
    let mut out = String::new();
    match panel {
        ResultsPanel::Busy => {
            writeln!(out, "... transcribing").ok();
        }
        ResultsPanel::Placeholder => {
            writeln!(out, "{}", RESULTS_PLACEHOLDER).ok();
        }
        ResultsPanel::Result { english, original } => {
            if let Some(english) = english {
                section(&mut out, english);
            }
            section(&mut out, original);
        }
    }
    out
}

/// Renders the whole console: form on top, results below.
pub fn console(console: &TranscriptionConsole) -> String {
    let mut out = String::new();
    writeln!(out, "{}", APP_NAME_PRETTY).ok();
    let url = if console.url().is_empty() {
        "https://youtube.com/..."
    } else {
        console.url()
    };
    writeln!(out, "YouTube URL: {}", url).ok();
    writeln!(
        out,
        "Target Language (Optional): {}",
        console.language().label()
    )
    .ok();
    let control = console.submit_control();
    let marker = if control.enabled { "" } else { " (disabled)" };
    writeln!(out, "[{}]{}", control.label, marker).ok();
    writeln!(out).ok();
    writeln!(out, "Transcription Results").ok();
    out.push_str(&panel(&console.panel()));
    out
}

/// Lists the selectable languages, marking the current one.
pub fn languages(current: TargetLanguage) -> String {
    let mut out = String::new();
    for language in TargetLanguage::ALL {
        let mark = if language == current { "*" } else { " " };
        writeln!(out, "{} {:<5} {}", mark, language.code(), language.label()).ok();
    }
    out
}
