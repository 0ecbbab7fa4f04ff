//! API key capture screen.
//!
//! The gate only checks the shape of the key. It never talks to the
//! transcription service, so a well-formed but revoked key still passes.

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{debug, info, warn};
use ytscribe_core::{CredentialStore, looks_like_credential};

use crate::error::{GateError, ValidationError};
use crate::notify::{Notification, Notifier};
use crate::route::{Entry, Route};

/// Message shown once a key has been saved.
pub const KEY_SAVED: &str = "API key saved successfully";

/// Where the capture form currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateState {
    /// Nothing stored and the form is untouched.
    NoKey,
    /// The user is editing the candidate key.
    CapturingInput,
    /// The last submission failed the shape check. Nothing was stored.
    Rejected,
    /// The key was stored; the client should move to the given route.
    NavigatingAway(Route),
}

/// The credential capture form.
pub struct CredentialGate {
    store: Arc<dyn CredentialStore>,
    notifier: Arc<dyn Notifier>,
    state: GateState,
    candidate: String,
    instructions_open: bool,
}

impl CredentialGate {
    /// Enters the gate. A non-empty stored key skips the form entirely and
    /// redirects to the console.
    pub fn enter(
        store: Arc<dyn CredentialStore>,
        notifier: Arc<dyn Notifier>,
    ) -> Result<Entry<Self>> {
        let stored = store
            .get_non_empty()
            .context("Failed to read stored API key")?;
        if stored.is_some() {
            debug!("API key already stored, redirecting to console");
            return Ok(Entry::Redirect(Route::Console));
        }

        Ok(Entry::Render(Self {
            store,
            notifier,
            state: GateState::NoKey,
            candidate: String::new(),
            instructions_open: false,
        }))
    }

    pub fn state(&self) -> GateState {
        self.state
    }

    /// Replaces the candidate key with the field's new contents.
    pub fn edit(&mut self, candidate: impl Into<String>) {
        if matches!(self.state, GateState::NavigatingAway(_)) {
            return;
        }
        self.candidate = candidate.into();
        self.state = GateState::CapturingInput;
    }

    /// The candidate as the masked field displays it.
    pub fn masked_candidate(&self) -> String {
        "•".repeat(self.candidate.chars().count())
    }

    /// Whether the "how to get your API key" panel is expanded.
    pub fn instructions_open(&self) -> bool {
        self.instructions_open
    }

    pub fn toggle_instructions(&mut self) {
        self.instructions_open = !self.instructions_open;
    }

    /// Validates and stores the candidate.
    ///
    /// The shape check runs on the trimmed value but the key is stored
    /// exactly as typed. On rejection the form stays put and the slot is
    /// left untouched.
    pub fn submit(&mut self) -> std::result::Result<Route, GateError> {
        if let GateState::NavigatingAway(route) = self.state {
            return Ok(route);
        }

        debug!(len = self.candidate.len(), "validating API key");
        if !looks_like_credential(&self.candidate) {
            let err = ValidationError::InvalidCredential;
            info!("rejected API key with unexpected prefix");
            self.state = GateState::Rejected;
            self.notifier.notify(Notification::error(err.to_string()));
            return Err(err.into());
        }

        if let Err(e) = self.store.set(&self.candidate) {
            let e = e.context("Failed to save API key");
            warn!(error = ?e, "could not persist API key");
            self.state = GateState::Rejected;
            self.notifier.notify(Notification::error(format!("{:#}", e)));
            return Err(e.into());
        }

        info!("API key saved");
        self.notifier.notify(Notification::success(KEY_SAVED));
        self.state = GateState::NavigatingAway(Route::Console);
        Ok(Route::Console)
    }
}

#[cfg(test)]
mod tests {
    use ytscribe_core::MemoryCredentialStore;

    use super::*;
    use crate::notify::{MemoryNotifier, NotificationKind};

    fn gate(store: &Arc<MemoryCredentialStore>, notifier: &Arc<MemoryNotifier>) -> CredentialGate {
        CredentialGate::enter(store.clone(), notifier.clone())
            .unwrap()
            .screen()
            .expect("gate should render without a stored key")
    }

    #[test]
    fn test_renders_when_slot_is_empty() {
        let store = Arc::new(MemoryCredentialStore::new());
        let notifier = Arc::new(MemoryNotifier::new());
        let gate = gate(&store, &notifier);

        assert_eq!(gate.state(), GateState::NoKey);
        assert!(!gate.instructions_open());
    }

    #[test]
    fn test_empty_stored_key_still_renders() {
        let store = Arc::new(MemoryCredentialStore::with_credential(""));
        let entry = CredentialGate::enter(store, Arc::new(MemoryNotifier::new())).unwrap();
        assert!(entry.redirect().is_none());
    }

    #[test]
    fn test_stored_key_redirects() {
        let store = Arc::new(MemoryCredentialStore::with_credential("sk-stored"));
        let entry = CredentialGate::enter(store, Arc::new(MemoryNotifier::new())).unwrap();
        assert_eq!(entry.redirect(), Some(Route::Console));
    }

    #[test]
    fn test_rejected_key_is_not_stored() {
        let store = Arc::new(MemoryCredentialStore::new());
        let notifier = Arc::new(MemoryNotifier::new());
        let mut gate = gate(&store, &notifier);

        gate.edit("pk-live-123");
        assert_eq!(gate.state(), GateState::CapturingInput);

        let err = gate.submit().unwrap_err();
        assert!(matches!(
            err,
            GateError::Invalid(ValidationError::InvalidCredential)
        ));
        assert_eq!(gate.state(), GateState::Rejected);
        assert_eq!(store.writes(), 0);
        assert_eq!(
            notifier.last(),
            Some(Notification::error("Please enter a valid OpenAI API key"))
        );

        gate.edit("sk-");
        assert_eq!(gate.state(), GateState::CapturingInput);
    }

    #[test]
    fn test_valid_key_is_stored_as_typed() {
        let store = Arc::new(MemoryCredentialStore::new());
        let notifier = Arc::new(MemoryNotifier::new());
        let mut gate = gate(&store, &notifier);

        gate.edit("  sk-abc123 ");
        let route = gate.submit().unwrap();

        assert_eq!(route, Route::Console);
        assert_eq!(gate.state(), GateState::NavigatingAway(Route::Console));
        assert_eq!(store.get().unwrap().as_deref(), Some("  sk-abc123 "));
        let last = notifier.last().unwrap();
        assert_eq!(last.kind, NotificationKind::Success);
        assert_eq!(last.message, KEY_SAVED);
    }

    #[test]
    fn test_masked_candidate() {
        let store = Arc::new(MemoryCredentialStore::new());
        let notifier = Arc::new(MemoryNotifier::new());
        let mut gate = gate(&store, &notifier);

        gate.edit("sk-12");
        assert_eq!(gate.masked_candidate(), "•••••");
    }

    #[test]
    fn test_instructions_toggle_leaves_form_alone() {
        let store = Arc::new(MemoryCredentialStore::new());
        let notifier = Arc::new(MemoryNotifier::new());
        let mut gate = gate(&store, &notifier);

        gate.edit("sk-x");
        gate.toggle_instructions();
        assert!(gate.instructions_open());
        assert_eq!(gate.state(), GateState::CapturingInput);
        gate.toggle_instructions();
        assert!(!gate.instructions_open());
        assert_eq!(store.writes(), 0);
    }
}
