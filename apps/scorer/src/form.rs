//! Upload form controller — owns the two file slots and the submission state
//! machine. All state changes go through the operations here; nothing else in
//! the crate mutates form state.

use tracing::debug;

use crate::client::ScoreBackend;
use crate::files::{SelectedFile, Slot};
use crate::validation::validate_pair;

/// Lifecycle of one submit attempt.
///
/// `idle → validating → {failed | in_flight} → {succeeded | failed}`
///
/// Terminal states persist until the next submit clears them, so the user can
/// read the outcome for as long as they like before trying again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    Validating,
    InFlight,
    Succeeded(String),
    Failed(String),
}

/// The one controller behind the scorer form. Two independent slots, one
/// submission state, no other mutable state anywhere.
pub struct ScorerForm {
    resume: Option<SelectedFile>,
    job_desc: Option<SelectedFile>,
    state: SubmissionState,
}

impl ScorerForm {
    pub fn new() -> Self {
        Self {
            resume: None,
            job_desc: None,
            state: SubmissionState::Idle,
        }
    }

    /// Puts a file in a slot. Selection never validates and never touches a
    /// terminal result; the next submit does both.
    pub fn select_file(&mut self, slot: Slot, file: SelectedFile) {
        debug!("Selected '{}' for {:?} slot", file.name(), slot);
        *self.slot_mut(slot) = Some(file);
    }

    /// Empties a slot. No-op if already empty.
    pub fn clear_file(&mut self, slot: Slot) {
        *self.slot_mut(slot) = None;
    }

    pub fn selected(&self, slot: Slot) -> Option<&SelectedFile> {
        match slot {
            Slot::Resume => self.resume.as_ref(),
            Slot::JobDescription => self.job_desc.as_ref(),
        }
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    /// Score text from the last attempt, if it succeeded.
    pub fn result(&self) -> Option<&str> {
        match &self.state {
            SubmissionState::Succeeded(text) => Some(text),
            _ => None,
        }
    }

    /// User-facing message from the last attempt, if it failed.
    pub fn error(&self) -> Option<&str> {
        match &self.state {
            SubmissionState::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn is_in_flight(&self) -> bool {
        self.state == SubmissionState::InFlight
    }

    /// Runs one submit attempt: clear the previous outcome, validate, and if
    /// validation passes, make exactly one scoring call. A submit that arrives
    /// while a request is outstanding is dropped, not queued.
    pub async fn submit(&mut self, backend: &dyn ScoreBackend) {
        if self.is_in_flight() {
            debug!("Submit ignored: a score request is already in flight");
            return;
        }

        self.state = SubmissionState::Validating;

        let (resume, job_desc) = match validate_pair(self.resume.as_ref(), self.job_desc.as_ref())
        {
            Ok(pair) => pair,
            Err(e) => {
                // Validation failures never reach the network.
                self.state = SubmissionState::Failed(e.to_string());
                return;
            }
        };

        self.state = SubmissionState::InFlight;

        self.state = match backend.score(resume, job_desc).await {
            Ok(text) => SubmissionState::Succeeded(text),
            Err(e) => SubmissionState::Failed(e.to_string()),
        };
    }

    fn slot_mut(&mut self, slot: Slot) -> &mut Option<SelectedFile> {
        match slot {
            Slot::Resume => &mut self.resume,
            Slot::JobDescription => &mut self.job_desc,
        }
    }
}

impl Default for ScorerForm {
    fn default() -> Self {
        Self::new()
    }
}
