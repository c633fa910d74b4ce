use crate::view_model::{AppViewModel, StatusLine, StatusTone};
use crate::{Intent, ProfileDocument};

/// Mutual-exclusion state for login submissions.
///
/// `Submitting` carries the intent captured when the submission was accepted;
/// the redirect destination is resolved from this copy, never from the
/// pending selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Submitting {
        intent: Intent,
    },
}

#[derive(Debug, Clone, PartialEq, Default)]
pub(crate) struct LoginForm {
    pub(crate) username: String,
    pub(crate) password: String,
    pub(crate) pending_intent: Option<Intent>,
    pub(crate) phase: SubmissionPhase,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ProfileEditor {
    pub(crate) buffer: String,
}

impl Default for ProfileEditor {
    fn default() -> Self {
        Self {
            buffer: ProfileDocument::template_json(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    pub(crate) login: LoginForm,
    pub(crate) editor: ProfileEditor,
    pub(crate) status: Option<StatusLine>,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        let submitting = matches!(self.login.phase, SubmissionPhase::Submitting { .. });
        AppViewModel {
            submitting,
            pending_intent: self.login.pending_intent,
            controls_enabled: !submitting,
            status: self.status.clone(),
            editor_buffer: self.editor.buffer.clone(),
            dirty: self.dirty,
        }
    }

    /// Returns the dirty flag and clears it, for render coalescing.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn is_submitting(&self) -> bool {
        matches!(self.login.phase, SubmissionPhase::Submitting { .. })
    }

    pub(crate) fn set_status(&mut self, text: impl Into<String>, tone: StatusTone) {
        self.status = Some(StatusLine::new(text, tone));
        self.mark_dirty();
    }
}
