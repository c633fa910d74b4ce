use crate::Intent;

/// Tone of the status line, mirrored by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Info,
    Loading,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub text: String,
    pub tone: StatusTone,
}

impl StatusLine {
    pub(crate) fn new(text: impl Into<String>, tone: StatusTone) -> Self {
        Self {
            text: text.into(),
            tone,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    /// True while a login submission is in flight.
    pub submitting: bool,
    /// Intent selected for the next submission, if any.
    pub pending_intent: Option<Intent>,
    /// Credential inputs and both intent buttons follow this flag.
    pub controls_enabled: bool,
    pub status: Option<StatusLine>,
    pub editor_buffer: String,
    pub dirty: bool,
}
