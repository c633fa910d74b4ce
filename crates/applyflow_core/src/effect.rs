use std::path::PathBuf;

use serde_json::Value;

use crate::{AutoApplyRequest, Destination, Intent};

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Issue the login request. Credentials are already trimmed.
    SubmitLogin {
        username: String,
        password: String,
        intent: Intent,
    },
    /// Read the selected resume file as text.
    ReadResumeFile { path: PathBuf },
    /// Persist the auth token returned by a successful login.
    StoreAuthToken { token: String },
    /// Navigate to `destination` after the fixed post-login delay.
    RedirectAfterDelay { destination: Destination },
    /// Navigate immediately.
    Navigate { destination: Destination },
    /// Surface the parsed profile from a save probe.
    PresentProfile { profile: Value },
    /// Surface the assembled auto-apply request. Never sent from here.
    PresentAutoApplyRequest { request: AutoApplyRequest },
}
