use std::path::PathBuf;

use crate::{AutoApplyParams, Destination, Intent, LoginFailure, LoginSuccess};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the username field.
    UsernameChanged(String),
    /// User edited the password field.
    PasswordChanged(String),
    /// User clicked one of the two intent buttons; triggers submission.
    IntentClicked(Intent),
    /// The login form was submitted directly (without an intent button).
    LoginSubmitted,
    /// The in-flight login request settled.
    LoginSettled(Result<LoginSuccess, LoginFailure>),
    /// The post-login redirect delay elapsed.
    RedirectDue(Destination),
    /// User replaced the editor buffer text.
    EditorChanged(String),
    /// User selected a resume file to load.
    ResumeFilePicked(PathBuf),
    /// A selected resume file finished reading.
    ResumeFileLoaded { content: String },
    /// User clicked save on the editor screen.
    SaveClicked,
    /// User started the auto-apply run with the given inputs.
    AutoApplyRequested(AutoApplyParams),
    /// User clicked the back-to-login control.
    BackToLoginClicked,
    /// Fallback for placeholder wiring.
    NoOp,
}
