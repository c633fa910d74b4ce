use crate::profile::{fallback_for_text, pretty_json};
use crate::state::SubmissionPhase;
use crate::view_model::StatusTone;
use crate::{AppState, AutoApplyRequest, Effect, LoginFailure, Msg};

const MSG_FILL_BOTH_FIELDS: &str = "Please fill in both fields.";
const MSG_SELECT_ACTION: &str = "Please select an action (CV Scrape or Job Apply).";
const MSG_LOGGING_IN: &str = "Logging in...";
const MSG_LOGIN_OK: &str = "Login successful!";
const MSG_LOGIN_REJECTED: &str = "Login failed. Please try again.";
const MSG_CONNECTION: &str = "Cannot connect to server. Please check your connection.";
const MSG_SERVER_ERROR: &str = "Server error. Please try again later.";
const MSG_UNEXPECTED: &str = "An unexpected error occurred. Please try again.";
const MSG_INVALID_PROFILE: &str = "Invalid JSON format. Please check your input.";
const MSG_PROFILE_SAVED: &str = "Profile JSON saved. See the log for the parsed data.";
const MSG_AUTO_APPLY_REQUIRED: &str =
    "Please fill in all required fields: API key, job title, and job location.";
const MSG_AUTO_APPLY_INVALID_PROFILE: &str =
    "Please upload a valid resume file, or ensure the JSON in the editor is valid.";
const MSG_AUTO_APPLY_STARTED: &str =
    "Starting auto apply. See the log for the assembled request.";

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::UsernameChanged(text) => {
            state.login.username = text;
            Vec::new()
        }
        Msg::PasswordChanged(text) => {
            state.login.password = text;
            Vec::new()
        }
        Msg::IntentClicked(intent) => {
            // Both buttons are disabled while a submission is in flight;
            // a click arriving anyway must not change anything.
            if state.is_submitting() {
                return (state, Vec::new());
            }
            state.login.pending_intent = Some(intent);
            state.mark_dirty();
            begin_submission(&mut state)
        }
        Msg::LoginSubmitted => {
            if state.is_submitting() {
                return (state, Vec::new());
            }
            begin_submission(&mut state)
        }
        Msg::LoginSettled(result) => {
            let SubmissionPhase::Submitting { intent } = state.login.phase else {
                // Settlement without an in-flight submission: stale event.
                return (state, Vec::new());
            };

            // Single cleanup path, taken before any outcome branching: the
            // form is re-enabled and the selection consumed for every result.
            state.login.phase = SubmissionPhase::Idle;
            state.login.pending_intent = None;
            state.mark_dirty();

            match result {
                Ok(success) => {
                    let text = success
                        .message
                        .unwrap_or_else(|| MSG_LOGIN_OK.to_string());
                    state.set_status(text, StatusTone::Success);

                    let mut effects = Vec::new();
                    if let Some(token) = success.token {
                        effects.push(Effect::StoreAuthToken { token });
                    }
                    effects.push(Effect::RedirectAfterDelay {
                        destination: intent.destination(),
                    });
                    effects
                }
                Err(failure) => {
                    state.set_status(failure_text(failure), StatusTone::Error);
                    Vec::new()
                }
            }
        }
        Msg::RedirectDue(destination) => vec![Effect::Navigate { destination }],
        Msg::EditorChanged(text) => {
            state.editor.buffer = text;
            state.mark_dirty();
            Vec::new()
        }
        Msg::ResumeFilePicked(path) => vec![Effect::ReadResumeFile { path }],
        Msg::ResumeFileLoaded { content } => {
            // Valid JSON passes through verbatim (re-serialized pretty);
            // anything else is wrapped in the fallback resume shape.
            let value = serde_json::from_str(&content)
                .unwrap_or_else(|_| fallback_for_text(&content));
            state.editor.buffer = pretty_json(&value);
            state.mark_dirty();
            Vec::new()
        }
        Msg::SaveClicked => match serde_json::from_str(&state.editor.buffer) {
            Ok(profile) => {
                state.set_status(MSG_PROFILE_SAVED, StatusTone::Success);
                vec![Effect::PresentProfile { profile }]
            }
            Err(_) => {
                state.set_status(MSG_INVALID_PROFILE, StatusTone::Error);
                Vec::new()
            }
        },
        Msg::AutoApplyRequested(params) => {
            if params.api_key.trim().is_empty()
                || params.job_title.trim().is_empty()
                || params.job_location.trim().is_empty()
            {
                state.set_status(MSG_AUTO_APPLY_REQUIRED, StatusTone::Error);
                return (state, Vec::new());
            }
            match serde_json::from_str(&state.editor.buffer) {
                Ok(resume_data) => {
                    state.set_status(MSG_AUTO_APPLY_STARTED, StatusTone::Info);
                    vec![Effect::PresentAutoApplyRequest {
                        request: AutoApplyRequest::assemble(params, resume_data),
                    }]
                }
                Err(_) => {
                    state.set_status(MSG_AUTO_APPLY_INVALID_PROFILE, StatusTone::Error);
                    Vec::new()
                }
            }
        }
        Msg::BackToLoginClicked => vec![Effect::Navigate {
            destination: crate::Destination::Login,
        }],
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

/// Shared submission transition for intent clicks and direct form submits.
///
/// Validation precedes dispatch: nothing is sent on empty credentials or a
/// missing intent, and the phase stays `Idle`.
fn begin_submission(state: &mut AppState) -> Vec<Effect> {
    let username = state.login.username.trim().to_string();
    let password = state.login.password.trim().to_string();

    if username.is_empty() || password.is_empty() {
        state.set_status(MSG_FILL_BOTH_FIELDS, StatusTone::Error);
        return Vec::new();
    }

    let Some(intent) = state.login.pending_intent else {
        state.set_status(MSG_SELECT_ACTION, StatusTone::Error);
        return Vec::new();
    };

    state.login.phase = SubmissionPhase::Submitting { intent };
    state.set_status(MSG_LOGGING_IN, StatusTone::Loading);
    vec![Effect::SubmitLogin {
        username,
        password,
        intent,
    }]
}

fn failure_text(failure: LoginFailure) -> String {
    match failure {
        LoginFailure::Network => MSG_CONNECTION.to_string(),
        LoginFailure::NonJsonResponse | LoginFailure::InvalidJson => MSG_SERVER_ERROR.to_string(),
        LoginFailure::Rejected { message } => {
            message.unwrap_or_else(|| MSG_LOGIN_REJECTED.to_string())
        }
        LoginFailure::Unexpected => MSG_UNEXPECTED.to_string(),
    }
}
