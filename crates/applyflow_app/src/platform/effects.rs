use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use applyflow_client::{
    AuthError, AuthFailureKind, AuthSettings, ClientEvent, ClientHandle, LoginAction,
    LoginRequest, LoginResponse, Screen,
};
use applyflow_core::{Destination, Effect, Intent, LoginFailure, LoginSuccess, Msg};
use client_logging::{client_info, client_warn};

use super::app::ShellEvent;
use super::session;

/// Executes IO effects from the core and feeds settlement events back into
/// the shell's message loop.
pub struct EffectRunner {
    client: ClientHandle,
    state_dir: PathBuf,
}

impl EffectRunner {
    pub fn new(msg_tx: mpsc::Sender<ShellEvent>, settings: AuthSettings, state_dir: PathBuf) -> Self {
        let client = ClientHandle::new(settings);
        let runner = Self { client, state_dir };
        runner.spawn_event_loop(msg_tx);
        runner
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::SubmitLogin {
                    username,
                    password,
                    intent,
                } => {
                    client_info!("SubmitLogin user={} action={}", username, intent);
                    self.client.submit_login(LoginRequest {
                        username,
                        password,
                        action: map_intent(intent),
                    });
                }
                Effect::ReadResumeFile { path } => {
                    client_info!("ReadResumeFile {:?}", path);
                    self.client.read_resume_file(path);
                }
                Effect::StoreAuthToken { token } => {
                    session::save_auth_token(&self.state_dir, &token);
                }
                Effect::RedirectAfterDelay { destination } => {
                    self.client.schedule_redirect(map_destination(destination));
                }
                Effect::Navigate { destination } => {
                    // Navigation is the shell's concern; reaching here means
                    // the dispatch loop forgot to intercept it.
                    client_warn!("Unhandled Navigate effect to {}", destination.path());
                }
                Effect::PresentProfile { profile } => {
                    client_info!("Saved profile: {}", profile);
                }
                Effect::PresentAutoApplyRequest { request } => match serde_json::to_string(&request)
                {
                    Ok(json) => client_info!("Auto-apply request assembled: {}", json),
                    Err(err) => client_warn!("Failed to serialize auto-apply request: {}", err),
                },
            }
        }
    }

    fn spawn_event_loop(&self, msg_tx: mpsc::Sender<ShellEvent>) {
        let client = self.client.clone();
        thread::spawn(move || loop {
            if let Some(event) = client.try_recv() {
                let msg = match event {
                    ClientEvent::LoginCompleted { result } => Msg::LoginSettled(map_result(result)),
                    ClientEvent::ResumeLoaded { content } => Msg::ResumeFileLoaded { content },
                    ClientEvent::RedirectDue { screen } => Msg::RedirectDue(map_screen(screen)),
                };
                if msg_tx.send(ShellEvent::Core(msg)).is_err() {
                    break;
                }
            } else {
                thread::sleep(Duration::from_millis(20));
            }
        });
    }
}

fn map_intent(intent: Intent) -> LoginAction {
    match intent {
        Intent::CvScrape => LoginAction::CvScrape,
        Intent::JobApply => LoginAction::JobApply,
    }
}

fn map_destination(destination: Destination) -> Screen {
    match destination {
        Destination::Login => Screen::Login,
        Destination::CvScrape => Screen::CvScrape,
        Destination::JobApply => Screen::JobApply,
    }
}

fn map_screen(screen: Screen) -> Destination {
    match screen {
        Screen::Login => Destination::Login,
        Screen::CvScrape => Destination::CvScrape,
        Screen::JobApply => Destination::JobApply,
    }
}

fn map_result(result: Result<LoginResponse, AuthError>) -> Result<LoginSuccess, LoginFailure> {
    match result {
        Ok(response) => Ok(LoginSuccess {
            message: response.message,
            token: response.token,
        }),
        Err(err) => {
            client_warn!("Login failed: {} ({})", err.kind, err.message);
            Err(map_failure(err))
        }
    }
}

fn map_failure(err: AuthError) -> LoginFailure {
    match err.kind {
        AuthFailureKind::Network | AuthFailureKind::Timeout => LoginFailure::Network,
        AuthFailureKind::NonJsonResponse { .. } => LoginFailure::NonJsonResponse,
        AuthFailureKind::InvalidJson => LoginFailure::InvalidJson,
        AuthFailureKind::Rejected { message, .. } => LoginFailure::Rejected { message },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_failures_collapse_into_the_connection_bucket() {
        for kind in [AuthFailureKind::Network, AuthFailureKind::Timeout] {
            let err = AuthError {
                kind,
                message: "boom".to_string(),
            };
            assert_eq!(map_failure(err), LoginFailure::Network);
        }
    }

    #[test]
    fn rejected_failure_keeps_the_server_message() {
        let err = AuthError {
            kind: AuthFailureKind::Rejected {
                status: 403,
                message: Some("nope".to_string()),
            },
            message: "403 Forbidden".to_string(),
        };
        assert_eq!(
            map_failure(err),
            LoginFailure::Rejected {
                message: Some("nope".to_string()),
            }
        );
    }

    #[test]
    fn screen_mapping_round_trips() {
        for destination in [Destination::Login, Destination::CvScrape, Destination::JobApply] {
            assert_eq!(map_screen(map_destination(destination)), destination);
        }
    }
}
