use std::path::PathBuf;
use std::sync::{mpsc, Arc, Mutex};
use std::thread;
use std::time::Duration;

use client_logging::client_warn;

use crate::auth::{AuthSettings, LoginApi, ReqwestLoginApi};
use crate::resume_file::read_resume_text;
use crate::{ClientEvent, LoginRequest, Screen};

/// Delay between a successful login and the redirect it triggers.
pub const REDIRECT_DELAY: Duration = Duration::from_millis(1000);

enum ClientCommand {
    SubmitLogin { request: LoginRequest },
    ReadResumeFile { path: PathBuf },
    ScheduleRedirect { screen: Screen },
}

/// Command/event bridge between the shell's message loop and the async IO
/// tasks. A dedicated thread owns the tokio runtime and spawns one task per
/// command.
#[derive(Clone)]
pub struct ClientHandle {
    cmd_tx: mpsc::Sender<ClientCommand>,
    event_rx: Arc<Mutex<mpsc::Receiver<ClientEvent>>>,
}

impl ClientHandle {
    pub fn new(settings: AuthSettings) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let api = Arc::new(ReqwestLoginApi::new(settings));

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let api = api.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(api.as_ref(), command, event_tx).await;
                });
            }
        });

        Self {
            cmd_tx,
            event_rx: Arc::new(Mutex::new(event_rx)),
        }
    }

    pub fn submit_login(&self, request: LoginRequest) {
        let _ = self.cmd_tx.send(ClientCommand::SubmitLogin { request });
    }

    pub fn read_resume_file(&self, path: impl Into<PathBuf>) {
        let _ = self.cmd_tx.send(ClientCommand::ReadResumeFile { path: path.into() });
    }

    pub fn schedule_redirect(&self, screen: Screen) {
        let _ = self.cmd_tx.send(ClientCommand::ScheduleRedirect { screen });
    }

    pub fn try_recv(&self) -> Option<ClientEvent> {
        self.event_rx.lock().ok().and_then(|rx| rx.try_recv().ok())
    }
}

async fn handle_command(
    api: &dyn LoginApi,
    command: ClientCommand,
    event_tx: mpsc::Sender<ClientEvent>,
) {
    match command {
        ClientCommand::SubmitLogin { request } => {
            // Every submission settles with exactly one event; the state
            // machine relies on this to re-enable the form.
            let result = api.login(&request).await;
            let _ = event_tx.send(ClientEvent::LoginCompleted { result });
        }
        ClientCommand::ReadResumeFile { path } => match read_resume_text(&path).await {
            Ok(content) => {
                let _ = event_tx.send(ClientEvent::ResumeLoaded { content });
            }
            Err(err) => {
                client_warn!("Failed to read resume file {:?}: {}", path, err);
            }
        },
        ClientCommand::ScheduleRedirect { screen } => {
            tokio::time::sleep(REDIRECT_DELAY).await;
            let _ = event_tx.send(ClientEvent::RedirectDue { screen });
        }
    }
}
