//! Applyflow client: login transport and effect execution.
mod auth;
mod client;
mod persist;
mod resume_file;
mod types;

pub use auth::{AuthSettings, LoginApi, ReqwestLoginApi, LOGIN_PATH};
pub use client::{ClientHandle, REDIRECT_DELAY};
pub use persist::{ensure_state_dir, AtomicFileWriter, PersistError};
pub use resume_file::read_resume_text;
pub use types::{
    AuthError, AuthFailureKind, ClientEvent, LoginAction, LoginRequest, LoginResponse, Screen,
};
