use std::fmt;

use serde::{Deserialize, Serialize};

/// Action name carried in the login request body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LoginAction {
    CvScrape,
    JobApply,
}

/// Body of `POST /api/login`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
    pub action: LoginAction,
}

/// Body of a decoded login response; both fields are optional.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
}

/// Screen the shell navigates to after a scheduled redirect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Login,
    CvScrape,
    JobApply,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthError {
    pub kind: AuthFailureKind,
    pub message: String,
}

impl AuthError {
    pub(crate) fn new(kind: AuthFailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthFailureKind {
    /// The request never completed.
    Network,
    Timeout,
    /// The response completed without a JSON content type; body unread.
    NonJsonResponse { content_type: Option<String> },
    /// The response body failed to decode as JSON.
    InvalidJson,
    /// Non-2xx status with a decoded body.
    Rejected {
        status: u16,
        message: Option<String>,
    },
}

impl fmt::Display for AuthFailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthFailureKind::Network => write!(f, "network error"),
            AuthFailureKind::Timeout => write!(f, "timeout"),
            AuthFailureKind::NonJsonResponse { content_type } => match content_type {
                Some(ct) => write!(f, "non-json response ({ct})"),
                None => write!(f, "non-json response (no content type)"),
            },
            AuthFailureKind::InvalidJson => write!(f, "undecodable json body"),
            AuthFailureKind::Rejected { status, .. } => write!(f, "rejected with status {status}"),
        }
    }
}

/// Events delivered back to the shell's message loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientEvent {
    /// The single settlement event of a submitted login.
    LoginCompleted {
        result: Result<LoginResponse, AuthError>,
    },
    /// A resume file finished reading.
    ResumeLoaded { content: String },
    /// The post-login redirect delay elapsed.
    RedirectDue { screen: Screen },
}
