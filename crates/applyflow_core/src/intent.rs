use std::fmt;

/// The user's selected high-level action for the current login attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    CvScrape,
    JobApply,
}

impl Intent {
    /// Action name as sent to the backend.
    pub fn wire_name(self) -> &'static str {
        match self {
            Intent::CvScrape => "cv_scrape",
            Intent::JobApply => "job_apply",
        }
    }

    /// Screen reached after a successful login with this intent.
    pub fn destination(self) -> Destination {
        match self {
            Intent::CvScrape => Destination::CvScrape,
            Intent::JobApply => Destination::JobApply,
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

/// Navigation target, one relative page per screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    Login,
    CvScrape,
    JobApply,
}

impl Destination {
    pub fn path(self) -> &'static str {
        match self {
            Destination::Login => "index.html",
            Destination::CvScrape => "cv_scrape.html",
            Destination::JobApply => "job_apply.html",
        }
    }
}

/// Successful settlement of a login submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginSuccess {
    pub message: Option<String>,
    pub token: Option<String>,
}

/// Failed settlement, one variant per user-facing failure cause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginFailure {
    /// The request never completed (connect error or timeout).
    Network,
    /// The response completed but its content type is not JSON.
    NonJsonResponse,
    /// The response body could not be decoded as JSON.
    InvalidJson,
    /// Non-2xx status; the server's message is displayed verbatim if present.
    Rejected { message: Option<String> },
    /// Anything that does not fit the taxonomy above.
    Unexpected,
}
