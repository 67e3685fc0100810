use serde::Serialize;

/// How a page load ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PageLoad {
    Ready,
    /// The session was missing or rejected; the host was sent to the landing page.
    Redirected,
    /// The data could not be fetched; the user has been told.
    Unavailable,
}

/// How a form submission or action ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Submission {
    Completed,
    /// A local rule refused the input. Nothing was sent.
    Blocked,
    /// The backend or the transport refused the request.
    Failed,
    /// The user declined the confirmation.
    Cancelled,
    /// The same action is already running, or there is nothing to submit.
    Ignored,
}

impl Submission {
    pub fn is_completed(self) -> bool {
        matches!(self, Self::Completed)
    }
}
