//! User-facing messages for failed calls.

use taskboard_core::{Location, PageHost, TaskboardError};

use crate::outcome::Submission;

/// Shown when a mutation fails.
pub const GENERIC_FAILURE: &str = "Unexpected issue happened.\nPlease try later.";

/// Shown when a page cannot fetch its data.
pub const SERVICE_UNAVAILABLE: &str = "Out of service. Please try later.";

/// Whether a 400 answer's `message` may be shown to the user as is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendMessage {
    Trusted,
    Ignored,
}

/// Tell the user about a failed call. A rejected session always ends on
/// the landing page without a message.
pub fn report_failure(
    host: &dyn PageHost,
    err: &TaskboardError,
    fallback: &str,
    backend: BackendMessage,
) -> Submission {
    match err {
        TaskboardError::AuthRejected => {
            host.navigate(Location::Landing);
        }
        TaskboardError::LocalValidation(message) => {
            host.alert(message);
            return Submission::Blocked;
        }
        _ => {
            let message = match backend {
                BackendMessage::Trusted => err.backend_message().unwrap_or(fallback),
                BackendMessage::Ignored => fallback,
            };
            tracing::warn!("Call failed: {}", err);
            host.alert(message);
        }
    }
    Submission::Failed
}

/// Alert a local rule violation and report the submission as blocked.
pub fn block(host: &dyn PageHost, violation: impl std::fmt::Display) -> Submission {
    host.alert(&violation.to_string());
    Submission::Blocked
}
