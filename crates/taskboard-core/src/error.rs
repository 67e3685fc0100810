use thiserror::Error;

#[derive(Error, Debug)]
pub enum TaskboardError {
    /// The backend answered 401; the session is gone.
    #[error("Authentication rejected")]
    AuthRejected,

    /// The backend answered 400, optionally with a human-readable message.
    #[error("Request rejected: {}", .message.as_deref().unwrap_or("no details"))]
    ValidationRejected { message: Option<String> },

    /// Any other non-200 answer or a transport failure.
    #[error("Operation failed: {0}")]
    OperationFailed(String),

    /// A field rule was violated before any request was sent.
    #[error("{0}")]
    LocalValidation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl TaskboardError {
    pub fn is_auth_rejected(&self) -> bool {
        matches!(self, Self::AuthRejected)
    }

    /// Message carried by a 400 answer, if the backend sent one.
    pub fn backend_message(&self) -> Option<&str> {
        match self {
            Self::ValidationRejected { message } => message.as_deref(),
            _ => None,
        }
    }
}
