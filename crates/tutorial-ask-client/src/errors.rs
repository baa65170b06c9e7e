/// Errors returned by the public client API.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClientError {
    /// Invalid client configuration.
    #[error("config error: {0}")]
    Config(String),
    /// Invalid user input to the builder API.
    #[error("validation error: {0}")]
    Validation(String),
    /// Server rejected the request with a non-streaming, non-OK response.
    #[error("request failed: {message}")]
    RequestFailed {
        status: Option<u16>,
        message: String,
    },
    /// Network or stream I/O failed.
    #[error("transport error: {message}")]
    Transport { message: String },
}

impl ClientError {
    /// Creates a transport-level error.
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Creates a request-failure error carrying the server's message.
    pub fn request_failed(status: Option<u16>, message: impl Into<String>) -> Self {
        Self::RequestFailed {
            status,
            message: message.into(),
        }
    }

    /// Returns the human-readable message for this error.
    pub fn message(&self) -> &str {
        match self {
            Self::Config(message) | Self::Validation(message) => message,
            Self::RequestFailed { message, .. } | Self::Transport { message } => message,
        }
    }
}
