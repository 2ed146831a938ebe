use dioxus::prelude::ServerFnError;
use thiserror::Error;

/// Failures talking to the backend actor or the storage gateway.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("backend unreachable: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("backend returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The call reached the backend and was refused; the message is shown to
    /// the user as-is.
    #[error("{0}")]
    Rejected(String),

    #[error("unexpected backend reply: {0}")]
    Decode(#[from] serde_json::Error),
}

impl BackendError {
    pub fn into_server_fn_error(self) -> ServerFnError {
        ServerFnError::new(self.to_string())
    }
}
