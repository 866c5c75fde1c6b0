use std::path::PathBuf;
use thiserror::Error;

/// Error type for chat calls and prompt loading.
///
/// Nothing here is retried or logged by the library; callers decide.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Serialization error: {0}")]
    Serialization(#[source] serde_json::Error),

    #[error("Network transport error: {0}")]
    Transport(#[from] crate::transport::TransportError),

    #[error("API error: HTTP {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Failed to parse response: {0}")]
    ResponseParse(#[source] serde_json::Error),

    #[error("Empty response: provider returned no choices")]
    EmptyResponse,

    #[error("Failed to read {}: {source}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse prompts{}: {source}", .path.as_ref().map(|p| format!(" in {}", p.display())).unwrap_or_default())]
    PromptParse {
        path: Option<PathBuf>,
        #[source]
        source: serde_yaml::Error,
    },
}

impl Error {
    /// HTTP status of a provider-side error.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_api_error(&self) -> bool {
        matches!(self, Error::Api { .. })
    }

    pub fn is_transport_error(&self) -> bool {
        matches!(self, Error::Transport(_))
    }
}
