use crate::document::Document;
use crate::response::Envelope;
use thiserror::Error;

/// Main error type for client operations
#[derive(Debug, Error)]
pub enum ClientError {
    /// The service answered with a non-success status. The full response is
    /// kept so callers can branch on the status or read the error body.
    #[error("request failed with status code {}", .response.status)]
    Status { response: Envelope<Document> },

    /// No response was received at all (DNS, connection, timeout)
    #[error("{message}")]
    Transport {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A path template placeholder had no value; nothing was sent
    #[error("missing path parameter `{name}` for `{template}`")]
    MissingPathParameter { name: String, template: &'static str },

    /// Request building error
    #[error("failed to build request: {0}")]
    RequestBuild(String),

    /// The configured base URL cannot anchor relative paths
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// HTTP client construction error
    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// URL parsing error
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),
}

impl ClientError {
    /// Create a transport error from a message alone
    pub fn transport(message: impl Into<String>) -> Self {
        ClientError::Transport {
            message: message.into(),
            source: None,
        }
    }

    /// The response that came with the error, if the service answered
    pub fn response(&self) -> Option<&Envelope<Document>> {
        match self {
            ClientError::Status { response } => Some(response),
            _ => None,
        }
    }

    /// Get the HTTP status code if the service answered
    pub fn status_code(&self) -> Option<u16> {
        self.response().map(|response| response.status)
    }

    /// Check if this error is a not found error (404)
    pub fn is_not_found(&self) -> bool {
        self.status_code() == Some(404)
    }

    /// Check if this error is a conflict error (409)
    pub fn is_conflict(&self) -> bool {
        self.status_code() == Some(409)
    }

    /// Check if the service could not be reached
    pub fn is_transport(&self) -> bool {
        matches!(self, ClientError::Transport { .. })
    }
}

/// Result type for client operations
pub type Result<T> = std::result::Result<T, ClientError>;
