use gigmarket_shared::ValidationError;
use reqwest::StatusCode;
use thiserror::Error;

/// Errors produced by the transport layer.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Connection refused, DNS failure, timeout, reset.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The backend answered with a non-success status.
    #[error("Request failed: {status}{}", detail(.message))]
    Status {
        status: StatusCode,
        message: Option<String>,
    },

    /// The body did not have the expected shape.
    #[error("Unexpected response: {0}")]
    Decode(String),

    /// Rejected before sending.
    #[error("{0}")]
    Validation(#[from] ValidationError),
}

impl ApiError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Status { status, .. } if *status == StatusCode::NOT_FOUND)
    }

    /// Message to show the user.  Transport failures collapse to `fallback`
    /// unless the backend supplied its own explanation.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Status {
                message: Some(m), ..
            } => m.clone(),
            ApiError::Validation(v) => v.to_string(),
            _ => fallback.to_string(),
        }
    }
}

fn detail(message: &Option<String>) -> String {
    message
        .as_deref()
        .map(|m| format!(" ({m})"))
        .unwrap_or_default()
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ApiError>;
