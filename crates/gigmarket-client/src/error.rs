use thiserror::Error;

use gigmarket_api::ApiError;
use gigmarket_shared::ValidationError;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A dependency (usually the resolved user id) is not available yet.
    #[error("{0} is not available yet")]
    NotReady(&'static str),

    #[error("no such {0}")]
    NotFound(&'static str),

    #[error("a proposal for this job was already submitted")]
    AlreadySubmitted,

    /// The chat key is incomplete, so nothing was requested.
    #[error("chat is waiting for job, client and freelancer ids")]
    Deferred,
}

impl ClientError {
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ClientError::Validation(_) | ClientError::Api(ApiError::Validation(_))
        )
    }

    /// Text suitable for showing to the user.  Validation problems are
    /// specific; transport failures collapse to `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ClientError::Api(e) => e.user_message(fallback),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
