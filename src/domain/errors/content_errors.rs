use crate::domain::errors::ValidationError;

/// Errors raised while producing the portfolio content
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ContentError {
    /// The retrieval request itself did not complete
    #[error("Content retrieval from {origin} failed: {message}")]
    Retrieval { origin: String, message: String },

    /// The endpoint answered, but not with a success status
    #[error("Content endpoint {endpoint} answered with status {status}")]
    UnexpectedStatus { endpoint: String, status: u16 },

    /// The payload does not have the shape the renderer requires
    #[error("Content failed validation: {0}")]
    DataShape(#[from] ValidationError),
}

impl ContentError {
    pub fn retrieval(origin: impl Into<String>, message: impl std::fmt::Display) -> Self {
        ContentError::Retrieval {
            origin: origin.into(),
            message: message.to_string(),
        }
    }

    /// Whether the failure came from the payload rather than the transport
    pub fn is_data_shape(&self) -> bool {
        matches!(self, ContentError::DataShape(_))
    }
}

/// Result type for content operations
pub type ContentResult<T> = Result<T, ContentError>;
