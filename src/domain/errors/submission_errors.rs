use crate::domain::errors::ValidationError;

/// Errors raised while delivering or storing a contact submission
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SubmissionError {
    #[error("Submission rejected: {0}")]
    Invalid(#[from] ValidationError),

    #[error("Contact endpoint {endpoint} answered with status {status}: {detail}")]
    Rejected {
        endpoint: String,
        status: u16,
        detail: String,
    },

    #[error("Could not reach contact endpoint: {message}")]
    Transport { message: String },

    #[error("Failed to store submission: {message}")]
    Persistence { message: String },
}

impl SubmissionError {
    pub fn persistence(message: impl std::fmt::Display) -> Self {
        SubmissionError::Persistence {
            message: message.to_string(),
        }
    }
}

/// Errors raised by the contact form before anything is sent
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FormError {
    #[error("A submission is already in flight")]
    AlreadySubmitting,

    #[error("{0}")]
    Invalid(#[from] ValidationError),
}

/// Result type for submission operations
pub type SubmissionResult<T> = Result<T, SubmissionError>;
