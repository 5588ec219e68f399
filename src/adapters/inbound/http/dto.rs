use axum::http::StatusCode;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{
    errors::{ContentError, SubmissionError, ValidationError},
    models::{API_ACK_MESSAGE, ContactDraft, ContactSubmission},
};

pub const WELCOME_MESSAGE: &str = "Gunjan Jagtiani Wellness Portfolio API";

/// DTO for the API root
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WelcomeDto {
    pub message: String,
}

impl Default for WelcomeDto {
    fn default() -> Self {
        Self {
            message: WELCOME_MESSAGE.to_string(),
        }
    }
}

/// DTO for a contact submission posted to the API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactRequestDto {
    pub name: String,
    pub email: String,
    pub service: String,
    pub message: String,
}

/// DTO answered after a submission is stored
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactResponseDto {
    pub success: bool,
    pub message: String,
    pub id: Uuid,
}

/// Query for listing stored submissions
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListSubmissionsDto {
    pub limit: Option<usize>,
}

/// DTO for error responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponseDto {
    pub error: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

// Conversion implementations

impl From<ContactRequestDto> for ContactDraft {
    fn from(dto: ContactRequestDto) -> Self {
        ContactDraft {
            name: dto.name,
            email: dto.email,
            service: dto.service,
            message: dto.message,
        }
    }
}

impl From<&ContactSubmission> for ContactResponseDto {
    fn from(submission: &ContactSubmission) -> Self {
        ContactResponseDto {
            success: true,
            message: API_ACK_MESSAGE.to_string(),
            id: submission.id,
        }
    }
}

impl From<&SubmissionError> for StatusCode {
    fn from(error: &SubmissionError) -> Self {
        match error {
            SubmissionError::Invalid(_) => StatusCode::UNPROCESSABLE_ENTITY,
            SubmissionError::Rejected { .. } | SubmissionError::Transport { .. } => {
                StatusCode::BAD_GATEWAY
            }
            SubmissionError::Persistence { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl ErrorResponseDto {
    fn new(error: &str, message: impl Into<String>) -> Self {
        ErrorResponseDto {
            error: error.to_string(),
            message: message.into(),
            timestamp: Utc::now(),
        }
    }

    pub fn from_validation_error(error: &ValidationError) -> Self {
        Self::new("ValidationError", error.to_string())
    }

    pub fn from_content_error(error: &ContentError) -> Self {
        Self::new("ContentError", error.to_string())
    }

    pub fn from_submission_error(error: &SubmissionError) -> Self {
        Self::new("SubmissionError", error.to_string())
    }

    pub fn loading() -> Self {
        Self::new("Loading", "Portfolio content is still loading")
    }
}
