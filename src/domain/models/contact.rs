use bon::Builder;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

use crate::domain::{
    errors::ValidationError,
    value_objects::{EmailAddress, ServiceKey},
};

pub const ACK_TITLE: &str = "Message Sent Successfully!";
pub const ACK_MESSAGE: &str = "Thank you for reaching out. I'll get back to you within 24 hours.";
pub const API_ACK_MESSAGE: &str =
    "Thank you for reaching out! I'll get back to you within 24 hours.";

/// Raw, user-editable contents of the contact form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(String, into))]
pub struct ContactDraft {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub service: String,
    #[serde(default)]
    pub message: String,
}

/// One input of the contact form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Service,
    Message,
}

impl ContactDraft {
    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Service => self.service = value,
            ContactField::Message => self.message = value,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
            && self.email.is_empty()
            && self.service.is_empty()
            && self.message.is_empty()
    }

    /// Service key the draft currently points at, if it names a known one
    pub fn selected_service(&self) -> Option<ServiceKey> {
        self.service.parse().ok()
    }

    /// Check required fields and turn the draft into a deliverable submission
    pub fn validate(&self) -> Result<NewContactSubmission, ValidationError> {
        let name = required("name", &self.name)?;
        required("email", &self.email)?;
        let service = required("service", &self.service)?;
        let message = required("message", &self.message)?;

        Ok(NewContactSubmission {
            name,
            email: EmailAddress::new(self.email.clone())?,
            service: service.parse()?,
            message,
        })
    }
}

fn required(field: &str, value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::missing(field));
    }
    Ok(trimmed.to_string())
}

/// A validated submission, ready to be delivered
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewContactSubmission {
    pub name: String,
    pub email: EmailAddress,
    pub service: ServiceKey,
    pub message: String,
}

/// Processing state of a stored submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    New,
}

impl SubmissionStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            SubmissionStatus::New => "new",
        }
    }
}

impl FromStr for SubmissionStatus {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "new" => Ok(SubmissionStatus::New),
            other => Err(ValidationError::Malformed {
                message: format!("unknown submission status '{}'", other),
            }),
        }
    }
}

/// A stored contact submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub id: Uuid,
    pub name: String,
    pub email: EmailAddress,
    pub service: ServiceKey,
    pub message: String,
    pub submitted_at: DateTime<Utc>,
    pub status: SubmissionStatus,
}

impl ContactSubmission {
    pub fn from_new(submission: NewContactSubmission) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: submission.name,
            email: submission.email,
            service: submission.service,
            message: submission.message,
            submitted_at: Utc::now(),
            status: SubmissionStatus::New,
        }
    }
}

/// Acknowledgment shown once after a successful submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionAck {
    pub id: Option<Uuid>,
    pub title: String,
    pub message: String,
}

impl SubmissionAck {
    pub fn delivered(id: Option<Uuid>) -> Self {
        Self {
            id,
            title: ACK_TITLE.to_string(),
            message: ACK_MESSAGE.to_string(),
        }
    }
}
