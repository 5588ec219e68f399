use serde::{Deserialize, Serialize};

use crate::domain::errors::ValidationError;

/// A syntactically plausible email address
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new EmailAddress; surrounding whitespace is dropped
    pub fn new(value: String) -> Result<Self, ValidationError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyEmailAddress);
        }

        let malformed = || ValidationError::MalformedEmailAddress(trimmed.to_string());

        if trimmed.chars().any(char::is_whitespace) {
            return Err(malformed());
        }

        let (local, domain) = trimmed.split_once('@').ok_or_else(malformed)?;
        if local.is_empty() || domain.contains('@') {
            return Err(malformed());
        }

        // Domain needs at least one dot with labels on both sides
        if !domain.contains('.') || domain.starts_with('.') || domain.ends_with('.') {
            return Err(malformed());
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for EmailAddress {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        EmailAddress::new(value)
    }
}

impl From<EmailAddress> for String {
    fn from(email: EmailAddress) -> Self {
        email.0
    }
}

impl std::fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
