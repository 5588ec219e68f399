/// Validation errors for domain value objects and the content model
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    // Value object errors
    UnknownPaletteColor(String),
    UnknownServiceKey(String),
    RatingOutOfRange {
        actual: i64,
        max: u8,
    },
    EmptyEmailAddress,
    MalformedEmailAddress(String),

    // Content model errors
    MissingField {
        field: String,
    },
    DuplicateId {
        collection: String,
        id: u32,
    },
    NoFeatures {
        service_id: u32,
    },
    Malformed {
        message: String,
    },
}

impl ValidationError {
    pub fn missing(field: &str) -> Self {
        ValidationError::MissingField {
            field: field.to_string(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::UnknownPaletteColor(value) => {
                write!(
                    f,
                    "Unknown color '{}' (expected one of: emerald, rose, violet, blue)",
                    value
                )
            }
            ValidationError::UnknownServiceKey(value) => {
                write!(f, "Unknown service '{}'", value)
            }
            ValidationError::RatingOutOfRange { actual, max } => {
                write!(f, "Rating {} is outside 0..={}", actual, max)
            }
            ValidationError::EmptyEmailAddress => write!(f, "Email address cannot be empty"),
            ValidationError::MalformedEmailAddress(value) => {
                write!(f, "Malformed email address: '{}'", value)
            }
            ValidationError::MissingField { field } => {
                write!(f, "Required field '{}' is missing or empty", field)
            }
            ValidationError::DuplicateId { collection, id } => {
                write!(f, "Duplicate id {} in {}", id, collection)
            }
            ValidationError::NoFeatures { service_id } => {
                write!(f, "Service {} lists no features", service_id)
            }
            ValidationError::Malformed { message } => {
                write!(f, "Malformed content: {}", message)
            }
        }
    }
}

impl std::error::Error for ValidationError {}
