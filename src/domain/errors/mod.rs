mod content_errors;
mod submission_errors;
mod validation_errors;

pub use content_errors::*;
pub use submission_errors::*;
pub use validation_errors::*;
