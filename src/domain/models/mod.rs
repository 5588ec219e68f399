pub mod contact;
pub mod portfolio;
pub mod readiness;

pub use contact::*;
pub use portfolio::*;
pub use readiness::Readiness;
