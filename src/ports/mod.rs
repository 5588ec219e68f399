pub mod contact;
pub mod content;
pub mod repositories;
pub mod services;

// Re-export all port traits for convenience
pub use contact::ContactGateway;
pub use content::ContentProvider;
pub use repositories::ContactRepository;
pub use services::{ContactService, PortfolioService};
