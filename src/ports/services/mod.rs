mod contact_service;
mod portfolio_service;

pub use contact_service::ContactService;
pub use portfolio_service::PortfolioService;
