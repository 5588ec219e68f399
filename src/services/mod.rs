pub mod contact_form;
pub mod contact_service_impl;
pub mod portfolio_service_impl;

pub use contact_form::{ContactForm, ContactFormView, FormNotice, FormStatus};
pub use contact_service_impl::{ContactServiceImpl, MAX_LISTED_SUBMISSIONS};
pub use portfolio_service_impl::PortfolioServiceImpl;
