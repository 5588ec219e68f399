//! Server-side rendering of the portfolio page
//!
//! Every section is a leptos component that is a pure function of its slice
//! of the content model. `render_page` gates the whole tree on readiness.

pub mod document;
pub mod page;
pub mod sections;

pub use document::render_document;
pub use page::{ErrorView, LoadingView, PortfolioPage, render_body, render_page};
