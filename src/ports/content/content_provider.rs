use crate::domain::{errors::ContentResult, models::PortfolioContent};
use async_trait::async_trait;

/// Source of the portfolio content
///
/// Implementations report every failure through `ContentError`; nothing they
/// do may panic into the render path.
#[async_trait]
pub trait ContentProvider: Send + Sync + 'static {
    /// Produce a validated content value
    async fn fetch(&self) -> ContentResult<PortfolioContent>;

    /// Short description of where the content comes from, for logs
    fn describe(&self) -> String;
}
