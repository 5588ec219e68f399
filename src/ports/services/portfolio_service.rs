use crate::domain::models::Readiness;
use async_trait::async_trait;

/// Port for the content model provider
/// Holds the readiness state the renderer is gated on
#[async_trait]
pub trait PortfolioService: Send + Sync + 'static {
    /// Current readiness, without waiting
    fn readiness(&self) -> Readiness;

    /// Perform the one content retrieval; later calls return the settled state
    async fn load(&self) -> Readiness;

    /// Wait until the state is no longer `Loading`
    async fn wait_settled(&self) -> Readiness;
}
