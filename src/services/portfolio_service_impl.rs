use async_trait::async_trait;
use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};
use tokio::sync::watch;
use tracing::{error, info};

use crate::{
    domain::models::Readiness,
    ports::{content::ContentProvider, services::PortfolioService},
};

/// Implementation of PortfolioService over any ContentProvider
///
/// The provider is asked exactly once. A failed retrieval is terminal for the
/// lifetime of this instance; there is no automatic retry. The retrieval runs
/// on its own task, so a caller that stops waiting does not strand the state
/// in `Loading`.
pub struct PortfolioServiceImpl {
    provider: Arc<dyn ContentProvider>,
    state: Arc<watch::Sender<Readiness>>,
    started: AtomicBool,
}

impl PortfolioServiceImpl {
    /// Create a new PortfolioServiceImpl in the `Loading` state
    pub fn new(provider: Arc<dyn ContentProvider>) -> Self {
        let (state, _) = watch::channel(Readiness::Loading);
        Self {
            provider,
            state: Arc::new(state),
            started: AtomicBool::new(false),
        }
    }

    /// Start the single retrieval unless it is already running or done
    pub fn start(&self) {
        if self.started.swap(true, Ordering::SeqCst) {
            return;
        }

        let provider = self.provider.clone();
        let state = self.state.clone();
        tokio::spawn(async move {
            state.send_replace(retrieve(provider.as_ref()).await);
        });
    }
}

async fn retrieve(provider: &dyn ContentProvider) -> Readiness {
    let source = provider.describe();
    info!(%source, "Loading portfolio content");

    match provider.fetch().await {
        Ok(content) => {
            info!(
                %source,
                services = content.services.len(),
                testimonials = content.testimonials.len(),
                "Portfolio content ready"
            );
            Readiness::Ready(Arc::new(content))
        }
        Err(e) => {
            error!(%source, error = %e, "Portfolio content unavailable");
            Readiness::Failed(e)
        }
    }
}

#[async_trait]
impl PortfolioService for PortfolioServiceImpl {
    fn readiness(&self) -> Readiness {
        self.state.borrow().clone()
    }

    async fn load(&self) -> Readiness {
        self.start();
        self.wait_settled().await
    }

    async fn wait_settled(&self) -> Readiness {
        let mut receiver = self.state.subscribe();
        let settled = receiver
            .wait_for(|readiness| !readiness.is_loading())
            .await
            .map(|readiness| readiness.clone());

        settled.unwrap_or_else(|_| self.readiness())
    }
}
