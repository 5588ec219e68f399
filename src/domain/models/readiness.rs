use std::sync::Arc;

use crate::domain::{errors::ContentError, models::PortfolioContent};

/// Whether the renderer may draw the page yet
#[derive(Debug, Clone)]
pub enum Readiness {
    Loading,
    Ready(Arc<PortfolioContent>),
    Failed(ContentError),
}

impl Readiness {
    pub fn is_loading(&self) -> bool {
        matches!(self, Readiness::Loading)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Readiness::Ready(_))
    }

    pub fn content(&self) -> Option<&Arc<PortfolioContent>> {
        match self {
            Readiness::Ready(content) => Some(content),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Readiness::Loading => "loading",
            Readiness::Ready(_) => "ready",
            Readiness::Failed(_) => "error",
        }
    }
}
