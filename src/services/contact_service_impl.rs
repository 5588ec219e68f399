use async_trait::async_trait;
use std::sync::Arc;
use tracing::{error, info};

use crate::{
    domain::{
        errors::SubmissionResult,
        models::{ContactSubmission, NewContactSubmission},
    },
    ports::{repositories::ContactRepository, services::ContactService},
};

/// Maximum number of submissions a listing returns
pub const MAX_LISTED_SUBMISSIONS: usize = 100;

/// Implementation of ContactService backed by a ContactRepository
#[derive(Clone)]
pub struct ContactServiceImpl {
    repository: Arc<dyn ContactRepository>,
}

impl ContactServiceImpl {
    /// Create a new ContactServiceImpl instance
    pub fn new(repository: Arc<dyn ContactRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl ContactService for ContactServiceImpl {
    async fn submit(&self, submission: NewContactSubmission) -> SubmissionResult<ContactSubmission> {
        let record = ContactSubmission::from_new(submission);

        self.repository.save(&record).await.map_err(|e| {
            error!(id = %record.id, error = %e, "Error storing contact submission");
            e
        })?;

        info!(id = %record.id, service = %record.service, "Contact submission stored");
        Ok(record)
    }

    async fn list_submissions(&self, limit: usize) -> SubmissionResult<Vec<ContactSubmission>> {
        self.repository
            .list_recent(limit.min(MAX_LISTED_SUBMISSIONS))
            .await
    }
}
