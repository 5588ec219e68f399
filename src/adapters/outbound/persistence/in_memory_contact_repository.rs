use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::{
    domain::{errors::SubmissionResult, models::ContactSubmission},
    ports::repositories::ContactRepository,
};

/// In-memory implementation of ContactRepository for testing and development
#[derive(Clone, Default)]
pub struct InMemoryContactRepository {
    // Insertion order; the newest submission is last
    submissions: Arc<RwLock<Vec<ContactSubmission>>>,
}

impl InMemoryContactRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.submissions.read().await.len()
    }
}

#[async_trait]
impl ContactRepository for InMemoryContactRepository {
    async fn save(&self, submission: &ContactSubmission) -> SubmissionResult<()> {
        self.submissions.write().await.push(submission.clone());
        Ok(())
    }

    async fn list_recent(&self, limit: usize) -> SubmissionResult<Vec<ContactSubmission>> {
        let submissions = self.submissions.read().await;
        Ok(submissions.iter().rev().take(limit).cloned().collect())
    }
}
