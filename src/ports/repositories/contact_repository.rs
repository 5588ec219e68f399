use crate::domain::{errors::SubmissionResult, models::ContactSubmission};
use async_trait::async_trait;

/// Persistence for contact submissions
#[async_trait]
pub trait ContactRepository: Send + Sync + 'static {
    /// Store a new submission
    async fn save(&self, submission: &ContactSubmission) -> SubmissionResult<()>;

    /// List submissions, newest first
    async fn list_recent(&self, limit: usize) -> SubmissionResult<Vec<ContactSubmission>>;
}
