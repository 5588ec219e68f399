use crate::domain::{
    errors::SubmissionResult,
    models::{ContactSubmission, NewContactSubmission},
};
use async_trait::async_trait;

/// Port for storing and reviewing contact submissions
#[async_trait]
pub trait ContactService: Send + Sync + 'static {
    /// Record a new submission
    async fn submit(&self, submission: NewContactSubmission) -> SubmissionResult<ContactSubmission>;

    /// Most recent submissions, newest first
    async fn list_submissions(&self, limit: usize) -> SubmissionResult<Vec<ContactSubmission>>;
}
