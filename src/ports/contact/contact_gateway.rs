use crate::domain::{
    errors::SubmissionResult,
    models::{NewContactSubmission, SubmissionAck},
};
use async_trait::async_trait;

/// Delivers a validated contact submission on behalf of the contact form
#[async_trait]
pub trait ContactGateway: Send + Sync + 'static {
    async fn deliver(&self, submission: NewContactSubmission) -> SubmissionResult<SubmissionAck>;
}
