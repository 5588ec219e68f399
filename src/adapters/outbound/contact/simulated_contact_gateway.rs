use async_trait::async_trait;
use std::time::Duration;
use tracing::info;

use crate::{
    domain::{
        errors::SubmissionResult,
        models::{NewContactSubmission, SubmissionAck},
    },
    ports::contact::ContactGateway,
};

/// Delay the simulated delivery waits before acknowledging
pub const DEFAULT_SUBMIT_DELAY: Duration = Duration::from_millis(1500);

/// ContactGateway that only waits a fixed delay and acknowledges
///
/// Nothing is sent anywhere; the submission is dropped after logging.
#[derive(Debug, Clone)]
pub struct SimulatedContactGateway {
    delay: Duration,
}

impl SimulatedContactGateway {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for SimulatedContactGateway {
    fn default() -> Self {
        Self::new(DEFAULT_SUBMIT_DELAY)
    }
}

#[async_trait]
impl ContactGateway for SimulatedContactGateway {
    async fn deliver(&self, submission: NewContactSubmission) -> SubmissionResult<SubmissionAck> {
        tokio::time::sleep(self.delay).await;
        info!(service = %submission.service, "Simulated contact submission acknowledged");
        Ok(SubmissionAck::delivered(None))
    }
}
