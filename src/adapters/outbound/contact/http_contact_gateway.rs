use async_trait::async_trait;
use serde::Deserialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::{
    adapters::outbound::{api_url, http_client},
    domain::{
        errors::{SubmissionError, SubmissionResult},
        models::{ACK_MESSAGE, ACK_TITLE, NewContactSubmission, SubmissionAck},
    },
    ports::contact::ContactGateway,
};

/// ContactGateway that posts to `{base}/api/contact`
#[derive(Debug, Clone)]
pub struct HttpContactGateway {
    client: reqwest::Client,
    endpoint: String,
}

#[derive(Debug, Deserialize)]
struct ContactReply {
    message: Option<String>,
    id: Option<Uuid>,
}

impl HttpContactGateway {
    pub fn new(base_url: &str) -> Self {
        Self::with_client(http_client(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            endpoint: api_url(base_url, "contact"),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ContactGateway for HttpContactGateway {
    async fn deliver(&self, submission: NewContactSubmission) -> SubmissionResult<SubmissionAck> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&submission)
            .send()
            .await
            .map_err(|e| SubmissionError::Transport {
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            warn!(endpoint = %self.endpoint, status = status.as_u16(), "Contact endpoint refused submission");
            return Err(SubmissionError::Rejected {
                endpoint: self.endpoint.clone(),
                status: status.as_u16(),
                detail,
            });
        }

        // A success status is enough; the body only adds detail
        let reply = response.json::<ContactReply>().await.ok();
        let id = reply.as_ref().and_then(|r| r.id);
        info!(endpoint = %self.endpoint, ?id, "Contact submission delivered");

        Ok(SubmissionAck {
            id,
            title: ACK_TITLE.to_string(),
            message: reply
                .and_then(|r| r.message)
                .unwrap_or_else(|| ACK_MESSAGE.to_string()),
        })
    }
}
