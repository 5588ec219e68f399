use async_trait::async_trait;
use tracing::debug;

use crate::{
    adapters::outbound::{api_url, http_client},
    domain::{
        errors::{ContentError, ContentResult},
        models::PortfolioContent,
    },
    ports::content::ContentProvider,
};

/// ContentProvider that retrieves `GET {base}/api/portfolio`
#[derive(Debug, Clone)]
pub struct RemoteContentProvider {
    client: reqwest::Client,
    endpoint: String,
}

impl RemoteContentProvider {
    pub fn new(base_url: &str) -> Self {
        Self::with_client(http_client(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            endpoint: api_url(base_url, "portfolio"),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ContentProvider for RemoteContentProvider {
    async fn fetch(&self) -> ContentResult<PortfolioContent> {
        debug!(endpoint = %self.endpoint, "Requesting portfolio content");

        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|e| ContentError::retrieval(self.endpoint.as_str(), e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ContentError::UnexpectedStatus {
                endpoint: self.endpoint.clone(),
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| ContentError::retrieval(self.endpoint.as_str(), e))?;

        Ok(PortfolioContent::from_json(&body)?)
    }

    fn describe(&self) -> String {
        format!("remote {}", self.endpoint)
    }
}
