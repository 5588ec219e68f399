use async_trait::async_trait;
use std::sync::Arc;

use crate::{
    domain::{
        errors::SubmissionResult,
        models::{NewContactSubmission, SubmissionAck},
    },
    ports::{contact::ContactGateway, services::ContactService},
};

/// ContactGateway that stores through the in-process ContactService
#[derive(Clone)]
pub struct ServiceContactGateway {
    service: Arc<dyn ContactService>,
}

impl ServiceContactGateway {
    pub fn new(service: Arc<dyn ContactService>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl ContactGateway for ServiceContactGateway {
    async fn deliver(&self, submission: NewContactSubmission) -> SubmissionResult<SubmissionAck> {
        let stored = self.service.submit(submission).await?;
        Ok(SubmissionAck::delivered(Some(stored.id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        adapters::outbound::persistence::InMemoryContactRepository,
        domain::models::ContactDraft,
        ports::repositories::ContactRepository,
        services::ContactServiceImpl,
    };

    #[tokio::test]
    async fn test_delivery_is_stored() {
        let repository = InMemoryContactRepository::new();
        let service = Arc::new(ContactServiceImpl::new(Arc::new(repository.clone())));
        let gateway = ServiceContactGateway::new(service);

        let submission = ContactDraft::builder()
            .name("Lisa Thompson")
            .email("lisa@example.com")
            .service("sound-healing")
            .message("Group session for six?")
            .build()
            .validate()
            .unwrap();

        let ack = gateway.deliver(submission).await.unwrap();
        let stored = repository.list_recent(1).await.unwrap();

        assert_eq!(ack.id, Some(stored[0].id));
    }
}
