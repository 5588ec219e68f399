use httpmock::prelude::*;
use std::{sync::Arc, time::Duration};
use tokio::time::timeout;
use uuid::Uuid;
use wellness_portfolio::{
    AppBuilder, ContentSource,
    adapters::outbound::{
        contact::HttpContactGateway,
        content::{BUNDLED_CONTENT, RemoteContentProvider},
    },
    domain::{
        errors::{ContentError, SubmissionError},
        models::ContactDraft,
    },
    ports::{contact::ContactGateway, content::ContentProvider, services::PortfolioService},
    services::PortfolioServiceImpl,
};

fn bundled_json() -> serde_json::Value {
    serde_json::from_slice(BUNDLED_CONTENT).unwrap()
}

#[tokio::test]
async fn remote_provider_fetches_portfolio() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/api/portfolio");
            then.status(200).json_body(bundled_json());
        })
        .await;

    let provider = RemoteContentProvider::new(&server.base_url());
    let content = provider.fetch().await.unwrap();

    mock.assert_async().await;
    assert_eq!(content.hero.name, "Gunjan Jagtiani");
    assert_eq!(content.services.len(), 4);
}

#[tokio::test]
async fn remote_provider_reports_status() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/portfolio");
            then.status(500);
        })
        .await;

    let err = RemoteContentProvider::new(&server.base_url())
        .fetch()
        .await
        .unwrap_err();

    assert!(matches!(err, ContentError::UnexpectedStatus { status: 500, .. }));
}

#[tokio::test]
async fn remote_provider_rejects_bad_shape() {
    let mut payload = bundled_json();
    payload["testimonials"][0]["rating"] = serde_json::json!(9);

    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/portfolio");
            then.status(200).json_body(payload);
        })
        .await;

    let err = RemoteContentProvider::new(&server.base_url())
        .fetch()
        .await
        .unwrap_err();

    assert!(err.is_data_shape());
}

#[tokio::test]
async fn failed_remote_load_is_terminal() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/api/portfolio");
            then.status(503);
        })
        .await;

    let service = PortfolioServiceImpl::new(Arc::new(RemoteContentProvider::new(
        &server.base_url(),
    )));

    let first = service.load().await;
    let second = service.load().await;

    assert_eq!(first.label(), "error");
    assert_eq!(second.label(), "error");
    // No automatic retry
    mock.assert_hits_async(1).await;
}

#[tokio::test]
async fn remote_app_fetches_content_once_built() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/api/portfolio");
            then.status(200).json_body(bundled_json());
        })
        .await;

    let app = AppBuilder::new()
        .with_content_source(ContentSource::Remote {
            base_url: server.base_url(),
        })
        .build()
        .await
        .unwrap();

    let settled = timeout(Duration::from_secs(5), app.portfolio_service.wait_settled())
        .await
        .expect("remote content should settle without an explicit load");

    assert!(settled.is_ready());
    mock.assert_hits_async(1).await;
}

#[tokio::test]
async fn load_abandoned_mid_request_still_completes() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/api/portfolio");
            then.status(200)
                .delay(Duration::from_millis(300))
                .json_body(bundled_json());
        })
        .await;

    let service = PortfolioServiceImpl::new(Arc::new(RemoteContentProvider::new(
        &server.base_url(),
    )));

    assert!(timeout(Duration::from_millis(50), service.load()).await.is_err());

    let settled = timeout(Duration::from_secs(5), service.load())
        .await
        .expect("second load should settle");

    assert!(settled.is_ready());
    mock.assert_hits_async(1).await;
}

#[tokio::test]
async fn http_gateway_posts_submission() {
    let id = Uuid::new_v4();
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/contact")
                .json_body_partial(r#"{"service": "postnatal-yoga", "email": "anna@example.com"}"#);
            then.status(200).json_body(serde_json::json!({
                "success": true,
                "message": "Thank you for reaching out! I'll get back to you within 24 hours.",
                "id": id,
            }));
        })
        .await;

    let submission = ContactDraft::builder()
        .name("Anna")
        .email("anna@example.com")
        .service("postnatal-yoga")
        .message("Six weeks after birth")
        .build()
        .validate()
        .unwrap();

    let ack = HttpContactGateway::new(&server.base_url())
        .deliver(submission)
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(ack.id, Some(id));
    assert_eq!(ack.title, "Message Sent Successfully!");
}

#[tokio::test]
async fn http_gateway_reports_rejection() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/contact");
            then.status(422).body("invalid email");
        })
        .await;

    let submission = ContactDraft::builder()
        .name("Anna")
        .email("anna@example.com")
        .service("postnatal-yoga")
        .message("Hello")
        .build()
        .validate()
        .unwrap();

    let err = HttpContactGateway::new(&server.base_url())
        .deliver(submission)
        .await
        .unwrap_err();

    match err {
        SubmissionError::Rejected { status, detail, .. } => {
            assert_eq!(status, 422);
            assert_eq!(detail, "invalid email");
        }
        other => panic!("Expected a rejection, got {:?}", other),
    }
}
