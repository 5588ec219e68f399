use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::json;
use std::time::Duration;
use wellness_portfolio::{
    adapters::inbound::http::{
        dto::{ContactResponseDto, WelcomeDto},
        router::create_router,
    },
    app::{AppBuilder, ContactBackend, ContentSource},
    domain::models::{ContactSubmission, PortfolioContent},
};

async fn test_server(contact_backend: ContactBackend) -> TestServer {
    let app = AppBuilder::new()
        .with_content_source(ContentSource::Static)
        .with_contact_backend(contact_backend)
        .build()
        .await
        .unwrap();
    TestServer::new(create_router(app.state())).unwrap()
}

fn contact_body(name: &str, email: &str) -> serde_json::Value {
    json!({
        "name": name,
        "email": email,
        "service": "prenatal-yoga",
        "message": "Looking for weekly sessions"
    })
}

#[tokio::test]
async fn api_root_answers_welcome() {
    let server = test_server(ContactBackend::Local).await;

    let welcome: WelcomeDto = server.get("/api/").await.json();
    assert_eq!(welcome.message, "Gunjan Jagtiani Wellness Portfolio API");
}

#[tokio::test]
async fn portfolio_endpoint_serves_ready_content() {
    let server = test_server(ContactBackend::Local).await;

    let response = server.get("/api/portfolio").await;
    response.assert_status_ok();

    let content: PortfolioContent = response.json();
    assert_eq!(content.hero.name, "Gunjan Jagtiani");
    assert_eq!(content.testimonials.len(), 4);

    let raw: serde_json::Value = server.get("/api/portfolio").await.json();
    assert!(raw["about"]["currentFocus"].is_string());
    assert_eq!(raw["services"][0]["color"], "emerald");
}

#[tokio::test]
async fn contact_submission_is_stored_and_listed_newest_first() {
    let server = test_server(ContactBackend::Local).await;

    let first: ContactResponseDto = server
        .post("/api/contact")
        .json(&contact_body("Sarah Martinez", "sarah@example.com"))
        .await
        .json();
    assert!(first.success);
    assert_eq!(
        first.message,
        "Thank you for reaching out! I'll get back to you within 24 hours."
    );

    let second: ContactResponseDto = server
        .post("/api/contact")
        .json(&contact_body("Lisa Thompson", "lisa@example.com"))
        .await
        .json();

    let listed: Vec<ContactSubmission> = server.get("/api/contact-submissions").await.json();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].id, second.id);
    assert_eq!(listed[1].id, first.id);
    assert_eq!(listed[1].name, "Sarah Martinez");

    let limited: Vec<ContactSubmission> = server
        .get("/api/contact-submissions")
        .add_query_param("limit", 1)
        .await
        .json();
    assert_eq!(limited.len(), 1);
}

#[tokio::test]
async fn invalid_contact_submission_is_unprocessable() {
    let server = test_server(ContactBackend::Local).await;

    server
        .post("/api/contact")
        .json(&contact_body("Sarah Martinez", "not-an-email"))
        .await
        .assert_status(StatusCode::UNPROCESSABLE_ENTITY);

    let mut unknown_service = contact_body("Sarah Martinez", "sarah@example.com");
    unknown_service["service"] = json!("reiki");
    server
        .post("/api/contact")
        .json(&unknown_service)
        .await
        .assert_status(StatusCode::UNPROCESSABLE_ENTITY);

    let listed: Vec<ContactSubmission> = server.get("/api/contact-submissions").await.json();
    assert!(listed.is_empty());
}

#[tokio::test]
async fn index_renders_the_page() {
    let server = test_server(ContactBackend::Local).await;

    let response = server.get("/").await;
    response.assert_status_ok();

    let html = response.text();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("Sarah Martinez"));
    assert!(html.contains("action=\"/contact\""));
}

#[tokio::test]
async fn contact_form_post_shows_acknowledgment() {
    let server = test_server(ContactBackend::Simulated {
        delay: Duration::from_millis(10),
    })
    .await;

    let response = server
        .post("/contact")
        .form(&[
            ("name", "Michael Chen"),
            ("email", "michael@example.com"),
            ("service", "yoga-beginners"),
            ("message", "First class?"),
        ])
        .await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("Message Sent Successfully!"));
    assert!(!html.contains("First class?"));
}

#[tokio::test]
async fn contact_form_post_with_empty_name_is_refused() {
    let server = test_server(ContactBackend::Local).await;

    let response = server
        .post("/contact")
        .form(&[
            ("name", ""),
            ("email", "michael@example.com"),
            ("service", "yoga-beginners"),
            ("message", "First class?"),
        ])
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let html = response.text();
    assert!(html.contains("form-error"));
    assert!(html.contains("First class?"));

    let listed: Vec<ContactSubmission> = server.get("/api/contact-submissions").await.json();
    assert!(listed.is_empty());
}

#[tokio::test]
async fn local_contact_form_post_is_listed() {
    let server = test_server(ContactBackend::Local).await;

    server
        .post("/contact")
        .form(&[
            ("name", "Emma Wilson"),
            ("email", "emma@example.com"),
            ("service", "online-sessions"),
            ("message", "Evenings work best"),
        ])
        .await
        .assert_status_ok();

    let listed: Vec<ContactSubmission> = server.get("/api/contact-submissions").await.json();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].email.as_str(), "emma@example.com");
}
