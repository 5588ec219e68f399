use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use super::handlers::{
    // API handlers
    create_contact_submission,
    get_portfolio,
    // Page handlers
    index,
    list_contact_submissions,
    submit_contact_form,
    welcome,
};
use crate::ports::{
    contact::ContactGateway,
    services::{ContactService, PortfolioService},
};

/// Application state containing all services
#[derive(Clone)]
pub struct AppState {
    pub portfolio_service: Arc<dyn PortfolioService>,
    pub contact_service: Arc<dyn ContactService>,
    pub contact_gateway: Arc<dyn ContactGateway>,
}

/// Create the main application router with all endpoints
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(create_page_router())
        .merge(create_api_router())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        // Add state for dependency injection
        .with_state(state)
}

/// Create a router with just the rendered page
pub fn create_page_router() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/contact", post(submit_contact_form))
}

/// Create a router with just the JSON API
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .route("/api", get(welcome))
        .route("/api/", get(welcome))
        .route("/api/portfolio", get(get_portfolio))
        .route("/api/contact", post(create_contact_submission))
        .route("/api/contact-submissions", get(list_contact_submissions))
}
