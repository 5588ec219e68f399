use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use tracing::warn;

use crate::{
    adapters::inbound::http::{
        dto::{
            ContactRequestDto, ContactResponseDto, ErrorResponseDto, ListSubmissionsDto,
            WelcomeDto,
        },
        router::AppState,
    },
    domain::models::{ContactDraft, ContactSubmission, PortfolioContent, Readiness},
    services::MAX_LISTED_SUBMISSIONS,
};

type ApiError = (StatusCode, Json<ErrorResponseDto>);

/// Handle the API root
pub async fn welcome() -> Json<WelcomeDto> {
    Json(WelcomeDto::default())
}

/// Handle content retrieval; gated on readiness like the page
pub async fn get_portfolio(
    State(app_state): State<AppState>,
) -> Result<Json<PortfolioContent>, ApiError> {
    match app_state.portfolio_service.readiness() {
        Readiness::Ready(content) => Ok(Json(PortfolioContent::clone(&content))),
        Readiness::Loading => Err((
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ErrorResponseDto::loading()),
        )),
        Readiness::Failed(e) => Err((
            StatusCode::BAD_GATEWAY,
            Json(ErrorResponseDto::from_content_error(&e)),
        )),
    }
}

/// Handle a contact submission posted as JSON
pub async fn create_contact_submission(
    State(app_state): State<AppState>,
    Json(request): Json<ContactRequestDto>,
) -> Result<Json<ContactResponseDto>, ApiError> {
    let submission = ContactDraft::from(request).validate().map_err(|e| {
        warn!(error = %e, "Rejected contact submission");
        (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ErrorResponseDto::from_validation_error(&e)),
        )
    })?;

    let stored = app_state
        .contact_service
        .submit(submission)
        .await
        .map_err(|e| {
            (
                StatusCode::from(&e),
                Json(ErrorResponseDto::from_submission_error(&e)),
            )
        })?;

    Ok(Json(ContactResponseDto::from(&stored)))
}

/// Handle listing stored submissions, newest first
pub async fn list_contact_submissions(
    State(app_state): State<AppState>,
    Query(query): Query<ListSubmissionsDto>,
) -> Result<Json<Vec<ContactSubmission>>, ApiError> {
    let limit = query.limit.unwrap_or(MAX_LISTED_SUBMISSIONS);

    let submissions = app_state
        .contact_service
        .list_submissions(limit)
        .await
        .map_err(|e| {
            (
                StatusCode::from(&e),
                Json(ErrorResponseDto::from_submission_error(&e)),
            )
        })?;

    Ok(Json(submissions))
}
