use axum::{
    Form,
    extract::State,
    http::StatusCode,
    response::Html,
};
use tracing::{debug, info, warn};

use crate::{
    adapters::inbound::{http::router::AppState, web::render_page},
    domain::{errors::FormError, models::ContactDraft},
    services::{ContactForm, FormStatus},
};

/// Handle the page itself, rendered for the current readiness
pub async fn index(State(app_state): State<AppState>) -> Html<String> {
    let readiness = app_state.portfolio_service.readiness();
    Html(render_page(&readiness, ContactForm::new().view()))
}

/// Handle the url-encoded contact form and re-render the page
///
/// Each request drives its own `ContactForm`; the response shows the state the
/// form settled in.
pub async fn submit_contact_form(
    State(app_state): State<AppState>,
    Form(draft): Form<ContactDraft>,
) -> (StatusCode, Html<String>) {
    let mut form = ContactForm::with_draft(draft);

    let status = match form.submit(app_state.contact_gateway.as_ref()).await {
        Ok(FormStatus::Succeeded(ack)) => {
            info!(id = ?ack.id, "Contact form delivered");
            StatusCode::OK
        }
        Ok(FormStatus::Failed(e)) => {
            warn!(error = %e, "Contact form delivery failed");
            StatusCode::from(e)
        }
        Ok(_) => StatusCode::OK,
        Err(FormError::Invalid(e)) => {
            debug!(error = %e, "Contact form refused");
            StatusCode::UNPROCESSABLE_ENTITY
        }
        Err(FormError::AlreadySubmitting) => StatusCode::CONFLICT,
    };

    let readiness = app_state.portfolio_service.readiness();
    (status, Html(render_page(&readiness, form.view())))
}
