//! Handlers for the contact page.

use atelier_core::contact::{ContactForm, SubmitControl};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::Form;

use crate::error::AppResult;
use crate::render::pages::contact_page;
use crate::state::AppState;

/// GET /contact
pub async fn form() -> Html<String> {
    Html(contact_page(&ContactForm::default(), &SubmitControl::new()))
}

/// POST /contact
///
/// Validates presence of the required fields, then makes a single
/// submission attempt. Returns the success page, or the form with an alert
/// and the entered values intact.
pub async fn submit(
    State(state): State<AppState>,
    Form(input): Form<ContactForm>,
) -> AppResult<Response> {
    let mut control = SubmitControl::new();

    let submission = match input.clone().into_submission(chrono::Utc::now()) {
        Ok(submission) => submission,
        Err(e) => {
            tracing::debug!(error = %e, "Contact form rejected");
            control.reject();
            return Ok((
                StatusCode::UNPROCESSABLE_ENTITY,
                Html(contact_page(&input, &control)),
            )
                .into_response());
        }
    };

    control.begin()?;
    let outcome = state.submitter.submit(&submission).await;
    let status = match &outcome {
        Ok(()) => StatusCode::OK,
        Err(e) => {
            tracing::error!(error = %e, "Contact submission failed");
            StatusCode::BAD_GATEWAY
        }
    };
    control.finish(outcome)?;

    Ok((status, Html(contact_page(&input, &control))).into_response())
}
