//! Contact form endpoint

use axum::{extract::State, http::StatusCode};
use tracing::error;

use crate::api::state::AppState;
use crate::api::types::{ApiError, ContactAck, Json};
use crate::domain::message::ContactSubmission;
use crate::domain::DomainError;

const SUBMIT_FAILED_MESSAGE: &str = "An error occurred while processing your message";

/// POST /api/contact
pub async fn submit_contact(
    State(state): State<AppState>,
    Json(submission): Json<ContactSubmission>,
) -> Result<(StatusCode, Json<ContactAck>), ApiError> {
    match state.contact_service.submit(&submission).await {
        Ok(_) => Ok((StatusCode::CREATED, Json(ContactAck::received()))),
        Err(DomainError::Validation { message }) => Err(ApiError::bad_request(message)),
        Err(e) => {
            error!(error = %e, "Error submitting contact form");
            Err(ApiError::internal(SUBMIT_FAILED_MESSAGE))
        }
    }
}
