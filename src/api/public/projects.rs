//! Project listing endpoint

use axum::extract::State;
use tracing::{debug, error};

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json, ProjectResponse};

const LIST_FAILED_TITLE: &str = "Failed to fetch projects";
const LIST_FAILED_MESSAGE: &str = "An error occurred while retrieving projects from the database";

/// GET /api/projects
pub async fn list_projects(
    State(state): State<AppState>,
) -> Result<Json<Vec<ProjectResponse>>, ApiError> {
    debug!("Listing projects");

    let projects = state.project_service.list().await.map_err(|e| {
        error!(error = %e, "Error fetching projects");
        ApiError::internal(LIST_FAILED_MESSAGE).with_title(LIST_FAILED_TITLE)
    })?;

    Ok(Json(projects.iter().map(ProjectResponse::from).collect()))
}
