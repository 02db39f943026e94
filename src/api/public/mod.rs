//! Public portfolio endpoints, mounted under `/api`

pub mod contact;
pub mod projects;

use axum::{
    routing::{get, post},
    Router,
};

use super::state::AppState;

/// Create the public API router
pub fn create_public_router() -> Router<AppState> {
    Router::new()
        .route("/projects", get(projects::list_projects))
        .route("/contact", post(contact::submit_contact))
}
