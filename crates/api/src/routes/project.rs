//! Route definitions for the `/projects` resource.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::project;
use crate::state::AppState;

/// Routes mounted at `/projects`.
///
/// ```text
/// GET  /                -> list
/// POST /                -> create
/// GET  /my              -> list_mine
/// GET  /{id}            -> get_by_id
/// POST /{id}/bid        -> submit_bid
/// PUT  /{id}/progress   -> update_progress
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(project::list).post(project::create))
        .route("/my", get(project::list_mine))
        .route("/{id}", get(project::get_by_id))
        .route("/{id}/bid", post(project::submit_bid))
        .route("/{id}/progress", put(project::update_progress))
}
