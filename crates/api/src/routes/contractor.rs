//! Route definitions for the `/contractors` directory.

use axum::routing::get;
use axum::Router;

use crate::handlers::contractor;
use crate::state::AppState;

/// Routes mounted at `/contractors`.
///
/// ```text
/// GET /       -> list
/// GET /{id}   -> get_by_id
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(contractor::list))
        .route("/{id}", get(contractor::get_by_id))
}
