pub mod contractor;
pub mod health;
pub mod notification;
pub mod project;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /projects                   list (?status, ?type), create (customer)
/// /projects/my                caller's projects
/// /projects/{id}              project detail with bids
/// /projects/{id}/bid          submit bid (contractor)
/// /projects/{id}/progress     sparse progress update (contractor)
///
/// /notifications              caller's 20 most recent
/// /notifications/{id}/read    mark read
///
/// /contractors                directory (?specialization)
/// /contractors/{id}           contractor profile
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/projects", project::router())
        .nest("/notifications", notification::router())
        .nest("/contractors", contractor::router())
}
