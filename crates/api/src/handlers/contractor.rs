//! Handlers for the `/contractors` directory.

use axum::extract::{Path, Query, State};
use axum::Json;
use buildease_core::error::CoreError;
use buildease_core::roles::ROLE_CONTRACTOR;
use buildease_core::types::DbId;
use buildease_db::models::user::User;
use buildease_db::repositories::UserRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAuth;
use crate::state::AppState;

/// Query parameters for `GET /contractors`.
#[derive(Debug, Deserialize)]
pub struct ContractorQuery {
    /// Equality filter on specialization. The literal value `All` disables
    /// the filter.
    pub specialization: Option<String>,
}

/// GET /api/contractors
///
/// Contractor directory ordered by rating, best first.
pub async fn list(
    RequireAuth(_user): RequireAuth,
    State(state): State<AppState>,
    Query(params): Query<ContractorQuery>,
) -> AppResult<Json<Vec<User>>> {
    let specialization = params
        .specialization
        .as_deref()
        .filter(|value| *value != "All");
    let contractors = UserRepo::list_contractors(&state.pool, specialization).await?;
    Ok(Json(contractors))
}

/// GET /api/contractors/{id}
pub async fn get_by_id(
    RequireAuth(_user): RequireAuth,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<User>> {
    let contractor = UserRepo::find_by_id(&state.pool, id)
        .await?
        .filter(|user| user.role == ROLE_CONTRACTOR)
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Contractor",
            id,
        }))?;
    Ok(Json(contractor))
}
