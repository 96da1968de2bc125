//! Handlers for the `/notifications` resource.
//!
//! All endpoints require authentication via [`AuthUser`] and operate only on
//! the caller's own notifications.

use axum::extract::{Path, State};
use axum::Json;
use buildease_core::error::CoreError;
use buildease_core::types::DbId;
use buildease_db::models::notification::Notification;
use buildease_db::repositories::NotificationRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// GET /api/notifications
///
/// The caller's most recent notifications, newest first, capped at 20.
pub async fn list(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Notification>>> {
    let notifications = NotificationRepo::list_for_user(&state.pool, auth.user_id).await?;
    Ok(Json(notifications))
}

/// PUT /api/notifications/{id}/read
///
/// Mark one of the caller's notifications as read and return it. A
/// notification owned by someone else is reported as not found. Re-marking
/// an already-read notification succeeds and changes nothing.
pub async fn mark_read(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Notification>> {
    let notification = NotificationRepo::mark_read(&state.pool, id, auth.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Notification",
            id,
        }))?;
    Ok(Json(notification))
}
