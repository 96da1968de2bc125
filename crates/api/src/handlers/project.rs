//! Handlers for the `/projects` resource: listing, creation, bidding, and
//! progress updates.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use buildease_core::error::CoreError;
use buildease_core::notifications::{KIND_BID, KIND_MILESTONE};
use buildease_core::project::{is_valid_status, is_valid_type};
use buildease_core::roles::ROLE_CUSTOMER;
use buildease_core::types::DbId;
use buildease_db::models::bid::CreateBid;
use buildease_db::models::project::{CreateProject, ProgressPatch, ProjectDetail, ProjectView};
use buildease_db::repositories::{BidRepo, ProjectRepo, UserRepo};
use serde::Deserialize;
use sqlx::PgPool;

use crate::error::{AppError, AppResult};
use crate::extract::JsonBody;
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::{RequireAuth, RequireContractor, RequireCustomer};
use crate::notify;
use crate::state::AppState;

/// Query parameters for `GET /projects`.
#[derive(Debug, Deserialize)]
pub struct ProjectQuery {
    /// Equality filter on project status.
    pub status: Option<String>,
    /// Equality filter on project type.
    #[serde(rename = "type")]
    pub project_type: Option<String>,
}

/// GET /api/projects
///
/// List projects matching the optional status/type filters, newest first.
/// Contractors browse this with `?status=open`.
pub async fn list(
    RequireAuth(_user): RequireAuth,
    State(state): State<AppState>,
    Query(params): Query<ProjectQuery>,
) -> AppResult<Json<Vec<ProjectView>>> {
    if let Some(status) = params.status.as_deref() {
        if !is_valid_status(status) {
            return Err(AppError::BadRequest(format!(
                "Unsupported status filter: {status}"
            )));
        }
    }
    if let Some(project_type) = params.project_type.as_deref() {
        if !is_valid_type(project_type) {
            return Err(AppError::BadRequest(format!(
                "Unsupported type filter: {project_type}"
            )));
        }
    }

    let rows = ProjectRepo::list(
        &state.pool,
        params.status.as_deref(),
        params.project_type.as_deref(),
    )
    .await?;
    Ok(Json(rows.into_iter().map(ProjectView::from).collect()))
}

/// GET /api/projects/my
///
/// Customers see the projects they created; contractors see the projects
/// they are engaged on. Bidding alone does not put a project in this list.
pub async fn list_mine(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<ProjectView>>> {
    let rows = if auth.role == ROLE_CUSTOMER {
        ProjectRepo::list_for_customer(&state.pool, auth.user_id).await?
    } else {
        ProjectRepo::list_for_contractor(&state.pool, auth.user_id).await?
    };
    Ok(Json(rows.into_iter().map(ProjectView::from).collect()))
}

/// GET /api/projects/{id}
pub async fn get_by_id(
    RequireAuth(_user): RequireAuth,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ProjectDetail>> {
    let detail = load_detail(&state.pool, id).await?;
    Ok(Json(detail))
}

/// POST /api/projects
///
/// Customer-only. Creates the project and seeds its milestone sequence from
/// the configured plan.
pub async fn create(
    RequireCustomer(user): RequireCustomer,
    State(state): State<AppState>,
    JsonBody(input): JsonBody<CreateProject>,
) -> AppResult<(StatusCode, Json<ProjectDetail>)> {
    let project =
        ProjectRepo::create(&state.pool, user.user_id, &input, &state.milestone_plan).await?;
    let detail = load_detail(&state.pool, project.id).await?;
    Ok((StatusCode::CREATED, Json(detail)))
}

/// POST /api/projects/{id}/bid
///
/// Contractor-only. Appends a bid to the project, then notifies the
/// project's customer. The bid is persisted before the notification is
/// attempted; a notification failure never fails the bid. Submitting a bid
/// never assigns the contractor or changes the project status.
pub async fn submit_bid(
    RequireContractor(user): RequireContractor,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    JsonBody(input): JsonBody<CreateBid>,
) -> AppResult<Json<serde_json::Value>> {
    let project = ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;

    let bid = BidRepo::create(&state.pool, id, user.user_id, &input).await?;

    if let Some(customer_id) = project.customer_id {
        match UserRepo::find_by_id(&state.pool, user.user_id).await {
            Ok(Some(contractor)) => {
                let text = format!(
                    "{} placed a bid of {} on your project \"{}\".",
                    contractor.display_name(),
                    bid.amount,
                    project.title,
                );
                notify::emit(&state.pool, customer_id, KIND_BID, &text).await;
            }
            Ok(None) => {
                tracing::warn!(
                    contractor_id = user.user_id,
                    "bidding contractor has no profile row, skipping notification"
                );
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to load contractor for bid notification");
            }
        }
    }

    Ok(Json(serde_json::json!({ "message": "Bid submitted successfully" })))
}

/// PUT /api/projects/{id}/progress
///
/// Contractor-only sparse update. Absent fields are untouched; a present
/// `update` appends exactly one entry to the project's update log. The
/// milestone notification embeds the `progress` value from this call's
/// input, whether or not one was supplied.
pub async fn update_progress(
    RequireContractor(_user): RequireContractor,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    JsonBody(patch): JsonBody<ProgressPatch>,
) -> AppResult<Json<ProjectDetail>> {
    let project = ProjectRepo::apply_progress_patch(&state.pool, id, &patch)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;

    if let Some(text) = patch.update.as_deref() {
        ProjectRepo::append_update(&state.pool, id, text).await?;
    }

    if let Some(customer_id) = project.customer_id {
        let pct = patch
            .progress
            .map(|p| p.to_string())
            .unwrap_or_else(|| "unknown".to_string());
        let text = format!(
            "Project \"{}\" progress updated to {pct}%.",
            project.title
        );
        notify::emit(&state.pool, customer_id, KIND_MILESTONE, &text).await;
    }

    let detail = load_detail(&state.pool, id).await?;
    Ok(Json(detail))
}

/// Assemble the full detail view: project with resolved parties, milestone
/// sequence, update log, and bids with resolved contractors.
async fn load_detail(pool: &PgPool, id: DbId) -> AppResult<ProjectDetail> {
    let row = ProjectRepo::find_with_parties(pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;

    let milestones = ProjectRepo::milestones(pool, id).await?;
    let updates = ProjectRepo::updates(pool, id).await?;
    let bids = BidRepo::list_for_project(pool, id).await?;

    Ok(ProjectDetail {
        project: row.into(),
        milestones: milestones.into_iter().map(Into::into).collect(),
        updates: updates.into_iter().map(Into::into).collect(),
        bids: bids.into_iter().map(Into::into).collect(),
    })
}
