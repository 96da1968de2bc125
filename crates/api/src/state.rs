use std::sync::Arc;

use buildease_core::milestones::MilestonePlan;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: buildease_db::DbPool,
    /// Server configuration (accessed by the auth extractors).
    pub config: Arc<ServerConfig>,
    /// Milestone sequence seeded into every new project.
    pub milestone_plan: Arc<MilestonePlan>,
}
