//! Append-only project update log model and view.

use buildease_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `project_updates` table.
#[derive(Debug, Clone, FromRow)]
pub struct ProjectUpdate {
    pub id: DbId,
    pub project_id: DbId,
    pub text: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Wire representation of one update log entry.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectUpdateView {
    pub text: String,
    pub date: Timestamp,
}

impl From<ProjectUpdate> for ProjectUpdateView {
    fn from(row: ProjectUpdate) -> Self {
        ProjectUpdateView {
            text: row.text,
            date: row.created_at,
        }
    }
}
