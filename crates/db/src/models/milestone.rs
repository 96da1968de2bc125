//! Project milestone model and view.

use buildease_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `project_milestones` table.
#[derive(Debug, Clone, FromRow)]
pub struct Milestone {
    pub id: DbId,
    pub project_id: DbId,
    pub position: i32,
    pub name: String,
    pub status: String,
    pub milestone_date: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Wire representation of a milestone entry.
#[derive(Debug, Clone, Serialize)]
pub struct MilestoneView {
    pub name: String,
    pub status: String,
    pub date: Option<Timestamp>,
}

impl From<Milestone> for MilestoneView {
    fn from(row: Milestone) -> Self {
        MilestoneView {
            name: row.name,
            status: row.status,
            date: row.milestone_date,
        }
    }
}
