//! Project status and type vocabulary.
//!
//! These must match the CHECK constraints on `projects.status` and
//! `projects.project_type` in `20260301000002_create_projects_table.sql`.
//! Stored as TEXT; handlers validate incoming filter values against these
//! lists and reject anything else with a 400.

pub const STATUS_OPEN: &str = "open";
pub const STATUS_IN_PROGRESS: &str = "in-progress";
pub const STATUS_COMPLETED: &str = "completed";
pub const STATUS_CANCELLED: &str = "cancelled";

/// All accepted `status` values, in lifecycle order.
pub const PROJECT_STATUSES: &[&str] = &[
    STATUS_OPEN,
    STATUS_IN_PROGRESS,
    STATUS_COMPLETED,
    STATUS_CANCELLED,
];

pub const TYPE_NEW_CONSTRUCTION: &str = "New Construction";
pub const TYPE_RENOVATION: &str = "Renovation";
pub const TYPE_COMMERCIAL: &str = "Commercial";
pub const TYPE_INTERIORS: &str = "Interiors";

/// All accepted `type` values. The first entry is the default.
pub const PROJECT_TYPES: &[&str] = &[
    TYPE_NEW_CONSTRUCTION,
    TYPE_RENOVATION,
    TYPE_COMMERCIAL,
    TYPE_INTERIORS,
];

/// Whether `value` is an accepted project status.
pub fn is_valid_status(value: &str) -> bool {
    PROJECT_STATUSES.contains(&value)
}

/// Whether `value` is an accepted project type.
pub fn is_valid_type(value: &str) -> bool {
    PROJECT_TYPES.contains(&value)
}
