//! Project entity model, DTOs, and response views.

use buildease_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::bid::BidView;
use crate::models::milestone::MilestoneView;
use crate::models::project_update::ProjectUpdateView;
use crate::models::user::{ContractorRef, CustomerRef};

/// A row from the `projects` table.
#[derive(Debug, Clone, FromRow)]
pub struct Project {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub budget: String,
    pub location: String,
    pub project_type: String,
    pub skills: Vec<String>,
    pub status: String,
    pub progress: i32,
    pub customer_id: Option<DbId>,
    pub contractor_id: Option<DbId>,
    pub total_budget: f64,
    pub budget_spent: f64,
    pub next_milestone: String,
    pub gallery: Vec<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A project row joined with its customer and contractor profile fields.
///
/// Produced by the listing queries; collapsed into [`ProjectView`] before
/// serialization.
#[derive(Debug, Clone, FromRow)]
pub struct ProjectWithParties {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub budget: String,
    pub location: String,
    pub project_type: String,
    pub skills: Vec<String>,
    pub status: String,
    pub progress: i32,
    pub customer_id: Option<DbId>,
    pub contractor_id: Option<DbId>,
    pub total_budget: f64,
    pub budget_spent: f64,
    pub next_milestone: String,
    pub gallery: Vec<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub customer_name: Option<String>,
    pub customer_email: Option<String>,
    pub customer_location: Option<String>,
    pub contractor_name: Option<String>,
    pub contractor_company_name: Option<String>,
}

/// DTO for creating a new project.
///
/// Only the fields the storage schema marks NOT NULL without a default are
/// required here; everything else falls back to schema defaults.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProject {
    pub title: String,
    pub description: Option<String>,
    pub budget: String,
    pub location: String,
    #[serde(rename = "type")]
    pub project_type: Option<String>,
    pub skills: Option<Vec<String>>,
    pub total_budget: Option<f64>,
}

/// Sparse patch for the progress endpoint. Absent fields are left untouched;
/// `update`, when present, appends one entry to the project's update log.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressPatch {
    pub progress: Option<i32>,
    pub next_milestone: Option<String>,
    pub budget_spent: Option<f64>,
    pub update: Option<String>,
}

/// Wire representation of a project in list responses: scalar fields plus
/// resolved customer/contractor references.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectView {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub budget: String,
    pub location: String,
    #[serde(rename = "type")]
    pub project_type: String,
    pub skills: Vec<String>,
    pub status: String,
    pub progress: i32,
    pub customer: Option<CustomerRef>,
    pub contractor: Option<ContractorRef>,
    pub total_budget: f64,
    pub budget_spent: f64,
    pub next_milestone: String,
    pub gallery: Vec<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<ProjectWithParties> for ProjectView {
    fn from(row: ProjectWithParties) -> Self {
        let customer = match (row.customer_id, row.customer_name) {
            (Some(id), Some(name)) => Some(CustomerRef {
                id,
                name,
                email: row.customer_email.unwrap_or_default(),
                location: row.customer_location.unwrap_or_default(),
            }),
            _ => None,
        };
        let contractor = match (row.contractor_id, row.contractor_name) {
            (Some(id), Some(name)) => Some(ContractorRef {
                id,
                name,
                company_name: row.contractor_company_name.unwrap_or_default(),
            }),
            _ => None,
        };
        ProjectView {
            id: row.id,
            title: row.title,
            description: row.description,
            budget: row.budget,
            location: row.location,
            project_type: row.project_type,
            skills: row.skills,
            status: row.status,
            progress: row.progress,
            customer,
            contractor,
            total_budget: row.total_budget,
            budget_spent: row.budget_spent,
            next_milestone: row.next_milestone,
            gallery: row.gallery,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Wire representation of a single project: the list view plus its
/// milestone sequence, update log, and bids with resolved contractors.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectDetail {
    #[serde(flatten)]
    pub project: ProjectView,
    pub milestones: Vec<MilestoneView>,
    pub updates: Vec<ProjectUpdateView>,
    pub bids: Vec<BidView>,
}
