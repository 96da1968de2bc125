//! User entity model, DTOs, and the reference views embedded in project
//! responses.

use buildease_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `users` table.
///
/// Provisioned by the external auth service; this backend only reads and
/// (for the contractor directory and test fixtures) inserts profile rows.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub role: String,
    pub location: String,
    pub company_name: String,
    pub specialization: String,
    pub company_website: String,
    pub years_of_experience: i32,
    pub rating: f64,
    pub completed_projects: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl User {
    /// Contractor display name: company name when present, personal name
    /// otherwise. Used when rendering bid notifications.
    pub fn display_name(&self) -> &str {
        if self.company_name.is_empty() {
            &self.name
        } else {
            &self.company_name
        }
    }
}

/// DTO for inserting a user profile row.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUser {
    pub name: String,
    pub email: String,
    pub role: String,
    pub location: Option<String>,
    pub company_name: Option<String>,
    pub specialization: Option<String>,
    pub company_website: Option<String>,
    pub years_of_experience: Option<i32>,
    pub rating: Option<f64>,
    pub completed_projects: Option<i32>,
}

/// Customer reference embedded in project responses.
#[derive(Debug, Clone, Serialize)]
pub struct CustomerRef {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub location: String,
}

/// Contractor reference embedded in project responses.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractorRef {
    pub id: DbId,
    pub name: String,
    pub company_name: String,
}

/// Contractor reference embedded in bid entries, with reputation fields.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BidContractorRef {
    pub id: DbId,
    pub name: String,
    pub company_name: String,
    pub rating: f64,
    pub completed_projects: i32,
}
