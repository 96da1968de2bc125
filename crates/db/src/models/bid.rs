//! Bid entity model, DTO, and view.

use buildease_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::user::BidContractorRef;

/// A row from the `bids` table.
#[derive(Debug, Clone, FromRow)]
pub struct Bid {
    pub id: DbId,
    pub project_id: DbId,
    pub contractor_id: DbId,
    pub amount: String,
    pub timeline: String,
    pub message: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for submitting a bid. All fields optional; the schema defaults
/// absent values to empty strings.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateBid {
    pub amount: Option<String>,
    pub timeline: Option<String>,
    pub message: Option<String>,
}

/// A bid row joined with the bidding contractor's profile fields.
#[derive(Debug, Clone, FromRow)]
pub struct BidWithContractor {
    pub id: DbId,
    pub project_id: DbId,
    pub contractor_id: DbId,
    pub amount: String,
    pub timeline: String,
    pub message: String,
    pub created_at: Timestamp,
    pub contractor_name: String,
    pub contractor_company_name: String,
    pub contractor_rating: f64,
    pub contractor_completed_projects: i32,
}

/// Wire representation of a bid entry in project detail responses.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BidView {
    pub id: DbId,
    pub contractor: BidContractorRef,
    pub amount: String,
    pub timeline: String,
    pub message: String,
    pub created_at: Timestamp,
}

impl From<BidWithContractor> for BidView {
    fn from(row: BidWithContractor) -> Self {
        BidView {
            id: row.id,
            contractor: BidContractorRef {
                id: row.contractor_id,
                name: row.contractor_name,
                company_name: row.contractor_company_name,
                rating: row.contractor_rating,
                completed_projects: row.contractor_completed_projects,
            },
            amount: row.amount,
            timeline: row.timeline,
            message: row.message,
            created_at: row.created_at,
        }
    }
}
