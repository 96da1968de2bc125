//! Repository for the `bids` table.

use buildease_core::types::DbId;
use sqlx::PgPool;

use crate::models::bid::{Bid, BidWithContractor, CreateBid};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, project_id, contractor_id, amount, timeline, message, \
                       created_at, updated_at";

/// Provides append and read operations for bids. Bids are never updated or
/// deleted.
pub struct BidRepo;

impl BidRepo {
    /// Append a bid to a project. A single-row INSERT, so two contractors
    /// bidding concurrently on the same project both survive.
    pub async fn create(
        pool: &PgPool,
        project_id: DbId,
        contractor_id: DbId,
        input: &CreateBid,
    ) -> Result<Bid, sqlx::Error> {
        let query = format!(
            "INSERT INTO bids (project_id, contractor_id, amount, timeline, message)
             VALUES ($1, $2, COALESCE($3, ''), COALESCE($4, ''), COALESCE($5, ''))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Bid>(&query)
            .bind(project_id)
            .bind(contractor_id)
            .bind(&input.amount)
            .bind(&input.timeline)
            .bind(&input.message)
            .fetch_one(pool)
            .await
    }

    /// All bids on a project in submission order, each joined with the
    /// bidding contractor's profile fields.
    pub async fn list_for_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<BidWithContractor>, sqlx::Error> {
        sqlx::query_as::<_, BidWithContractor>(
            "SELECT b.id, b.project_id, b.contractor_id, b.amount, b.timeline, b.message,
                    b.created_at,
                    u.name AS contractor_name,
                    u.company_name AS contractor_company_name,
                    u.rating AS contractor_rating,
                    u.completed_projects AS contractor_completed_projects
             FROM bids b
             JOIN users u ON u.id = b.contractor_id
             WHERE b.project_id = $1
             ORDER BY b.created_at, b.id",
        )
        .bind(project_id)
        .fetch_all(pool)
        .await
    }
}
