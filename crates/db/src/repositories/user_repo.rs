//! Repository for the `users` table.

use buildease_core::roles::ROLE_CONTRACTOR;
use buildease_core::types::DbId;
use sqlx::PgPool;

use crate::models::user::{CreateUser, User};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, email, role, location, company_name, specialization, \
                       company_website, years_of_experience, rating, completed_projects, \
                       created_at, updated_at";

/// Provides read access to user profiles, plus inserts for the directory
/// seeding and test fixtures.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new user profile row, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateUser) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (name, email, role, location, company_name, specialization,
                                company_website, years_of_experience, rating, completed_projects)
             VALUES ($1, $2, $3, COALESCE($4, ''), COALESCE($5, ''), COALESCE($6, ''),
                     COALESCE($7, ''), COALESCE($8, 0), COALESCE($9, 0), COALESCE($10, 0))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.role)
            .bind(&input.location)
            .bind(&input.company_name)
            .bind(&input.specialization)
            .bind(&input.company_website)
            .bind(input.years_of_experience)
            .bind(input.rating)
            .bind(input.completed_projects)
            .fetch_one(pool)
            .await
    }

    /// Find a user by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List contractor profiles ordered by rating, best first.
    ///
    /// When `specialization` is `Some`, only contractors with that exact
    /// specialization are returned.
    pub async fn list_contractors(
        pool: &PgPool,
        specialization: Option<&str>,
    ) -> Result<Vec<User>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM users
             WHERE role = $1 AND ($2::TEXT IS NULL OR specialization = $2)
             ORDER BY rating DESC, id"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(ROLE_CONTRACTOR)
            .bind(specialization)
            .fetch_all(pool)
            .await
    }
}
