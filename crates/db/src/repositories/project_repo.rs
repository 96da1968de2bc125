//! Repository for the `projects` table and its milestone/update children.

use buildease_core::milestones::MilestonePlan;
use buildease_core::types::DbId;
use sqlx::PgPool;

use crate::models::milestone::Milestone;
use crate::models::project::{CreateProject, ProgressPatch, Project, ProjectWithParties};
use crate::models::project_update::ProjectUpdate;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, description, budget, location, project_type, skills, status, \
                       progress, customer_id, contractor_id, total_budget, budget_spent, \
                       next_milestone, gallery, created_at, updated_at";

/// Column list for queries joining the customer and contractor profiles.
const PARTY_COLUMNS: &str =
    "p.id, p.title, p.description, p.budget, p.location, p.project_type, p.skills, p.status, \
     p.progress, p.customer_id, p.contractor_id, p.total_budget, p.budget_spent, \
     p.next_milestone, p.gallery, p.created_at, p.updated_at, \
     cu.name AS customer_name, cu.email AS customer_email, cu.location AS customer_location, \
     co.name AS contractor_name, co.company_name AS contractor_company_name";

/// Join fragment resolving both party references.
const PARTY_JOINS: &str = "FROM projects p \
                           LEFT JOIN users cu ON cu.id = p.customer_id \
                           LEFT JOIN users co ON co.id = p.contractor_id";

/// Provides operations on projects, their milestones, and their update log.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project owned by `customer_id` and seed its milestone
    /// sequence from `plan`, atomically.
    ///
    /// Status defaults to `open` and progress to 0 via the schema.
    pub async fn create(
        pool: &PgPool,
        customer_id: DbId,
        input: &CreateProject,
        plan: &MilestonePlan,
    ) -> Result<Project, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO projects (title, description, budget, location, project_type,
                                   skills, total_budget, customer_id)
             VALUES ($1, COALESCE($2, ''), $3, $4, COALESCE($5, 'New Construction'),
                     COALESCE($6, '{{}}'::TEXT[]), COALESCE($7, 0), $8)
             RETURNING {COLUMNS}"
        );
        let project = sqlx::query_as::<_, Project>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.budget)
            .bind(&input.location)
            .bind(&input.project_type)
            .bind(&input.skills)
            .bind(input.total_budget)
            .bind(customer_id)
            .fetch_one(&mut *tx)
            .await?;

        for (position, name) in plan.phases().iter().enumerate() {
            sqlx::query(
                "INSERT INTO project_milestones (project_id, position, name) VALUES ($1, $2, $3)",
            )
            .bind(project.id)
            .bind(position as i32)
            .bind(name)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(project)
    }

    /// List projects matching the given equality filters, with both party
    /// references resolved, newest-created-first.
    ///
    /// `None` filters match everything; filter values are validated at the
    /// API boundary.
    pub async fn list(
        pool: &PgPool,
        status: Option<&str>,
        project_type: Option<&str>,
    ) -> Result<Vec<ProjectWithParties>, sqlx::Error> {
        let query = format!(
            "SELECT {PARTY_COLUMNS} {PARTY_JOINS}
             WHERE ($1::TEXT IS NULL OR p.status = $1)
               AND ($2::TEXT IS NULL OR p.project_type = $2)
             ORDER BY p.created_at DESC, p.id DESC"
        );
        sqlx::query_as::<_, ProjectWithParties>(&query)
            .bind(status)
            .bind(project_type)
            .fetch_all(pool)
            .await
    }

    /// List projects created by the given customer, newest first.
    pub async fn list_for_customer(
        pool: &PgPool,
        customer_id: DbId,
    ) -> Result<Vec<ProjectWithParties>, sqlx::Error> {
        let query = format!(
            "SELECT {PARTY_COLUMNS} {PARTY_JOINS}
             WHERE p.customer_id = $1
             ORDER BY p.created_at DESC, p.id DESC"
        );
        sqlx::query_as::<_, ProjectWithParties>(&query)
            .bind(customer_id)
            .fetch_all(pool)
            .await
    }

    /// List projects the given contractor is engaged on, newest first.
    ///
    /// Bidding alone does not create visibility here; only assignment does.
    pub async fn list_for_contractor(
        pool: &PgPool,
        contractor_id: DbId,
    ) -> Result<Vec<ProjectWithParties>, sqlx::Error> {
        let query = format!(
            "SELECT {PARTY_COLUMNS} {PARTY_JOINS}
             WHERE p.contractor_id = $1
             ORDER BY p.created_at DESC, p.id DESC"
        );
        sqlx::query_as::<_, ProjectWithParties>(&query)
            .bind(contractor_id)
            .fetch_all(pool)
            .await
    }

    /// Find a project by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a project by ID with both party references resolved.
    pub async fn find_with_parties(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ProjectWithParties>, sqlx::Error> {
        let query = format!("SELECT {PARTY_COLUMNS} {PARTY_JOINS} WHERE p.id = $1");
        sqlx::query_as::<_, ProjectWithParties>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// The project's milestone sequence in seeded order.
    pub async fn milestones(pool: &PgPool, project_id: DbId) -> Result<Vec<Milestone>, sqlx::Error> {
        sqlx::query_as::<_, Milestone>(
            "SELECT id, project_id, position, name, status, milestone_date, created_at, updated_at
             FROM project_milestones WHERE project_id = $1 ORDER BY position",
        )
        .bind(project_id)
        .fetch_all(pool)
        .await
    }

    /// The project's update log in append order.
    pub async fn updates(pool: &PgPool, project_id: DbId) -> Result<Vec<ProjectUpdate>, sqlx::Error> {
        sqlx::query_as::<_, ProjectUpdate>(
            "SELECT id, project_id, text, created_at, updated_at
             FROM project_updates WHERE project_id = $1 ORDER BY created_at, id",
        )
        .bind(project_id)
        .fetch_all(pool)
        .await
    }

    /// Append one entry to the project's update log.
    pub async fn append_update(
        pool: &PgPool,
        project_id: DbId,
        text: &str,
    ) -> Result<ProjectUpdate, sqlx::Error> {
        sqlx::query_as::<_, ProjectUpdate>(
            "INSERT INTO project_updates (project_id, text) VALUES ($1, $2)
             RETURNING id, project_id, text, created_at, updated_at",
        )
        .bind(project_id)
        .bind(text)
        .fetch_one(pool)
        .await
    }

    /// Apply the scalar fields of a progress patch. Only non-`None` fields
    /// are written; the `update` log entry is appended separately.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn apply_progress_patch(
        pool: &PgPool,
        id: DbId,
        patch: &ProgressPatch,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE projects SET
                progress = COALESCE($2, progress),
                next_milestone = COALESCE($3, next_milestone),
                budget_spent = COALESCE($4, budget_spent),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(patch.progress)
            .bind(&patch.next_milestone)
            .bind(patch.budget_spent)
            .fetch_optional(pool)
            .await
    }
}
