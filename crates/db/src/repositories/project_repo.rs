//! Repository for the `projects` table.

use portfolio_core::project::NewProject;
use sqlx::PgPool;

use crate::models::project::Project;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, title, year, description, url, content_type, background_color, image_url, created_at";

/// Read and append operations for projects. Rows are never updated or deleted.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project, returning the stored row with its generated id.
    ///
    /// Only the column belonging to the content variant is written; the other
    /// is NULL.
    pub async fn create(pool: &PgPool, input: &NewProject) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects
                (title, year, description, url, content_type, background_color, image_url)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(&input.title)
            .bind(input.year)
            .bind(&input.description)
            .bind(&input.url)
            .bind(input.content.content_type().as_str())
            .bind(input.content.background_color().map(|s| s.as_str()))
            .bind(input.content.image_url())
            .fetch_one(pool)
            .await
    }

    /// List all projects, most recent year first.
    ///
    /// Projects sharing a year come newest-inserted first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects ORDER BY year DESC, id DESC");
        sqlx::query_as::<_, Project>(&query).fetch_all(pool).await
    }
}
