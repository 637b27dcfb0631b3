//! Project row model.

use portfolio_core::error::CoreError;
use portfolio_core::project::ProjectContent;
use portfolio_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `projects` table.
///
/// Kept flat so it serializes to the API's record shape; use
/// [`Project::content`] for the typed view of the content columns.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub title: String,
    pub year: i32,
    pub description: String,
    pub url: String,
    pub content_type: String,
    pub background_color: Option<String>,
    pub image_url: Option<String>,
    pub created_at: Timestamp,
}

impl Project {
    pub fn content(&self) -> Result<ProjectContent, CoreError> {
        ProjectContent::from_parts(
            Some(&self.content_type),
            self.background_color.as_deref(),
            self.image_url.clone(),
        )
    }
}
