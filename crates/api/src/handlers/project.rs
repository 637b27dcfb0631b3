//! Handlers for the `/projects` resource.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use portfolio_core::project::ProjectSubmission;
use portfolio_db::models::project::Project;
use portfolio_db::repositories::ProjectRepo;

use crate::error::{AppError, AppResult, PersistenceAction};
use crate::state::AppState;

/// POST /api/projects
///
/// Missing required fields are rejected before the database is touched.
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<ProjectSubmission>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Project>)> {
    let Json(submission) =
        payload.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    let input = submission.into_new_project()?;

    let project = ProjectRepo::create(&state.pool, &input)
        .await
        .map_err(AppError::persistence(PersistenceAction::CreateProject))?;

    tracing::info!(project_id = project.id, year = project.year, "Project created");
    Ok((StatusCode::CREATED, Json(project)))
}

/// GET /api/projects
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Project>>> {
    let projects = ProjectRepo::list(&state.pool)
        .await
        .map_err(AppError::persistence(PersistenceAction::FetchProjects))?;
    Ok(Json(projects))
}
