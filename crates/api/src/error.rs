use std::fmt;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use portfolio_core::error::CoreError;
use serde_json::json;

/// Store operation that failed, used to pick the public error message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersistenceAction {
    FetchProjects,
    CreateProject,
}

impl PersistenceAction {
    /// Message returned to the client in the `error` field.
    pub fn public_message(self) -> &'static str {
        match self {
            PersistenceAction::FetchProjects => "Failed to fetch projects",
            PersistenceAction::CreateProject => "Failed to create project",
        }
    }

    /// Whether the underlying driver message is echoed in `details`.
    ///
    /// Only the admin create path gets it, to help debug a failed submission.
    pub fn exposes_detail(self) -> bool {
        matches!(self, PersistenceAction::CreateProject)
    }
}

impl fmt::Display for PersistenceAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PersistenceAction::FetchProjects => f.write_str("fetch projects"),
            PersistenceAction::CreateProject => f.write_str("create project"),
        }
    }
}

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses of
/// the form `{ "error": ..., "code": ..., "details": ... }`.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `portfolio_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The store rejected or could not run a query.
    #[error("Failed to {action}: {source}")]
    Persistence {
        action: PersistenceAction,
        #[source]
        source: sqlx::Error,
    },

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Adapter for `map_err` on repository calls.
    pub fn persistence(action: PersistenceAction) -> impl FnOnce(sqlx::Error) -> AppError {
        move |source| AppError::Persistence { action, source }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = match &self {
            AppError::Core(CoreError::MissingFields(missing)) => {
                tracing::debug!(fields = %missing, "Rejected submission with missing fields");
                (
                    StatusCode::BAD_REQUEST,
                    "MISSING_FIELDS",
                    "Missing required fields".to_string(),
                    Some(json!(missing)),
                )
            }
            AppError::Core(CoreError::Validation(msg)) => (
                StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR",
                msg.clone(),
                None,
            ),
            AppError::Persistence { action, source } => {
                tracing::error!(error = %source, %action, "Database error");
                let details = action
                    .exposes_detail()
                    .then(|| json!(source.to_string()));
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    action.public_message().to_string(),
                    details,
                )
            }
            AppError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                "BAD_REQUEST",
                msg.clone(),
                None,
            ),
        };

        let mut body = json!({
            "error": message,
            "code": code,
        });
        if let Some(details) = details {
            body["details"] = details;
        }

        (status, axum::Json(body)).into_response()
    }
}
