use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde_json::json;

use super::domain::{ProjectId, ProjectStatus, ProjectSubmission};
use super::repository::{Notifier, ProjectRepository, RepositoryError};
use super::service::{evaluate_submission, ProjectService, ProjectServiceError};

/// Router builder exposing HTTP endpoints for evaluation, submission, and
/// status polling.
pub fn application_router<R, N>(service: Arc<ProjectService<R, N>>) -> Router
where
    R: ProjectRepository + 'static,
    N: Notifier + 'static,
{
    Router::new()
        .route("/api/v1/pathways/projects", post(submit_handler::<R, N>))
        .route(
            "/api/v1/pathways/projects/evaluate",
            post(evaluate_handler::<R, N>),
        )
        .route(
            "/api/v1/pathways/projects/:project_id",
            get(status_handler::<R, N>),
        )
        .with_state(service)
}

pub(crate) async fn submit_handler<R, N>(
    State(service): State<Arc<ProjectService<R, N>>>,
    axum::Json(submission): axum::Json<ProjectSubmission>,
) -> Response
where
    R: ProjectRepository + 'static,
    N: Notifier + 'static,
{
    match service.submit(submission) {
        Ok(record) => {
            let view = record.status_view();
            (StatusCode::ACCEPTED, axum::Json(view)).into_response()
        }
        Err(ProjectServiceError::SubmissionBlocked { checklist }) => {
            let payload = json!({
                "error": "submission blocked by outstanding required items",
                "pending_items": checklist,
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(ProjectServiceError::Repository(RepositoryError::Conflict)) => {
            let payload = json!({
                "error": "project already exists",
            });
            (StatusCode::CONFLICT, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn evaluate_handler<R, N>(
    State(_service): State<Arc<ProjectService<R, N>>>,
    axum::Json(submission): axum::Json<ProjectSubmission>,
) -> Response
where
    R: ProjectRepository + 'static,
    N: Notifier + 'static,
{
    let summary = evaluate_submission(&submission);
    (StatusCode::OK, axum::Json(summary)).into_response()
}

pub(crate) async fn status_handler<R, N>(
    State(service): State<Arc<ProjectService<R, N>>>,
    Path(project_id): Path<String>,
) -> Response
where
    R: ProjectRepository + 'static,
    N: Notifier + 'static,
{
    let id = ProjectId(project_id);
    match service.get(&id) {
        Ok(record) => {
            let view = record.status_view();
            (StatusCode::OK, axum::Json(view)).into_response()
        }
        // Unknown ids poll as an unsaved draft so the form can show a
        // consistent status panel before the first save lands.
        Err(ProjectServiceError::Repository(RepositoryError::NotFound)) => {
            let payload = json!({
                "project_id": id.0,
                "status": ProjectStatus::Draft.label(),
                "tier": serde_json::Value::Null,
                "total_points": serde_json::Value::Null,
            });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}
