use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::catalog::Points;
use super::domain::{ProjectId, ProjectStatus, ProjectSubmission};
use super::service::EvaluationSummary;

/// Stored application record: the submission, its lifecycle status, and the
/// evaluation snapshot taken when it was last saved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub project_id: ProjectId,
    pub submission: ProjectSubmission,
    pub status: ProjectStatus,
    pub evaluation: Option<EvaluationSummary>,
}

impl ProjectRecord {
    pub fn status_view(&self) -> ProjectStatusView {
        ProjectStatusView {
            project_id: self.project_id.clone(),
            status: self.status.label(),
            tier: self
                .evaluation
                .as_ref()
                .map(|summary| summary.tier.tier.label().to_string()),
            total_points: self
                .evaluation
                .as_ref()
                .map(|summary| summary.total_points),
        }
    }
}

/// Storage abstraction so the service module can be exercised in isolation.
pub trait ProjectRepository: Send + Sync {
    fn insert(&self, record: ProjectRecord) -> Result<ProjectRecord, RepositoryError>;
    fn update(&self, record: ProjectRecord) -> Result<(), RepositoryError>;
    fn fetch(&self, id: &ProjectId) -> Result<Option<ProjectRecord>, RepositoryError>;
    fn drafts(&self, limit: usize) -> Result<Vec<ProjectRecord>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Outbound notification hook fired when a submission is accepted (e-mail
/// to the review desk, webhook, and so on).
pub trait Notifier: Send + Sync {
    fn publish(&self, notice: SubmissionNotice) -> Result<(), NotifierError>;
}

/// Notification payload so routes and tests can assert integration
/// boundaries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionNotice {
    pub template: String,
    pub project_id: ProjectId,
    pub details: BTreeMap<String, String>,
}

/// Notification dispatch error.
#[derive(Debug, thiserror::Error)]
pub enum NotifierError {
    #[error("notification transport unavailable: {0}")]
    Transport(String),
}

/// Sanitized representation of a stored application's exposed status.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectStatusView {
    pub project_id: ProjectId,
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_points: Option<Points>,
}
