use std::collections::{BTreeMap, BTreeSet};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::catalog::{Category, Points};
use super::checklist::{pending_items, PendingChecklist};
use super::domain::{ProjectId, ProjectStatus, ProjectSubmission};
use super::fields::FieldId;
use super::repository::{
    Notifier, NotifierError, ProjectRecord, ProjectRepository, RepositoryError, SubmissionNotice,
};
use super::scoring::{self, estimate_costs, CostEstimate, TierClassification};
use super::validation::{self, RangeAdvisory};

/// Everything the summary panel needs, computed in one pure pass over the
/// submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationSummary {
    pub total_points: Points,
    pub tier: TierClassification,
    pub points_breakdown: BTreeMap<Category, Points>,
    pub validation_errors: BTreeSet<FieldId>,
    pub pending_items: PendingChecklist,
    pub advisories: Vec<RangeAdvisory>,
    pub cost_estimate: CostEstimate,
}

/// Evaluate a submission without touching storage. Pure and idempotent, so
/// the hosting form can call it on every field change.
pub fn evaluate_submission(submission: &ProjectSubmission) -> EvaluationSummary {
    let points_breakdown = scoring::breakdown(&submission.selections);
    let total_points: Points = points_breakdown.values().copied().sum();
    let tier = scoring::classify_tier(total_points, submission.selections.hrv_presence());
    let report = validation::validate(submission);
    let cost_estimate = estimate_costs(tier.tier);

    EvaluationSummary {
        total_points,
        tier,
        points_breakdown,
        validation_errors: report.missing,
        pending_items: pending_items(submission),
        advisories: validation::range_advisories(&submission.selections),
        cost_estimate,
    }
}

/// Service composing the scoring engine, validation gate, repository, and
/// notification hook.
pub struct ProjectService<R, N> {
    repository: Arc<R>,
    notifier: Arc<N>,
}

static PROJECT_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_project_id() -> ProjectId {
    let id = PROJECT_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    ProjectId(format!("proj-{id:06}"))
}

impl<R, N> ProjectService<R, N>
where
    R: ProjectRepository + 'static,
    N: Notifier + 'static,
{
    pub fn new(repository: Arc<R>, notifier: Arc<N>) -> Self {
        Self {
            repository,
            notifier,
        }
    }

    /// Stateless evaluation for the reactive summary panel.
    pub fn evaluate(&self, submission: &ProjectSubmission) -> EvaluationSummary {
        evaluate_submission(submission)
    }

    /// Store work in progress without gating; the evaluation snapshot is
    /// persisted alongside so dashboards can show points for drafts.
    pub fn save_draft(
        &self,
        submission: ProjectSubmission,
    ) -> Result<ProjectRecord, ProjectServiceError> {
        let record = ProjectRecord {
            project_id: next_project_id(),
            evaluation: Some(evaluate_submission(&submission)),
            submission,
            status: ProjectStatus::Draft,
        };
        let stored = self.repository.insert(record)?;
        Ok(stored)
    }

    /// Submit an application: gate on the required checklist, then store
    /// and notify the review desk.
    pub fn submit(
        &self,
        submission: ProjectSubmission,
    ) -> Result<ProjectRecord, ProjectServiceError> {
        let summary = evaluate_submission(&submission);
        if summary.pending_items.blocks_submission() {
            return Err(ProjectServiceError::SubmissionBlocked {
                checklist: summary.pending_items,
            });
        }

        let record = ProjectRecord {
            project_id: next_project_id(),
            submission,
            status: ProjectStatus::Submitted,
            evaluation: Some(summary),
        };
        let stored = self.repository.insert(record)?;
        self.notify_submitted(&stored)?;
        Ok(stored)
    }

    /// Promote a stored draft to submitted, re-running the gate against the
    /// draft as it stands.
    pub fn submit_draft(&self, id: &ProjectId) -> Result<ProjectRecord, ProjectServiceError> {
        let mut record = self
            .repository
            .fetch(id)?
            .ok_or(RepositoryError::NotFound)?;

        let summary = evaluate_submission(&record.submission);
        if summary.pending_items.blocks_submission() {
            return Err(ProjectServiceError::SubmissionBlocked {
                checklist: summary.pending_items,
            });
        }

        record.status = ProjectStatus::Submitted;
        record.evaluation = Some(summary);
        self.repository.update(record.clone())?;
        self.notify_submitted(&record)?;
        Ok(record)
    }

    /// Fetch an application and current status for API responses.
    pub fn get(&self, id: &ProjectId) -> Result<ProjectRecord, ProjectServiceError> {
        let record = self
            .repository
            .fetch(id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }

    fn notify_submitted(&self, record: &ProjectRecord) -> Result<(), ProjectServiceError> {
        let mut details = BTreeMap::new();
        if let Some(summary) = &record.evaluation {
            details.insert("tier".to_string(), summary.tier.tier.label().to_string());
            details.insert("total_points".to_string(), summary.total_points.to_string());
        }
        self.notifier.publish(SubmissionNotice {
            template: "application_submitted".to_string(),
            project_id: record.project_id.clone(),
            details,
        })?;
        Ok(())
    }
}

/// Error raised by the application service.
#[derive(Debug, thiserror::Error)]
pub enum ProjectServiceError {
    #[error("submission blocked by outstanding required items")]
    SubmissionBlocked { checklist: PendingChecklist },
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Notifier(#[from] NotifierError),
}
