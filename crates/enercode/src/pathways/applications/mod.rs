//! NBC 9.36 compliance application intake: the selections record, the
//! options catalog, the scoring and validation engines, and the service
//! facade the HTTP layer drives.

pub mod catalog;
pub mod checklist;
pub mod domain;
pub mod fields;
pub mod repository;
pub mod router;
pub mod scoring;
pub mod service;
pub mod validation;

#[cfg(test)]
mod tests;

pub use catalog::{options, points_for, Category, OptionEntry, Points, TableContext};
pub use checklist::{pending_items, PendingChecklist, PendingItem};
pub use domain::{
    BuildingType, ClimateZone, CompliancePath, DocumentCategory, DocumentDescriptor, FieldValue,
    FloorSlabType, HrvPresence, ProjectId, ProjectStatus, ProjectSubmission, Province, Selections,
};
pub use fields::{FieldId, FieldKind, FieldMeta, FormStep};
pub use repository::{
    Notifier, NotifierError, ProjectRecord, ProjectRepository, ProjectStatusView, RepositoryError,
    SubmissionNotice,
};
pub use router::application_router;
pub use scoring::{
    classify_tier, estimate_costs, CostEstimate, Tier, TierClassification, TierStatus,
};
pub use service::{evaluate_submission, EvaluationSummary, ProjectService, ProjectServiceError};
pub use validation::{
    range_advisories, required_fields_for, section_progress, validate, validate_step,
    RangeAdvisory, SectionProgress, ValidationReport, ENVELOPE_SECTION_KEYS,
    MECHANICAL_SECTION_KEYS,
};
