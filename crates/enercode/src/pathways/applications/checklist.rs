//! Submission-readiness checklist: partitions everything still unanswered
//! into required items (the submission gate) and recommended items that
//! never block.

use serde::{Deserialize, Serialize};

use super::domain::ProjectSubmission;
use super::fields::{FieldId, FormStep};
use super::validation::{required_fields_for, RECOMMENDED_FIELDS};

/// One outstanding answer, carrying the label and owning step so the form
/// can jump straight to the field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingItem {
    pub field: FieldId,
    pub label: String,
    pub step: FormStep,
}

impl PendingItem {
    fn for_field(field: FieldId) -> Self {
        Self {
            field,
            label: field.label().to_string(),
            step: field.step(),
        }
    }
}

/// The review-step checklist. Ordering is stable and follows on-screen
/// step order, then schedule order within a step; the form auto-scrolls to
/// the first required entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingChecklist {
    pub required: Vec<PendingItem>,
    pub recommended: Vec<PendingItem>,
}

impl PendingChecklist {
    pub fn blocks_submission(&self) -> bool {
        !self.required.is_empty()
    }
}

fn field_is_set(field: FieldId, submission: &ProjectSubmission) -> bool {
    if field == FieldId::SupportingDocuments {
        return submission.has_documents();
    }
    submission.selections.is_set(field)
}

/// Build the checklist for the current submission state.
pub fn pending_items(submission: &ProjectSubmission) -> PendingChecklist {
    let steps = [
        FormStep::ProjectDetails,
        FormStep::PathwaySelection,
        FormStep::BuildingSpecs,
        FormStep::Documents,
    ];

    let mut required = Vec::new();
    for step in steps {
        for field in required_fields_for(step, &submission.selections) {
            if !field_is_set(field, submission) {
                required.push(PendingItem::for_field(field));
            }
        }
    }

    let recommended = RECOMMENDED_FIELDS
        .iter()
        .copied()
        .filter(|field| !field_is_set(*field, submission))
        .map(PendingItem::for_field)
        .collect();

    PendingChecklist {
        required,
        recommended,
    }
}
