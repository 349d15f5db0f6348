//! Validation and completeness engine: which fields the active compliance
//! path requires, which of those are still unset, and the soft numeric
//! range advisories for the performance paths.
//!
//! Nothing here throws or errors; every failure state is representable
//! data. The designer is never blocked from editing, only from finishing a
//! submission.

pub(crate) mod rules;

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::domain::{ProjectSubmission, Selections};
use super::fields::{FieldId, FormStep};

pub use rules::{
    required_fields_for, ENVELOPE_SECTION_KEYS, MECHANICAL_SECTION_KEYS, RECOMMENDED_FIELDS,
};

/// Outcome of a validation pass: the set of required-but-unset fields.
/// Recomputed on every relevant change and never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub missing: BTreeSet<FieldId>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.missing.is_empty()
    }

    pub fn is_missing(&self, field: FieldId) -> bool {
        self.missing.contains(&field)
    }
}

/// The submission-gating steps; the review step adds no requirements of
/// its own.
const GATED_STEPS: [FormStep; 4] = [
    FormStep::ProjectDetails,
    FormStep::PathwaySelection,
    FormStep::BuildingSpecs,
    FormStep::Documents,
];

fn field_is_set(field: FieldId, submission: &ProjectSubmission) -> bool {
    if field == FieldId::SupportingDocuments {
        return submission.has_documents();
    }
    submission.selections.is_set(field)
}

/// Validate a single step's requirement schedule.
pub fn validate_step(step: FormStep, submission: &ProjectSubmission) -> ValidationReport {
    let missing = required_fields_for(step, &submission.selections)
        .into_iter()
        .filter(|field| !field_is_set(*field, submission))
        .collect();
    ValidationReport { missing }
}

/// Validate every gated step at once; `is_valid` gates submission.
pub fn validate(submission: &ProjectSubmission) -> ValidationReport {
    let mut missing = BTreeSet::new();
    for step in GATED_STEPS {
        missing.extend(validate_step(step, submission).missing);
    }
    ValidationReport { missing }
}

/// "N of M completed" counter for the performance-path accordions. The
/// file-upload requirement is folded into whichever section displays it,
/// hence the uniform `+ 1` on both sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionProgress {
    pub completed: usize,
    pub total: usize,
}

pub fn section_progress(
    keys: &[FieldId],
    selections: &Selections,
    has_documents: bool,
) -> SectionProgress {
    let completed = keys.iter().filter(|field| selections.is_set(**field)).count()
        + usize::from(has_documents);
    SectionProgress {
        completed,
        total: keys.len() + 1,
    }
}

/// Soft warning for a proposed value that falls outside the plausible range
/// for its field. Advisories never block submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangeAdvisory {
    pub field: FieldId,
    pub detail: String,
}

struct PlausibleRange {
    field: FieldId,
    min: f64,
    max: f64,
    unit: &'static str,
}

static PLAUSIBLE_RANGES: &[PlausibleRange] = &[
    PlausibleRange {
        field: FieldId::ProposedCeilingRsi,
        min: 1.0,
        max: 20.0,
        unit: "RSI",
    },
    PlausibleRange {
        field: FieldId::ProposedWallRsi,
        min: 0.5,
        max: 12.0,
        unit: "RSI",
    },
    PlausibleRange {
        field: FieldId::ProposedWindowUValue,
        min: 0.5,
        max: 3.6,
        unit: "W/(m²·K)",
    },
    PlausibleRange {
        field: FieldId::ProposedAch50,
        min: 0.2,
        max: 10.0,
        unit: "ACH50",
    },
];

/// Range-check the free-entry proposed values. Unparsable input is skipped
/// rather than flagged: under-warning is preferred to a crash or a false
/// alarm while the designer is mid-keystroke.
pub fn range_advisories(selections: &Selections) -> Vec<RangeAdvisory> {
    let mut advisories = Vec::new();
    for range in PLAUSIBLE_RANGES {
        let Some(raw) = selections.text(range.field) else {
            continue;
        };
        let Ok(value) = raw.trim().parse::<f64>() else {
            continue;
        };
        if value < range.min || value > range.max {
            advisories.push(RangeAdvisory {
                field: range.field,
                detail: format!(
                    "{} of {} {} is outside the expected range {}–{} {}",
                    range.field.label(),
                    value,
                    range.unit,
                    range.min,
                    range.max,
                    range.unit,
                ),
            });
        }
    }
    advisories
}
