use super::common::*;
use crate::pathways::applications::checklist::pending_items;
use crate::pathways::applications::domain::{ProjectSubmission, Selections};
use crate::pathways::applications::fields::{FieldId, FormStep};

#[test]
fn empty_application_lists_required_items_in_step_order() {
    let submission = ProjectSubmission::new(Selections::new());
    let checklist = pending_items(&submission);

    assert!(checklist.blocks_submission());
    assert_eq!(checklist.required[0].field, FieldId::ApplicantName);
    assert!(checklist
        .required
        .iter()
        .any(|item| item.field == FieldId::CompliancePath));

    // Steps never go backwards; the form scrolls to the first entry.
    let mut last_step = FormStep::ProjectDetails;
    for item in &checklist.required {
        assert!(item.step >= last_step);
        last_step = item.step;
    }
}

#[test]
fn complete_application_keeps_only_recommendations() {
    let submission = complete_submission();
    let checklist = pending_items(&submission);

    assert!(!checklist.blocks_submission());
    assert!(checklist.required.is_empty());

    let recommended: Vec<FieldId> = checklist
        .recommended
        .iter()
        .map(|item| item.field)
        .collect();
    assert_eq!(
        recommended,
        vec![FieldId::Certifications, FieldId::Comments]
    );
}

#[test]
fn answered_recommendations_drop_off_the_list() {
    let mut submission = complete_submission();
    submission
        .selections
        .set_many(FieldId::Certifications, vec!["net_zero_ready".to_string()]);

    let checklist = pending_items(&submission);
    let recommended: Vec<FieldId> = checklist
        .recommended
        .iter()
        .map(|item| item.field)
        .collect();
    assert_eq!(recommended, vec![FieldId::Comments]);
}

#[test]
fn items_carry_labels_and_owning_steps() {
    let mut submission = complete_submission();
    submission.selections.clear(FieldId::CompliancePath);
    submission.documents.clear();

    let checklist = pending_items(&submission);
    let path_item = checklist
        .required
        .iter()
        .find(|item| item.field == FieldId::CompliancePath)
        .expect("pathway listed");
    assert_eq!(path_item.label, "Compliance pathway");
    assert_eq!(path_item.step, FormStep::PathwaySelection);

    let docs_item = checklist
        .required
        .iter()
        .find(|item| item.field == FieldId::SupportingDocuments)
        .expect("upload listed");
    assert_eq!(docs_item.step, FormStep::Documents);
}

#[test]
fn clearing_the_pathway_suppresses_spec_requirements() {
    let mut submission = complete_submission();
    submission.selections.clear(FieldId::CompliancePath);
    submission.selections.clear(FieldId::WallInsulation);

    let checklist = pending_items(&submission);
    // Without an active path the building-specs step contributes nothing;
    // only the pathway choice itself is flagged.
    assert!(checklist
        .required
        .iter()
        .all(|item| item.field != FieldId::WallInsulation));
}
