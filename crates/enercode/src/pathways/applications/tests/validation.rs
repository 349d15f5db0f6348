use super::common::*;
use crate::pathways::applications::domain::{FieldValue, ProjectSubmission, Selections};
use crate::pathways::applications::fields::{FieldId, FormStep};
use crate::pathways::applications::validation::{
    self, required_fields_for, section_progress, ENVELOPE_SECTION_KEYS,
};

#[test]
fn presence_rules_for_each_value_shape() {
    assert!(!FieldValue::Many(Vec::new()).is_set());
    assert!(FieldValue::Many(vec![String::new()]).is_set());
    assert!(FieldValue::Flag(false).is_set());
    assert!(FieldValue::Flag(true).is_set());
    assert!(!FieldValue::Text(String::new()).is_set());
    assert!(!FieldValue::Text("   ".to_string()).is_set());
    assert!(FieldValue::Text("0".to_string()).is_set());

    let submission = ProjectSubmission::new(Selections::new());
    assert!(!submission.selections.is_set(FieldId::ApplicantName));
}

#[test]
fn hrv_efficiency_requirement_follows_presence() {
    let mut selections = prescriptive_selections();
    selections.clear(FieldId::HrvEfficiency);
    let mut submission = submission_for(selections);

    let report = validation::validate(&submission);
    assert!(report.is_missing(FieldId::HrvEfficiency));

    // Switching to "no HRV" drops the requirement and clears the error.
    submission
        .selections
        .set_text(FieldId::HrvPresence, "no_hrv");
    let report = validation::validate(&submission);
    assert!(!report.is_missing(FieldId::HrvEfficiency));
    assert!(report.is_valid());
}

#[test]
fn multi_unit_buildings_require_the_secondary_schedule() {
    let mut selections = prescriptive_selections();
    selections.set_text(FieldId::BuildingType, "multi_unit");

    let required = required_fields_for(FormStep::BuildingSpecs, &selections);
    assert!(required.contains(&FieldId::SecondaryHrvPresence));
    assert!(required.contains(&FieldId::HasSecondaryHeating));
    assert!(required.contains(&FieldId::HasSecondaryWaterHeater));

    let single = prescriptive_selections();
    let required = required_fields_for(FormStep::BuildingSpecs, &single);
    assert!(!required.contains(&FieldId::HasSecondaryHeating));
    assert!(!required.contains(&FieldId::HasSecondaryWaterHeater));
}

#[test]
fn secondary_cascades_follow_their_toggles() {
    let mut selections = prescriptive_selections();
    selections.set_text(FieldId::BuildingType, "secondary_suite");
    selections.set_text(FieldId::SecondaryHrvPresence, "with_hrv");
    selections.set_text(FieldId::HasSecondaryHeating, "yes");
    selections.set_text(FieldId::HasSecondaryWaterHeater, "no");

    let required = required_fields_for(FormStep::BuildingSpecs, &selections);
    assert!(required.contains(&FieldId::SecondaryHrvEfficiency));
    assert!(required.contains(&FieldId::SecondaryHeatingType));
    assert!(required.contains(&FieldId::SecondaryHeatingEfficiency));
    assert!(!required.contains(&FieldId::SecondaryWaterHeaterType));
}

#[test]
fn boiler_with_indirect_tank_suppresses_water_heater_questions() {
    let mut selections = prescriptive_selections();
    selections.set_text(FieldId::HeatingType, "boiler");

    let required = required_fields_for(FormStep::BuildingSpecs, &selections);
    assert!(required.contains(&FieldId::IndirectTank));
    assert!(required.contains(&FieldId::WaterHeaterType));

    selections.set_text(FieldId::IndirectTank, "yes");
    let required = required_fields_for(FormStep::BuildingSpecs, &selections);
    assert!(required.contains(&FieldId::IndirectTankSize));
    assert!(!required.contains(&FieldId::WaterHeaterType));

    selections.set_text(FieldId::IndirectTank, "no");
    let required = required_fields_for(FormStep::BuildingSpecs, &selections);
    assert!(!required.contains(&FieldId::IndirectTankSize));
    assert!(required.contains(&FieldId::WaterHeaterType));
}

#[test]
fn each_selected_floor_member_requires_its_insulation_value() {
    let mut selections = prescriptive_selections();
    selections.set_many(
        FieldId::FloorSlabTypes,
        vec![
            "unheated_below_frost".to_string(),
            "unheated_above_frost".to_string(),
        ],
    );

    let required = required_fields_for(FormStep::BuildingSpecs, &selections);
    assert!(required.contains(&FieldId::UnheatedBelowFrostRsi));
    assert!(required.contains(&FieldId::UnheatedAboveFrostRsi));
    assert!(!required.contains(&FieldId::HeatedFloorRsi));
    assert!(!required.contains(&FieldId::SlabIntegralFootingRsi));
}

#[test]
fn murb_cascade_applies_only_to_multi_unit_on_the_tiered_path() {
    let mut selections = tiered_selections();
    selections.set_text(FieldId::BuildingType, "multi_unit");

    let required = required_fields_for(FormStep::BuildingSpecs, &selections);
    assert!(required.contains(&FieldId::HasMurbMultipleHeating));
    assert!(required.contains(&FieldId::HasMurbMultipleWaterHeater));
    assert!(!required.contains(&FieldId::MurbSecondHeatingType));

    selections.set_text(FieldId::HasMurbMultipleHeating, "yes");
    let required = required_fields_for(FormStep::BuildingSpecs, &selections);
    assert!(required.contains(&FieldId::MurbSecondHeatingType));
    assert!(required.contains(&FieldId::MurbSecondHeatingEfficiency));

    let detached = tiered_selections();
    let required = required_fields_for(FormStep::BuildingSpecs, &detached);
    assert!(!required.contains(&FieldId::HasMurbMultipleHeating));
}

#[test]
fn volume_band_is_required_only_under_the_cap() {
    let mut selections = tiered_selections();
    let required = required_fields_for(FormStep::BuildingSpecs, &selections);
    assert!(required.contains(&FieldId::BuildingVolume));

    selections.set_text(FieldId::IsVolumeOver380, "yes");
    let required = required_fields_for(FormStep::BuildingSpecs, &selections);
    assert!(!required.contains(&FieldId::BuildingVolume));
}

#[test]
fn base_schedule_order_is_stable() {
    let selections = prescriptive_selections();
    let required = required_fields_for(FormStep::BuildingSpecs, &selections);
    assert_eq!(required[0], FieldId::HrvPresence);
    assert_eq!(required[1], FieldId::AtticInsulation);

    let again = required_fields_for(FormStep::BuildingSpecs, &selections);
    assert_eq!(required, again);
}

#[test]
fn performance_paths_have_no_hard_spec_gate() {
    let mut selections = prescriptive_selections();
    selections.set_text(FieldId::CompliancePath, "9365");
    assert!(required_fields_for(FormStep::BuildingSpecs, &selections).is_empty());

    selections.set_text(FieldId::CompliancePath, "9367");
    assert!(required_fields_for(FormStep::BuildingSpecs, &selections).is_empty());
}

#[test]
fn section_progress_folds_in_the_upload_slot() {
    let mut selections = prescriptive_selections();
    selections.set_text(FieldId::ProposedCeilingRsi, "10.4");
    selections.set_text(FieldId::ProposedWallRsi, "3.9");

    let progress = section_progress(ENVELOPE_SECTION_KEYS, &selections, false);
    assert_eq!(progress.completed, 2);
    assert_eq!(progress.total, ENVELOPE_SECTION_KEYS.len() + 1);

    let progress = section_progress(ENVELOPE_SECTION_KEYS, &selections, true);
    assert_eq!(progress.completed, 3);
}

#[test]
fn missing_documents_block_step_four() {
    let mut submission = complete_submission();
    submission.documents.clear();

    let report = validation::validate(&submission);
    assert!(report.is_missing(FieldId::SupportingDocuments));

    submission.documents = documents();
    let report = validation::validate(&submission);
    assert!(report.is_valid());
}

#[test]
fn validation_is_idempotent() {
    let mut submission = complete_submission();
    submission.selections.clear(FieldId::WallInsulation);
    submission.documents.clear();

    let first = validation::validate(&submission);
    let second = validation::validate(&submission);
    assert_eq!(first, second);
}

#[test]
fn range_advisories_skip_unparsable_values() {
    let mut selections = prescriptive_selections();
    selections.set_text(FieldId::ProposedWallRsi, "tbd");
    selections.set_text(FieldId::ProposedAch50, "NaN");
    assert!(validation::range_advisories(&selections).is_empty());

    selections.set_text(FieldId::ProposedWallRsi, "25");
    let advisories = validation::range_advisories(&selections);
    assert_eq!(advisories.len(), 1);
    assert_eq!(advisories[0].field, FieldId::ProposedWallRsi);

    selections.set_text(FieldId::ProposedWallRsi, "3.9");
    assert!(validation::range_advisories(&selections).is_empty());
}
