use super::common::*;
use crate::pathways::applications::catalog::{Category, Points};
use crate::pathways::applications::domain::{HrvPresence, Selections};
use crate::pathways::applications::fields::FieldId;
use crate::pathways::applications::scoring::{
    self, classify_tier, estimate_costs, Tier, TierStatus,
};

#[test]
fn empty_selections_score_zero() {
    let selections = Selections::new();
    assert_eq!(scoring::total(&selections), Points::ZERO);
    assert!(scoring::breakdown(&selections).is_empty());
}

#[test]
fn boolean_answers_never_contribute() {
    let mut selections = Selections::new();
    selections.set_flag(FieldId::MidConstructionBlowerDoorPlanned, true);
    selections.set_text(FieldId::HasSkylights, "yes");
    assert_eq!(scoring::total(&selections), Points::ZERO);
}

#[test]
fn unknown_options_score_zero_without_erroring() {
    let mut selections = Selections::new();
    selections.set_text(FieldId::WallInsulation, "rsi_999");
    selections.set_text(FieldId::WindowUValue, "");
    assert_eq!(scoring::total(&selections), Points::ZERO);
}

#[test]
fn totals_are_invariant_under_insertion_order() {
    let forward = prescriptive_selections();

    let mut reversed = Selections::new();
    let entries: Vec<_> = forward
        .iter()
        .map(|(field, value)| (field, value.clone()))
        .collect();
    for (field, value) in entries.into_iter().rev() {
        reversed.set(field, value);
    }

    assert_eq!(scoring::total(&forward), scoring::total(&reversed));
    assert_eq!(scoring::breakdown(&forward), scoring::breakdown(&reversed));
}

#[test]
fn complete_prescriptive_record_totals_thirty_three() {
    let selections = prescriptive_selections();
    assert_eq!(scoring::total(&selections), Points::from_tenths(330));

    let breakdown = scoring::breakdown(&selections);
    assert_eq!(
        breakdown.get(&Category::HrvEfficiency),
        Some(&Points::from_tenths(60))
    );
    assert_eq!(
        breakdown.get(&Category::WallInsulation),
        Some(&Points::from_tenths(60))
    );
    assert_eq!(
        breakdown.get(&Category::WaterHeater),
        Some(&Points::from_tenths(30))
    );
}

#[test]
fn water_heater_is_excluded_when_boiler_feeds_indirect_tank() {
    let mut selections = Selections::new();
    selections.set_text(FieldId::WallInsulation, "rsi_3_85");
    selections.set_text(FieldId::WindowUValue, "u_1_40");
    selections.set_text(FieldId::HeatingType, "boiler");
    selections.set_text(FieldId::IndirectTank, "yes");
    selections.set_text(FieldId::WaterHeaterType, "condensing_ef_0_86");

    // 6.0 wall + 3.0 window, water heater suppressed.
    assert_eq!(scoring::total(&selections), Points::from_tenths(90));
    assert!(!scoring::breakdown(&selections).contains_key(&Category::WaterHeater));

    selections.set_text(FieldId::IndirectTank, "no");
    assert_eq!(scoring::total(&selections), Points::from_tenths(120));
    assert_eq!(
        scoring::breakdown(&selections).get(&Category::WaterHeater),
        Some(&Points::from_tenths(30))
    );
}

#[test]
fn alberta_zone_7b_swaps_the_variant_tables() {
    let mut base = Selections::new();
    base.set_text(FieldId::Province, "saskatchewan");
    base.set_text(FieldId::ClimateZone, "7A");
    base.set_text(FieldId::WallInsulation, "rsi_3_85");
    base.set_text(FieldId::WindowUValue, "u_1_40");
    base.set_text(FieldId::Airtightness, "ach_2_5");
    base.set_text(FieldId::HrvEfficiency, "sre_75");
    base.set_text(FieldId::BelowGradeInsulation, "rsi_3_46");
    base.set_text(FieldId::WaterHeaterType, "condensing_ef_0_86");

    let mut zone7b = base.clone();
    zone7b.set_text(FieldId::Province, "alberta");
    zone7b.set_text(FieldId::ClimateZone, "7B");

    // Documented differing pair: rsi_3_85 walls award 6.0 in the base table
    // but 3.0 under the 7B schedule.
    let base_breakdown = scoring::breakdown(&base);
    let zone_breakdown = scoring::breakdown(&zone7b);
    assert_eq!(
        base_breakdown.get(&Category::WallInsulation),
        Some(&Points::from_tenths(60))
    );
    assert_eq!(
        zone_breakdown.get(&Category::WallInsulation),
        Some(&Points::from_tenths(30))
    );

    // 30+45+60+30+30 vs 0+30+82+15+25, plus the wall pair above.
    assert_eq!(scoring::total(&base), Points::from_tenths(255));
    assert_eq!(scoring::total(&zone7b), Points::from_tenths(182));
}

#[test]
fn volume_over_threshold_caps_the_band_to_zero() {
    let mut selections = Selections::new();
    selections.set_text(FieldId::IsVolumeOver380, "no");
    selections.set_text(FieldId::BuildingVolume, "under_300");
    assert_eq!(scoring::total(&selections), Points::from_tenths(30));

    selections.set_text(FieldId::IsVolumeOver380, "yes");
    assert_eq!(scoring::total(&selections), Points::ZERO);
}

#[test]
fn multi_select_members_sum_individually() {
    let mut selections = Selections::new();
    selections.set_many(
        FieldId::FloorSlabTypes,
        vec![
            "unheated_below_frost".to_string(),
            "slab_integral_footing".to_string(),
        ],
    );
    assert_eq!(scoring::total(&selections), Points::from_tenths(10));

    selections.set_many(FieldId::FloorSlabTypes, vec!["heated_floors".to_string()]);
    assert_eq!(scoring::total(&selections), Points::from_tenths(25));
}

#[test]
fn missing_hrv_forces_not_applicable_at_any_total() {
    for tenths in [0, 95, 400, 990] {
        let classification =
            classify_tier(Points::from_tenths(tenths), Some(HrvPresence::Without));
        assert_eq!(classification.tier, Tier::NotApplicable);
        assert_eq!(classification.status, TierStatus::Destructive);
    }
}

#[test]
fn tier_thresholds_are_inclusive_lower_bounds() {
    let cases = [
        (99, Tier::Tier1),
        (100, Tier::Tier2),
        (199, Tier::Tier2),
        (200, Tier::Tier3),
        (399, Tier::Tier3),
        (400, Tier::Tier4),
        (749, Tier::Tier4),
        (750, Tier::Tier5),
    ];
    for (tenths, expected) in cases {
        let classification = classify_tier(Points::from_tenths(tenths), Some(HrvPresence::With));
        assert_eq!(classification.tier, expected, "at {tenths} tenths");
    }
}

#[test]
fn tier_rank_is_monotonic_in_points() {
    let mut previous = 0;
    for tenths in (0..=800).step_by(25) {
        let rank = classify_tier(Points::from_tenths(tenths), Some(HrvPresence::With))
            .tier
            .rank();
        assert!(rank >= previous, "rank regressed at {tenths} tenths");
        previous = rank;
    }
}

#[test]
fn unanswered_hrv_still_classifies_by_points() {
    let classification = classify_tier(Points::from_tenths(450), None);
    assert_eq!(classification.tier, Tier::Tier4);
    assert_eq!(classification.status, TierStatus::Success);
}

#[test]
fn hrv_precondition_overrides_a_fully_scored_record() {
    let mut selections = tiered_selections();
    selections.set_text(FieldId::HrvPresence, "no_hrv");

    let (total, classification) = scoring::classify(&selections);
    // Legacy answers keep scoring; only the classification collapses.
    assert_eq!(total, Points::from_tenths(360));
    assert_eq!(classification.tier, Tier::NotApplicable);
}

#[test]
fn cost_estimate_uses_the_tier_two_bracket() {
    let tier2 = estimate_costs(Tier::Tier2);
    let tier4 = estimate_costs(Tier::Tier4);

    assert!(tier2.prescriptive > tier4.prescriptive);
    assert_eq!(tier2.savings, tier2.prescriptive - tier2.performance);
    assert_eq!(tier4.savings, tier4.prescriptive - tier4.performance);
}

#[test]
fn points_display_with_one_decimal() {
    assert_eq!(Points::from_tenths(5).to_string(), "0.5");
    assert_eq!(Points::from_tenths(330).to_string(), "33.0");
}
