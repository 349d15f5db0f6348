//! Scoring engine: folds the selections record into a per-category point
//! breakdown and a grand total.

mod tier;

pub use tier::{
    classify as classify_tier, estimate_costs, CostEstimate, Tier, TierClassification, TierStatus,
};

use std::collections::BTreeMap;

use super::catalog::{self, Category, Points, TableContext};
use super::domain::{FieldValue, Selections};
use super::fields::FieldId;

/// True when the water-heater question is moot: an indirect tank off the
/// boiler supplies hot water, so a lingering water-heater answer must not
/// score.
pub(crate) fn water_heater_suppressed(selections: &Selections) -> bool {
    selections.text(FieldId::HeatingType) == Some("boiler")
        && selections.text(FieldId::IndirectTank) == Some("yes")
}

/// Per-category point contributions for every scoring-relevant answer.
///
/// Boolean answers never contribute; multi-select answers sum over their
/// members. The fold is a plain commutative sum, so visiting order cannot
/// change the result.
pub fn breakdown(selections: &Selections) -> BTreeMap<Category, Points> {
    let ctx = TableContext::for_selections(selections);
    let suppress_water_heater = water_heater_suppressed(selections);
    let mut totals = BTreeMap::new();

    for (field, value) in selections.iter() {
        let Some(category) = field.category() else {
            continue;
        };
        if category == Category::WaterHeater && suppress_water_heater {
            continue;
        }
        let contribution = match value {
            FieldValue::Flag(_) => continue,
            FieldValue::Text(text) => catalog::points_for(category, text.trim(), &ctx),
            FieldValue::Many(items) => items
                .iter()
                .map(|item| catalog::points_for(category, item.trim(), &ctx))
                .sum(),
        };
        *totals.entry(category).or_insert(Points::ZERO) += contribution;
    }

    totals
}

/// Grand total across every category.
pub fn total(selections: &Selections) -> Points {
    breakdown(selections).into_values().sum()
}

/// Total plus tier in one call, for display panels that want both.
pub fn classify(selections: &Selections) -> (Points, TierClassification) {
    let points = total(selections);
    let classification = tier::classify(points, selections.hrv_presence());
    (points, classification)
}
