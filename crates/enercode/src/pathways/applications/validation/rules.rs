//! Requirement schedules, expressed as flat rule sets instead of one long
//! conditional cascade: each rule names the condition under which its fields
//! become required, and a schedule is evaluated by walking its rules in
//! order. Fields outside the active path's schedule are never flagged.

use super::super::domain::{
    BuildingType, CompliancePath, FloorSlabType, HrvPresence, Selections,
};
use super::super::fields::{FieldId, FormStep};

/// One requirement rule: when `applies_when` holds, every field in
/// `requires` joins the required set.
pub(crate) struct Rule {
    pub(crate) applies_when: fn(&Selections) -> bool,
    pub(crate) requires: &'static [FieldId],
}

fn always(_: &Selections) -> bool {
    true
}

fn hrv_installed(s: &Selections) -> bool {
    s.hrv_presence() == Some(HrvPresence::With)
}

fn cathedral_or_flat(s: &Selections) -> bool {
    s.text(FieldId::HasCathedralOrFlatCeiling) == Some("yes")
}

fn skylights_present(s: &Selections) -> bool {
    s.text(FieldId::HasSkylights) == Some("yes")
}

fn heating_type_chosen(s: &Selections) -> bool {
    s.is_set(FieldId::HeatingType)
}

fn boiler_heating(s: &Selections) -> bool {
    s.text(FieldId::HeatingType) == Some("boiler")
}

fn indirect_tank_selected(s: &Selections) -> bool {
    boiler_heating(s) && s.text(FieldId::IndirectTank) == Some("yes")
}

/// The water-heater questions are suppressed once an indirect tank off the
/// boiler supplies hot water.
fn water_heater_applies(s: &Selections) -> bool {
    !indirect_tank_selected(s)
}

fn floor_member(s: &Selections, member: FloorSlabType) -> bool {
    s.many(FieldId::FloorSlabTypes)
        .iter()
        .any(|token| token == member.token())
}

fn heated_floors_selected(s: &Selections) -> bool {
    floor_member(s, FloorSlabType::HeatedFloors)
}

fn unheated_below_frost_selected(s: &Selections) -> bool {
    floor_member(s, FloorSlabType::UnheatedBelowFrost)
}

fn unheated_above_frost_selected(s: &Selections) -> bool {
    floor_member(s, FloorSlabType::UnheatedAboveFrost)
}

fn slab_integral_footing_selected(s: &Selections) -> bool {
    floor_member(s, FloorSlabType::SlabIntegralFooting)
}

fn cooling_selected(s: &Selections) -> bool {
    s.text(FieldId::HasCooling) == Some("yes")
}

fn dwhr_selected(s: &Selections) -> bool {
    s.text(FieldId::HasDwhr) == Some("yes")
}

fn secondary_suite_building(s: &Selections) -> bool {
    s.building_type()
        .map(|building| building.has_secondary_suite())
        .unwrap_or(false)
}

fn secondary_hrv_installed(s: &Selections) -> bool {
    secondary_suite_building(s)
        && s.text(FieldId::SecondaryHrvPresence) == Some("with_hrv")
}

fn secondary_heating_selected(s: &Selections) -> bool {
    secondary_suite_building(s) && s.text(FieldId::HasSecondaryHeating) == Some("yes")
}

fn secondary_water_heater_selected(s: &Selections) -> bool {
    secondary_suite_building(s) && s.text(FieldId::HasSecondaryWaterHeater) == Some("yes")
}

fn multi_unit_building(s: &Selections) -> bool {
    s.building_type() == Some(BuildingType::MultiUnit)
}

fn murb_multiple_heating(s: &Selections) -> bool {
    multi_unit_building(s) && s.text(FieldId::HasMurbMultipleHeating) == Some("yes")
}

fn murb_multiple_water_heater(s: &Selections) -> bool {
    multi_unit_building(s) && s.text(FieldId::HasMurbMultipleWaterHeater) == Some("yes")
}

fn volume_under_cap(s: &Selections) -> bool {
    s.text(FieldId::IsVolumeOver380) == Some("no")
}

static PROJECT_DETAILS_RULES: &[Rule] = &[Rule {
    applies_when: always,
    requires: &[
        FieldId::ApplicantName,
        FieldId::ApplicantEmail,
        FieldId::ApplicantPhone,
        FieldId::ProjectAddress,
        FieldId::City,
        FieldId::Province,
        FieldId::ClimateZone,
        FieldId::BuildingType,
    ],
}];

static PATHWAY_RULES: &[Rule] = &[Rule {
    applies_when: always,
    requires: &[FieldId::CompliancePath],
}];

/// Shared tail of the 9.36.2 and 9.36.8 schedules: the conditional cascades
/// hanging off the base questions.
static SPEC_CASCADES: [Rule; 13] = [
    Rule {
        applies_when: hrv_installed,
        requires: &[FieldId::HrvEfficiency],
    },
    Rule {
        applies_when: cathedral_or_flat,
        requires: &[FieldId::CathedralFlatRsi],
    },
    Rule {
        applies_when: skylights_present,
        requires: &[FieldId::SkylightUValue],
    },
    Rule {
        applies_when: heating_type_chosen,
        requires: &[FieldId::HeatingEfficiency],
    },
    Rule {
        applies_when: water_heater_applies,
        requires: &[FieldId::WaterHeaterType],
    },
    Rule {
        applies_when: boiler_heating,
        requires: &[FieldId::IndirectTank],
    },
    Rule {
        applies_when: indirect_tank_selected,
        requires: &[FieldId::IndirectTankSize],
    },
    Rule {
        applies_when: heated_floors_selected,
        requires: &[FieldId::HeatedFloorRsi],
    },
    Rule {
        applies_when: unheated_below_frost_selected,
        requires: &[FieldId::UnheatedBelowFrostRsi],
    },
    Rule {
        applies_when: unheated_above_frost_selected,
        requires: &[FieldId::UnheatedAboveFrostRsi],
    },
    Rule {
        applies_when: slab_integral_footing_selected,
        requires: &[FieldId::SlabIntegralFootingRsi],
    },
    Rule {
        applies_when: cooling_selected,
        requires: &[FieldId::CoolingEfficiency],
    },
    Rule {
        applies_when: dwhr_selected,
        requires: &[FieldId::DwhrEfficiency],
    },
];

static PRESCRIPTIVE_BASE: Rule = Rule {
    applies_when: always,
    requires: &[
        FieldId::HrvPresence,
        FieldId::AtticInsulation,
        FieldId::HasCathedralOrFlatCeiling,
        FieldId::WallInsulation,
        FieldId::BelowGradeInsulation,
        FieldId::FloorSlabTypes,
        FieldId::WindowUValue,
        FieldId::HasSkylights,
        FieldId::Airtightness,
        FieldId::HeatingType,
        FieldId::HasCooling,
        FieldId::HasDwhr,
    ],
};

static SECONDARY_SUITE_RULES: [Rule; 4] = [
    Rule {
        applies_when: secondary_suite_building,
        requires: &[
            FieldId::SecondaryHrvPresence,
            FieldId::HasSecondaryHeating,
            FieldId::HasSecondaryWaterHeater,
        ],
    },
    Rule {
        applies_when: secondary_hrv_installed,
        requires: &[FieldId::SecondaryHrvEfficiency],
    },
    Rule {
        applies_when: secondary_heating_selected,
        requires: &[
            FieldId::SecondaryHeatingType,
            FieldId::SecondaryHeatingEfficiency,
        ],
    },
    Rule {
        applies_when: secondary_water_heater_selected,
        requires: &[FieldId::SecondaryWaterHeaterType],
    },
];

static TIERED_PRESCRIPTIVE_BASE: Rule = Rule {
    applies_when: always,
    requires: &[
        FieldId::HrvPresence,
        FieldId::AtticInsulation,
        FieldId::HasCathedralOrFlatCeiling,
        FieldId::WallInsulation,
        FieldId::BelowGradeInsulation,
        FieldId::FloorSlabTypes,
        FieldId::WindowUValue,
        FieldId::HasSkylights,
        FieldId::Airtightness,
        FieldId::IsVolumeOver380,
        FieldId::HeatingType,
        FieldId::HasCooling,
        FieldId::HasDwhr,
    ],
};

static VOLUME_BAND_RULE: Rule = Rule {
    applies_when: volume_under_cap,
    requires: &[FieldId::BuildingVolume],
};

static MURB_RULES: [Rule; 3] = [
    Rule {
        applies_when: multi_unit_building,
        requires: &[
            FieldId::HasMurbMultipleHeating,
            FieldId::HasMurbMultipleWaterHeater,
        ],
    },
    Rule {
        applies_when: murb_multiple_heating,
        requires: &[
            FieldId::MurbSecondHeatingType,
            FieldId::MurbSecondHeatingEfficiency,
        ],
    },
    Rule {
        applies_when: murb_multiple_water_heater,
        requires: &[FieldId::MurbSecondWaterHeaterType],
    },
];

static DOCUMENT_RULES: &[Rule] = &[Rule {
    applies_when: always,
    requires: &[FieldId::SupportingDocuments],
}];

/// Section key groups driving the 9.36.5 / 9.36.7 progress accordions.
pub static ENVELOPE_SECTION_KEYS: &[FieldId] = &[
    FieldId::ProposedCeilingRsi,
    FieldId::ProposedWallRsi,
    FieldId::ProposedWindowUValue,
    FieldId::ProposedAch50,
];

pub static MECHANICAL_SECTION_KEYS: &[FieldId] = &[
    FieldId::HeatingType,
    FieldId::WaterHeaterType,
    FieldId::HrvPresence,
    FieldId::HasDwhr,
];

/// Fields that are recommended but never submission-blocking.
pub static RECOMMENDED_FIELDS: &[FieldId] = &[FieldId::Certifications, FieldId::Comments];

fn evaluate(rules: &[Rule], selections: &Selections, out: &mut Vec<FieldId>) {
    for rule in rules {
        if (rule.applies_when)(selections) {
            for field in rule.requires {
                if !out.contains(field) {
                    out.push(*field);
                }
            }
        }
    }
}

fn building_spec_rules(path: CompliancePath) -> Vec<&'static Rule> {
    match path {
        CompliancePath::Prescriptive => {
            let mut rules: Vec<&'static Rule> = vec![&PRESCRIPTIVE_BASE];
            rules.extend(SPEC_CASCADES.iter());
            rules.extend(SECONDARY_SUITE_RULES.iter());
            rules
        }
        CompliancePath::TieredPrescriptive => {
            let mut rules: Vec<&'static Rule> = vec![&TIERED_PRESCRIPTIVE_BASE, &VOLUME_BAND_RULE];
            rules.extend(SPEC_CASCADES.iter());
            rules.extend(MURB_RULES.iter());
            rules
        }
        // Performance routes gate on section progress, not hard field lists.
        CompliancePath::Performance | CompliancePath::TieredPerformance => Vec::new(),
    }
}

/// The ordered, deduplicated required-field set for one form step under the
/// current selections. Order is schedule order, which matches on-screen
/// order, so callers can use first-missing for scroll targeting.
pub fn required_fields_for(step: FormStep, selections: &Selections) -> Vec<FieldId> {
    let mut required = Vec::new();
    match step {
        FormStep::ProjectDetails => evaluate(PROJECT_DETAILS_RULES, selections, &mut required),
        FormStep::PathwaySelection => evaluate(PATHWAY_RULES, selections, &mut required),
        FormStep::BuildingSpecs => {
            if let Some(path) = selections.compliance_path() {
                for rule in building_spec_rules(path) {
                    if (rule.applies_when)(selections) {
                        for field in rule.requires {
                            if !required.contains(field) {
                                required.push(*field);
                            }
                        }
                    }
                }
            }
        }
        FormStep::Documents => evaluate(DOCUMENT_RULES, selections, &mut required),
        FormStep::Review => {}
    }
    required
}
