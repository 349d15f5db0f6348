//! Variant tables for Alberta climate zone 7B. The zone's stricter
//! prescriptive baseline shifts the award for the same option token, so the
//! whole table is swapped rather than adjusted entry-by-entry.

use super::{Category, OptionEntry, Points};

const fn entry(value: &'static str, label: &'static str, tenths: i32) -> OptionEntry {
    OptionEntry {
        value,
        label,
        points: Points::from_tenths(tenths),
    }
}

static WALL_7B: &[OptionEntry] = &[
    entry("rsi_3_08", "RSI 3.08 effective", 0),
    entry("rsi_3_69", "RSI 3.69 effective", 0),
    entry("rsi_3_85", "RSI 3.85 effective", 30),
    entry("rsi_4_57", "RSI 4.57 effective", 60),
    entry("rsi_5_10", "RSI 5.10 effective", 84),
];

static BELOW_GRADE_7B: &[OptionEntry] = &[
    entry("rsi_2_98", "RSI 2.98 effective", 0),
    entry("rsi_3_46", "RSI 3.46 effective", 15),
    entry("rsi_3_97", "RSI 3.97 effective", 35),
];

static WINDOW_7B: &[OptionEntry] = &[
    entry("u_1_61", "U-1.61 W/(m²·K)", 0),
    entry("u_1_40", "U-1.40 W/(m²·K)", 0),
    entry("u_1_22", "U-1.22 W/(m²·K)", 30),
    entry("u_1_05", "U-1.05 W/(m²·K)", 55),
    entry("u_0_85", "U-0.85 W/(m²·K)", 85),
];

static AIRTIGHTNESS_7B: &[OptionEntry] = &[
    entry("ach_3_2", "3.2 ACH50 (unguarded)", 0),
    entry("ach_2_5", "2.5 ACH50 (unguarded)", 30),
    entry("ach_2_0", "2.0 ACH50 (unguarded)", 60),
    entry("ach_1_5", "1.5 ACH50 (unguarded)", 100),
    entry("ach_1_0", "1.0 ACH50 (unguarded)", 140),
    entry("ach_0_6", "0.6 ACH50 (unguarded)", 180),
];

static HRV_7B: &[OptionEntry] = &[
    entry("sre_60", "60% SRE at -25°C", 25),
    entry("sre_65", "65% SRE at -25°C", 44),
    entry("sre_70", "70% SRE at -25°C", 63),
    entry("sre_75", "75% SRE at -25°C", 82),
    entry("sre_81", "81% SRE at -25°C", 100),
];

static WATER_HEATER_7B: &[OptionEntry] = &[
    entry("gas_storage_ef_0_60", "Gas storage EF 0.60", 0),
    entry("gas_storage_ef_0_69", "Gas storage EF 0.69", 12),
    entry("condensing_ef_0_86", "Condensing storage EF 0.86", 25),
    entry("tankless_ef_0_95", "Condensing tankless EF 0.95", 38),
    entry("electric_storage_ef_0_93", "Electric storage EF 0.93", 12),
    entry("hpwh_ef_2_35", "Heat pump water heater EF 2.35", 80),
];

/// Zone 7B overrides; categories without an entry fall back to the base
/// tables.
pub(super) fn variant(category: Category) -> Option<&'static [OptionEntry]> {
    match category {
        Category::WallInsulation => Some(WALL_7B),
        Category::BelowGradeInsulation => Some(BELOW_GRADE_7B),
        Category::WindowUValue => Some(WINDOW_7B),
        Category::Airtightness => Some(AIRTIGHTNESS_7B),
        Category::HrvEfficiency => Some(HRV_7B),
        Category::WaterHeater => Some(WATER_HEATER_7B),
        _ => None,
    }
}
