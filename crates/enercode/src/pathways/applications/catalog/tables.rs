//! Base option tables for climate zones 6/7A/8. Point figures mirror the
//! published 9.36.8 point schedule for the Prairie provinces; they are
//! configuration, not computation.

use super::{Category, OptionEntry, Points};

const fn entry(value: &'static str, label: &'static str, tenths: i32) -> OptionEntry {
    OptionEntry {
        value,
        label,
        points: Points::from_tenths(tenths),
    }
}

static CEILING: &[OptionEntry] = &[
    entry("rsi_8_67", "RSI 8.67 (R-49) attic", 0),
    entry("rsi_10_43", "RSI 10.43 (R-60) attic", 30),
    entry("rsi_12_32", "RSI 12.32 (R-70) attic", 45),
];

static CATHEDRAL_CEILING: &[OptionEntry] = &[
    entry("rsi_4_67", "RSI 4.67 cathedral/flat", 0),
    entry("rsi_5_46", "RSI 5.46 cathedral/flat", 15),
    entry("rsi_6_50", "RSI 6.50 cathedral/flat", 25),
];

static WALL: &[OptionEntry] = &[
    entry("rsi_3_08", "RSI 3.08 effective", 0),
    entry("rsi_3_69", "RSI 3.69 effective", 40),
    entry("rsi_3_85", "RSI 3.85 effective", 60),
    entry("rsi_4_57", "RSI 4.57 effective", 90),
    entry("rsi_5_10", "RSI 5.10 effective", 105),
];

static BELOW_GRADE: &[OptionEntry] = &[
    entry("rsi_2_98", "RSI 2.98 effective", 0),
    entry("rsi_3_46", "RSI 3.46 effective", 30),
    entry("rsi_3_97", "RSI 3.97 effective", 55),
];

static FLOOR_ASSEMBLY: &[OptionEntry] = &[
    entry("heated_floors", "Heated floors", 25),
    entry("unheated_below_frost", "Unheated floor below frost line", 0),
    entry("unheated_above_frost", "Unheated floor above frost line", 0),
    entry(
        "slab_integral_footing",
        "Slab-on-grade with integral footing",
        10,
    ),
];

static HEATED_FLOOR: &[OptionEntry] = &[
    entry("rsi_1_34", "RSI 1.34 under heated floor", 0),
    entry("rsi_2_32", "RSI 2.32 under heated floor", 15),
    entry("rsi_2_84", "RSI 2.84 under heated floor", 25),
];

static UNHEATED_BELOW_FROST: &[OptionEntry] = &[
    entry("rsi_1_96", "RSI 1.96 below frost line", 0),
    entry("rsi_2_84", "RSI 2.84 below frost line", 10),
];

static UNHEATED_ABOVE_FROST: &[OptionEntry] = &[
    entry("rsi_2_84", "RSI 2.84 above frost line", 0),
    entry("rsi_3_72", "RSI 3.72 above frost line", 10),
];

static SLAB_INTEGRAL_FOOTING: &[OptionEntry] = &[
    entry("rsi_1_96", "RSI 1.96 slab perimeter", 0),
    entry("rsi_2_84", "RSI 2.84 slab perimeter", 10),
];

static WINDOW: &[OptionEntry] = &[
    entry("u_1_61", "U-1.61 W/(m²·K)", 0),
    entry("u_1_40", "U-1.40 W/(m²·K)", 30),
    entry("u_1_22", "U-1.22 W/(m²·K)", 55),
    entry("u_1_05", "U-1.05 W/(m²·K)", 85),
];

static SKYLIGHT: &[OptionEntry] = &[
    entry("u_2_90", "U-2.90 W/(m²·K)", 0),
    entry("u_2_40", "U-2.40 W/(m²·K)", 10),
    entry("u_2_00", "U-2.00 W/(m²·K)", 20),
];

static AIRTIGHTNESS: &[OptionEntry] = &[
    entry("ach_3_2", "3.2 ACH50 (unguarded)", 0),
    entry("ach_2_5", "2.5 ACH50 (unguarded)", 45),
    entry("ach_2_0", "2.0 ACH50 (unguarded)", 75),
    entry("ach_1_5", "1.5 ACH50 (unguarded)", 120),
    entry("ach_1_0", "1.0 ACH50 (unguarded)", 165),
    entry("ach_0_6", "0.6 ACH50 (unguarded)", 210),
];

static HRV: &[OptionEntry] = &[
    entry("sre_60", "60% SRE at -25°C", 15),
    entry("sre_65", "65% SRE at -25°C", 30),
    entry("sre_70", "70% SRE at -25°C", 45),
    entry("sre_75", "75% SRE at -25°C", 60),
    entry("sre_81", "81% SRE at -25°C", 75),
];

static HEATING: &[OptionEntry] = &[
    entry("afue_92", "92% AFUE furnace", 0),
    entry("afue_95", "95% AFUE furnace", 15),
    entry("afue_96", "96% AFUE furnace", 25),
    entry("afue_98", "98% AFUE furnace", 35),
    entry("boiler_afue_90", "90% AFUE boiler", 0),
    entry("boiler_afue_95", "95% AFUE boiler", 15),
    entry("electric_resistance", "Electric resistance", 0),
    entry("ashp_hspf_7_1", "Air-source heat pump HSPF 7.1", 90),
    entry("ccashp_hspf_10", "Cold-climate ASHP HSPF 10", 150),
];

static COOLING: &[OptionEntry] = &[
    entry("seer_13", "SEER 13", 0),
    entry("seer_15", "SEER 15", 10),
    entry("seer_18", "SEER 18", 25),
];

static WATER_HEATER: &[OptionEntry] = &[
    entry("gas_storage_ef_0_60", "Gas storage EF 0.60", 0),
    entry("gas_storage_ef_0_69", "Gas storage EF 0.69", 15),
    entry("condensing_ef_0_86", "Condensing storage EF 0.86", 30),
    entry("tankless_ef_0_95", "Condensing tankless EF 0.95", 45),
    entry("electric_storage_ef_0_93", "Electric storage EF 0.93", 15),
    entry("hpwh_ef_2_35", "Heat pump water heater EF 2.35", 90),
];

static DWHR: &[OptionEntry] = &[
    entry("eff_42", "42% recovery efficiency", 15),
    entry("eff_55", "55% recovery efficiency", 30),
];

static BUILDING_VOLUME: &[OptionEntry] = &[
    entry("under_300", "Under 300 m³", 30),
    entry("from_300_to_380", "300 m³ to 380 m³", 15),
    entry("over_380", "Over 380 m³", 0),
];

pub(super) fn base(category: Category) -> &'static [OptionEntry] {
    match category {
        Category::CeilingInsulation => CEILING,
        Category::CathedralCeilingInsulation => CATHEDRAL_CEILING,
        Category::WallInsulation => WALL,
        Category::BelowGradeInsulation => BELOW_GRADE,
        Category::FloorAssembly => FLOOR_ASSEMBLY,
        Category::HeatedFloorInsulation => HEATED_FLOOR,
        Category::UnheatedFloorBelowFrostInsulation => UNHEATED_BELOW_FROST,
        Category::UnheatedFloorAboveFrostInsulation => UNHEATED_ABOVE_FROST,
        Category::SlabIntegralFootingInsulation => SLAB_INTEGRAL_FOOTING,
        Category::WindowUValue => WINDOW,
        Category::SkylightUValue => SKYLIGHT,
        Category::Airtightness => AIRTIGHTNESS,
        Category::HrvEfficiency => HRV,
        Category::HeatingEfficiency => HEATING,
        Category::CoolingEfficiency => COOLING,
        Category::WaterHeater => WATER_HEATER,
        Category::DrainWaterHeatRecovery => DWHR,
        Category::BuildingVolume => BUILDING_VOLUME,
    }
}
