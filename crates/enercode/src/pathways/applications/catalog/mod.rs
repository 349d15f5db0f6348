//! Static option catalog: maps a (category, selected value) pair to its
//! point award, with Alberta climate-zone 7B variant tables for the six
//! categories the code prices differently in that zone.
//!
//! Lookups fail open: an unknown or blank value scores zero so that an
//! incomplete form can always be summarized without erroring.

mod tables;
mod zone7b;

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::domain::{ClimateZone, Province, Selections};
use super::fields::FieldId;

/// Point value with one-decimal precision, stored as integer tenths so
/// accumulation stays exact; rounding happens only at display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Points(i32);

impl Points {
    pub const ZERO: Points = Points(0);

    pub const fn from_tenths(tenths: i32) -> Self {
        Points(tenths)
    }

    pub const fn tenths(self) -> i32 {
        self.0
    }

    pub fn value(self) -> f64 {
        f64::from(self.0) / 10.0
    }
}

impl Add for Points {
    type Output = Points;

    fn add(self, rhs: Points) -> Points {
        Points(self.0 + rhs.0)
    }
}

impl AddAssign for Points {
    fn add_assign(&mut self, rhs: Points) {
        self.0 += rhs.0;
    }
}

impl Sum for Points {
    fn sum<I: Iterator<Item = Points>>(iter: I) -> Points {
        iter.fold(Points::ZERO, Add::add)
    }
}

impl fmt::Display for Points {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.value())
    }
}

impl Serialize for Points {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.value())
    }
}

impl<'de> Deserialize<'de> for Points {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = f64::deserialize(deserializer)?;
        Ok(Points((value * 10.0).round() as i32))
    }
}

/// Scoring categories, one per option table.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    CeilingInsulation,
    CathedralCeilingInsulation,
    WallInsulation,
    BelowGradeInsulation,
    FloorAssembly,
    HeatedFloorInsulation,
    UnheatedFloorBelowFrostInsulation,
    UnheatedFloorAboveFrostInsulation,
    SlabIntegralFootingInsulation,
    WindowUValue,
    SkylightUValue,
    Airtightness,
    HrvEfficiency,
    HeatingEfficiency,
    CoolingEfficiency,
    WaterHeater,
    DrainWaterHeatRecovery,
    BuildingVolume,
}

impl Category {
    pub const fn label(self) -> &'static str {
        match self {
            Category::CeilingInsulation => "Attic insulation",
            Category::CathedralCeilingInsulation => "Cathedral/flat ceiling insulation",
            Category::WallInsulation => "Above-grade walls",
            Category::BelowGradeInsulation => "Below-grade walls",
            Category::FloorAssembly => "Floor and slab assemblies",
            Category::HeatedFloorInsulation => "Heated floors",
            Category::UnheatedFloorBelowFrostInsulation => "Unheated floors below frost",
            Category::UnheatedFloorAboveFrostInsulation => "Unheated floors above frost",
            Category::SlabIntegralFootingInsulation => "Slab-on-grade perimeter",
            Category::WindowUValue => "Windows and doors",
            Category::SkylightUValue => "Skylights",
            Category::Airtightness => "Airtightness",
            Category::HrvEfficiency => "Heat recovery ventilation",
            Category::HeatingEfficiency => "Space heating",
            Category::CoolingEfficiency => "Space cooling",
            Category::WaterHeater => "Service water heating",
            Category::DrainWaterHeatRecovery => "Drain water heat recovery",
            Category::BuildingVolume => "Building volume",
        }
    }
}

/// One selectable option with its point award.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionEntry {
    pub value: &'static str,
    pub label: &'static str,
    pub points: Points,
}

/// Context scalars that swap tables or cap categories; derived purely from
/// the selections record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TableContext {
    pub zone_7b: bool,
    pub volume_over_cap: bool,
}

impl TableContext {
    pub fn for_selections(selections: &Selections) -> Self {
        let zone_7b = selections.province() == Some(Province::Alberta)
            && selections.climate_zone() == Some(ClimateZone::Zone7B);
        let volume_over_cap = selections.text(FieldId::IsVolumeOver380) == Some("yes");
        Self {
            zone_7b,
            volume_over_cap,
        }
    }
}

/// The option table for a category under the given context.
pub fn options(category: Category, ctx: &TableContext) -> &'static [OptionEntry] {
    if ctx.zone_7b {
        if let Some(variant) = zone7b::variant(category) {
            return variant;
        }
    }
    tables::base(category)
}

/// Points awarded for `value` within `category`; zero for unknown or blank
/// values. The building-volume category is capped to zero outright when the
/// dwelling exceeds the 380 m³ volume threshold.
pub fn points_for(category: Category, value: &str, ctx: &TableContext) -> Points {
    if category == Category::BuildingVolume && ctx.volume_over_cap {
        return Points::ZERO;
    }
    options(category, ctx)
        .iter()
        .find(|entry| entry.value == value)
        .map(|entry| entry.points)
        .unwrap_or(Points::ZERO)
}
