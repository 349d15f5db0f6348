use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::fields::{FieldId, FieldKind};

/// Identifier wrapper for compliance applications.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ProjectId(pub String);

/// Provinces served by the NBC 9.36 intake form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Province {
    Alberta,
    Saskatchewan,
}

impl Province {
    pub(crate) fn parse(token: &str) -> Option<Self> {
        match token {
            "alberta" => Some(Self::Alberta),
            "saskatchewan" => Some(Self::Saskatchewan),
            _ => None,
        }
    }
}

/// NBC climate zones occurring in Alberta and Saskatchewan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClimateZone {
    #[serde(rename = "6")]
    Zone6,
    #[serde(rename = "7A")]
    Zone7A,
    #[serde(rename = "7B")]
    Zone7B,
    #[serde(rename = "8")]
    Zone8,
}

impl ClimateZone {
    pub(crate) fn parse(token: &str) -> Option<Self> {
        match token {
            "6" => Some(Self::Zone6),
            "7A" => Some(Self::Zone7A),
            "7B" => Some(Self::Zone7B),
            "8" => Some(Self::Zone8),
            _ => None,
        }
    }
}

/// Residential building categories the form distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuildingType {
    SingleDetached,
    SingleAttached,
    SecondarySuite,
    MultiUnit,
}

impl BuildingType {
    pub(crate) fn parse(token: &str) -> Option<Self> {
        match token {
            "single_detached" => Some(Self::SingleDetached),
            "single_attached" => Some(Self::SingleAttached),
            "secondary_suite" => Some(Self::SecondarySuite),
            "multi_unit" => Some(Self::MultiUnit),
            _ => None,
        }
    }

    /// Secondary-suite questions apply to suites and to multi-unit buildings.
    pub fn has_secondary_suite(self) -> bool {
        matches!(self, Self::SecondarySuite | Self::MultiUnit)
    }
}

/// The four NBC 9.36 sub-clause routes a project can follow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompliancePath {
    #[serde(rename = "9362")]
    Prescriptive,
    #[serde(rename = "9365")]
    Performance,
    #[serde(rename = "9367")]
    TieredPerformance,
    #[serde(rename = "9368")]
    TieredPrescriptive,
}

impl CompliancePath {
    pub(crate) fn parse(token: &str) -> Option<Self> {
        match token {
            "9362" => Some(Self::Prescriptive),
            "9365" => Some(Self::Performance),
            "9367" => Some(Self::TieredPerformance),
            "9368" => Some(Self::TieredPrescriptive),
            _ => None,
        }
    }

    pub const fn clause(self) -> &'static str {
        match self {
            Self::Prescriptive => "9.36.2",
            Self::Performance => "9.36.5",
            Self::TieredPerformance => "9.36.7",
            Self::TieredPrescriptive => "9.36.8",
        }
    }

    /// Performance routes report section progress instead of hard field gates.
    pub fn uses_section_progress(self) -> bool {
        matches!(self, Self::Performance | Self::TieredPerformance)
    }
}

/// Whether the dwelling ventilates through a heat/energy recovery ventilator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HrvPresence {
    #[serde(rename = "with_hrv")]
    With,
    #[serde(rename = "no_hrv")]
    Without,
}

impl HrvPresence {
    pub(crate) fn parse(token: &str) -> Option<Self> {
        match token {
            "with_hrv" => Some(Self::With),
            "no_hrv" => Some(Self::Without),
            _ => None,
        }
    }
}

/// Foundation floor and slab assemblies offered by the multi-select.
///
/// Heated assemblies are mutually exclusive with the unheated/slab-on-grade
/// group; the exclusivity is enforced on mutation so downstream consumers
/// never have to re-derive it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FloorSlabType {
    HeatedFloors,
    UnheatedBelowFrost,
    UnheatedAboveFrost,
    SlabIntegralFooting,
}

impl FloorSlabType {
    pub const fn token(self) -> &'static str {
        match self {
            Self::HeatedFloors => "heated_floors",
            Self::UnheatedBelowFrost => "unheated_below_frost",
            Self::UnheatedAboveFrost => "unheated_above_frost",
            Self::SlabIntegralFooting => "slab_integral_footing",
        }
    }

    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "heated_floors" => Some(Self::HeatedFloors),
            "unheated_below_frost" => Some(Self::UnheatedBelowFrost),
            "unheated_above_frost" => Some(Self::UnheatedAboveFrost),
            "slab_integral_footing" => Some(Self::SlabIntegralFooting),
            _ => None,
        }
    }

    fn conflicts_with(self, other: Self) -> bool {
        let heated = |member: Self| matches!(member, Self::HeatedFloors);
        heated(self) != heated(other)
    }
}

/// One answer captured by the intake form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Flag(bool),
    Many(Vec<String>),
    Text(String),
}

impl FieldValue {
    /// Presence test used by validation and progress counts: arrays count by
    /// length, strings by trimmed content, and flags are always set because a
    /// deliberate "no" is still an answer.
    pub fn is_set(&self) -> bool {
        match self {
            FieldValue::Flag(_) => true,
            FieldValue::Many(items) => !items.is_empty(),
            FieldValue::Text(text) => !text.trim().is_empty(),
        }
    }
}

/// The in-progress application record: one flat mapping of field to answer.
///
/// Mutated field-by-field as the designer works through the form and saved
/// atomically by the repository; every engine component reads it immutably.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Selections {
    fields: BTreeMap<FieldId, FieldValue>,
}

impl Selections {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: FieldId) -> Option<&FieldValue> {
        self.fields.get(&field)
    }

    pub fn set(&mut self, field: FieldId, value: FieldValue) {
        self.fields.insert(field, value);
    }

    pub fn set_text(&mut self, field: FieldId, value: impl Into<String>) {
        self.set(field, FieldValue::Text(value.into()));
    }

    pub fn set_flag(&mut self, field: FieldId, value: bool) {
        self.set(field, FieldValue::Flag(value));
    }

    pub fn set_many(&mut self, field: FieldId, values: Vec<String>) {
        self.set(field, FieldValue::Many(values));
    }

    pub fn clear(&mut self, field: FieldId) {
        self.fields.remove(&field);
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldId, &FieldValue)> {
        self.fields.iter().map(|(field, value)| (*field, value))
    }

    pub fn text(&self, field: FieldId) -> Option<&str> {
        match self.fields.get(&field) {
            Some(FieldValue::Text(text)) => Some(text.as_str()),
            _ => None,
        }
    }

    pub fn many(&self, field: FieldId) -> &[String] {
        match self.fields.get(&field) {
            Some(FieldValue::Many(items)) => items.as_slice(),
            _ => &[],
        }
    }

    pub fn flag(&self, field: FieldId) -> Option<bool> {
        match self.fields.get(&field) {
            Some(FieldValue::Flag(value)) => Some(*value),
            _ => None,
        }
    }

    pub fn is_set(&self, field: FieldId) -> bool {
        self.fields
            .get(&field)
            .map(FieldValue::is_set)
            .unwrap_or(false)
    }

    pub fn compliance_path(&self) -> Option<CompliancePath> {
        self.text(FieldId::CompliancePath)
            .and_then(CompliancePath::parse)
    }

    pub fn building_type(&self) -> Option<BuildingType> {
        self.text(FieldId::BuildingType).and_then(BuildingType::parse)
    }

    pub fn province(&self) -> Option<Province> {
        self.text(FieldId::Province).and_then(Province::parse)
    }

    pub fn climate_zone(&self) -> Option<ClimateZone> {
        self.text(FieldId::ClimateZone).and_then(ClimateZone::parse)
    }

    pub fn hrv_presence(&self) -> Option<HrvPresence> {
        self.text(FieldId::HrvPresence).and_then(HrvPresence::parse)
    }

    /// Add a floor/slab assembly, clearing members of the conflicting group.
    ///
    /// Selecting heated floors removes the unheated and slab-on-grade
    /// members (and vice versa); re-selecting an active member is a no-op.
    pub fn select_floor_slab(&mut self, member: FloorSlabType) {
        let mut members: Vec<String> = self
            .many(FieldId::FloorSlabTypes)
            .iter()
            .filter(|token| {
                FloorSlabType::parse(token)
                    .map(|existing| !existing.conflicts_with(member))
                    .unwrap_or(false)
            })
            .cloned()
            .collect();
        let token = member.token().to_string();
        if !members.contains(&token) {
            members.push(token);
        }
        self.set_many(FieldId::FloorSlabTypes, members);
    }

    pub fn deselect_floor_slab(&mut self, member: FloorSlabType) {
        let members: Vec<String> = self
            .many(FieldId::FloorSlabTypes)
            .iter()
            .filter(|token| token.as_str() != member.token())
            .cloned()
            .collect();
        self.set_many(FieldId::FloorSlabTypes, members);
    }

    /// Parse a raw intake value according to the field's declared kind.
    pub fn set_raw(&mut self, field: FieldId, raw: &str) {
        match field.meta().kind {
            FieldKind::Flag => {
                let truthy = matches!(raw.trim(), "true" | "yes" | "1");
                self.set_flag(field, truthy);
            }
            FieldKind::MultiSelect => {
                if field == FieldId::FloorSlabTypes {
                    if let Some(member) = FloorSlabType::parse(raw.trim()) {
                        self.select_floor_slab(member);
                        return;
                    }
                }
                let mut items = self.many(field).to_vec();
                let value = raw.trim().to_string();
                if !value.is_empty() && !items.contains(&value) {
                    items.push(value);
                }
                self.set_many(field, items);
            }
            FieldKind::Text | FieldKind::Upload => {
                self.set_text(field, raw.trim());
            }
        }
    }
}

/// Kinds of supporting documentation attached before submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentCategory {
    DrawingSet,
    EnergyModelReport,
    BlowerDoorReport,
    WindowSchedule,
    Misc,
}

/// Metadata for an uploaded file so records keep an audit trail; the engine
/// itself only cares that at least one document exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentDescriptor {
    pub name: String,
    pub category: DocumentCategory,
    pub storage_key: String,
}

/// Everything a designer hands over in one submission attempt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectSubmission {
    pub selections: Selections,
    #[serde(default)]
    pub documents: Vec<DocumentDescriptor>,
    #[serde(default)]
    pub target_construction_start: Option<NaiveDate>,
}

impl ProjectSubmission {
    pub fn new(selections: Selections) -> Self {
        Self {
            selections,
            documents: Vec::new(),
            target_construction_start: None,
        }
    }

    pub fn has_documents(&self) -> bool {
        !self.documents.is_empty()
    }
}

/// High level status tracked for a stored application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectStatus {
    Draft,
    Submitted,
}

impl ProjectStatus {
    pub const fn label(self) -> &'static str {
        match self {
            ProjectStatus::Draft => "draft",
            ProjectStatus::Submitted => "submitted",
        }
    }
}
