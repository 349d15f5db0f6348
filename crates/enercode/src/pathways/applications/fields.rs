//! Single source of truth for form fields: every identifier carries its
//! human label, owning form step, answer kind, and (when the answer scores
//! points) the catalog category it is priced against.

use serde::{Deserialize, Serialize};

use super::catalog::Category;

/// Ordered steps of the intake form; declaration order is on-screen order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum FormStep {
    ProjectDetails,
    PathwaySelection,
    BuildingSpecs,
    Documents,
    Review,
}

impl FormStep {
    pub const fn label(self) -> &'static str {
        match self {
            FormStep::ProjectDetails => "Project details",
            FormStep::PathwaySelection => "Compliance pathway",
            FormStep::BuildingSpecs => "Building specifications",
            FormStep::Documents => "Supporting documents",
            FormStep::Review => "Review and submit",
        }
    }

    pub const fn number(self) -> u8 {
        match self {
            FormStep::ProjectDetails => 1,
            FormStep::PathwaySelection => 2,
            FormStep::BuildingSpecs => 3,
            FormStep::Documents => 4,
            FormStep::Review => 5,
        }
    }
}

/// Shape of the answer a field stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    MultiSelect,
    Flag,
    Upload,
}

/// Static metadata attached to each field identifier.
#[derive(Debug, Clone, Copy)]
pub struct FieldMeta {
    pub label: &'static str,
    pub step: FormStep,
    pub kind: FieldKind,
    pub category: Option<Category>,
}

/// Every field the intake form collects. Wire names are the camelCase serde
/// renames, matching the keys the hosting form posts.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum FieldId {
    // Step 1: applicant and building metadata
    ApplicantName,
    ApplicantEmail,
    ApplicantPhone,
    CompanyName,
    ProjectName,
    ProjectAddress,
    City,
    PostalCode,
    Province,
    ClimateZone,
    BuildingType,
    // Step 2: pathway choice
    CompliancePath,
    // Step 3: envelope
    HrvPresence,
    HrvEfficiency,
    AtticInsulation,
    HasCathedralOrFlatCeiling,
    CathedralFlatRsi,
    WallInsulation,
    BelowGradeInsulation,
    FloorSlabTypes,
    HeatedFloorRsi,
    UnheatedBelowFrostRsi,
    UnheatedAboveFrostRsi,
    SlabIntegralFootingRsi,
    WindowUValue,
    HasSkylights,
    SkylightUValue,
    Airtightness,
    MidConstructionBlowerDoorPlanned,
    // Step 3: mechanical
    HeatingType,
    HeatingEfficiency,
    HasCooling,
    CoolingEfficiency,
    WaterHeaterType,
    IndirectTank,
    IndirectTankSize,
    HasDwhr,
    DwhrEfficiency,
    IsVolumeOver380,
    BuildingVolume,
    // Step 3: secondary suite schedule
    SecondaryHrvPresence,
    SecondaryHrvEfficiency,
    HasSecondaryHeating,
    SecondaryHeatingType,
    SecondaryHeatingEfficiency,
    HasSecondaryWaterHeater,
    SecondaryWaterHeaterType,
    // Step 3: MURB multiple-system schedule
    HasMurbMultipleHeating,
    MurbSecondHeatingType,
    MurbSecondHeatingEfficiency,
    HasMurbMultipleWaterHeater,
    MurbSecondWaterHeaterType,
    // Step 3: performance-path proposed values (free numeric entry)
    ProposedCeilingRsi,
    ProposedWallRsi,
    ProposedWindowUValue,
    ProposedAch50,
    // Step 4: upload marker
    SupportingDocuments,
    // Step 5: review extras
    Certifications,
    Comments,
}

impl FieldId {
    pub const ALL: [FieldId; 59] = [
        FieldId::ApplicantName,
        FieldId::ApplicantEmail,
        FieldId::ApplicantPhone,
        FieldId::CompanyName,
        FieldId::ProjectName,
        FieldId::ProjectAddress,
        FieldId::City,
        FieldId::PostalCode,
        FieldId::Province,
        FieldId::ClimateZone,
        FieldId::BuildingType,
        FieldId::CompliancePath,
        FieldId::HrvPresence,
        FieldId::HrvEfficiency,
        FieldId::AtticInsulation,
        FieldId::HasCathedralOrFlatCeiling,
        FieldId::CathedralFlatRsi,
        FieldId::WallInsulation,
        FieldId::BelowGradeInsulation,
        FieldId::FloorSlabTypes,
        FieldId::HeatedFloorRsi,
        FieldId::UnheatedBelowFrostRsi,
        FieldId::UnheatedAboveFrostRsi,
        FieldId::SlabIntegralFootingRsi,
        FieldId::WindowUValue,
        FieldId::HasSkylights,
        FieldId::SkylightUValue,
        FieldId::Airtightness,
        FieldId::MidConstructionBlowerDoorPlanned,
        FieldId::HeatingType,
        FieldId::HeatingEfficiency,
        FieldId::HasCooling,
        FieldId::CoolingEfficiency,
        FieldId::WaterHeaterType,
        FieldId::IndirectTank,
        FieldId::IndirectTankSize,
        FieldId::HasDwhr,
        FieldId::DwhrEfficiency,
        FieldId::IsVolumeOver380,
        FieldId::BuildingVolume,
        FieldId::SecondaryHrvPresence,
        FieldId::SecondaryHrvEfficiency,
        FieldId::HasSecondaryHeating,
        FieldId::SecondaryHeatingType,
        FieldId::SecondaryHeatingEfficiency,
        FieldId::HasSecondaryWaterHeater,
        FieldId::SecondaryWaterHeaterType,
        FieldId::HasMurbMultipleHeating,
        FieldId::MurbSecondHeatingType,
        FieldId::MurbSecondHeatingEfficiency,
        FieldId::HasMurbMultipleWaterHeater,
        FieldId::MurbSecondWaterHeaterType,
        FieldId::ProposedCeilingRsi,
        FieldId::ProposedWallRsi,
        FieldId::ProposedWindowUValue,
        FieldId::ProposedAch50,
        FieldId::SupportingDocuments,
        FieldId::Certifications,
        FieldId::Comments,
    ];

    /// Wire name used in JSON payloads and spreadsheet exports. Kept in sync
    /// with the serde rename; the intake mapping tests assert the two agree.
    pub const fn wire_name(self) -> &'static str {
        match self {
            FieldId::ApplicantName => "applicantName",
            FieldId::ApplicantEmail => "applicantEmail",
            FieldId::ApplicantPhone => "applicantPhone",
            FieldId::CompanyName => "companyName",
            FieldId::ProjectName => "projectName",
            FieldId::ProjectAddress => "projectAddress",
            FieldId::City => "city",
            FieldId::PostalCode => "postalCode",
            FieldId::Province => "province",
            FieldId::ClimateZone => "climateZone",
            FieldId::BuildingType => "buildingType",
            FieldId::CompliancePath => "compliancePath",
            FieldId::HrvPresence => "hrvPresence",
            FieldId::HrvEfficiency => "hrvEfficiency",
            FieldId::AtticInsulation => "atticInsulation",
            FieldId::HasCathedralOrFlatCeiling => "hasCathedralOrFlatCeiling",
            FieldId::CathedralFlatRsi => "cathedralFlatRsi",
            FieldId::WallInsulation => "wallInsulation",
            FieldId::BelowGradeInsulation => "belowGradeInsulation",
            FieldId::FloorSlabTypes => "floorSlabTypes",
            FieldId::HeatedFloorRsi => "heatedFloorRsi",
            FieldId::UnheatedBelowFrostRsi => "unheatedBelowFrostRsi",
            FieldId::UnheatedAboveFrostRsi => "unheatedAboveFrostRsi",
            FieldId::SlabIntegralFootingRsi => "slabIntegralFootingRsi",
            FieldId::WindowUValue => "windowUValue",
            FieldId::HasSkylights => "hasSkylights",
            FieldId::SkylightUValue => "skylightUValue",
            FieldId::Airtightness => "airtightness",
            FieldId::MidConstructionBlowerDoorPlanned => "midConstructionBlowerDoorPlanned",
            FieldId::HeatingType => "heatingType",
            FieldId::HeatingEfficiency => "heatingEfficiency",
            FieldId::HasCooling => "hasCooling",
            FieldId::CoolingEfficiency => "coolingEfficiency",
            FieldId::WaterHeaterType => "waterHeaterType",
            FieldId::IndirectTank => "indirectTank",
            FieldId::IndirectTankSize => "indirectTankSize",
            FieldId::HasDwhr => "hasDwhr",
            FieldId::DwhrEfficiency => "dwhrEfficiency",
            FieldId::IsVolumeOver380 => "isVolumeOver380",
            FieldId::BuildingVolume => "buildingVolume",
            FieldId::SecondaryHrvPresence => "secondaryHrvPresence",
            FieldId::SecondaryHrvEfficiency => "secondaryHrvEfficiency",
            FieldId::HasSecondaryHeating => "hasSecondaryHeating",
            FieldId::SecondaryHeatingType => "secondaryHeatingType",
            FieldId::SecondaryHeatingEfficiency => "secondaryHeatingEfficiency",
            FieldId::HasSecondaryWaterHeater => "hasSecondaryWaterHeater",
            FieldId::SecondaryWaterHeaterType => "secondaryWaterHeaterType",
            FieldId::HasMurbMultipleHeating => "hasMurbMultipleHeating",
            FieldId::MurbSecondHeatingType => "murbSecondHeatingType",
            FieldId::MurbSecondHeatingEfficiency => "murbSecondHeatingEfficiency",
            FieldId::HasMurbMultipleWaterHeater => "hasMurbMultipleWaterHeater",
            FieldId::MurbSecondWaterHeaterType => "murbSecondWaterHeaterType",
            FieldId::ProposedCeilingRsi => "proposedCeilingRsi",
            FieldId::ProposedWallRsi => "proposedWallRsi",
            FieldId::ProposedWindowUValue => "proposedWindowUValue",
            FieldId::ProposedAch50 => "proposedAch50",
            FieldId::SupportingDocuments => "supportingDocuments",
            FieldId::Certifications => "certifications",
            FieldId::Comments => "comments",
        }
    }

    pub const fn meta(self) -> FieldMeta {
        use Category as C;
        use FieldKind as K;
        use FormStep as S;

        const fn meta(
            label: &'static str,
            step: FormStep,
            kind: FieldKind,
            category: Option<Category>,
        ) -> FieldMeta {
            FieldMeta {
                label,
                step,
                kind,
                category,
            }
        }

        match self {
            FieldId::ApplicantName => meta("Applicant name", S::ProjectDetails, K::Text, None),
            FieldId::ApplicantEmail => meta("Applicant email", S::ProjectDetails, K::Text, None),
            FieldId::ApplicantPhone => meta("Applicant phone", S::ProjectDetails, K::Text, None),
            FieldId::CompanyName => meta("Company", S::ProjectDetails, K::Text, None),
            FieldId::ProjectName => meta("Project name", S::ProjectDetails, K::Text, None),
            FieldId::ProjectAddress => meta("Project address", S::ProjectDetails, K::Text, None),
            FieldId::City => meta("City", S::ProjectDetails, K::Text, None),
            FieldId::PostalCode => meta("Postal code", S::ProjectDetails, K::Text, None),
            FieldId::Province => meta("Province", S::ProjectDetails, K::Text, None),
            FieldId::ClimateZone => meta("Climate zone", S::ProjectDetails, K::Text, None),
            FieldId::BuildingType => meta("Building type", S::ProjectDetails, K::Text, None),
            FieldId::CompliancePath => {
                meta("Compliance pathway", S::PathwaySelection, K::Text, None)
            }
            FieldId::HrvPresence => meta("HRV/ERV installed", S::BuildingSpecs, K::Text, None),
            FieldId::HrvEfficiency => meta(
                "HRV/ERV sensible recovery efficiency",
                S::BuildingSpecs,
                K::Text,
                Some(C::HrvEfficiency),
            ),
            FieldId::AtticInsulation => meta(
                "Attic insulation",
                S::BuildingSpecs,
                K::Text,
                Some(C::CeilingInsulation),
            ),
            FieldId::HasCathedralOrFlatCeiling => {
                meta("Cathedral or flat ceiling", S::BuildingSpecs, K::Text, None)
            }
            FieldId::CathedralFlatRsi => meta(
                "Cathedral/flat ceiling insulation",
                S::BuildingSpecs,
                K::Text,
                Some(C::CathedralCeilingInsulation),
            ),
            FieldId::WallInsulation => meta(
                "Above-grade wall insulation",
                S::BuildingSpecs,
                K::Text,
                Some(C::WallInsulation),
            ),
            FieldId::BelowGradeInsulation => meta(
                "Below-grade wall insulation",
                S::BuildingSpecs,
                K::Text,
                Some(C::BelowGradeInsulation),
            ),
            FieldId::FloorSlabTypes => meta(
                "Floor and slab assemblies",
                S::BuildingSpecs,
                K::MultiSelect,
                Some(C::FloorAssembly),
            ),
            FieldId::HeatedFloorRsi => meta(
                "Heated floor insulation",
                S::BuildingSpecs,
                K::Text,
                Some(C::HeatedFloorInsulation),
            ),
            FieldId::UnheatedBelowFrostRsi => meta(
                "Unheated floor below frost line insulation",
                S::BuildingSpecs,
                K::Text,
                Some(C::UnheatedFloorBelowFrostInsulation),
            ),
            FieldId::UnheatedAboveFrostRsi => meta(
                "Unheated floor above frost line insulation",
                S::BuildingSpecs,
                K::Text,
                Some(C::UnheatedFloorAboveFrostInsulation),
            ),
            FieldId::SlabIntegralFootingRsi => meta(
                "Slab-on-grade with integral footing insulation",
                S::BuildingSpecs,
                K::Text,
                Some(C::SlabIntegralFootingInsulation),
            ),
            FieldId::WindowUValue => meta(
                "Window and door U-value",
                S::BuildingSpecs,
                K::Text,
                Some(C::WindowUValue),
            ),
            FieldId::HasSkylights => meta("Skylights present", S::BuildingSpecs, K::Text, None),
            FieldId::SkylightUValue => meta(
                "Skylight U-value",
                S::BuildingSpecs,
                K::Text,
                Some(C::SkylightUValue),
            ),
            FieldId::Airtightness => meta(
                "Airtightness target",
                S::BuildingSpecs,
                K::Text,
                Some(C::Airtightness),
            ),
            FieldId::MidConstructionBlowerDoorPlanned => meta(
                "Mid-construction blower door test planned",
                S::BuildingSpecs,
                K::Flag,
                None,
            ),
            FieldId::HeatingType => meta("Space heating type", S::BuildingSpecs, K::Text, None),
            FieldId::HeatingEfficiency => meta(
                "Space heating efficiency",
                S::BuildingSpecs,
                K::Text,
                Some(C::HeatingEfficiency),
            ),
            FieldId::HasCooling => meta("Space cooling installed", S::BuildingSpecs, K::Text, None),
            FieldId::CoolingEfficiency => meta(
                "Space cooling efficiency",
                S::BuildingSpecs,
                K::Text,
                Some(C::CoolingEfficiency),
            ),
            FieldId::WaterHeaterType => meta(
                "Service water heater",
                S::BuildingSpecs,
                K::Text,
                Some(C::WaterHeater),
            ),
            FieldId::IndirectTank => {
                meta("Indirect tank off boiler", S::BuildingSpecs, K::Text, None)
            }
            FieldId::IndirectTankSize => meta("Indirect tank size", S::BuildingSpecs, K::Text, None),
            FieldId::HasDwhr => meta(
                "Drain water heat recovery installed",
                S::BuildingSpecs,
                K::Text,
                None,
            ),
            FieldId::DwhrEfficiency => meta(
                "Drain water heat recovery efficiency",
                S::BuildingSpecs,
                K::Text,
                Some(C::DrainWaterHeatRecovery),
            ),
            FieldId::IsVolumeOver380 => meta(
                "Heated volume over 380 m³",
                S::BuildingSpecs,
                K::Text,
                None,
            ),
            FieldId::BuildingVolume => meta(
                "Heated building volume",
                S::BuildingSpecs,
                K::Text,
                Some(C::BuildingVolume),
            ),
            FieldId::SecondaryHrvPresence => meta(
                "Secondary suite HRV/ERV installed",
                S::BuildingSpecs,
                K::Text,
                None,
            ),
            FieldId::SecondaryHrvEfficiency => meta(
                "Secondary suite HRV/ERV efficiency",
                S::BuildingSpecs,
                K::Text,
                Some(C::HrvEfficiency),
            ),
            FieldId::HasSecondaryHeating => meta(
                "Separate heating for secondary suite",
                S::BuildingSpecs,
                K::Text,
                None,
            ),
            FieldId::SecondaryHeatingType => meta(
                "Secondary suite heating type",
                S::BuildingSpecs,
                K::Text,
                None,
            ),
            FieldId::SecondaryHeatingEfficiency => meta(
                "Secondary suite heating efficiency",
                S::BuildingSpecs,
                K::Text,
                Some(C::HeatingEfficiency),
            ),
            FieldId::HasSecondaryWaterHeater => meta(
                "Separate water heater for secondary suite",
                S::BuildingSpecs,
                K::Text,
                None,
            ),
            FieldId::SecondaryWaterHeaterType => meta(
                "Secondary suite water heater",
                S::BuildingSpecs,
                K::Text,
                Some(C::WaterHeater),
            ),
            FieldId::HasMurbMultipleHeating => meta(
                "Multiple heating systems",
                S::BuildingSpecs,
                K::Text,
                None,
            ),
            FieldId::MurbSecondHeatingType => meta(
                "Second heating system type",
                S::BuildingSpecs,
                K::Text,
                None,
            ),
            FieldId::MurbSecondHeatingEfficiency => meta(
                "Second heating system efficiency",
                S::BuildingSpecs,
                K::Text,
                Some(C::HeatingEfficiency),
            ),
            FieldId::HasMurbMultipleWaterHeater => meta(
                "Multiple water heaters",
                S::BuildingSpecs,
                K::Text,
                None,
            ),
            FieldId::MurbSecondWaterHeaterType => meta(
                "Second water heater",
                S::BuildingSpecs,
                K::Text,
                Some(C::WaterHeater),
            ),
            FieldId::ProposedCeilingRsi => meta(
                "Proposed ceiling RSI",
                S::BuildingSpecs,
                K::Text,
                None,
            ),
            FieldId::ProposedWallRsi => {
                meta("Proposed wall RSI", S::BuildingSpecs, K::Text, None)
            }
            FieldId::ProposedWindowUValue => meta(
                "Proposed window U-value",
                S::BuildingSpecs,
                K::Text,
                None,
            ),
            FieldId::ProposedAch50 => meta(
                "Proposed airtightness (ACH50)",
                S::BuildingSpecs,
                K::Text,
                None,
            ),
            FieldId::SupportingDocuments => {
                meta("Supporting documents", S::Documents, K::Upload, None)
            }
            FieldId::Certifications => meta(
                "Certification programs of interest",
                S::Review,
                K::MultiSelect,
                None,
            ),
            FieldId::Comments => meta("Comments", S::Review, K::Text, None),
        }
    }

    pub const fn label(self) -> &'static str {
        self.meta().label
    }

    pub const fn step(self) -> FormStep {
        self.meta().step
    }

    pub const fn category(self) -> Option<Category> {
        self.meta().category
    }
}
