use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::pathways::applications::domain::{
    DocumentCategory, DocumentDescriptor, ProjectId, ProjectSubmission, Selections,
};
use crate::pathways::applications::fields::FieldId;
use crate::pathways::applications::repository::{
    Notifier, NotifierError, ProjectRecord, ProjectRepository, RepositoryError, SubmissionNotice,
};
use crate::pathways::applications::service::ProjectService;

/// Step-1 metadata for a Saskatoon single-detached dwelling.
pub(super) fn base_selections() -> Selections {
    let mut selections = Selections::new();
    selections.set_text(FieldId::ApplicantName, "Dana Berg");
    selections.set_text(FieldId::ApplicantEmail, "dana@prairiebuild.ca");
    selections.set_text(FieldId::ApplicantPhone, "306-555-0192");
    selections.set_text(FieldId::ProjectAddress, "214 Spadina Cres E");
    selections.set_text(FieldId::City, "Saskatoon");
    selections.set_text(FieldId::Province, "saskatchewan");
    selections.set_text(FieldId::ClimateZone, "7A");
    selections.set_text(FieldId::BuildingType, "single_detached");
    selections
}

/// A complete 9.36.2 application for a single-detached dwelling. Point math
/// against the base tables: HRV 6.0 + attic 3.0 + wall 6.0 + below grade
/// 3.0 + slab member 1.0 + slab RSI 1.0 + window 3.0 + airtightness 4.5 +
/// heating 2.5 + water heater 3.0 = 33.0.
pub(super) fn prescriptive_selections() -> Selections {
    let mut selections = base_selections();
    selections.set_text(FieldId::CompliancePath, "9362");
    selections.set_text(FieldId::HrvPresence, "with_hrv");
    selections.set_text(FieldId::HrvEfficiency, "sre_75");
    selections.set_text(FieldId::AtticInsulation, "rsi_10_43");
    selections.set_text(FieldId::HasCathedralOrFlatCeiling, "no");
    selections.set_text(FieldId::WallInsulation, "rsi_3_85");
    selections.set_text(FieldId::BelowGradeInsulation, "rsi_3_46");
    selections.set_many(
        FieldId::FloorSlabTypes,
        vec!["slab_integral_footing".to_string()],
    );
    selections.set_text(FieldId::SlabIntegralFootingRsi, "rsi_2_84");
    selections.set_text(FieldId::WindowUValue, "u_1_40");
    selections.set_text(FieldId::HasSkylights, "no");
    selections.set_text(FieldId::Airtightness, "ach_2_5");
    selections.set_text(FieldId::HeatingType, "furnace");
    selections.set_text(FieldId::HeatingEfficiency, "afue_96");
    selections.set_text(FieldId::HasCooling, "no");
    selections.set_text(FieldId::WaterHeaterType, "condensing_ef_0_86");
    selections.set_text(FieldId::HasDwhr, "no");
    selections
}

/// A complete 9.36.8 application: the prescriptive record plus the volume
/// questions the tiered path adds (volume band adds 3.0 points).
pub(super) fn tiered_selections() -> Selections {
    let mut selections = prescriptive_selections();
    selections.set_text(FieldId::CompliancePath, "9368");
    selections.set_text(FieldId::IsVolumeOver380, "no");
    selections.set_text(FieldId::BuildingVolume, "under_300");
    selections
}

pub(super) fn documents() -> Vec<DocumentDescriptor> {
    vec![DocumentDescriptor {
        name: "Drawing set".to_string(),
        category: DocumentCategory::DrawingSet,
        storage_key: "uploads/proj-demo/drawings.pdf".to_string(),
    }]
}

pub(super) fn submission_for(selections: Selections) -> ProjectSubmission {
    ProjectSubmission {
        selections,
        documents: documents(),
        target_construction_start: None,
    }
}

pub(super) fn complete_submission() -> ProjectSubmission {
    submission_for(prescriptive_selections())
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    pub(super) records: Arc<Mutex<HashMap<ProjectId, ProjectRecord>>>,
}

impl ProjectRepository for MemoryRepository {
    fn insert(&self, record: ProjectRecord) -> Result<ProjectRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.project_id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.project_id.clone(), record.clone());
        Ok(record)
    }

    fn update(&self, record: ProjectRecord) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        guard.insert(record.project_id.clone(), record);
        Ok(())
    }

    fn fetch(&self, id: &ProjectId) -> Result<Option<ProjectRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn drafts(&self, _limit: usize) -> Result<Vec<ProjectRecord>, RepositoryError> {
        Ok(Vec::new())
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryNotifier {
    events: Arc<Mutex<Vec<SubmissionNotice>>>,
}

impl MemoryNotifier {
    pub(super) fn events(&self) -> Vec<SubmissionNotice> {
        self.events.lock().expect("notifier mutex poisoned").clone()
    }
}

impl Notifier for MemoryNotifier {
    fn publish(&self, notice: SubmissionNotice) -> Result<(), NotifierError> {
        self.events
            .lock()
            .expect("notifier mutex poisoned")
            .push(notice);
        Ok(())
    }
}

pub(super) fn build_service() -> (
    ProjectService<MemoryRepository, MemoryNotifier>,
    Arc<MemoryRepository>,
    Arc<MemoryNotifier>,
) {
    let repository = Arc::new(MemoryRepository::default());
    let notifier = Arc::new(MemoryNotifier::default());
    let service = ProjectService::new(repository.clone(), notifier.clone());
    (service, repository, notifier)
}
