use chrono::NaiveDate;
use clap::Args;
use std::fs::File;
use std::io::{Error as IoError, ErrorKind};
use std::path::PathBuf;
use std::sync::Arc;

use crate::infra::{InMemoryNotifier, InMemoryProjectRepository};
use enercode::error::AppError;
use enercode::pathways::applications::{
    evaluate_submission, DocumentCategory, DocumentDescriptor, EvaluationSummary, FieldId,
    ProjectService, ProjectSubmission, Selections,
};
use enercode::pathways::intake::SelectionsCsvImporter;

#[derive(Args, Debug)]
pub(crate) struct EvaluateArgs {
    /// Selections record as a JSON object (field name to value)
    #[arg(long, value_name = "FILE", conflicts_with = "csv")]
    pub(crate) json: Option<PathBuf>,
    /// Selections record as a two-column Field,Value CSV export
    #[arg(long, value_name = "FILE")]
    pub(crate) csv: Option<PathBuf>,
    /// Treat the record as having supporting documents uploaded
    #[arg(long)]
    pub(crate) assume_documents: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Target construction start date (YYYY-MM-DD)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) construction_start: Option<NaiveDate>,
    /// Evaluate only; skip the submission portion of the demo
    #[arg(long)]
    pub(crate) skip_submission: bool,
}

pub(crate) fn run_evaluate(args: EvaluateArgs) -> Result<(), AppError> {
    let EvaluateArgs {
        json,
        csv,
        assume_documents,
    } = args;

    let selections = match (csv, json) {
        (Some(path), _) => SelectionsCsvImporter::from_path(path)?,
        (None, Some(path)) => {
            let file = File::open(path)?;
            serde_json::from_reader::<_, Selections>(file)
                .map_err(|err| IoError::new(ErrorKind::InvalidData, err))?
        }
        (None, None) => {
            return Err(IoError::new(
                ErrorKind::InvalidInput,
                "provide a selections record via --json or --csv",
            )
            .into());
        }
    };

    let mut submission = ProjectSubmission::new(selections);
    if assume_documents {
        submission.documents = sample_documents();
    }

    let summary = evaluate_submission(&submission);
    render_summary(&summary);
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        construction_start,
        skip_submission,
    } = args;

    println!("Compliance pathway demo");

    let mut submission = sample_submission();
    submission.target_construction_start = construction_start;

    let summary = evaluate_submission(&submission);
    render_summary(&summary);

    if skip_submission {
        return Ok(());
    }

    let repository = Arc::new(InMemoryProjectRepository::default());
    let notifier = Arc::new(InMemoryNotifier::default());
    let service = ProjectService::new(repository, notifier.clone());

    println!("\nSubmission");
    match service.submit(submission) {
        Ok(record) => {
            let view = record.status_view();
            println!("- accepted as {} ({})", record.project_id.0, view.status);
            for notice in notifier.events() {
                println!(
                    "- notification '{}' dispatched for {}",
                    notice.template, notice.project_id.0
                );
            }
        }
        Err(err) => println!("- rejected: {err}"),
    }

    Ok(())
}

/// A strong 9.36.8 single-detached application used by the demo.
fn sample_submission() -> ProjectSubmission {
    let mut selections = Selections::new();
    selections.set_text(FieldId::ApplicantName, "Priya Deol");
    selections.set_text(FieldId::ApplicantEmail, "priya@aurorahomes.ca");
    selections.set_text(FieldId::ApplicantPhone, "403-555-0135");
    selections.set_text(FieldId::CompanyName, "Aurora Homes");
    selections.set_text(FieldId::ProjectAddress, "77 Windcrest Way");
    selections.set_text(FieldId::City, "Calgary");
    selections.set_text(FieldId::Province, "alberta");
    selections.set_text(FieldId::ClimateZone, "7A");
    selections.set_text(FieldId::BuildingType, "single_detached");
    selections.set_text(FieldId::CompliancePath, "9368");
    selections.set_text(FieldId::HrvPresence, "with_hrv");
    selections.set_text(FieldId::HrvEfficiency, "sre_75");
    selections.set_text(FieldId::AtticInsulation, "rsi_10_43");
    selections.set_text(FieldId::HasCathedralOrFlatCeiling, "no");
    selections.set_text(FieldId::WallInsulation, "rsi_4_57");
    selections.set_text(FieldId::BelowGradeInsulation, "rsi_3_97");
    selections.set_many(
        FieldId::FloorSlabTypes,
        vec!["slab_integral_footing".to_string()],
    );
    selections.set_text(FieldId::SlabIntegralFootingRsi, "rsi_2_84");
    selections.set_text(FieldId::WindowUValue, "u_1_22");
    selections.set_text(FieldId::HasSkylights, "no");
    selections.set_text(FieldId::Airtightness, "ach_1_5");
    selections.set_text(FieldId::HeatingType, "furnace");
    selections.set_text(FieldId::HeatingEfficiency, "afue_96");
    selections.set_text(FieldId::HasCooling, "no");
    selections.set_text(FieldId::WaterHeaterType, "tankless_ef_0_95");
    selections.set_text(FieldId::HasDwhr, "yes");
    selections.set_text(FieldId::DwhrEfficiency, "eff_42");
    selections.set_text(FieldId::IsVolumeOver380, "no");
    selections.set_text(FieldId::BuildingVolume, "from_300_to_380");

    ProjectSubmission {
        selections,
        documents: sample_documents(),
        target_construction_start: None,
    }
}

fn sample_documents() -> Vec<DocumentDescriptor> {
    vec![DocumentDescriptor {
        name: "Stamped drawing set".to_string(),
        category: DocumentCategory::DrawingSet,
        storage_key: "uploads/windcrest-77/drawings.pdf".to_string(),
    }]
}

fn render_summary(summary: &EvaluationSummary) {
    println!("\nPoint breakdown");
    if summary.points_breakdown.is_empty() {
        println!("- no scoring answers yet");
    }
    for (category, points) in &summary.points_breakdown {
        println!("- {}: {}", category.label(), points);
    }

    println!("\nTotal: {} points", summary.total_points);
    println!(
        "Tier: {} ({}): {}",
        summary.tier.tier.label(),
        summary.tier.status.label(),
        summary.tier.description
    );
    println!(
        "Estimated cost: prescriptive ${}, performance ${} (savings ${})",
        summary.cost_estimate.prescriptive,
        summary.cost_estimate.performance,
        summary.cost_estimate.savings
    );

    if summary.pending_items.required.is_empty() {
        println!("\nRequired items: none outstanding");
    } else {
        println!("\nRequired items");
        for item in &summary.pending_items.required {
            println!("- step {}: {}", item.step.number(), item.label);
        }
    }

    if !summary.pending_items.recommended.is_empty() {
        println!("\nRecommended items");
        for item in &summary.pending_items.recommended {
            println!("- step {}: {}", item.step.number(), item.label);
        }
    }

    if !summary.advisories.is_empty() {
        println!("\nAdvisories");
        for advisory in &summary.advisories {
            println!("- {}", advisory.detail);
        }
    }
}
