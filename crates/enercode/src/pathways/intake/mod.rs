//! Spreadsheet intake: hydrate a selections record from the two-column
//! (`Field,Value`) CSV export the hosting form produces, so drafts started
//! on paper or in a spreadsheet can be scored without retyping.

mod mapping;
mod parser;

use std::fs::File;
use std::io::Read;
use std::path::Path;

use super::applications::domain::Selections;

/// Import failure taxonomy; unknown columns are reported by name so the
/// operator can fix the export instead of silently losing an answer.
#[derive(Debug, thiserror::Error)]
pub enum SelectionsImportError {
    #[error("failed to read selections export: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid selections CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("export names unknown field '{field}'")]
    UnknownField { field: String },
}

/// Builds a `Selections` record from a form export.
pub struct SelectionsCsvImporter;

impl SelectionsCsvImporter {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Selections, SelectionsImportError> {
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    /// Rows are folded in order: repeated rows for a multi-select field
    /// accumulate members (with the floor/slab exclusivity applied), later
    /// rows for a scalar field overwrite earlier ones, and blank values are
    /// skipped so a sparse export leaves fields unset.
    pub fn from_reader<R: Read>(reader: R) -> Result<Selections, SelectionsImportError> {
        let rows = parser::parse_records(reader)?;
        let mut selections = Selections::new();

        for row in rows {
            let normalized = mapping::normalize_name(&row.field);
            if normalized.is_empty() {
                continue;
            }
            let field = mapping::field_for(&normalized).ok_or_else(|| {
                SelectionsImportError::UnknownField {
                    field: row.field.clone(),
                }
            })?;
            if row.value.trim().is_empty() {
                continue;
            }
            selections.set_raw(field, &row.value);
        }

        Ok(selections)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pathways::applications::domain::FloorSlabType;
    use crate::pathways::applications::fields::FieldId;

    #[test]
    fn imports_scalar_and_multi_select_rows() {
        let csv = "Field,Value\n\
            Applicant Name,Dana Berg\n\
            compliancePath,9362\n\
            floorSlabTypes,unheated_below_frost\n\
            floorSlabTypes,unheated_above_frost\n\
            midConstructionBlowerDoorPlanned,true\n";

        let selections = SelectionsCsvImporter::from_reader(csv.as_bytes())
            .expect("export imports");

        assert_eq!(selections.text(FieldId::ApplicantName), Some("Dana Berg"));
        assert_eq!(selections.text(FieldId::CompliancePath), Some("9362"));
        assert_eq!(
            selections.many(FieldId::FloorSlabTypes),
            &[
                "unheated_below_frost".to_string(),
                "unheated_above_frost".to_string()
            ]
        );
        assert_eq!(
            selections.flag(FieldId::MidConstructionBlowerDoorPlanned),
            Some(true)
        );
    }

    #[test]
    fn floor_exclusivity_applies_during_import() {
        let csv = "Field,Value\n\
            floorSlabTypes,unheated_below_frost\n\
            floorSlabTypes,heated_floors\n";

        let selections = SelectionsCsvImporter::from_reader(csv.as_bytes())
            .expect("export imports");

        assert_eq!(
            selections.many(FieldId::FloorSlabTypes),
            &[FloorSlabType::HeatedFloors.token().to_string()]
        );
    }

    #[test]
    fn unknown_field_is_reported_by_name() {
        let csv = "Field,Value\nmystery,42\n";

        match SelectionsCsvImporter::from_reader(csv.as_bytes()) {
            Err(SelectionsImportError::UnknownField { field }) => assert_eq!(field, "mystery"),
            other => panic!("expected unknown-field error, got {other:?}"),
        }
    }

    #[test]
    fn blank_values_leave_fields_unset() {
        let csv = "Field,Value\napplicantName,\n";

        let selections = SelectionsCsvImporter::from_reader(csv.as_bytes())
            .expect("export imports");

        assert!(!selections.is_set(FieldId::ApplicantName));
    }
}
