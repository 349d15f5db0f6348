use super::super::applications::fields::FieldId;

/// Collapse a spreadsheet field name to lowercase alphanumerics so the
/// exports' label variants ("Applicant Name", "applicantName",
/// "applicant_name") all land on the same key.
pub(crate) fn normalize_name(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Resolve a normalized export name to a field identifier, accepting both
/// the wire name and the human label.
pub(crate) fn field_for(normalized: &str) -> Option<FieldId> {
    FieldId::ALL.into_iter().find(|field| {
        normalize_name(field.wire_name()) == normalized
            || normalize_name(field.label()) == normalized
    })
}
