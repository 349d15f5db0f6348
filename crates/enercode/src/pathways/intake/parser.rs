use std::io::Read;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(crate) struct ExportRow {
    #[serde(rename = "Field")]
    pub(crate) field: String,
    #[serde(rename = "Value", default)]
    pub(crate) value: String,
}

pub(crate) fn parse_records<R: Read>(reader: R) -> Result<Vec<ExportRow>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut records = Vec::new();

    for record in csv_reader.deserialize::<ExportRow>() {
        records.push(record?);
    }

    Ok(records)
}
