use crate::error::AlmanacError;
use crate::model::InventionRecord;
use std::path::Path;

/// `"<year>, <title>"` per record, newline-joined, no trailing newline.
pub fn format_index(records: &[InventionRecord]) -> String {
    records
        .iter()
        .map(|r| format!("{}, {}", r.year, r.title))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn write_index(records: &[InventionRecord], path: &Path) -> Result<(), AlmanacError> {
    std::fs::write(path, format_index(records))?;
    tracing::info!("Wrote index of {} records to {}", records.len(), path.display());
    Ok(())
}
