use crate::error::AlmanacError;
use crate::model::InventionRecord;
use crate::publish::format_list;
use std::io::Write;
use std::path::Path;

pub const HEADER: [&str; 5] = [
    "year",
    "title",
    "inventor_estimates",
    "location_estimates",
    "description",
];

/// Write records as CSV, one row per record.
///
/// The estimate columns hold the list rendering from `format_list`, not a
/// nested CSV structure.
pub fn write_csv<W: Write>(records: &[InventionRecord], writer: W) -> Result<(), AlmanacError> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(HEADER)?;

    for record in records {
        tracing::debug!("Adding row for {}.", record.title);
        wtr.write_record([
            record.year.to_string(),
            record.title.clone(),
            format_list(&record.estimate.inventor_estimates),
            format_list(&record.estimate.location_estimates),
            record.description.clone(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

pub fn write_csv_file(records: &[InventionRecord], path: &Path) -> Result<(), AlmanacError> {
    let file = std::fs::File::create(path)?;
    write_csv(records, file)?;
    tracing::info!("Wrote {} rows to {}", records.len(), path.display());
    Ok(())
}
