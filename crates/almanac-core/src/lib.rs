pub mod error;
pub mod estimate;
pub mod extraction;
pub mod model;
pub mod parsing;
pub mod publish;
pub mod site;
pub mod template;
pub mod tool;

use error::AlmanacError;
use estimate::EntityTagger;
use extraction::PageSource;
use model::{InventionRecord, PageRange, ParsedBook};
use parsing::ParseOptions;

/// Main API entry point: turn a range of OCR'ed pages into invention records.
///
/// Loads the pages, rebuilds paragraphs across page boundaries and runs the
/// record state machine over them. Data-quality problems are returned as
/// warnings; only unreadable input is an error.
pub fn parse_book(
    source: &dyn PageSource,
    range: PageRange,
    options: &ParseOptions,
) -> Result<ParsedBook, AlmanacError> {
    let pages = source.load_pages(range)?;
    tracing::debug!(source = source.source_name(), pages = pages.len(), "pages loaded");

    let loaded = extraction::flatten_lines(&pages);
    let paragraphs = parsing::split_paragraphs(&loaded.lines, options);
    let (records, record_warnings) = parsing::parse_records(&paragraphs.paragraphs, options);

    let mut warnings = loaded.warnings;
    warnings.extend(paragraphs.warnings);
    warnings.extend(record_warnings);

    Ok(ParsedBook {
        records,
        warnings,
        line_count: loaded.lines.len(),
        paragraph_count: paragraphs.paragraphs.len(),
    })
}

/// Fill location and inventor estimates for every record.
pub fn estimate_records(
    tagger: &dyn EntityTagger,
    records: &mut [InventionRecord],
) -> Result<(), AlmanacError> {
    for record in records.iter_mut() {
        estimate::estimate_record(tagger, record)?;
    }
    tracing::info!(
        "Estimated {} records with {}.",
        records.len(),
        tagger.backend_name()
    );
    Ok(())
}
