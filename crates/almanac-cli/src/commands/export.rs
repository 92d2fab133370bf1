use almanac_core::error::AlmanacError;
use almanac_core::estimate::command::CommandTagger;
use almanac_core::extraction::text_dir::TextDirSource;
use almanac_core::model::PageRange;
use almanac_core::parsing::ParseOptions;
use almanac_core::publish::{csv, index, markdown};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    /// One CSV row per record
    Csv,
    /// "year, title" lines
    Index,
    /// A directory of markdown pages with frontmatter
    Markdown,
}

pub fn run(
    text_dir: &Path,
    pages: PageRange,
    options: &ParseOptions,
    format: ExportFormat,
    out: &Path,
    tagger: Option<&[String]>,
) -> Result<(), AlmanacError> {
    let source = TextDirSource::new(text_dir);
    let mut parsed = almanac_core::parse_book(&source, pages, options)?;

    if let Some(command) = tagger {
        let tagger = CommandTagger::from_command_line(command)?;
        almanac_core::estimate_records(&tagger, &mut parsed.records)?;
    }

    match format {
        ExportFormat::Csv => csv::write_csv_file(&parsed.records, out)?,
        ExportFormat::Index => index::write_index(&parsed.records, out)?,
        ExportFormat::Markdown => {
            let written = markdown::write_site(&parsed.records, out)?;
            tracing::info!("Wrote {} page(s) to {}", written.len(), out.display());
        }
    }

    for w in &parsed.warnings {
        tracing::warn!(kind = ?w.kind, "{}", w.message);
    }
    tracing::info!(
        "Exported {} record(s) with {} warning(s)",
        parsed.records.len(),
        parsed.warnings.len()
    );

    Ok(())
}
