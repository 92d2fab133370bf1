use almanac_core::error::AlmanacError;
use almanac_core::extraction::text_dir::TextDirSource;
use almanac_core::model::PageRange;
use almanac_core::parsing::ParseOptions;
use std::path::{Path, PathBuf};

use crate::output;

pub fn run(
    text_dir: &Path,
    pages: PageRange,
    options: &ParseOptions,
    output_format: &str,
    output_file: Option<PathBuf>,
) -> Result<(), AlmanacError> {
    let source = TextDirSource::new(text_dir);
    let parsed = almanac_core::parse_book(&source, pages, options)?;

    match output_file {
        Some(path) => {
            // Always write JSON when saving to file
            let json = serde_json::to_string_pretty(&parsed)?;
            std::fs::write(&path, json)?;
            tracing::info!(
                "Parsed {} record(s) from pages {}, written to {}",
                parsed.records.len(),
                pages,
                path.display()
            );
            for w in &parsed.warnings {
                tracing::warn!(kind = ?w.kind, "{}", w.message);
            }
        }
        None => match output_format {
            "json" => output::json::print(&parsed)?,
            _ => print!("{}", output::table::format_parsed(&parsed)),
        },
    }

    Ok(())
}
