pub mod paragraph;
pub mod record;
pub mod title;
pub mod year;

use crate::model::{InventionRecord, ParseWarning, WarningKind};
use paragraph::Paragraphizer;
use record::{RecordParser, YearBinding};
use serde::{Deserialize, Serialize};

/// Knobs for the end-of-input edge cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseOptions {
    /// Emit text after the last blank line as a final paragraph.
    pub flush_trailing_paragraph: bool,
    /// Emit the record still in progress when input ends.
    pub flush_trailing_record: bool,
    pub year_binding: YearBinding,
}

/// Emits the unterminated last paragraph, drops the unterminated last record,
/// and binds years at flush.
impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            flush_trailing_paragraph: true,
            flush_trailing_record: false,
            year_binding: YearBinding::AtFlush,
        }
    }
}

/// Paragraphs rebuilt from a line stream, plus any tail that was dropped.
#[derive(Debug, Clone, Default)]
pub struct Paragraphs {
    pub paragraphs: Vec<String>,
    pub warnings: Vec<ParseWarning>,
}

/// Split raw lines into paragraphs, honoring `flush_trailing_paragraph`.
pub fn split_paragraphs<S: AsRef<str>>(lines: &[S], options: &ParseOptions) -> Paragraphs {
    let mut paragraphizer = Paragraphizer::new();
    let mut out = Paragraphs {
        paragraphs: lines
            .iter()
            .filter_map(|line| paragraphizer.push(line.as_ref()))
            .collect(),
        warnings: Vec::new(),
    };

    if let Some(tail) = paragraphizer.finish() {
        if options.flush_trailing_paragraph {
            out.paragraphs.push(tail);
        } else {
            tracing::warn!("dropping unterminated final paragraph");
            out.warnings.push(ParseWarning {
                kind: WarningKind::TrailingParagraphDropped,
                message: format!("unterminated final paragraph dropped: '{}'", tail),
                title: None,
            });
        }
    }

    tracing::info!("Built {} paragraphs.", out.paragraphs.len());
    out
}

/// Walk paragraphs in order and collect every flushed record.
///
/// The record still open at end of input is kept only when
/// `flush_trailing_record` is set; otherwise it is reported as dropped.
pub fn parse_records<S: AsRef<str>>(
    paragraphs: &[S],
    options: &ParseOptions,
) -> (Vec<InventionRecord>, Vec<ParseWarning>) {
    let mut parser = RecordParser::new(options.year_binding);
    let mut records: Vec<InventionRecord> = paragraphs
        .iter()
        .filter_map(|p| parser.ingest(p.as_ref()))
        .collect();

    let (trailing, mut warnings) = parser.finish();
    if let Some(record) = trailing {
        if options.flush_trailing_record {
            records.push(record);
        } else {
            tracing::warn!(title = %record.title, "dropping record still open at end of input");
            warnings.push(ParseWarning {
                kind: WarningKind::TrailingRecordDropped,
                message: format!(
                    "record '{}' ({}) has no following title and was dropped",
                    record.title, record.year
                ),
                title: Some(record.title),
            });
        }
    }

    tracing::info!("Found {} inventions.", records.len());
    (records, warnings)
}
