use crate::model::{InventionRecord, ParseWarning, WarningKind};
use crate::parsing::title::parse_title;
use crate::parsing::year::parse_year;
use serde::{Deserialize, Serialize};

/// Which year a record is stamped with when it is flushed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum YearBinding {
    /// The current year when the *next* title arrives and the record is flushed.
    #[default]
    AtFlush,
    /// The current year when the record's own title was read.
    AtTitle,
}

/// How a paragraph was classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Paragraph<'a> {
    Year(i64),
    Title(&'a str),
    Body(&'a str),
}

impl<'a> Paragraph<'a> {
    /// Year wins over title; anything else is body text.
    pub fn classify(text: &'a str) -> Paragraph<'a> {
        if let Some(year) = parse_year(text) {
            Paragraph::Year(year)
        } else if let Some(title) = parse_title(text) {
            Paragraph::Title(title)
        } else {
            Paragraph::Body(text)
        }
    }
}

/// State machine turning classified paragraphs into records.
///
/// Years and titles are tracked independently as "current" values. A record
/// is only emitted when a new title arrives and the previous title, its
/// description and a year are all present.
#[derive(Debug, Default)]
pub struct RecordParser {
    binding: YearBinding,
    year: Option<i64>,
    title: Option<String>,
    title_year: Option<i64>,
    description: String,
    warnings: Vec<ParseWarning>,
}

impl RecordParser {
    pub fn new(binding: YearBinding) -> Self {
        RecordParser {
            binding,
            ..Default::default()
        }
    }

    /// Consume one paragraph. Returns the previous record when this paragraph
    /// is a title that closes it.
    pub fn ingest(&mut self, paragraph: &str) -> Option<InventionRecord> {
        match Paragraph::classify(paragraph) {
            Paragraph::Year(year) => {
                tracing::debug!(year, "parsed year");
                self.year = Some(year);
                None
            }
            Paragraph::Title(title) => {
                tracing::debug!(title, "parsed title");
                let flushed = self.take_record();
                if flushed.is_none() {
                    self.warn_missing(title);
                }
                self.description.clear();
                self.title = Some(title.to_string());
                self.title_year = self.year;
                flushed
            }
            Paragraph::Body(text) => {
                self.description.push_str(text);
                self.description.push_str("\n\n");
                None
            }
        }
    }

    /// End of input. Returns the in-progress record if it is complete, plus
    /// every warning raised while parsing. Whether to keep it is up to the caller.
    pub fn finish(mut self) -> (Option<InventionRecord>, Vec<ParseWarning>) {
        let record = self.take_record();
        (record, self.warnings)
    }

    pub fn warnings(&self) -> &[ParseWarning] {
        &self.warnings
    }

    fn bound_year(&self) -> Option<i64> {
        match self.binding {
            YearBinding::AtFlush => self.year,
            YearBinding::AtTitle => self.title_year,
        }
    }

    fn take_record(&mut self) -> Option<InventionRecord> {
        let year = self.bound_year()?;
        if self.description.is_empty() {
            return None;
        }
        let title = self.title.as_ref()?;
        Some(InventionRecord::new(
            title.clone(),
            std::mem::take(&mut self.description),
            year,
        ))
    }

    fn warn_missing(&mut self, next_title: &str) {
        let mut missing = Vec::new();
        if self.bound_year().is_none() {
            missing.push("year");
        }
        if self.title.is_none() {
            missing.push("title");
        }
        if self.description.is_empty() {
            missing.push("description");
        }

        let message = format!(
            "Missing field ({}) before title '{}'. year={:?}, title={:?}",
            missing.join(", "),
            next_title,
            self.bound_year(),
            self.title
        );
        tracing::warn!("{message}");
        self.warnings.push(ParseWarning {
            kind: WarningKind::MissingField,
            message,
            title: self.title.clone(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(paragraphs: &[&str]) -> (Vec<InventionRecord>, RecordParser) {
        let mut parser = RecordParser::new(YearBinding::AtFlush);
        let records = paragraphs.iter().filter_map(|p| parser.ingest(p)).collect();
        (records, parser)
    }

    #[test]
    fn test_classify() {
        assert_eq!(Paragraph::classify("1885"), Paragraph::Year(1885));
        assert_eq!(Paragraph::classify("Paper"), Paragraph::Title("Paper"));
        assert_eq!(
            Paragraph::classify("made from pulp"),
            Paragraph::Body("made from pulp")
        );
    }

    #[test]
    fn test_title_flushes_previous_record() {
        let (records, _) = run(&["105", "Paper", "Made from bark.", "Used for writing.", "1450", "Printing"]);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].title, "Paper");
        assert_eq!(records[0].description, "Made from bark.\n\nUsed for writing.\n\n");
        // Flush-time binding picks up the year read after the title.
        assert_eq!(records[0].year, 1450);
    }

    #[test]
    fn test_title_before_any_year_warns_instead_of_flushing() {
        let (records, parser) = run(&["Fire", "Rubbing sticks.", "Wheel"]);
        assert!(records.is_empty());
        let warnings = parser.warnings();
        assert_eq!(warnings.len(), 2);
        assert!(warnings.iter().all(|w| w.kind == WarningKind::MissingField));
        assert!(warnings[1].message.contains("year"));
        assert_eq!(warnings[1].title.as_deref(), Some("Fire"));
    }

    #[test]
    fn test_empty_description_blocks_flush() {
        let (records, parser) = run(&["1000", "Fire", "Wheel"]);
        assert!(records.is_empty());
        assert!(parser.warnings()[1].message.contains("description"));
    }

    #[test]
    fn test_second_consecutive_year_wins() {
        let (records, mut parser) = run(&[
            "1000", "Fire", "Rubbing sticks.", "2000", "3000", "Wheel", "A round disk.",
        ]);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].year, 3000);

        let next = parser.ingest("Lever").unwrap();
        assert_eq!(next.title, "Wheel");
        assert_eq!(next.year, 3000);
    }

    #[test]
    fn test_at_title_binding() {
        let mut parser = RecordParser::new(YearBinding::AtTitle);
        let records: Vec<_> = ["1000", "Fire", "Rubbing sticks.", "2000", "Wheel"]
            .iter()
            .filter_map(|p| parser.ingest(p))
            .collect();
        assert_eq!(records[0].year, 1000);
    }

    #[test]
    fn test_trailing_record_left_to_finish() {
        let (records, parser) = run(&["1000", "Fire", "Rubbing sticks.", "Wheel", "A round disk."]);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].title, "Fire");

        let (last, _) = parser.finish();
        let last = last.unwrap();
        assert_eq!(last.title, "Wheel");
        assert_eq!(last.description, "A round disk.\n\n");
    }

    #[test]
    fn test_finish_without_description_returns_none() {
        let (_, parser) = run(&["1000", "Fire"]);
        let (last, warnings) = parser.finish();
        assert!(last.is_none());
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn test_year_zero_counts_as_set() {
        let (records, _) = run(&["0", "Fire", "Rubbing sticks.", "Wheel"]);
        assert_eq!(records[0].year, 0);
    }
}
