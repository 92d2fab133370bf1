use crate::error::AlmanacError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Inclusive, 1-indexed range of scanned page numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRange {
    pub start: u32,
    pub end: u32,
}

impl PageRange {
    pub fn new(start: u32, end: u32) -> Result<PageRange, AlmanacError> {
        if start == 0 || start > end {
            return Err(AlmanacError::InvalidPageRange(format!("{start}-{end}")));
        }
        Ok(PageRange { start, end })
    }

    pub fn pages(&self) -> impl Iterator<Item = u32> {
        self.start..=self.end
    }
}

impl FromStr for PageRange {
    type Err = AlmanacError;

    /// Accepts "7" or "2-755".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || AlmanacError::InvalidPageRange(s.to_string());
        let s = s.trim();
        let (start, end) = match s.split_once('-') {
            Some((a, b)) => (a.trim(), b.trim()),
            None => (s, s),
        };
        let start: u32 = start.parse().map_err(|_| invalid())?;
        let end: u32 = end.parse().map_err(|_| invalid())?;
        PageRange::new(start, end).map_err(|_| invalid())
    }
}

impl fmt::Display for PageRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// Candidate locations and inventors inferred from a record's description.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Estimate {
    pub location_estimates: Vec<String>,
    pub inventor_estimates: Vec<String>,
}

/// One invention or discovery reconstructed from the OCR text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventionRecord {
    pub title: String,
    pub description: String,
    pub year: i64,
    #[serde(default)]
    pub estimate: Estimate,
}

impl InventionRecord {
    pub fn new(title: impl Into<String>, description: impl Into<String>, year: i64) -> Self {
        InventionRecord {
            title: title.into(),
            description: description.into(),
            year,
            estimate: Estimate::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningKind {
    EmptyPage,
    MissingField,
    TrailingRecordDropped,
    TrailingParagraphDropped,
}

/// A non-fatal data-quality finding from loading or parsing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseWarning {
    pub kind: WarningKind,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// Everything the parser produced for one page range.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParsedBook {
    pub records: Vec<InventionRecord>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<ParseWarning>,
    pub line_count: usize,
    pub paragraph_count: usize,
}

/// A curated catalog entry, one row of the site's TSV.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invention {
    pub id: String,
    pub year: i64,
    pub dependencies: Vec<String>,
    pub title: String,
    pub description: String,
    pub summary: String,
    pub inventor: String,
    pub location: String,
    pub field: String,
    pub url: String,
}
