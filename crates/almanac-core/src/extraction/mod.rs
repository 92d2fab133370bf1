pub mod imaging;
pub mod tesseract;
pub mod text_dir;

use crate::error::AlmanacError;
use crate::model::{PageRange, ParseWarning, WarningKind};

/// OCR text of a single scanned page.
#[derive(Debug, Clone)]
pub struct PageContent {
    pub page_number: u32,
    /// Raw lines, each keeping its `\n` terminator (the last may lack one).
    pub lines: Vec<String>,
}

impl PageContent {
    /// Split page text into lines that keep their terminators.
    ///
    /// `\r\n` and a lone `\r` both end a line and become `\n`.
    pub fn from_text(page_number: u32, text: &str) -> PageContent {
        let text = text.replace("\r\n", "\n").replace('\r', "\n");
        PageContent {
            page_number,
            lines: text.split_inclusive('\n').map(str::to_string).collect(),
        }
    }

    pub fn is_blank(&self) -> bool {
        self.lines.concat().trim().is_empty()
    }
}

/// Trait for page text sources.
pub trait PageSource {
    /// Load every page in `range`, in page order. A missing page is an error.
    fn load_pages(&self, range: PageRange) -> Result<Vec<PageContent>, AlmanacError>;

    /// Name of this source (for diagnostics).
    fn source_name(&self) -> &str;
}

/// All lines of a page range, flattened in page order.
#[derive(Debug, Clone, Default)]
pub struct LoadedLines {
    pub lines: Vec<String>,
    pub warnings: Vec<ParseWarning>,
}

/// Concatenate page lines in order, warning about pages with no text.
///
/// Empty pages still contribute their (blank) lines.
pub fn flatten_lines(pages: &[PageContent]) -> LoadedLines {
    let mut loaded = LoadedLines::default();

    for page in pages {
        if page.is_blank() {
            tracing::warn!(page = page.page_number, "page is empty");
            loaded.warnings.push(ParseWarning {
                kind: WarningKind::EmptyPage,
                message: format!("page {} is empty", page.page_number),
                title: None,
            });
        }
        loaded.lines.extend(page.lines.iter().cloned());
    }

    tracing::info!("Loaded {} lines.", loaded.lines.len());
    loaded
}
