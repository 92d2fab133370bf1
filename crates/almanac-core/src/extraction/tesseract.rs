use crate::error::AlmanacError;
use crate::extraction::imaging::find_image;
use crate::model::PageRange;
use crate::tool::run_tool;
use std::path::{Path, PathBuf};
use std::process::Command;

/// OCR backend shelling out to `tesseract`.
///
/// Reads `page%04d.png` (falling back to `.jpg`) from the image root and
/// writes `page%04d.txt` into the text root, the layout `TextDirSource` reads.
pub struct TesseractRunner {
    program: String,
}

impl TesseractRunner {
    pub fn new() -> Self {
        TesseractRunner {
            program: "tesseract".into(),
        }
    }

    /// Use a different tesseract binary.
    pub fn with_program(program: impl Into<String>) -> Self {
        TesseractRunner {
            program: program.into(),
        }
    }

    /// OCR one page. Returns the path of the written text file.
    pub fn ocr_page(
        &self,
        images_root: &Path,
        text_root: &Path,
        page: u32,
    ) -> Result<PathBuf, AlmanacError> {
        let image = find_image(images_root, &format!("page{page:04}"))?;
        std::fs::create_dir_all(text_root)?;

        // tesseract appends ".txt" to the output base itself.
        let out_base = text_root.join(format!("page{page:04}"));
        run_tool(Command::new(&self.program).arg(&image).arg(&out_base))?;

        let written = out_base.with_extension("txt");
        tracing::info!("Wrote {}", written.display());
        Ok(written)
    }

    /// OCR every page in `range`, stopping at the first failure.
    pub fn ocr_pages(
        &self,
        images_root: &Path,
        text_root: &Path,
        range: PageRange,
    ) -> Result<Vec<PathBuf>, AlmanacError> {
        range
            .pages()
            .map(|page| self.ocr_page(images_root, text_root, page))
            .collect()
    }
}

impl Default for TesseractRunner {
    fn default() -> Self {
        Self::new()
    }
}
