use crate::error::AlmanacError;
use crate::extraction::{PageContent, PageSource};
use crate::model::PageRange;
use std::path::{Path, PathBuf};

/// Page source reading tesseract output files `page0001.txt`, `page0002.txt`, ...
pub struct TextDirSource {
    root: PathBuf,
}

impl TextDirSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        TextDirSource { root: root.into() }
    }

    pub fn page_path(&self, page: u32) -> PathBuf {
        page_text_path(&self.root, page)
    }
}

/// `<root>/page%04d.txt`
pub fn page_text_path(root: &Path, page: u32) -> PathBuf {
    root.join(format!("page{page:04}.txt"))
}

impl PageSource for TextDirSource {
    fn load_pages(&self, range: PageRange) -> Result<Vec<PageContent>, AlmanacError> {
        range
            .pages()
            .map(|page| {
                let path = self.page_path(page);
                let text = std::fs::read_to_string(&path).map_err(|e| {
                    if e.kind() == std::io::ErrorKind::NotFound {
                        AlmanacError::PageMissing {
                            page,
                            path: path.clone(),
                        }
                    } else {
                        AlmanacError::Io(e)
                    }
                })?;
                Ok(PageContent::from_text(page, &text))
            })
            .collect()
    }

    fn source_name(&self) -> &str {
        "text-dir"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_path_is_zero_padded() {
        let source = TextDirSource::new("text-final");
        assert_eq!(
            source.page_path(7),
            PathBuf::from("text-final").join("page0007.txt")
        );
    }

    #[test]
    fn test_loads_pages_in_order() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("page0002.txt"), "second\n").unwrap();
        std::fs::write(dir.path().join("page0003.txt"), "third\n").unwrap();

        let source = TextDirSource::new(dir.path());
        let pages = source.load_pages(PageRange::new(2, 3).unwrap()).unwrap();
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].page_number, 2);
        assert_eq!(pages[1].lines, vec!["third\n"]);
    }

    #[test]
    fn test_missing_page_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("page0001.txt"), "first\n").unwrap();

        let source = TextDirSource::new(dir.path());
        let err = source
            .load_pages(PageRange::new(1, 2).unwrap())
            .unwrap_err();
        assert!(matches!(err, AlmanacError::PageMissing { page: 2, .. }));
    }
}
