use almanac_core::error::AlmanacError;
use almanac_core::extraction::imaging;
use almanac_core::extraction::tesseract::TesseractRunner;
use almanac_core::model::PageRange;
use std::path::Path;

pub fn crop(in_dir: &Path, out_dir: &Path, pages: PageRange) -> Result<(), AlmanacError> {
    let written = imaging::crop_pages(in_dir, out_dir, pages)?;
    tracing::info!("Cropped {} page(s) into {}", written.len(), out_dir.display());
    Ok(())
}

pub fn ocr(images: &Path, text: &Path, pages: PageRange) -> Result<(), AlmanacError> {
    let runner = TesseractRunner::new();
    let written = runner.ocr_pages(images, text, pages)?;
    tracing::info!("OCR'ed {} page(s) into {}", written.len(), text.display());
    Ok(())
}

pub fn thumbnails(in_dir: &Path, out_dir: &Path) -> Result<(), AlmanacError> {
    let written = imaging::make_thumbnails(in_dir, out_dir)?;
    for path in &written {
        println!("{}", path.display());
    }
    Ok(())
}
