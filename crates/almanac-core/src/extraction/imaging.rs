use crate::error::AlmanacError;
use crate::model::PageRange;
use crate::tool::run_tool;
use std::path::{Path, PathBuf};
use std::process::Command;

const CONVERT: &str = "convert";

/// Rows chopped off the top of each scan (running header).
pub const HEADER_CHOP: &str = "0x140";

pub const THUMB_WIDTH: u32 = 240;
pub const THUMB_HEIGHT: u32 = 135;

/// Locate `<root>/<stem>.png`, falling back to `<root>/<stem>.jpg`.
pub fn find_image(root: &Path, stem: &str) -> Result<PathBuf, AlmanacError> {
    let png = root.join(format!("{stem}.png"));
    if png.exists() {
        return Ok(png);
    }
    let jpg = root.join(format!("{stem}.jpg"));
    if jpg.exists() {
        return Ok(jpg);
    }
    Err(AlmanacError::ImageMissing { path: jpg })
}

/// Crop the running header off `thumb%04d.{png,jpg}` into `page%04d.jpg`.
pub fn crop_page(in_root: &Path, out_root: &Path, page: u32) -> Result<PathBuf, AlmanacError> {
    let source = find_image(in_root, &format!("thumb{page:04}"))?;
    std::fs::create_dir_all(out_root)?;
    let target = out_root.join(format!("page{page:04}.jpg"));

    run_tool(
        Command::new(CONVERT)
            .arg(&source)
            .args(["-gravity", "North", "-chop", HEADER_CHOP])
            .arg(&target),
    )?;
    Ok(target)
}

pub fn crop_pages(
    in_root: &Path,
    out_root: &Path,
    range: PageRange,
) -> Result<Vec<PathBuf>, AlmanacError> {
    range
        .pages()
        .map(|page| crop_page(in_root, out_root, page))
        .collect()
}

/// Resize-and-center-crop an illustration to exactly `width`x`height`.
pub fn make_thumbnail(
    source: &Path,
    target: &Path,
    width: u32,
    height: u32,
) -> Result<(), AlmanacError> {
    run_tool(
        Command::new(CONVERT)
            .arg(source)
            .arg("-resize")
            .arg(format!("{width}x{height}^"))
            .args(["-gravity", "center", "-crop"])
            .arg(format!("{width}x{height}+0+0"))
            .arg("+repage")
            .arg(target),
    )?;
    Ok(())
}

/// Card id for an illustration named `"<index> <name>.<ext>"`.
///
/// Returns None for dotfiles and names without the index prefix.
pub fn thumbnail_name(file_name: &str) -> Option<String> {
    if file_name.starts_with('.') {
        return None;
    }
    let (_index, name_ext) = file_name.split_once(' ')?;
    let name = Path::new(name_ext).file_stem()?.to_str()?;
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}

/// Convert every illustration in `in_dir` into `<out_dir>/<name>.jpg`, in file name order.
pub fn make_thumbnails(in_dir: &Path, out_dir: &Path) -> Result<Vec<PathBuf>, AlmanacError> {
    let mut names: Vec<String> = std::fs::read_dir(in_dir)?
        .filter_map(|entry| entry.ok())
        .filter_map(|entry| entry.file_name().into_string().ok())
        .collect();
    names.sort();

    std::fs::create_dir_all(out_dir)?;
    let mut written = Vec::new();
    for file_name in names {
        let Some(name) = thumbnail_name(&file_name) else {
            tracing::debug!(file = %file_name, "skipping illustration");
            continue;
        };
        let target = out_dir.join(format!("{name}.jpg"));
        make_thumbnail(&in_dir.join(&file_name), &target, THUMB_WIDTH, THUMB_HEIGHT)?;
        written.push(target);
    }

    tracing::info!("Converted {} illustrations.", written.len());
    Ok(written)
}
