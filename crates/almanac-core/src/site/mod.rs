pub mod builtin;
pub mod catalog;
pub mod schema;
pub mod sitemap;

use crate::error::AlmanacError;
use crate::model::Invention;
use crate::site::catalog::is_valid_id;
use crate::template::Template;
use crate::tool::run_tool;
use schema::SiteConfig;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::process::Command;

const DEFAULT_TEMPLATE: &str = include_str!("../../../../templates/index.html");

/// Screenshot file written next to each card page.
pub const CARD_IMAGE: &str = "card.jpg";

/// Load a site configuration from a JSON file and validate it.
pub fn load_site_config(path: &Path) -> Result<SiteConfig, AlmanacError> {
    let content = std::fs::read_to_string(path).map_err(|e| AlmanacError::SiteConfigLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    let config: SiteConfig =
        serde_json::from_str(&content).map_err(|e| AlmanacError::SiteConfigLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
    validate_site_config(&config)?;
    Ok(config)
}

pub fn validate_site_config(config: &SiteConfig) -> Result<(), AlmanacError> {
    if config.name.trim().is_empty() {
        return Err(AlmanacError::SiteConfigInvalid("name is empty".into()));
    }
    let url = &config.root_url;
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err(AlmanacError::SiteConfigInvalid(format!(
            "root_url '{}' must start with http:// or https://",
            url
        )));
    }
    if url.ends_with('/') {
        return Err(AlmanacError::SiteConfigInvalid(format!(
            "root_url '{}' must not end with '/'",
            url
        )));
    }
    if config
        .screenshot_command
        .first()
        .map_or(true, |program| program.trim().is_empty())
    {
        return Err(AlmanacError::SiteConfigInvalid(
            "screenshot_command is empty".into(),
        ));
    }
    Ok(())
}

/// When to (re)take card screenshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScreenshotPolicy {
    /// Only for cards without an existing screenshot.
    #[default]
    Missing,
    /// For every card, overwriting existing ones.
    Force,
    /// Never.
    Skip,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScreenshotFailure {
    pub id: String,
    pub reason: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct SiteReport {
    pub pages: usize,
    pub screenshots_taken: usize,
    pub screenshots_failed: Vec<ScreenshotFailure>,
    pub files: Vec<PathBuf>,
}

/// Values available to the page template.
#[derive(Debug, Serialize)]
struct PageContext<'a> {
    title: String,
    site_name: &'a str,
    description: &'a str,
    canonical_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    card_image: Option<&'a str>,
    initial_javascript: String,
}

/// Build the static card site into `out_dir`.
///
/// Every card id must be a single path component; an unsafe id aborts before
/// anything is written.
pub fn generate(
    config: &SiteConfig,
    inventions: &[Invention],
    out_dir: &Path,
    policy: ScreenshotPolicy,
) -> Result<SiteReport, AlmanacError> {
    if let Some(bad) = inventions.iter().find(|inv| !is_valid_id(&inv.id)) {
        return Err(AlmanacError::InvalidCardId(bad.id.clone()));
    }

    let template = match &config.template {
        Some(path) => Template::from_file(path)?,
        None => Template::html(DEFAULT_TEMPLATE),
    };

    std::fs::create_dir_all(out_dir)?;
    let mut report = SiteReport::default();

    if config.static_dir.is_dir() {
        copy_static(&config.static_dir, out_dir)?;
    } else {
        tracing::warn!(dir = %config.static_dir.display(), "static directory not found, skipping copy");
    }

    for inv in inventions {
        let card_dir = out_dir.join(&inv.id);
        std::fs::create_dir_all(&card_dir)?;

        let card_path = card_dir.join(CARD_IMAGE);
        let wants_screenshot = match policy {
            ScreenshotPolicy::Skip => false,
            ScreenshotPolicy::Force => true,
            ScreenshotPolicy::Missing => !card_path.exists(),
        };
        if wants_screenshot {
            match take_screenshot(&config.screenshot_command, &inv.id, &card_path) {
                Ok(()) => report.screenshots_taken += 1,
                Err(e) => {
                    tracing::warn!(id = %inv.id, "screenshot failed: {e}");
                    report.screenshots_failed.push(ScreenshotFailure {
                        id: inv.id.clone(),
                        reason: e.to_string(),
                    });
                }
            }
        }

        let html = template.render(PageContext {
            title: format!("{} | {}", inv.title, config.name),
            site_name: &config.name,
            description: &inv.summary,
            canonical_url: config.page_url(&inv.id),
            card_image: Some(CARD_IMAGE),
            initial_javascript: format!("changeFocusId({});", serde_json::to_string(&inv.id)?),
        })?;
        let page = card_dir.join("index.html");
        std::fs::write(&page, html)?;
        report.files.push(page);
        report.pages += 1;
    }

    let root_html = template.render(PageContext {
        title: config.name.clone(),
        site_name: &config.name,
        description: &config.description,
        canonical_url: config.root_url.clone(),
        card_image: None,
        initial_javascript: "changeFocusId(randomCardWithDeps().id);".to_string(),
    })?;
    let root_page = out_dir.join("index.html");
    std::fs::write(&root_page, root_html)?;
    report.files.push(root_page);

    let sitemap_path = out_dir.join("sitemap.xml");
    std::fs::write(&sitemap_path, sitemap::render(&config.root_url, inventions)?)?;
    report.files.push(sitemap_path);

    let robots_path = out_dir.join("robots.txt");
    std::fs::write(
        &robots_path,
        format!("Sitemap: {}/sitemap.xml\n", config.root_url),
    )?;
    report.files.push(robots_path);

    tracing::info!(
        pages = report.pages,
        screenshots = report.screenshots_taken,
        failed = report.screenshots_failed.len(),
        "Generated site in {}",
        out_dir.display()
    );
    Ok(report)
}

fn take_screenshot(command: &[String], id: &str, target: &Path) -> Result<(), AlmanacError> {
    let (program, args) = command
        .split_first()
        .ok_or_else(|| AlmanacError::SiteConfigInvalid("screenshot_command is empty".into()))?;
    run_tool(Command::new(program).args(args).arg(id).arg(target))?;
    Ok(())
}

/// Copy `static_dir` to `<out_dir>/<its name>`.
///
/// Skipped with a warning when source and destination overlap, e.g. when
/// `out_dir` is the directory that holds `static_dir`.
fn copy_static(static_dir: &Path, out_dir: &Path) -> Result<(), AlmanacError> {
    let name = static_dir
        .file_name()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("static"));
    let src = static_dir.canonicalize()?;
    let dst = out_dir.canonicalize()?.join(name);

    if dst.starts_with(&src) || src.starts_with(&dst) {
        tracing::warn!(
            src = %src.display(),
            dst = %dst.display(),
            "static directory overlaps its copy target, skipping copy"
        );
        return Ok(());
    }
    copy_dir(&src, &dst)
}

fn copy_dir(src: &Path, dst: &Path) -> Result<(), AlmanacError> {
    std::fs::create_dir_all(dst)?;
    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let target = dst.join(entry.file_name());
        if entry.file_type()?.is_dir() {
            copy_dir(&entry.path(), &target)?;
        } else {
            std::fs::copy(entry.path(), &target)?;
        }
    }
    Ok(())
}
