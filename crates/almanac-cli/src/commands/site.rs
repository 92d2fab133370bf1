use almanac_core::error::AlmanacError;
use almanac_core::site::{self, builtin, catalog, ScreenshotPolicy};
use std::path::{Path, PathBuf};

use crate::output;

/// Preset used when neither `--preset` nor `--config` is given.
const DEFAULT_PRESET: &str = "cards";

pub fn run(
    preset: Option<String>,
    config_file: Option<PathBuf>,
    out_dir: &Path,
    force_screenshots: bool,
    no_screenshots: bool,
    catalog_file: Option<PathBuf>,
) -> Result<(), AlmanacError> {
    let mut config = match (config_file, preset) {
        (Some(path), _) => site::load_site_config(&path)?,
        (None, Some(name)) => builtin::load_preset(&name)?,
        (None, None) => builtin::load_preset(DEFAULT_PRESET)?,
    };
    if let Some(path) = catalog_file {
        config.catalog = path;
    }

    let policy = if no_screenshots {
        ScreenshotPolicy::Skip
    } else if force_screenshots {
        ScreenshotPolicy::Force
    } else {
        ScreenshotPolicy::Missing
    };

    let inventions = catalog::load_catalog(&config.catalog)?;
    let issues = catalog::validate(&inventions);
    if !issues.is_empty() {
        tracing::warn!(
            "{} catalog issue(s); run `almanac site-check {}` for details",
            issues.len(),
            config.catalog.display()
        );
    }

    let report = site::generate(&config, &inventions, out_dir, policy)?;

    tracing::info!(
        "Generated {} page(s) for '{}' in {}",
        report.pages,
        config.name,
        out_dir.display()
    );
    if report.screenshots_taken > 0 {
        tracing::info!("{} screenshot(s) taken", report.screenshots_taken);
    }
    for failure in &report.screenshots_failed {
        tracing::warn!(id = %failure.id, "screenshot failed: {}", failure.reason);
    }

    Ok(())
}

pub fn check(tsv_file: &Path) -> Result<(), AlmanacError> {
    let inventions = catalog::load_catalog(tsv_file)?;
    println!(
        "Catalog '{}': {} card(s)\n",
        tsv_file.display(),
        inventions.len()
    );
    let issues = catalog::validate(&inventions);
    output::table::print_issues(&issues);

    let errors = issues
        .iter()
        .filter(|i| i.severity == catalog::IssueSeverity::Error)
        .count();
    if errors > 0 {
        return Err(AlmanacError::Catalog {
            path: tsv_file.to_path_buf(),
            reason: format!("{errors} validation error(s)"),
        });
    }
    Ok(())
}

pub fn list() -> Result<(), AlmanacError> {
    println!("Available predefined sites:\n");
    for name in builtin::PRESETS {
        let config = builtin::load_preset(name)?;
        println!("  {:<8} {} ({})", name, config.name, config.root_url);
        println!("           {}", config.description);
        println!();
    }
    Ok(())
}
