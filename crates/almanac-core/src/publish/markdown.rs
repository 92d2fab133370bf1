use crate::error::AlmanacError;
use crate::model::InventionRecord;
use crate::publish::format_list;
use crate::template::Template;
use minijinja::context;
use std::path::{Path, PathBuf};

const PAGE_TEMPLATE: &str = r#"---
title: "{{ title }}"
year: {{ year }}
location_estimates: {{ location_estimates }}
inventor_estimates: {{ inventor_estimates }}
---

{{ description }}
"#;

/// Render one record as a markdown page with frontmatter.
pub fn render_page(record: &InventionRecord) -> Result<String, AlmanacError> {
    Template::text(PAGE_TEMPLATE).render(context! {
        title => &record.title,
        year => record.year,
        location_estimates => format_list(&record.estimate.location_estimates),
        inventor_estimates => format_list(&record.estimate.inventor_estimates),
        description => &record.description,
    })
}

/// Regenerate `<dir>/<title>.md` for every record.
///
/// Existing `.md` files in `dir` are removed first; other files are left alone.
pub fn write_site(records: &[InventionRecord], dir: &Path) -> Result<Vec<PathBuf>, AlmanacError> {
    if dir.exists() {
        let stale: Vec<PathBuf> = std::fs::read_dir(dir)?
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.is_file() && path.extension().is_some_and(|ext| ext == "md"))
            .collect();
        tracing::info!(
            "Removing {} markdown files from {}.",
            stale.len(),
            dir.display()
        );
        for path in &stale {
            std::fs::remove_file(path)?;
        }
    } else {
        tracing::info!("Creating {}", dir.display());
        std::fs::create_dir_all(dir)?;
    }

    let mut written = Vec::with_capacity(records.len());
    for record in records {
        let path = dir.join(format!("{}.md", record.title));
        tracing::debug!("Writing {}.", path.display());
        std::fs::write(&path, render_page(record)?)?;
        written.push(path);
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_page() {
        let mut record = InventionRecord::new("Printing Press", "Movable type.\n\n", 1450);
        record.estimate.location_estimates = vec!["Mainz".into()];
        let page = render_page(&record).unwrap();
        assert_eq!(
            page,
            "---\ntitle: \"Printing Press\"\nyear: 1450\nlocation_estimates: [\"Mainz\"]\n\
             inventor_estimates: []\n---\n\nMovable type.\n\n\n"
        );
    }

    #[test]
    fn test_write_site_replaces_old_pages() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("Stale.md"), "old").unwrap();
        std::fs::write(dir.path().join("keep.txt"), "keep").unwrap();

        let records = vec![InventionRecord::new("Fire", "Warmth.\n\n", -400000)];
        let written = write_site(&records, dir.path()).unwrap();

        assert_eq!(written, vec![dir.path().join("Fire.md")]);
        assert!(!dir.path().join("Stale.md").exists());
        assert!(dir.path().join("keep.txt").exists());
        let body = std::fs::read_to_string(dir.path().join("Fire.md")).unwrap();
        assert!(body.contains("year: -400000"));
    }

    #[test]
    fn test_write_site_creates_dir() {
        let dir = tempfile::tempdir().unwrap();
        let site = dir.path().join("nested").join("site");
        write_site(&[], &site).unwrap();
        assert!(site.is_dir());
    }
}
