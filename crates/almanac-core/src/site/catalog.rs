use crate::error::AlmanacError;
use crate::model::Invention;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::io::Read;
use std::path::Path;

/// Fields a card may belong to (the part before any `:` in the Field column).
pub const VALID_FIELDS: &[&str] = &[
    "general",
    "science",
    "space",
    "math",
    "culture",
    "war",
    "design",
    "geography",
];

#[derive(Debug, Deserialize)]
struct CatalogRow {
    #[serde(rename = "ID")]
    id: String,
    #[serde(rename = "Year")]
    year: String,
    #[serde(rename = "Dependencies", default)]
    dependencies: String,
    #[serde(rename = "Title")]
    title: String,
    #[serde(rename = "Description", default)]
    description: String,
    #[serde(rename = "Summary", default)]
    summary: Option<String>,
    #[serde(rename = "Inventor", default)]
    inventor: String,
    #[serde(rename = "Location", default)]
    location: String,
    #[serde(rename = "Field", default)]
    field: String,
    #[serde(rename = "URL", default)]
    url: String,
}

/// Parse a catalog year such as "1903", "1,450" or "3000 BC".
///
/// A suffix containing "bc" (any case, so "BCE" too) makes the year negative.
pub fn parse_catalog_year(s: &str) -> Option<i64> {
    let mut parts = s.trim().splitn(2, ' ');
    let number = parts.next()?.replace(',', "");
    let suffix = parts.next().unwrap_or("").to_lowercase();
    let year: i64 = number.parse().ok()?;
    if suffix.contains("bc") {
        Some(-year)
    } else {
        Some(year)
    }
}

/// Split "fire, wheel" into ids. An empty column means no dependencies.
pub fn parse_dependencies(s: &str) -> Vec<String> {
    if s.trim().is_empty() {
        return Vec::new();
    }
    s.split(',').map(|dep| dep.trim().to_string()).collect()
}

/// Lowercased field name before any ":" qualifier, "unknown" when blank.
pub fn field_name(field: &str) -> String {
    let name = field.split(':').next().unwrap_or("").trim().to_lowercase();
    if name.is_empty() {
        "unknown".to_string()
    } else {
        name
    }
}

/// Whether `id` can name a card directory: a single, non-empty path component.
pub fn is_valid_id(id: &str) -> bool {
    !id.is_empty() && id != "." && id != ".." && !id.contains(['/', '\\', '\0'])
}

/// Read a tab-separated catalog with a header row.
pub fn read_catalog<R: Read>(reader: R) -> Result<Vec<Invention>, AlmanacError> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .quoting(false)
        .from_reader(reader);

    let mut inventions = Vec::new();
    for (i, row) in rdr.deserialize::<CatalogRow>().enumerate() {
        let row = row?;
        let year = parse_catalog_year(&row.year).ok_or_else(|| AlmanacError::Catalog {
            path: "<tsv>".into(),
            reason: format!("row {}: invalid year '{}' for '{}'", i + 2, row.year, row.id),
        })?;
        let summary = match row.summary {
            Some(s) if !s.trim().is_empty() => s,
            _ => row.description.clone(),
        };
        inventions.push(Invention {
            id: row.id,
            year,
            dependencies: parse_dependencies(&row.dependencies),
            title: row.title,
            description: row.description,
            summary,
            inventor: row.inventor,
            location: row.location,
            field: row.field,
            url: row.url,
        });
    }
    Ok(inventions)
}

pub fn load_catalog(path: &Path) -> Result<Vec<Invention>, AlmanacError> {
    let file = std::fs::File::open(path).map_err(|e| AlmanacError::Catalog {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    read_catalog(file).map_err(|e| match e {
        AlmanacError::Catalog { reason, .. } => AlmanacError::Catalog {
            path: path.to_path_buf(),
            reason,
        },
        other => AlmanacError::Catalog {
            path: path.to_path_buf(),
            reason: other.to_string(),
        },
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueSeverity {
    Error,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogIssue {
    pub severity: IssueSeverity,
    pub id: String,
    pub message: String,
}

impl CatalogIssue {
    fn error(id: &str, message: String) -> Self {
        CatalogIssue {
            severity: IssueSeverity::Error,
            id: id.to_string(),
            message,
        }
    }
}

/// Check catalog consistency.
///
/// Errors: ids that are not a single path component, duplicate ids, unknown or self dependencies, dependencies dated
/// after the card, unknown fields. Warnings: cards with no dependencies that
/// nothing depends on.
pub fn validate(inventions: &[Invention]) -> Vec<CatalogIssue> {
    let mut issues = Vec::new();

    for inv in inventions.iter().filter(|inv| !is_valid_id(&inv.id)) {
        issues.push(CatalogIssue::error(&inv.id, format!("invalid id '{}'", inv.id)));
    }

    let mut seen = HashSet::new();
    for inv in inventions {
        if !seen.insert(inv.id.as_str()) {
            issues.push(CatalogIssue::error(&inv.id, format!("duplicate id '{}'", inv.id)));
        }
    }

    // First occurrence wins for year lookups.
    let mut years: HashMap<&str, i64> = HashMap::new();
    for inv in inventions {
        years.entry(inv.id.as_str()).or_insert(inv.year);
    }

    for inv in inventions {
        for dep in &inv.dependencies {
            let Some(&dep_year) = years.get(dep.as_str()) else {
                issues.push(CatalogIssue::error(
                    &inv.id,
                    format!("missing dependency '{}' for '{}'", dep, inv.id),
                ));
                continue;
            };
            if dep == &inv.id {
                issues.push(CatalogIssue::error(
                    &inv.id,
                    format!("'{}' depends on itself", inv.id),
                ));
            }
            if dep_year > inv.year {
                issues.push(CatalogIssue::error(
                    &inv.id,
                    format!(
                        "'{}' ({}) has dependency from the future '{}' ({})",
                        inv.id, inv.year, dep, dep_year
                    ),
                ));
            }
        }
    }

    let mut invalid_fields: Vec<String> = inventions
        .iter()
        .map(|inv| field_name(&inv.field))
        .filter(|f| !VALID_FIELDS.contains(&f.as_str()))
        .collect();
    invalid_fields.sort();
    invalid_fields.dedup();
    for field in invalid_fields {
        issues.push(CatalogIssue::error("", format!("invalid field '{}'", field)));
    }

    let depended_on: HashSet<&str> = inventions
        .iter()
        .flat_map(|inv| inv.dependencies.iter().map(String::as_str))
        .collect();
    for inv in inventions {
        if inv.dependencies.is_empty() && !depended_on.contains(inv.id.as_str()) {
            issues.push(CatalogIssue {
                severity: IssueSeverity::Warning,
                id: inv.id.clone(),
                message: format!(
                    "card '{}' has no dependencies and nothing depends on it",
                    inv.id
                ),
            });
        }
    }

    issues
}
