use almanac_core::model::ParsedBook;
use almanac_core::site::catalog::{CatalogIssue, IssueSeverity};

/// Longest description excerpt shown per record.
const EXCERPT_CHARS: usize = 60;

fn excerpt(text: &str) -> String {
    let flat = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.chars().count() <= EXCERPT_CHARS {
        flat
    } else {
        let cut: String = flat.chars().take(EXCERPT_CHARS).collect();
        format!("{cut}...")
    }
}

pub fn format_parsed(book: &ParsedBook) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "{} record(s) from {} line(s), {} paragraph(s)\n\n",
        book.records.len(),
        book.line_count,
        book.paragraph_count
    ));

    if !book.records.is_empty() {
        let title_width = book
            .records
            .iter()
            .map(|r| r.title.chars().count())
            .max()
            .unwrap_or(5)
            .max(5);

        out.push_str(&format!(
            "  {:>10}  {:<width$}  Description\n",
            "Year",
            "Title",
            width = title_width
        ));
        out.push_str(&format!(
            "  {}\n",
            "-".repeat(10 + 2 + title_width + 2 + EXCERPT_CHARS + 3)
        ));

        for record in &book.records {
            out.push_str(&format!(
                "  {:>10}  {:<width$}  {}\n",
                record.year,
                record.title,
                excerpt(&record.description),
                width = title_width
            ));
            let est = &record.estimate;
            if !est.inventor_estimates.is_empty() || !est.location_estimates.is_empty() {
                out.push_str(&format!(
                    "  {:>10}  inventors: {}; locations: {}\n",
                    "",
                    est.inventor_estimates.join(", "),
                    est.location_estimates.join(", ")
                ));
            }
        }
    }

    if !book.warnings.is_empty() {
        out.push_str(&format!("\nWarnings ({}):\n", book.warnings.len()));
        for w in &book.warnings {
            out.push_str(&format!("  - {}\n", w.message));
        }
    }

    out
}

pub fn print_issues(issues: &[CatalogIssue]) {
    let errors = issues
        .iter()
        .filter(|i| i.severity == IssueSeverity::Error)
        .count();
    let warnings = issues.len() - errors;

    for issue in issues {
        let label = match issue.severity {
            IssueSeverity::Error => "error",
            IssueSeverity::Warning => "warning",
        };
        println!("  {:<8} {}", label, issue.message);
    }
    if !issues.is_empty() {
        println!();
    }
    println!("{} error(s), {} warning(s)", errors, warnings);
}

#[cfg(test)]
mod tests {
    use super::*;
    use almanac_core::model::InventionRecord;

    #[test]
    fn test_excerpt_truncates() {
        let long = "word ".repeat(30);
        let e = excerpt(&long);
        assert!(e.ends_with("..."));
        assert_eq!(e.chars().count(), EXCERPT_CHARS + 3);
        assert_eq!(excerpt("Short.\n\nText.\n\n"), "Short. Text.");
    }

    #[test]
    fn test_format_parsed_lists_records() {
        let book = ParsedBook {
            records: vec![InventionRecord::new("Airplane", "Kitty Hawk.\n\n", 1903)],
            warnings: Vec::new(),
            line_count: 12,
            paragraph_count: 5,
        };
        let text = format_parsed(&book);
        assert!(text.starts_with("1 record(s) from 12 line(s), 5 paragraph(s)"));
        assert!(text.contains("1903  Airplane"));
        assert!(!text.contains("Warnings"));
    }
}
