pub mod csv;
pub mod download_conf;
pub mod index;
pub mod markdown;

use std::fmt::Write;

/// Render a list the way the published files show estimate lists: `["a", "b"]`.
pub fn format_list(items: &[String]) -> String {
    let mut out = String::from("[");
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        let _ = write!(out, "{item:?}");
    }
    out.push(']');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_list() {
        assert_eq!(format_list(&[]), "[]");
        assert_eq!(
            format_list(&["Paris".to_string(), "New York".to_string()]),
            r#"["Paris", "New York"]"#
        );
    }
}
