use regex::Regex;
use std::sync::LazyLock;

/// Digits with thousands separators, optionally followed by an era suffix
/// such as " B.C.".
static YEAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9,]+)([BC. ]+)?$").expect("valid year regex"));

/// Parse a paragraph that consists of nothing but a year.
///
/// - "1885" -> 1885
/// - "4,000,000 B.C." -> -4000000
/// - "circa 1885" -> None
///
/// Anything that does not match, including digit-less "," and numbers that
/// overflow, is not a year.
pub fn parse_year(s: &str) -> Option<i64> {
    let caps = YEAR_RE.captures(s.trim())?;
    let digits = caps[1].replace(',', "");
    let year: i64 = digits.parse().ok()?;
    if caps.get(2).is_some() {
        Some(-year)
    } else {
        Some(year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_year() {
        assert_eq!(parse_year("1885"), Some(1885));
        assert_eq!(parse_year("305"), Some(305));
    }

    #[test]
    fn test_era_suffix_negates() {
        assert_eq!(parse_year("4,000,000 B.C."), Some(-4_000_000));
        assert_eq!(parse_year("3500 B.C."), Some(-3500));
        assert_eq!(parse_year("800 BC"), Some(-800));
    }

    #[test]
    fn test_thousands_separator() {
        assert_eq!(parse_year("1,450"), Some(1450));
    }

    #[test]
    fn test_surrounding_whitespace_ignored() {
        assert_eq!(parse_year("  1903 \n"), Some(1903));
    }

    #[test]
    fn test_not_a_year() {
        assert_eq!(parse_year("circa 1885"), None);
        assert_eq!(parse_year("1885 A.D."), None);
        assert_eq!(parse_year("The Wheel"), None);
        assert_eq!(parse_year(""), None);
    }

    #[test]
    fn test_digitless_match_is_not_a_year() {
        assert_eq!(parse_year(","), None);
        assert_eq!(parse_year(",, B.C."), None);
    }

    #[test]
    fn test_overflow_is_not_a_year() {
        assert_eq!(parse_year("99999999999999999999999"), None);
    }

    #[test]
    fn test_zero_is_a_year() {
        assert_eq!(parse_year("0"), Some(0));
    }
}
