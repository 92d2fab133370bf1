use regex::Regex;
use std::sync::LazyLock;

/// Words ignored when counting title words. Matched case-sensitively, so a
/// leading "The" still counts.
const STOP_WORDS: &[&str] = &["and", "of", "in", "the"];

/// Longest title, in significant words.
const MAX_TITLE_WORDS: usize = 4;

static CAPITALIZED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Z][a-z]+").expect("valid capitalized-word regex"));

/// Classify a paragraph as an invention title.
///
/// A title has at most four words once stop words are removed, and exactly as
/// many capitalized-word matches as remaining words. The capitalized matches
/// are counted on the original text, so "McCormick" counts twice.
///
/// Returns the paragraph verbatim.
pub fn parse_title(s: &str) -> Option<&str> {
    let word_count = s
        .split(' ')
        .filter(|word| !STOP_WORDS.contains(word))
        .count();
    let capitalized_count = CAPITALIZED_RE.find_iter(s).count();

    if word_count <= MAX_TITLE_WORDS && word_count == capitalized_count {
        Some(s)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_with_capitalized_stop_word() {
        // "The" is not removed (case-sensitive), and it is capitalized: 3 == 3.
        assert_eq!(parse_title("The Wright Brothers"), Some("The Wright Brothers"));
    }

    #[test]
    fn test_lowercase_stop_words_removed() {
        assert_eq!(parse_title("Conservation of Energy"), Some("Conservation of Energy"));
        assert_eq!(parse_title("Wheel and Axle"), Some("Wheel and Axle"));
    }

    #[test]
    fn test_every_stop_word_occurrence_removed() {
        assert_eq!(
            parse_title("Law of Conservation of Energy"),
            Some("Law of Conservation of Energy")
        );
    }

    #[test]
    fn test_inner_capital_is_false_negative() {
        // One word, two capitalized matches ("Mc", "Cormick").
        assert_eq!(parse_title("McCormick Reaper"), None);
    }

    #[test]
    fn test_too_many_words() {
        assert_eq!(parse_title("Gutenberg Printing Press With Movable Type"), None);
    }

    #[test]
    fn test_lowercase_words_reject() {
        assert_eq!(parse_title("The printing press"), None);
        assert_eq!(parse_title("Paper was invented in China."), None);
    }

    #[test]
    fn test_acronyms_and_numbers_reject() {
        assert_eq!(parse_title("DNA"), None);
        assert_eq!(parse_title("1885"), None);
        assert_eq!(parse_title(""), None);
    }

    #[test]
    fn test_returns_original_text() {
        let s = "Steam Engine of Hero";
        assert_eq!(parse_title(s), Some(s));
    }
}
