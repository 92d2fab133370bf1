/// Rebuilds paragraphs from OCR lines.
///
/// A line that is exactly `"\n"` ends the current paragraph. Other line
/// breaks are collapsed into a single space, and a trailing hyphen joins the
/// next line without a space (`"exam-"` + `"ple"` = `"example"`).
#[derive(Debug, Default)]
pub struct Paragraphizer {
    buf: String,
}

impl Paragraphizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one raw line (terminator included). Returns a paragraph when this
    /// line closes one.
    pub fn push(&mut self, line: &str) -> Option<String> {
        let mut finished = None;
        if line == "\n" && !self.buf.trim().is_empty() {
            finished = Some(self.buf.trim().to_string());
            self.buf.clear();
        }

        // The blank line that closed a paragraph is appended too, as a lone
        // space. Paragraphs are trimmed on the way out so it never shows.
        let stripped = line.trim();
        if self.buf.ends_with('-') {
            self.buf.pop();
        } else {
            self.buf.push(' ');
        }
        self.buf.push_str(stripped);

        finished
    }

    /// The unterminated paragraph left at end of input, if it has any text.
    pub fn finish(self) -> Option<String> {
        let rest = self.buf.trim();
        if rest.is_empty() {
            None
        } else {
            Some(rest.to_string())
        }
    }
}

/// Paragraphize a whole line stream, including an unterminated last paragraph.
pub fn paragraphize<S: AsRef<str>>(lines: &[S]) -> Vec<String> {
    let mut p = Paragraphizer::new();
    let mut paragraphs: Vec<String> = lines.iter().filter_map(|l| p.push(l.as_ref())).collect();
    paragraphs.extend(p.finish());
    paragraphs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dehyphenation() {
        let paras = paragraphize(&["exam-\n", "ple text\n"]);
        assert_eq!(paras, vec!["example text"]);
    }

    #[test]
    fn test_blank_line_splits_paragraphs() {
        let paras = paragraphize(&["Hello world\n", "\n", "Next para\n"]);
        assert_eq!(paras, vec!["Hello world", "Next para"]);
    }

    #[test]
    fn test_single_breaks_collapse_to_space() {
        let paras = paragraphize(&["The first\n", "  steam engine\n", "\n"]);
        assert_eq!(paras, vec!["The first steam engine"]);
    }

    #[test]
    fn test_push_only_emits_terminated_paragraphs() {
        let mut p = Paragraphizer::new();
        let emitted: Vec<String> = ["Hello world\n", "\n", "Next para\n"]
            .iter()
            .filter_map(|l| p.push(l))
            .collect();
        assert_eq!(emitted, vec!["Hello world"]);
    }

    #[test]
    fn test_finish_returns_unterminated_tail() {
        let mut p = Paragraphizer::new();
        assert_eq!(p.push("Hello world\n"), None);
        assert_eq!(p.push("\n").as_deref(), Some("Hello world"));
        assert_eq!(p.push("Next para\n"), None);
        assert_eq!(p.finish().as_deref(), Some("Next para"));
    }

    #[test]
    fn test_closing_blank_line_leaves_no_leading_space() {
        let mut p = Paragraphizer::new();
        p.push("Hello world\n");
        p.push("\n");
        // The closing blank line was appended as a space.
        assert_eq!(p.buf, " ");
        p.push("Next para\n");
        assert_eq!(p.push("\n").as_deref(), Some("Next para"));
    }

    #[test]
    fn test_whitespace_only_line_is_not_a_boundary() {
        let paras = paragraphize(&["one\n", "   \n", "two\n", "\n"]);
        assert_eq!(paras, vec!["one  two"]);
    }

    #[test]
    fn test_repeated_blank_lines_yield_no_empty_paragraphs() {
        let paras = paragraphize(&["\n", "\n", "one\n", "\n", "\n", "\n", "two\n", "\n"]);
        assert_eq!(paras, vec!["one", "two"]);
    }

    #[test]
    fn test_hyphen_before_blank_line_is_kept() {
        let paras = paragraphize(&["self-\n", "\n", "next\n", "\n"]);
        assert_eq!(paras, vec!["self-", "next"]);
    }
}
