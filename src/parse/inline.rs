//! Inline markdown formatting: bold, italic, and code spans.

use crate::model::TextRun;
use regex::Regex;

/// Splits a line into styled runs on non-overlapping markdown spans.
///
/// `**bold**` takes priority over `*italic*` at a given position, then
/// `` `code` ``. Delimiters must open and close on the same line;
/// unmatched or degenerate delimiters stay literal plain text.
pub struct InlineFormatter {
    span: Regex,
}

impl InlineFormatter {
    /// Create a formatter with its span pattern compiled.
    pub fn new() -> Self {
        Self {
            span: Regex::new(r"\*\*.*?\*\*|\*.*?\*|`.*?`").unwrap(),
        }
    }

    /// Split a line into alternating plain and styled runs, in order.
    pub fn split_runs(&self, text: &str) -> Vec<TextRun> {
        let mut runs = Vec::new();
        let mut last = 0;

        for m in self.span.find_iter(text) {
            if m.start() > last {
                runs.push(TextRun::plain(&text[last..m.start()]));
            }
            runs.push(Self::styled_run(m.as_str()));
            last = m.end();
        }
        if last < text.len() {
            runs.push(TextRun::plain(&text[last..]));
        }

        runs
    }

    /// Turn one matched span into a styled run, falling back to a plain
    /// run when the delimiters are degenerate (e.g. `****`).
    fn styled_run(span: &str) -> TextRun {
        if span.starts_with("**") && span.ends_with("**") && span.len() > 4 {
            TextRun::bold(&span[2..span.len() - 2])
        } else if span.starts_with('*')
            && span.ends_with('*')
            && span.len() > 2
            && !span.starts_with("**")
        {
            TextRun::italic(&span[1..span.len() - 1])
        } else if span.starts_with('`') && span.ends_with('`') && span.len() > 2 {
            TextRun::monospace(&span[1..span.len() - 1])
        } else {
            TextRun::plain(span)
        }
    }
}

impl Default for InlineFormatter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RunStyle;

    fn runs(text: &str) -> Vec<TextRun> {
        InlineFormatter::new().split_runs(text)
    }

    #[test]
    fn test_plain_only() {
        let out = runs("just text");
        assert_eq!(out, vec![TextRun::plain("just text")]);
    }

    #[test]
    fn test_mixed_styles() {
        let out = runs("Some **bold** and *italic* text");
        assert_eq!(
            out,
            vec![
                TextRun::plain("Some "),
                TextRun::bold("bold"),
                TextRun::plain(" and "),
                TextRun::italic("italic"),
                TextRun::plain(" text"),
            ]
        );
    }

    #[test]
    fn test_code_span() {
        let out = runs("run `cargo bench` now");
        assert_eq!(out[1], TextRun::monospace("cargo bench"));
        assert_eq!(out.len(), 3);
    }

    #[test]
    fn test_bold_wins_over_italic() {
        let out = runs("**not italic**");
        assert_eq!(out, vec![TextRun::bold("not italic")]);
    }

    #[test]
    fn test_unmatched_delimiter_is_literal() {
        // A lone "**" matches the single-star pattern but is too short
        // to style, so every run stays plain and the text survives.
        let out = runs("a ** b");
        assert!(out.iter().all(|r| r.style == RunStyle::Plain));
        let joined: String = out.iter().map(|r| r.text.as_str()).collect();
        assert_eq!(joined, "a ** b");
    }

    #[test]
    fn test_degenerate_bold_is_literal() {
        let out = runs("****");
        assert_eq!(out, vec![TextRun::plain("****")]);
    }

    #[test]
    fn test_adjacent_spans() {
        let out = runs("**a***b*");
        assert_eq!(out[0], TextRun::bold("a"));
        assert_eq!(out[1], TextRun::italic("b"));
    }
}
