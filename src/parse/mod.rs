//! Markdown-draft parsing.
//!
//! Converts the loosely-markdown text a drafting service produces into
//! structural [`Block`]s. Conversion is a pure function of the input
//! text: it never fails and never panics, degrading malformed input to
//! the most specific fallback available (malformed table → text block →
//! literal paragraph).

mod inline;
mod line;
mod options;
mod table;

pub use inline::InlineFormatter;
pub use line::{LineClassifier, LineKind};
pub use options::ParseOptions;
pub use table::parse_table_block;

use crate::model::{Block, ListKind, Paragraph, NO_CONTENT_SENTINEL};
use log::{debug, trace};
use regex::Regex;

/// Converts raw draft text into structural blocks.
pub struct MarkdownParser {
    options: ParseOptions,
    classifier: LineClassifier,
    inline: InlineFormatter,
    block_split: Regex,
}

impl MarkdownParser {
    /// Create a parser with default options.
    pub fn new() -> Self {
        Self::with_options(ParseOptions::default())
    }

    /// Create a parser with custom options.
    pub fn with_options(options: ParseOptions) -> Self {
        Self {
            options,
            classifier: LineClassifier::new(),
            inline: InlineFormatter::new(),
            // A blank line may carry horizontal whitespace
            block_split: Regex::new(r"\n[ \t]*\n").unwrap(),
        }
    }

    /// Convert raw text into blocks, in reading order.
    ///
    /// Empty input or the no-content sentinel yields exactly one
    /// placeholder paragraph. Any other input with at least one
    /// non-blank line yields at least one block.
    pub fn parse(&self, text: &str) -> Vec<Block> {
        let trimmed = text.trim();
        if trimmed.is_empty() || trimmed == NO_CONTENT_SENTINEL {
            return vec![Paragraph::with_text(&self.options.placeholder).into()];
        }

        let mut blocks = Vec::new();
        for chunk in self.block_split.split(text) {
            let chunk = chunk.trim();
            if chunk.is_empty() {
                continue;
            }

            let pipe_lines = chunk.lines().filter(|l| l.contains('|')).count();
            if pipe_lines >= self.options.min_table_lines {
                if let Some(t) = parse_table_block(chunk) {
                    trace!("parsed table block: {} columns", t.column_count());
                    blocks.push(Block::Table(t));
                    continue;
                }
                debug!("table candidate fell back to text parsing");
            }

            self.parse_text_block(chunk, &mut blocks);
        }
        blocks
    }

    /// Classify and emit the lines of one text block, consuming list
    /// runs with lookahead so consecutive items form one run.
    fn parse_text_block(&self, block: &str, out: &mut Vec<Block>) {
        let lines: Vec<&str> = block
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();

        let mut i = 0;
        while i < lines.len() {
            match self.classifier.classify(lines[i]) {
                LineKind::Heading { level, text } => {
                    let level = level.min(self.options.max_heading_level);
                    out.push(Paragraph::heading(text, level).into());
                    i += 1;
                }
                LineKind::OrderedItem(text) => {
                    out.push(Paragraph::list_item(text, ListKind::Ordered).into());
                    i += 1;
                    while i < lines.len() {
                        match self.classifier.classify(lines[i]) {
                            LineKind::OrderedItem(next) => {
                                out.push(Paragraph::list_item(next, ListKind::Ordered).into());
                                i += 1;
                            }
                            _ => break,
                        }
                    }
                }
                LineKind::BulletItem(text) => {
                    out.push(Paragraph::list_item(text, ListKind::Unordered).into());
                    i += 1;
                    while i < lines.len() {
                        match self.classifier.classify(lines[i]) {
                            LineKind::BulletItem(next) => {
                                out.push(Paragraph::list_item(next, ListKind::Unordered).into());
                                i += 1;
                            }
                            _ => break,
                        }
                    }
                }
                LineKind::BoldParagraph(text) => {
                    out.push(Paragraph::bold(text).into());
                    i += 1;
                }
                LineKind::Text(text) => {
                    out.push(Paragraph::with_runs(self.inline.split_runs(&text)).into());
                    i += 1;
                }
            }
        }
    }
}

impl Default for MarkdownParser {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{RunStyle, NO_CONTENT_PLACEHOLDER};

    fn parse(text: &str) -> Vec<Block> {
        MarkdownParser::new().parse(text)
    }

    fn paragraph(block: &Block) -> &Paragraph {
        match block {
            Block::Paragraph(p) => p,
            Block::Table(_) => panic!("expected paragraph"),
        }
    }

    #[test]
    fn test_empty_input_yields_placeholder() {
        let blocks = parse("");
        assert_eq!(blocks.len(), 1);
        assert_eq!(paragraph(&blocks[0]).plain_text(), NO_CONTENT_PLACEHOLDER);
    }

    #[test]
    fn test_sentinel_yields_placeholder() {
        let blocks = parse(NO_CONTENT_SENTINEL);
        assert_eq!(blocks.len(), 1);
        assert_eq!(paragraph(&blocks[0]).plain_text(), NO_CONTENT_PLACEHOLDER);
    }

    #[test]
    fn test_whitespace_only_block_skipped() {
        let blocks = parse("first\n\n   \n\nsecond");
        assert_eq!(blocks.len(), 2);
    }

    #[test]
    fn test_ordered_run_consumed_together() {
        let blocks = parse("1. First\n2. Second\nplain tail");
        assert_eq!(blocks.len(), 3);
        assert_eq!(paragraph(&blocks[0]).style.list, Some(ListKind::Ordered));
        assert_eq!(paragraph(&blocks[1]).style.list, Some(ListKind::Ordered));
        assert_eq!(paragraph(&blocks[1]).plain_text(), "Second");
        assert!(paragraph(&blocks[2]).style.list.is_none());
    }

    #[test]
    fn test_bullet_run() {
        let blocks = parse("* one\n- two");
        assert_eq!(blocks.len(), 2);
        assert!(blocks
            .iter()
            .all(|b| paragraph(b).style.list == Some(ListKind::Unordered)));
    }

    #[test]
    fn test_table_block() {
        let blocks = parse("Risk | Impact\n---|---\nDelay | High");
        assert_eq!(blocks.len(), 1);
        assert!(blocks[0].is_table());
    }

    #[test]
    fn test_malformed_table_falls_back_to_text() {
        // Two pipe lines but no usable header cells
        let blocks = parse("| | |\n| | |");
        assert!(!blocks.is_empty());
        assert!(blocks.iter().all(|b| b.is_paragraph()));
    }

    #[test]
    fn test_bold_paragraph() {
        let blocks = parse("**Important note**");
        let p = paragraph(&blocks[0]);
        assert_eq!(p.runs.len(), 1);
        assert_eq!(p.runs[0].style, RunStyle::Bold);
        assert_eq!(p.plain_text(), "Important note");
    }

    #[test]
    fn test_mixed_document() {
        let text = "## Overview\nSome **bold** text\n\n1. a\n2. b\n\nCol | Val\n---|---\nx | 1";
        let blocks = parse(text);
        assert_eq!(paragraph(&blocks[0]).heading_level(), Some(2));
        assert_eq!(paragraph(&blocks[1]).runs.len(), 3);
        assert_eq!(paragraph(&blocks[2]).style.list, Some(ListKind::Ordered));
        assert!(blocks.last().is_some_and(Block::is_table));
    }

    #[test]
    fn test_error_message_renders_literally() {
        let blocks = parse("Error: upstream service unavailable (503)");
        assert_eq!(blocks.len(), 1);
        assert!(blocks[0].is_paragraph());
    }
}
