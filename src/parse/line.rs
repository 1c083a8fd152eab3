//! Line classification for text blocks.
//!
//! Each non-blank line of a text block is classified into exactly one
//! `LineKind` by a fixed precedence: `#`-style headings, numbered
//! section headings, numbered-list items, bullet items, whole-line bold
//! paragraphs, and finally plain text. The block parser dispatches on
//! the kind and consumes list runs with lookahead.

use regex::Regex;

/// Classification of a single trimmed, non-blank line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// A heading with level 1-3 and its marker-stripped text
    Heading { level: u8, text: String },

    /// A numbered-list item (`1. text`), number stripped
    OrderedItem(String),

    /// A bulleted-list item (`* text` / `- text`), marker stripped
    BulletItem(String),

    /// A line fully wrapped in one `**...**` pair
    BoldParagraph(String),

    /// Anything else: a regular paragraph line
    Text(String),
}

/// Classifies lines according to the fixed precedence rules.
pub struct LineClassifier {
    subsection: Regex,
    main_section: Regex,
    ordered: Regex,
}

impl LineClassifier {
    /// Create a classifier with its patterns compiled.
    pub fn new() -> Self {
        Self {
            // "2.1 - Project Concept" style subsection headings
            subsection: Regex::new(r"^\d+\.\d+\s*-\s*(.+)$").unwrap(),
            // "2 - Project Idea" style main section headings
            main_section: Regex::new(r"^\d+\s*-\s*(.+)$").unwrap(),
            // "1. First item" numbered-list lines
            ordered: Regex::new(r"^\d+\.\s+(.*)$").unwrap(),
        }
    }

    /// Classify one line. The input is expected to be trimmed.
    pub fn classify(&self, line: &str) -> LineKind {
        if let Some(rest) = line.strip_prefix("###") {
            return LineKind::Heading {
                level: 3,
                text: rest.trim().to_string(),
            };
        }
        if let Some(rest) = line.strip_prefix("##") {
            return LineKind::Heading {
                level: 2,
                text: rest.trim().to_string(),
            };
        }
        if let Some(rest) = line.strip_prefix('#') {
            return LineKind::Heading {
                level: 1,
                text: rest.trim().to_string(),
            };
        }

        if let Some(caps) = self.subsection.captures(line) {
            return LineKind::Heading {
                level: 2,
                text: caps[1].trim().to_string(),
            };
        }
        if let Some(caps) = self.main_section.captures(line) {
            return LineKind::Heading {
                level: 1,
                text: caps[1].trim().to_string(),
            };
        }

        if let Some(caps) = self.ordered.captures(line) {
            return LineKind::OrderedItem(caps[1].trim().to_string());
        }

        if Self::is_bullet(line) {
            return LineKind::BulletItem(line[1..].trim().to_string());
        }

        if Self::is_bold_paragraph(line) {
            return LineKind::BoldParagraph(line[2..line.len() - 2].to_string());
        }

        LineKind::Text(line.to_string())
    }

    /// `*` or `-` marker, but never a `**` bold opener.
    fn is_bullet(line: &str) -> bool {
        (line.starts_with('*') || line.starts_with('-')) && !line.starts_with("**")
    }

    /// Wrapped in exactly one `**...**` pair.
    fn is_bold_paragraph(line: &str) -> bool {
        line.len() > 4
            && line.starts_with("**")
            && line.ends_with("**")
            && line.matches("**").count() == 2
    }
}

impl Default for LineClassifier {
    fn default() -> Self {
        Self::new()
    }
}
