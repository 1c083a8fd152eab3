//! Paragraph and text-run types.

use serde::{Deserialize, Serialize};

/// A paragraph of text content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paragraph {
    /// Text runs in the paragraph
    pub runs: Vec<TextRun>,

    /// Paragraph style
    pub style: ParagraphStyle,
}

impl Paragraph {
    /// Create a new empty paragraph.
    pub fn new() -> Self {
        Self {
            runs: Vec::new(),
            style: ParagraphStyle::default(),
        }
    }

    /// Create a paragraph with a single plain run.
    pub fn with_text(text: impl Into<String>) -> Self {
        let mut p = Self::new();
        p.add_run(TextRun::plain(text));
        p
    }

    /// Create a paragraph from pre-built runs.
    pub fn with_runs(runs: Vec<TextRun>) -> Self {
        Self {
            runs,
            style: ParagraphStyle::default(),
        }
    }

    /// Create a heading paragraph. Levels are clamped to 1-3.
    pub fn heading(text: impl Into<String>, level: u8) -> Self {
        let mut p = Self::with_text(text);
        p.style.heading_level = Some(level.clamp(1, 3));
        p
    }

    /// Create a list-item paragraph.
    pub fn list_item(text: impl Into<String>, kind: ListKind) -> Self {
        let mut p = Self::with_text(text);
        p.style.list = Some(kind);
        p
    }

    /// Create a paragraph whose entire content is a single bold run.
    pub fn bold(text: impl Into<String>) -> Self {
        let mut p = Self::new();
        p.add_run(TextRun::bold(text));
        p
    }

    /// Add a styled run.
    pub fn add_run(&mut self, run: TextRun) {
        self.runs.push(run);
    }

    /// Get plain text content of the paragraph.
    pub fn plain_text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }

    /// Check if the paragraph is empty.
    pub fn is_empty(&self) -> bool {
        self.runs.is_empty() || self.plain_text().trim().is_empty()
    }

    /// Check if this is a heading.
    pub fn is_heading(&self) -> bool {
        self.style.heading_level.is_some()
    }

    /// Get the heading level (1-3) or None.
    pub fn heading_level(&self) -> Option<u8> {
        self.style.heading_level
    }

    /// Check if this is a list item.
    pub fn is_list_item(&self) -> bool {
        self.style.list.is_some()
    }
}

impl Default for Paragraph {
    fn default() -> Self {
        Self::new()
    }
}

/// A run of text with one style.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextRun {
    /// The text content
    pub text: String,

    /// Run styling
    pub style: RunStyle,
}

impl TextRun {
    /// Create a plain text run.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: RunStyle::Plain,
        }
    }

    /// Create a bold text run.
    pub fn bold(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: RunStyle::Bold,
        }
    }

    /// Create an italic text run.
    pub fn italic(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: RunStyle::Italic,
        }
    }

    /// Create a monospace text run.
    pub fn monospace(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: RunStyle::Monospace,
        }
    }

    /// Check if this run is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Inline run styling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunStyle {
    /// Unstyled text (default)
    #[default]
    Plain,
    /// Bold text
    Bold,
    /// Italic text
    Italic,
    /// Monospace (code span) text
    Monospace,
}

/// Paragraph styling properties.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParagraphStyle {
    /// Heading level (1-3) or None for a normal paragraph
    pub heading_level: Option<u8>,

    /// List membership if this is a list item
    pub list: Option<ListKind>,
}

/// List style for list-item paragraphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListKind {
    /// Numbered list item
    Ordered,
    /// Bulleted list item
    Unordered,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraph_plain_text() {
        let mut p = Paragraph::new();
        p.add_run(TextRun::plain("Hello "));
        p.add_run(TextRun::bold("world"));
        p.add_run(TextRun::plain("!"));

        assert_eq!(p.plain_text(), "Hello world!");
    }

    #[test]
    fn test_heading() {
        let h1 = Paragraph::heading("Title", 1);
        assert!(h1.is_heading());
        assert_eq!(h1.heading_level(), Some(1));
    }

    #[test]
    fn test_heading_level_clamped() {
        let deep = Paragraph::heading("Too deep", 6);
        assert_eq!(deep.heading_level(), Some(3));
    }

    #[test]
    fn test_list_item() {
        let item = Paragraph::list_item("First", ListKind::Ordered);
        assert!(item.is_list_item());
        assert_eq!(item.style.list, Some(ListKind::Ordered));
    }

    #[test]
    fn test_empty_paragraph() {
        assert!(Paragraph::new().is_empty());
        assert!(Paragraph::with_text("   ").is_empty());
        assert!(!Paragraph::with_text("x").is_empty());
    }
}
