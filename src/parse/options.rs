//! Parsing options and configuration.

use crate::model::NO_CONTENT_PLACEHOLDER;

/// Options for markdown-draft parsing.
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Paragraph text emitted for empty or sentinel-only input
    pub placeholder: String,

    /// Maximum heading level to emit (1-3)
    pub max_heading_level: u8,

    /// Minimum pipe-containing lines for a block to qualify as a table
    pub min_table_lines: usize,
}

impl ParseOptions {
    /// Create new parse options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the placeholder paragraph text.
    pub fn with_placeholder(mut self, text: impl Into<String>) -> Self {
        self.placeholder = text.into();
        self
    }

    /// Set the maximum heading level.
    pub fn with_max_heading(mut self, level: u8) -> Self {
        self.max_heading_level = level.clamp(1, 3);
        self
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            placeholder: NO_CONTENT_PLACEHOLDER.to_string(),
            max_heading_level: 3,
            min_table_lines: 2,
        }
    }
}
