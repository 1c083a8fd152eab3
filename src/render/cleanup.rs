//! Display-path text cleanup.
//!
//! Drafting services echo the prompt back into their output
//! (`**Your input:** ...` followed by an `**AI-generated draft for
//! ...:**` marker). Previews strip that echo and normalize the text;
//! the DOCX export path deliberately renders the raw text instead.

use crate::model::{Section, NO_CONTENT_SENTINEL};
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

/// Options for preview-text cleanup.
#[derive(Debug, Clone)]
pub struct CleanupOptions {
    /// Strip the echoed prompt preamble and draft marker
    pub strip_prompt_echo: bool,

    /// Normalize Unicode to NFC form
    pub normalize_unicode: bool,

    /// Maximum consecutive newlines (0 = unlimited)
    pub max_consecutive_newlines: u8,
}

impl Default for CleanupOptions {
    fn default() -> Self {
        Self {
            strip_prompt_echo: true,
            normalize_unicode: true,
            max_consecutive_newlines: 0,
        }
    }
}

/// Preview cleanup pipeline.
pub struct CleanupPipeline {
    options: CleanupOptions,
    input_echo: Regex,
    draft_marker: Regex,
    newline_runs: Regex,
}

impl CleanupPipeline {
    /// Create a pipeline with the given options.
    pub fn new(options: CleanupOptions) -> Self {
        Self {
            options,
            input_echo: Regex::new(r"(?s)\*\*Your input:\*\*.*?\n\n").unwrap(),
            draft_marker: Regex::new(r"\*\*AI-generated draft for [^\n]*?:\*\*\n+").unwrap(),
            newline_runs: Regex::new(r"\n{3,}").unwrap(),
        }
    }

    /// Process text through the pipeline.
    pub fn process(&self, text: &str) -> String {
        let mut result = text.to_string();

        if self.options.strip_prompt_echo {
            result = self.input_echo.replace_all(&result, "").to_string();
            result = self.draft_marker.replace_all(&result, "").to_string();
        }

        if self.options.normalize_unicode {
            result = result.nfc().collect();
        }

        if self.options.max_consecutive_newlines > 0 {
            let cap = "\n".repeat(self.options.max_consecutive_newlines as usize);
            result = self.newline_runs.replace_all(&result, cap.as_str()).to_string();
        }

        result.trim().to_string()
    }

    /// Cleaned display text for a section, with the sentinel when
    /// nothing remains.
    pub fn preview(&self, section: &Section) -> String {
        let cleaned = section.content().map(|c| self.process(c)).unwrap_or_default();
        if cleaned.is_empty() {
            NO_CONTENT_SENTINEL.to_string()
        } else {
            cleaned
        }
    }
}

impl Default for CleanupPipeline {
    fn default() -> Self {
        Self::new(CleanupOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_prompt_echo() {
        let text = "**Your input:**\nraw answer\n\n**AI-generated draft for Target Group:**\nReal content here";
        let out = CleanupPipeline::default().process(text);
        assert_eq!(out, "Real content here");
    }

    #[test]
    fn test_plain_text_untouched() {
        let out = CleanupPipeline::default().process("Just a paragraph.");
        assert_eq!(out, "Just a paragraph.");
    }

    #[test]
    fn test_newline_cap() {
        let pipeline = CleanupPipeline::new(CleanupOptions {
            max_consecutive_newlines: 2,
            ..Default::default()
        });
        assert_eq!(pipeline.process("a\n\n\n\n\nb"), "a\n\nb");
    }

    #[test]
    fn test_preview_empty_section() {
        let section = Section::new();
        let preview = CleanupPipeline::default().preview(&section);
        assert_eq!(preview, NO_CONTENT_SENTINEL);
    }

    #[test]
    fn test_preview_echo_only_section() {
        let section = Section {
            user_input: String::new(),
            generated: Some("**Your input:**\nanswer\n\n".to_string()),
            edited: None,
        };
        let preview = CleanupPipeline::default().preview(&section);
        assert_eq!(preview, NO_CONTENT_SENTINEL);
    }
}
