//! # mdocx
//!
//! Converts the loosely-markdown text an AI drafting service produces
//! into a structured document model and exports grant-application
//! drafts as DOCX.
//!
//! ## Quick Start
//!
//! ```
//! use mdocx::{ApplicationDraft, SectionKind};
//!
//! fn main() -> mdocx::Result<()> {
//!     let mut draft = ApplicationDraft::new();
//!     draft.record_generated(
//!         SectionKind::ProjectSummary,
//!         "## Overview\nA **regional** digitalisation project.",
//!     );
//!
//!     let bytes = mdocx::export_docx_bytes(&draft)?;
//!     assert!(bytes.starts_with(b"PK"));
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Lenient markdown conversion**: headings, numbered and bulleted
//!   lists, inline bold/italic/code spans, pipe tables
//! - **Graceful degradation**: malformed input renders as plain text,
//!   never as an error
//! - **Draft context object**: per-section inputs, generated drafts,
//!   and user edits with last-write-wins semantics
//! - **Preview cleanup**: prompt-echo stripping for display paths

pub mod error;
pub mod model;
pub mod parse;
pub mod render;

// Re-export commonly used types
pub use error::{Error, Result};
pub use model::{
    ApplicationDraft, Block, ListKind, Metadata, Paragraph, ParagraphStyle, RunStyle, Section,
    SectionKind, Table, TextRun, NO_CONTENT_PLACEHOLDER, NO_CONTENT_SENTINEL,
};
pub use parse::{MarkdownParser, ParseOptions};
pub use render::{
    draft_from_json, draft_to_json, CleanupOptions, CleanupPipeline, DocumentSink, DocxRenderer,
    JsonFormat, RenderOptions,
};

use std::path::Path;

/// Convert one markdown text into structural blocks.
///
/// Never fails: malformed input degrades to plain paragraphs.
pub fn convert_text(text: &str) -> Vec<Block> {
    MarkdownParser::new().parse(text)
}

/// Export a draft as DOCX bytes with default options.
pub fn export_docx_bytes(draft: &ApplicationDraft) -> Result<Vec<u8>> {
    render::to_docx(draft)
}

/// Export a draft to a `.docx` file with default options.
pub fn export_docx<P: AsRef<Path>>(draft: &ApplicationDraft, path: P) -> Result<()> {
    DocxRenderer::new().render_to_file(draft, path)
}

/// Load a draft from a JSON file.
pub fn load_draft<P: AsRef<Path>>(path: P) -> Result<ApplicationDraft> {
    let json = std::fs::read_to_string(path)?;
    draft_from_json(&json)
}

/// Builder for configured draft exports.
///
/// # Example
///
/// ```
/// use mdocx::{ApplicationDraft, Mdocx};
///
/// let draft = ApplicationDraft::new();
/// let bytes = Mdocx::new()
///     .with_title("ERDF Application 2026")
///     .with_placeholder("(section pending)")
///     .export_bytes(&draft)?;
/// # Ok::<(), mdocx::Error>(())
/// ```
pub struct Mdocx {
    parse_options: ParseOptions,
    render_options: RenderOptions,
}

impl Mdocx {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            parse_options: ParseOptions::default(),
            render_options: RenderOptions::default(),
        }
    }

    /// Set the document title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.render_options = self.render_options.with_title(title);
        self
    }

    /// Set the placeholder text for empty sections.
    pub fn with_placeholder(mut self, text: impl Into<String>) -> Self {
        self.parse_options = self.parse_options.with_placeholder(text);
        self
    }

    /// Set the maximum heading level (1-3).
    pub fn with_max_heading(mut self, level: u8) -> Self {
        self.parse_options = self.parse_options.with_max_heading(level);
        self
    }

    /// Enable or disable numbered section headings.
    pub fn with_numbered_sections(mut self, numbered: bool) -> Self {
        self.render_options = self.render_options.with_numbered_sections(numbered);
        self
    }

    /// Export a draft as DOCX bytes.
    pub fn export_bytes(self, draft: &ApplicationDraft) -> Result<Vec<u8>> {
        self.renderer().render(draft)
    }

    /// Export a draft to a `.docx` file.
    pub fn export<P: AsRef<Path>>(self, draft: &ApplicationDraft, path: P) -> Result<()> {
        self.renderer().render_to_file(draft, path)
    }

    /// Convert one markdown text as a standalone document.
    pub fn convert_bytes(self, text: &str) -> Result<Vec<u8>> {
        self.renderer().render_text(text)
    }

    fn renderer(self) -> DocxRenderer {
        DocxRenderer::with_options(self.parse_options, self.render_options)
    }
}

impl Default for Mdocx {
    fn default() -> Self {
        Self::new()
    }
}
