//! Document model: sections, blocks, paragraphs, runs, and tables.

mod block;
mod document;
mod paragraph;
mod section;
mod table;

pub use block::Block;
pub use document::{ApplicationDraft, Metadata};
pub use paragraph::{ListKind, Paragraph, ParagraphStyle, RunStyle, TextRun};
pub use section::{Section, SectionKind, NO_CONTENT_PLACEHOLDER, NO_CONTENT_SENTINEL};
pub use table::Table;
