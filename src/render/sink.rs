//! Document sink: the seam between converted blocks and an output
//! document.
//!
//! Implementations receive structural append operations in reading
//! order. The DOCX renderer is the production implementation; tests use
//! a recording sink to assert on emitted structure.

use crate::model::{Block, ListKind, Table, TextRun};

/// Receives structural elements of a document, in order.
pub trait DocumentSink {
    /// Append a heading with level 1-3.
    fn heading(&mut self, level: u8, text: &str);

    /// Append a paragraph of styled runs.
    fn paragraph(&mut self, runs: &[TextRun]);

    /// Append one list item.
    fn list_item(&mut self, kind: ListKind, text: &str);

    /// Append a table with a bold header row.
    fn table(&mut self, table: &Table);

    /// Append an empty spacer paragraph.
    fn empty_paragraph(&mut self);
}

/// Walk blocks and dispatch each to the sink.
pub fn append_blocks(sink: &mut dyn DocumentSink, blocks: &[Block]) {
    for block in blocks {
        match block {
            Block::Paragraph(p) => {
                if let Some(level) = p.heading_level() {
                    sink.heading(level, &p.plain_text());
                } else if let Some(kind) = p.style.list {
                    sink.list_item(kind, &p.plain_text());
                } else {
                    sink.paragraph(&p.runs);
                }
            }
            Block::Table(t) => sink.table(t),
        }
    }
}
