//! DOCX rendering via docx-rs.

use std::io::Cursor;
use std::path::Path;

use docx_rs::{
    AbstractNumbering, AlignmentType, Docx, IndentLevel, Level, LevelJc, LevelText, NumberFormat,
    Numbering, NumberingId, Run, RunFonts, Start, Style, StyleType,
};
use log::{debug, info};

use super::sink::{append_blocks, DocumentSink};
use super::RenderOptions;
use crate::error::Result;
use crate::model::{ApplicationDraft, Block, ListKind, RunStyle, Table, TextRun};
use crate::parse::{MarkdownParser, ParseOptions};

const ORDERED_NUMBERING_ID: usize = 2;
const BULLET_NUMBERING_ID: usize = 3;

/// Convert a draft to DOCX bytes with default options.
pub fn to_docx(draft: &ApplicationDraft) -> Result<Vec<u8>> {
    DocxRenderer::new().render(draft)
}

/// Renders a full application draft (or loose blocks) as a DOCX
/// package.
pub struct DocxRenderer {
    parser: MarkdownParser,
    options: RenderOptions,
}

impl DocxRenderer {
    /// Create a renderer with default options.
    pub fn new() -> Self {
        Self::with_options(ParseOptions::default(), RenderOptions::default())
    }

    /// Create a renderer with custom parse and render options.
    pub fn with_options(parse: ParseOptions, render: RenderOptions) -> Self {
        Self {
            parser: MarkdownParser::with_options(parse),
            options: render,
        }
    }

    /// Render the complete draft: centered title, then one numbered
    /// level-1 heading plus converted content per section, separated by
    /// blank paragraphs.
    pub fn render(&self, draft: &ApplicationDraft) -> Result<Vec<u8>> {
        info!(
            "exporting draft: {} of {} sections populated",
            draft.populated_count(),
            draft.sections().count()
        );

        let mut sink = DocxSink::new(&self.options);
        sink.title(&self.options.title);
        sink.empty_paragraph();

        for (i, (kind, section)) in draft.sections().enumerate() {
            let heading = if self.options.numbered_sections {
                format!("{}. {}", i + 1, kind.title())
            } else {
                kind.title().to_string()
            };
            sink.heading(1, &heading);

            let blocks = self.parser.parse(section.content_or_sentinel());
            debug!("section {:?}: {} blocks", kind, blocks.len());
            append_blocks(&mut sink, &blocks);

            sink.empty_paragraph();
        }

        sink.into_bytes()
    }

    /// Render pre-converted blocks without the application scaffolding.
    pub fn render_blocks(&self, blocks: &[Block]) -> Result<Vec<u8>> {
        let mut sink = DocxSink::new(&self.options);
        append_blocks(&mut sink, blocks);
        sink.into_bytes()
    }

    /// Render one markdown text as a standalone document.
    pub fn render_text(&self, text: &str) -> Result<Vec<u8>> {
        let blocks = self.parser.parse(text);
        self.render_blocks(&blocks)
    }

    /// Render the draft and write it to a file.
    pub fn render_to_file<P: AsRef<Path>>(&self, draft: &ApplicationDraft, path: P) -> Result<()> {
        let bytes = self.render(draft)?;
        std::fs::write(path, bytes)?;
        Ok(())
    }
}

impl Default for DocxRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// `DocumentSink` implementation that accumulates into a docx-rs
/// document builder.
struct DocxSink {
    docx: Docx,
    monospace_font: String,
}

impl DocxSink {
    fn new(options: &RenderOptions) -> Self {
        let docx = Docx::new()
            .add_style(
                Style::new("Title", StyleType::Paragraph)
                    .name("Title")
                    .size(40)
                    .bold(),
            )
            .add_style(
                Style::new("Heading1", StyleType::Paragraph)
                    .name("Heading 1")
                    .size(32)
                    .bold(),
            )
            .add_style(
                Style::new("Heading2", StyleType::Paragraph)
                    .name("Heading 2")
                    .size(28)
                    .bold(),
            )
            .add_style(
                Style::new("Heading3", StyleType::Paragraph)
                    .name("Heading 3")
                    .size(24)
                    .bold(),
            )
            .add_abstract_numbering(AbstractNumbering::new(ORDERED_NUMBERING_ID).add_level(
                Level::new(
                    0,
                    Start::new(1),
                    NumberFormat::new("decimal"),
                    LevelText::new("%1."),
                    LevelJc::new("left"),
                ),
            ))
            .add_numbering(Numbering::new(ORDERED_NUMBERING_ID, ORDERED_NUMBERING_ID))
            .add_abstract_numbering(AbstractNumbering::new(BULLET_NUMBERING_ID).add_level(
                Level::new(
                    0,
                    Start::new(1),
                    NumberFormat::new("bullet"),
                    LevelText::new("\u{2022}"),
                    LevelJc::new("left"),
                ),
            ))
            .add_numbering(Numbering::new(BULLET_NUMBERING_ID, BULLET_NUMBERING_ID));

        Self {
            docx,
            monospace_font: options.monospace_font.clone(),
        }
    }

    fn title(&mut self, text: &str) {
        self.push(
            docx_rs::Paragraph::new()
                .style("Title")
                .align(AlignmentType::Center)
                .add_run(Run::new().add_text(text)),
        );
    }

    fn push(&mut self, paragraph: docx_rs::Paragraph) {
        self.docx = std::mem::take(&mut self.docx).add_paragraph(paragraph);
    }

    fn styled_run(&self, run: &TextRun) -> Run {
        let r = Run::new().add_text(run.text.as_str());
        match run.style {
            RunStyle::Plain => r,
            RunStyle::Bold => r.bold(),
            RunStyle::Italic => r.italic(),
            RunStyle::Monospace => r.fonts(RunFonts::new().ascii(self.monospace_font.as_str())),
        }
    }

    fn cell(paragraph: docx_rs::Paragraph) -> docx_rs::TableCell {
        docx_rs::TableCell::new().add_paragraph(paragraph)
    }

    fn into_bytes(self) -> Result<Vec<u8>> {
        let mut buf = Cursor::new(Vec::new());
        self.docx
            .build()
            .pack(&mut buf)
            .map_err(|e| crate::error::Error::Docx(e.to_string()))?;
        Ok(buf.into_inner())
    }
}

impl DocumentSink for DocxSink {
    fn heading(&mut self, level: u8, text: &str) {
        let style = match level {
            1 => "Heading1",
            2 => "Heading2",
            _ => "Heading3",
        };
        self.push(
            docx_rs::Paragraph::new()
                .style(style)
                .add_run(Run::new().add_text(text)),
        );
    }

    fn paragraph(&mut self, runs: &[TextRun]) {
        let mut p = docx_rs::Paragraph::new();
        for run in runs {
            p = p.add_run(self.styled_run(run));
        }
        self.push(p);
    }

    fn list_item(&mut self, kind: ListKind, text: &str) {
        let numbering = match kind {
            ListKind::Ordered => ORDERED_NUMBERING_ID,
            ListKind::Unordered => BULLET_NUMBERING_ID,
        };
        self.push(
            docx_rs::Paragraph::new()
                .add_run(Run::new().add_text(text))
                .numbering(NumberingId::new(numbering), IndentLevel::new(0)),
        );
    }

    fn table(&mut self, table: &Table) {
        // Header row bold; docx-rs default table borders give the grid
        let mut rows = Vec::with_capacity(table.row_count() + 1);
        rows.push(docx_rs::TableRow::new(
            table
                .headers
                .iter()
                .map(|h| {
                    Self::cell(
                        docx_rs::Paragraph::new().add_run(Run::new().add_text(h.as_str()).bold()),
                    )
                })
                .collect(),
        ));
        for row in &table.rows {
            rows.push(docx_rs::TableRow::new(
                row.iter()
                    .map(|c| {
                        Self::cell(
                            docx_rs::Paragraph::new().add_run(Run::new().add_text(c.as_str())),
                        )
                    })
                    .collect(),
            ));
        }

        self.docx = std::mem::take(&mut self.docx).add_table(docx_rs::Table::new(rows));
    }

    fn empty_paragraph(&mut self) {
        self.push(docx_rs::Paragraph::new());
    }
}
