//! Rendering module: DOCX export, JSON, preview cleanup, and the sink
//! seam.

mod cleanup;
mod docx;
mod json;
mod options;
mod sink;

pub use cleanup::{CleanupOptions, CleanupPipeline};
pub use docx::{to_docx, DocxRenderer};
pub use json::{blocks_to_json, draft_from_json, draft_to_json, JsonFormat};
pub use options::RenderOptions;
pub use sink::{append_blocks, DocumentSink};
