//! JSON serialization of drafts and converted blocks.

use crate::error::Result;
use crate::model::{ApplicationDraft, Block};

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonFormat {
    /// Pretty-printed with indentation
    Pretty,
    /// Compact single-line output
    Compact,
}

/// Serialize a draft to JSON. This is the save format the CLI loads.
pub fn draft_to_json(draft: &ApplicationDraft, format: JsonFormat) -> Result<String> {
    let json = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(draft)?,
        JsonFormat::Compact => serde_json::to_string(draft)?,
    };
    Ok(json)
}

/// Deserialize a draft from JSON.
pub fn draft_from_json(json: &str) -> Result<ApplicationDraft> {
    Ok(serde_json::from_str(json)?)
}

/// Serialize converted blocks to JSON.
pub fn blocks_to_json(blocks: &[Block], format: JsonFormat) -> Result<String> {
    let json = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(blocks)?,
        JsonFormat::Compact => serde_json::to_string(blocks)?,
    };
    Ok(json)
}
