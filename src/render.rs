//! JSON rendering for processing results.

use serde::Serialize;

use crate::error::{Error, Result};
use crate::Processed;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Convert a processing result to JSON.
pub fn to_json(processed: &Processed, format: JsonFormat) -> Result<String> {
    serialize(processed, format)
}

/// Convert a sentence list to a JSON array.
pub fn sentences_to_json(sentences: &[String], format: JsonFormat) -> Result<String> {
    serialize(sentences, format)
}

fn serialize<T: Serialize + ?Sized>(value: &T, format: JsonFormat) -> Result<String> {
    // serde_json writes non-ASCII text verbatim, so CJK stays readable
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(value),
        JsonFormat::Compact => serde_json::to_string(value),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}
