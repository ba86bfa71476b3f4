// crates/core/src/metadata.rs
//! Strict parsing of user-supplied per-document metadata.
//!
//! The submission form takes one JSON object per line. Lines are parsed
//! structurally and nothing is ever evaluated; a malformed line fails the
//! whole submission with its 1-based line number so the user can fix it.

use serde_json::Value;

use crate::error::MetadataError;

/// Parse metadata text into one JSON object per non-blank line.
///
/// Blank and whitespace-only lines are skipped. Each remaining line must be
/// a JSON **object** — scalars and arrays are rejected, since per-document
/// metadata is a key/value record.
pub fn parse_metadata_lines(text: &str) -> Result<Vec<Value>, MetadataError> {
    let mut metadatas = Vec::new();

    for (idx, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let value: Value = serde_json::from_str(line)
            .map_err(|e| MetadataError::malformed(idx + 1, e.to_string()))?;

        if !value.is_object() {
            return Err(MetadataError::malformed(
                idx + 1,
                "expected a JSON object, e.g. {\"author\": \"Jane Doe\"}",
            ));
        }

        metadatas.push(value);
    }

    Ok(metadatas)
}

/// When any metadata is supplied, there must be exactly one entry per
/// submitted document (uploads plus URLs).
pub fn ensure_metadata_count(metadatas: &[Value], documents: usize) -> Result<(), MetadataError> {
    if !metadatas.is_empty() && metadatas.len() != documents {
        return Err(MetadataError::CountMismatch {
            expected: documents,
            actual: metadatas.len(),
        });
    }
    Ok(())
}
