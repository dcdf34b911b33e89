//! Transcription record entity and list projection

use serde::{Deserialize, Serialize};

/// Maximum number of characters shown in a list preview
pub const PREVIEW_MAX_CHARS: usize = 100;

/// Marker appended to a truncated preview
const PREVIEW_ELLIPSIS: &str = "...";

/// Title substituted in list projections when a record has none
const UNTITLED: &str = "Untitled";

/// A stored transcription record.
///
/// The `id` is chosen by the client and used verbatim as the filename stem;
/// no format validation is performed. `title` is optional and stays `null`
/// in stored and retrieved records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transcription {
    pub id: String,
    pub title: Option<String>,
    pub source_type: String,
    pub source_name: String,
    pub text: String,
    pub timestamp: String,
}

/// Reduced projection of a record returned by the list operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptionPreview {
    pub id: String,
    pub title: String,
    pub source_type: String,
    pub source_name: String,
    pub timestamp: String,
    pub preview: String,
}

impl Transcription {
    /// Build the list projection for this record.
    ///
    /// A missing title becomes "Untitled" here and only here; get-by-id
    /// returns the record with `title` unchanged.
    pub fn preview(&self) -> TranscriptionPreview {
        TranscriptionPreview {
            id: self.id.clone(),
            title: self
                .title
                .clone()
                .unwrap_or_else(|| UNTITLED.to_string()),
            source_type: self.source_type.clone(),
            source_name: self.source_name.clone(),
            timestamp: self.timestamp.clone(),
            preview: preview_text(&self.text),
        }
    }
}

/// First `PREVIEW_MAX_CHARS` characters of `text`, with an ellipsis marker
/// when truncated
fn preview_text(text: &str) -> String {
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(PREVIEW_MAX_CHARS).collect();
    if chars.next().is_some() {
        format!("{}{}", head, PREVIEW_ELLIPSIS)
    } else {
        head
    }
}
