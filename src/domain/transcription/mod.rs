//! Transcription domain module

mod record;

pub use record::{Transcription, TranscriptionPreview, PREVIEW_MAX_CHARS};
