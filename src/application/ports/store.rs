//! Record store port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::transcription::Transcription;

/// Store errors
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    #[error("Transcription not found")]
    NotFound,

    #[error("I/O error: {0}")]
    Io(String),

    #[error("Failed to parse stored record: {0}")]
    Parse(String),
}

/// Port for transcription record storage
#[async_trait]
pub trait TranscriptionStore: Send + Sync {
    /// List all stored records.
    ///
    /// Order follows the backing enumeration and is unspecified. A single
    /// unreadable or malformed record fails the whole listing.
    async fn list(&self) -> Result<Vec<Transcription>, StoreError>;

    /// Fetch the record with the given id.
    ///
    /// # Returns
    /// The full record, or `NotFound` if no record has that id
    async fn get(&self, id: &str) -> Result<Transcription, StoreError>;

    /// Store a record under its id, overwriting any existing record
    /// with the same id.
    async fn save(&self, record: &Transcription) -> Result<(), StoreError>;

    /// Delete the record with the given id.
    ///
    /// # Returns
    /// `NotFound` if no record has that id; deletes nothing in that case
    async fn delete(&self, id: &str) -> Result<(), StoreError>;
}
