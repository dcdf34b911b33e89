//! Directory-of-JSON-files store adapter
//!
//! One `<id>.json` file per record. The directory is the sole source of
//! truth; every operation re-derives state from disk.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;

use crate::application::ports::{StoreError, TranscriptionStore};
use crate::domain::transcription::Transcription;

/// File extension for stored records
const RECORD_EXTENSION: &str = "json";

/// Filesystem-backed transcription store
pub struct JsonDirStore {
    dir: PathBuf,
}

impl JsonDirStore {
    /// Create a store over the given directory
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Get the storage directory
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Create the storage directory if it does not exist
    pub async fn ensure_dir(&self) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| StoreError::Io(e.to_string()))
    }

    /// Path of the file backing the given id.
    /// The id is used verbatim as the filename stem.
    fn record_path(&self, id: &str) -> PathBuf {
        self.dir.join(format!("{}.{}", id, RECORD_EXTENSION))
    }

    /// Read and parse a single record file
    async fn read_record(path: &Path) -> Result<Transcription, StoreError> {
        let content = fs::read_to_string(path)
            .await
            .map_err(|e| StoreError::Io(e.to_string()))?;

        serde_json::from_str(&content).map_err(|e| StoreError::Parse(e.to_string()))
    }
}

#[async_trait]
impl TranscriptionStore for JsonDirStore {
    async fn list(&self) -> Result<Vec<Transcription>, StoreError> {
        let mut entries = fs::read_dir(&self.dir)
            .await
            .map_err(|e| StoreError::Io(e.to_string()))?;

        let mut records = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| StoreError::Io(e.to_string()))?
        {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some(RECORD_EXTENSION) {
                continue;
            }
            records.push(Self::read_record(&path).await?);
        }

        Ok(records)
    }

    async fn get(&self, id: &str) -> Result<Transcription, StoreError> {
        let path = self.record_path(id);
        if !path.exists() {
            return Err(StoreError::NotFound);
        }

        Self::read_record(&path).await
    }

    async fn save(&self, record: &Transcription) -> Result<(), StoreError> {
        let content = serde_json::to_string_pretty(record)
            .map_err(|e| StoreError::Parse(e.to_string()))?;

        fs::write(self.record_path(&record.id), content)
            .await
            .map_err(|e| StoreError::Io(e.to_string()))
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        let path = self.record_path(id);
        if !path.exists() {
            return Err(StoreError::NotFound);
        }

        fs::remove_file(&path)
            .await
            .map_err(|e| StoreError::Io(e.to_string()))
    }
}
