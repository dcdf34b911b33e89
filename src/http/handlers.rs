//! Request handlers

use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use super::error::ApiError;
use super::AppState;
use crate::domain::transcription::{Transcription, TranscriptionPreview};

/// Generic message response body
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// `GET /`
pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Welcome to the Transcription API".to_string(),
    })
}

/// `GET /transcriptions`
///
/// Returns the reduced projection of every stored record, in whatever
/// order the directory enumeration yields.
pub async fn list_transcriptions(
    State(state): State<AppState>,
) -> Result<Json<Vec<TranscriptionPreview>>, ApiError> {
    let records = state
        .store
        .list()
        .await
        .map_err(|e| ApiError::from_store("Error reading transcriptions", e))?;

    Ok(Json(records.iter().map(Transcription::preview).collect()))
}

/// `GET /transcriptions/{id}`
pub async fn get_transcription(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Transcription>, ApiError> {
    let record = state
        .store
        .get(&id)
        .await
        .map_err(|e| ApiError::from_store("Error retrieving transcription", e))?;

    Ok(Json(record))
}

/// `POST /transcriptions`
///
/// Creates or silently replaces the record with the body's id and echoes
/// the stored record back.
pub async fn create_transcription(
    State(state): State<AppState>,
    Json(record): Json<Transcription>,
) -> Result<Json<Transcription>, ApiError> {
    state
        .store
        .save(&record)
        .await
        .map_err(|e| ApiError::from_store("Error saving transcription", e))?;

    Ok(Json(record))
}

/// `DELETE /transcriptions/{id}`
pub async fn delete_transcription(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    state
        .store
        .delete(&id)
        .await
        .map_err(|e| ApiError::from_store("Error deleting transcription", e))?;

    Ok(Json(MessageResponse {
        message: format!("Transcription {} deleted successfully", id),
    }))
}
