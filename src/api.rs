//! HTTP client for the notes backend.
//!
//! The backend owns the records; this module only speaks its wire format.

use chrono::{DateTime, Utc};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Opaque server-side note identifier. Passed through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(String);

impl NoteId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for NoteId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for NoteId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl std::fmt::Display for NoteId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Note {
    pub id: NoteId,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateNoteRequest {
    pub content: String,
}

/// Body of the deletion request. The backend expects the id under
/// the `noteID` key, with that exact spelling.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteNoteRequest {
    #[serde(rename = "noteID")]
    pub note_id: NoteId,
}

#[derive(Debug, Error)]
pub enum NoteError {
    #[error("server rejected the request with status {0}")]
    RequestRejected(StatusCode),
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

fn check_status(status: StatusCode) -> Result<(), NoteError> {
    if status.is_success() {
        Ok(())
    } else {
        Err(NoteError::RequestRejected(status))
    }
}

/// Fetch every note, newest last (backend order is preserved).
pub async fn fetch_notes(base_url: &str) -> Result<Vec<Note>, NoteError> {
    let response = reqwest::get(format!("{base_url}/notes")).await?;
    check_status(response.status())?;
    Ok(response.json().await?)
}

pub async fn create_note(base_url: &str, request: CreateNoteRequest) -> Result<(), NoteError> {
    let client = reqwest::Client::new();
    let response = client
        .post(format!("{base_url}/notes"))
        .json(&request)
        .send()
        .await?;
    check_status(response.status())
}

/// Ask the backend to delete one note.
///
/// Wire contract: `POST {base_url}/delete-note` with body
/// `{"noteID":"<id>"}` and a JSON content type. Any 2xx status counts as
/// success; no response body is read.
pub async fn delete_note(base_url: &str, id: &NoteId) -> Result<(), NoteError> {
    let client = reqwest::Client::new();
    let response = client
        .post(format!("{base_url}/delete-note"))
        .json(&DeleteNoteRequest {
            note_id: id.clone(),
        })
        .send()
        .await?;
    check_status(response.status())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delete_request_uses_the_backend_key() {
        let body = serde_json::to_string(&DeleteNoteRequest {
            note_id: NoteId::from("abc123"),
        })
        .unwrap();
        assert_eq!(body, r#"{"noteID":"abc123"}"#);
    }

    #[test]
    fn note_id_serializes_as_a_bare_string() {
        let id: NoteId = serde_json::from_str(r#""42""#).unwrap();
        assert_eq!(id, NoteId::from("42"));
        assert_eq!(serde_json::to_string(&id).unwrap(), r#""42""#);
    }

    #[test]
    fn note_round_trips_through_json() {
        let note: Note = serde_json::from_str(
            r#"{"id":"7","content":"hello","created_at":"2024-11-20T10:30:00Z"}"#,
        )
        .unwrap();
        assert_eq!(note.id, NoteId::from("7"));
        assert_eq!(note.content, "hello");
    }
}
