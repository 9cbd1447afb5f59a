use super::FileId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("invalid uploads snapshot: {0}")]
    Json(#[from] serde_json::Error),
    #[error("file {id} has progress {value} outside 0..=100")]
    InvalidProgress { id: FileId, value: f64 },
    #[error("file {id} has no progress, url or error")]
    MissingOutcome { id: FileId },
    #[error("file id {id} appears more than once")]
    DuplicateId { id: FileId },
    #[error("Unsupported file type: {0}")]
    UnsupportedFileType(String),
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),
}
