use super::UploadError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier of an uploaded file, used as the row key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FileId {
    Number(i64),
    Text(String),
}

impl fmt::Display for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileId::Number(n) => write!(f, "{}", n),
            FileId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for FileId {
    fn from(value: i64) -> Self {
        FileId::Number(value)
    }
}

impl From<i32> for FileId {
    fn from(value: i32) -> Self {
        FileId::Number(value.into())
    }
}

impl From<&str> for FileId {
    fn from(value: &str) -> Self {
        FileId::Text(value.to_string())
    }
}

/// Upload percentage of an in-flight file. Always in `0.0..100.0`.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize)]
pub struct Progress(f32);

impl Progress {
    /// Highest value an in-flight upload can report before its outcome is known.
    pub const ALMOST_DONE: Progress = Progress(99.0);

    pub fn new(percent: f32) -> Option<Self> {
        if percent.is_finite() && (0.0..100.0).contains(&percent) {
            Some(Self(percent))
        } else {
            None
        }
    }

    pub fn percent(self) -> f32 {
        self.0
    }

    pub fn fraction(self) -> f32 {
        self.0 / 100.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum UploadStatus {
    Uploading(Progress),
    Succeeded { url: String },
    Failed { message: String },
}

impl UploadStatus {
    pub fn is_pending(&self) -> bool {
        matches!(self, UploadStatus::Uploading(_))
    }

    pub fn progress(&self) -> Option<Progress> {
        match self {
            UploadStatus::Uploading(progress) => Some(*progress),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FileViewModel {
    pub id: FileId,
    pub name: String,
    pub status: UploadStatus,
}

impl FileViewModel {
    pub fn uploading(id: impl Into<FileId>, name: impl Into<String>, percent: f32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            status: UploadStatus::Uploading(Progress::new(percent).unwrap_or(Progress::ALMOST_DONE)),
        }
    }

    pub fn succeeded(id: impl Into<FileId>, name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            status: UploadStatus::Succeeded { url: url.into() },
        }
    }

    pub fn failed(id: impl Into<FileId>, name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            status: UploadStatus::Failed {
                message: message.into(),
            },
        }
    }

    pub fn url(&self) -> Option<&str> {
        match &self.status {
            UploadStatus::Succeeded { url } => Some(url),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.status {
            UploadStatus::Failed { message } => Some(message),
            _ => None,
        }
    }
}

/// The loose record shape callers hand over: any of `progress`, `url` and
/// `error` may be set. Converted into a [`FileViewModel`] at the boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileRecord {
    pub id: FileId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl TryFrom<FileRecord> for FileViewModel {
    type Error = UploadError;

    fn try_from(record: FileRecord) -> Result<Self, Self::Error> {
        let FileRecord {
            id,
            name,
            progress,
            url,
            error,
        } = record;

        if let Some(value) = progress {
            if !value.is_finite() || !(0.0..=100.0).contains(&value) {
                return Err(UploadError::InvalidProgress { id, value });
            }
            if value < 100.0 {
                let progress = Progress::new(value as f32).unwrap_or(Progress::ALMOST_DONE);
                return Ok(Self {
                    id,
                    name,
                    status: UploadStatus::Uploading(progress),
                });
            }
        }

        let status = match (error, url) {
            (Some(message), _) => UploadStatus::Failed { message },
            (None, Some(url)) => UploadStatus::Succeeded { url },
            (None, None) => return Err(UploadError::MissingOutcome { id }),
        };

        Ok(Self { id, name, status })
    }
}

/// Final result of one upload as reported by the collaborator.
#[derive(Debug, Clone, PartialEq)]
pub enum UploadOutcome {
    Succeeded { url: String },
    Failed { message: String },
}

impl From<UploadOutcome> for UploadStatus {
    fn from(outcome: UploadOutcome) -> Self {
        match outcome {
            UploadOutcome::Succeeded { url } => UploadStatus::Succeeded { url },
            UploadOutcome::Failed { message } => UploadStatus::Failed { message },
        }
    }
}

/// Messages sent from an upload collaborator back to the application shell.
#[derive(Debug, Clone, PartialEq)]
pub enum UploadEvent {
    Queued { id: FileId, name: String },
    Progress { id: FileId, percent: f32 },
    Finished { id: FileId, outcome: UploadOutcome },
}

/// Files split by whether their upload is still running.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Partition<'a> {
    pub pending: Vec<&'a FileViewModel>,
    pub completed: Vec<&'a FileViewModel>,
}

/// Splits `files` into pending and completed, preserving order. Every file
/// lands in exactly one of the two.
pub fn partition(files: &[FileViewModel]) -> Partition<'_> {
    let (pending, completed) = files.iter().partition(|file| file.status.is_pending());
    Partition { pending, completed }
}
