use crate::upload::{
    partition, FileId, FileRecord, FileViewModel, Progress, UploadError, UploadEvent,
    UploadStatus,
};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionStatus {
    #[default]
    Init,
    Pending,
    Success,
    Failure,
}

/// Outcome of a collection-wide action (update, delete, share).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StatusModel {
    pub status: ActionStatus,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UploadsCollectionState {
    pub files: Vec<FileViewModel>,
    pub update: StatusModel,
    pub delete: StatusModel,
    pub share: StatusModel,
}

#[derive(Deserialize)]
struct RawCollection {
    files: Vec<FileRecord>,
    update: StatusModel,
    delete: StatusModel,
    share: StatusModel,
}

impl UploadsCollectionState {
    /// Parses and shape-checks a caller supplied snapshot.
    pub fn from_json(json: &str) -> Result<Self, UploadError> {
        let raw: RawCollection = serde_json::from_str(json)?;
        let files = raw
            .files
            .into_iter()
            .map(FileViewModel::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        let mut seen = HashSet::new();
        for file in &files {
            if !seen.insert(&file.id) {
                return Err(UploadError::DuplicateId {
                    id: file.id.clone(),
                });
            }
        }

        Ok(Self {
            files,
            update: raw.update,
            delete: raw.delete,
            share: raw.share,
        })
    }

    pub fn apply(&mut self, event: UploadEvent) {
        match event {
            UploadEvent::Queued { id, name } => {
                if self.find_mut(&id).is_some() {
                    warn!(id = %id, "Duplicate queued event ignored");
                    return;
                }
                self.files.push(FileViewModel {
                    id,
                    name,
                    status: UploadStatus::Uploading(Progress::default()),
                });
            }
            UploadEvent::Progress { id, percent } => {
                let Some(file) = self.find_mut(&id) else {
                    warn!(id = %id, "Progress for unknown file");
                    return;
                };
                if !file.status.is_pending() {
                    return;
                }
                if percent.is_nan() || percent < 0.0 {
                    warn!(id = %id, percent, "Ignoring invalid progress");
                    return;
                }
                let progress = Progress::new(percent).unwrap_or(Progress::ALMOST_DONE);
                file.status = UploadStatus::Uploading(progress);
            }
            UploadEvent::Finished { id, outcome } => {
                let Some(file) = self.find_mut(&id) else {
                    warn!(id = %id, "Outcome for unknown file");
                    return;
                };
                file.status = outcome.into();
            }
        }
    }

    fn find_mut(&mut self, id: &FileId) -> Option<&mut FileViewModel> {
        self.files.iter_mut().find(|file| &file.id == id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &FileId> {
        self.files.iter().map(|file| &file.id)
    }

    pub fn has_pending(&self) -> bool {
        self.files.iter().any(|file| file.status.is_pending())
    }

    pub fn get_status_text(&self) -> String {
        if self.files.is_empty() {
            return String::new();
        }
        let split = partition(&self.files);
        let failed = split
            .completed
            .iter()
            .filter(|file| file.error().is_some())
            .count();
        format!(
            "📤 Uploading: {} | ✅ Completed: {} | ❌ Failed: {}",
            split.pending.len(),
            split.completed.len() - failed,
            failed
        )
    }
}
