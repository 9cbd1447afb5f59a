mod error;
mod local;
mod types;

pub use error::UploadError;
pub use local::{is_supported_file, LocalUploader, UploaderConfig};
pub use types::{
    partition, FileId, FileRecord, FileViewModel, Partition, Progress, UploadEvent, UploadOutcome,
    UploadStatus,
};

use std::path::PathBuf;

/// The upload collaborator injected into the views. Implementations own the
/// transfer and report back through [`UploadEvent`]s.
pub trait UploadActions {
    fn upload(&mut self, file: PathBuf);
}

impl<F: FnMut(PathBuf)> UploadActions for F {
    fn upload(&mut self, file: PathBuf) {
        self(file)
    }
}
