//! Image uploader: an egui front end that lets a user pick files, watch them
//! upload and inspect the finished images.

pub mod app;
pub mod logging;
pub mod settings;
pub mod ui;
pub mod upload;
pub mod utils;

pub use app::{ActionStatus, ImageUploader, StatusModel, UploadsCollectionState};
pub use upload::{
    partition, FileId, FileRecord, FileViewModel, LocalUploader, Partition, Progress,
    UploadActions, UploadError, UploadEvent, UploadOutcome, UploadStatus, UploaderConfig,
};
