mod state;
mod ui;

use crate::settings::Settings;
use crate::ui::{FileUploadControl, UploadsView, ViewStyle};
use crate::upload::{UploadActions, UploadEvent};
use eframe::{egui, App};
pub use state::{ActionStatus, StatusModel, UploadsCollectionState};
use std::sync::mpsc::Receiver;
use std::time::Duration;
use tracing::{debug, info};

/// Application shell: owns the uploads collection on behalf of the
/// collaborator and feeds it to the views every frame.
pub struct ImageUploader {
    uploads: UploadsCollectionState,
    view: UploadsView,
    actions: Box<dyn UploadActions>,
    events: Receiver<UploadEvent>,
    style: ViewStyle,
}

impl ImageUploader {
    pub fn new(
        actions: Box<dyn UploadActions>,
        events: Receiver<UploadEvent>,
        settings: &Settings,
    ) -> Self {
        info!("Initializing image uploader");
        Self {
            uploads: UploadsCollectionState::default(),
            view: UploadsView::new().with_upload_control(FileUploadControl::new(
                settings.accepted_extensions.clone(),
            )),
            actions,
            events,
            style: settings.view_style(),
        }
    }

    pub fn with_uploads(mut self, uploads: UploadsCollectionState) -> Self {
        info!(files = uploads.files.len(), "Starting from snapshot");
        self.uploads = uploads;
        self
    }

    pub fn uploads(&self) -> &UploadsCollectionState {
        &self.uploads
    }

    pub fn view(&self) -> &UploadsView {
        &self.view
    }

    /// Applies every event the collaborator sent since the last frame.
    /// Returns whether anything changed.
    pub fn update_state(&mut self) -> bool {
        let mut had_updates = false;
        while let Ok(event) = self.events.try_recv() {
            had_updates = true;
            self.uploads.apply(event);
        }
        if had_updates {
            debug!(status = %self.uploads.get_status_text(), "Uploads updated");
        }
        had_updates
    }
}

impl App for ImageUploader {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.update_state() {
            ctx.request_repaint();
        }
        self.render(ctx);
        if self.uploads.has_pending() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}
