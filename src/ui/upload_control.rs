use crate::upload::{UploadActions, UploaderConfig};
use eframe::egui;
use rfd::FileDialog;
use std::path::PathBuf;
use tracing::debug;

/// Multi-file selection surface. Keeps no selection state; every selection is
/// handed straight to the upload collaborator.
#[derive(Debug, Clone, PartialEq)]
pub struct FileUploadControl {
    accepted_extensions: Vec<String>,
}

impl Default for FileUploadControl {
    fn default() -> Self {
        Self::new(UploaderConfig::default().accepted_extensions)
    }
}

impl FileUploadControl {
    /// `accepted_extensions` only narrows the dialog filter. Dropped files are
    /// passed on as-is and the collaborator decides.
    pub fn new(accepted_extensions: Vec<String>) -> Self {
        Self {
            accepted_extensions,
        }
    }

    pub fn accepted_extensions(&self) -> &[String] {
        &self.accepted_extensions
    }

    /// Calls `actions.upload` once per file, in selection order.
    pub fn dispatch(&self, files: Vec<PathBuf>, actions: &mut dyn UploadActions) {
        debug!(count = files.len(), "Files selected");
        for file in files {
            actions.upload(file);
        }
    }

    pub fn show(&self, ui: &mut egui::Ui, actions: &mut dyn UploadActions) {
        ui.group(|ui| {
            ui.horizontal(|ui| {
                if ui.button("📁 Select Files").clicked() {
                    if let Some(files) = FileDialog::new()
                        .add_filter("Images", self.accepted_extensions.as_slice())
                        .pick_files()
                    {
                        self.dispatch(files, actions);
                    }
                }
                ui.label("or drop files onto the window");
            });
        });

        let dropped: Vec<PathBuf> = ui.ctx().input(|i| {
            i.raw
                .dropped_files
                .iter()
                .filter_map(|file| file.path.clone())
                .collect()
        });
        if !dropped.is_empty() {
            self.dispatch(dropped, actions);
        }
    }
}
