use super::ViewStyle;
use crate::upload::{FileViewModel, UploadStatus};
use eframe::egui::{self, RichText};
use tracing::warn;

/// Magnified view of the selected file with a "Clear" trigger.
pub struct EnlargedFileView<'a> {
    file: &'a FileViewModel,
}

impl<'a> EnlargedFileView<'a> {
    pub fn new(file: &'a FileViewModel) -> Self {
        Self { file }
    }

    pub fn show(self, ui: &mut egui::Ui, style: &ViewStyle, remove_handler: &mut dyn FnMut()) {
        let file = self.file;
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.vertical_centered(|ui| {
                match &file.status {
                    UploadStatus::Succeeded { url } => {
                        ui.add(
                            egui::Image::from_uri(url.as_str())
                                .max_width(style.enlarged_width.min(ui.available_width())),
                        );
                        ui.label(RichText::new(file.name.as_str()).strong());
                    }
                    UploadStatus::Failed { message } => {
                        ui.colored_label(style.failure, message.as_str());
                    }
                    UploadStatus::Uploading(_) => {
                        ui.label(file.name.as_str());
                    }
                }

                ui.horizontal(|ui| {
                    if ui.button("✖ Clear").clicked() {
                        remove_handler();
                    }
                    if let Some(path) = file.url().and_then(|url| url.strip_prefix("file://")) {
                        if ui.button("🗗 Open").clicked() {
                            if let Err(e) = open::that(path) {
                                warn!(error = %e, path, "Failed to open file");
                            }
                        }
                    }
                });
            });
        });
    }
}
