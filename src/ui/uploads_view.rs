use super::{EnlargedFileView, FileListView, FileUploadControl, ViewStyle};
use crate::app::UploadsCollectionState;
use crate::upload::{partition, FileViewModel, UploadActions};
use eframe::egui;
use tracing::debug;

/// Root view. The only state it owns is which file, if any, is enlarged.
#[derive(Debug, Default, Clone)]
pub struct UploadsView {
    selected_file: Option<FileViewModel>,
    upload_control: FileUploadControl,
}

impl UploadsView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_upload_control(mut self, upload_control: FileUploadControl) -> Self {
        self.upload_control = upload_control;
        self
    }

    pub fn upload_control(&self) -> &FileUploadControl {
        &self.upload_control
    }

    pub fn selected_file(&self) -> Option<&FileViewModel> {
        self.selected_file.as_ref()
    }

    /// Replaces any current selection.
    pub fn select_file(&mut self, file: FileViewModel) {
        debug!(id = %file.id, "File enlarged");
        self.selected_file = Some(file);
    }

    pub fn clear_selection(&mut self) {
        self.selected_file = None;
    }

    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        uploads: &UploadsCollectionState,
        actions: &mut dyn UploadActions,
        style: &ViewStyle,
    ) {
        let split = partition(&uploads.files);
        let mut selected: Option<FileViewModel> = None;
        let mut cleared = false;

        ui.vertical_centered(|ui| {
            ui.heading("Upload Images");
        });
        ui.add_space(10.0);

        let current = self.selected_file.as_ref();
        let upload_control = &self.upload_control;
        ui.columns(2, |columns| {
            let (main, aside) = columns.split_at_mut(1);
            let (main, aside) = (&mut main[0], &mut aside[0]);
            let mut select = |file: &FileViewModel| selected = Some(file.clone());

            upload_control.show(main, actions);
            main.add_space(10.0);

            FileListView::new("In Progress", &split.pending)
                .event_handler(&mut select)
                .show(main, style);

            if let Some(file) = current {
                main.add_space(10.0);
                EnlargedFileView::new(file).show(main, style, &mut || cleared = true);
            }

            FileListView::new("Completed", &split.completed)
                .event_handler(&mut select)
                .show(aside, style);
        });

        if cleared {
            self.clear_selection();
        }
        if let Some(file) = selected {
            self.select_file(file);
        }
    }
}
