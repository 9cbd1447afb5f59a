//! View components
//!
//! Leaves first: [`FileUploadControl`] picks files, [`FileListView`] renders
//! one category of files, [`EnlargedFileView`] shows a single completed
//! image and [`UploadsView`] composes them and owns the selection.

mod enlarged;
mod file_list;
mod upload_control;
mod uploads_view;

#[cfg(test)]
pub(crate) mod testing;

pub use enlarged::EnlargedFileView;
pub use file_list::{FileListView, RowKind};
pub use upload_control::FileUploadControl;
pub use uploads_view::UploadsView;

use eframe::egui::Color32;

/// Colours and sizes shared by the components.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewStyle {
    pub accent: Color32,
    pub failure: Color32,
    pub thumbnail_width: f32,
    pub enlarged_width: f32,
}

impl Default for ViewStyle {
    fn default() -> Self {
        Self {
            accent: Color32::from_rgb(161, 89, 225),
            failure: Color32::from_rgb(220, 50, 50),
            thumbnail_width: 160.0,
            enlarged_width: 480.0,
        }
    }
}
