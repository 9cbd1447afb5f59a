use super::ViewStyle;
use crate::upload::{FileViewModel, UploadStatus};
use eframe::egui::{self, RichText};

/// Which presentation a list uses for its rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    Pending,
    Completed,
}

impl RowKind {
    /// A list titled "completed" (any case) shows completed rows; every other
    /// title shows progress rows.
    pub fn for_title(title: &str) -> Self {
        if title.eq_ignore_ascii_case("completed") {
            RowKind::Completed
        } else {
            RowKind::Pending
        }
    }
}

/// Heading plus one row per file.
pub struct FileListView<'a> {
    title: &'a str,
    files: &'a [&'a FileViewModel],
    event_handler: Option<&'a mut dyn FnMut(&FileViewModel)>,
}

impl<'a> FileListView<'a> {
    pub fn new(title: &'a str, files: &'a [&'a FileViewModel]) -> Self {
        Self {
            title,
            files,
            event_handler: None,
        }
    }

    /// Called with the file whose "Enlarge" button was clicked.
    pub fn event_handler(mut self, handler: &'a mut dyn FnMut(&FileViewModel)) -> Self {
        self.event_handler = Some(handler);
        self
    }

    pub fn row_kind(&self) -> RowKind {
        RowKind::for_title(self.title)
    }

    pub fn show(mut self, ui: &mut egui::Ui, style: &ViewStyle) {
        let kind = self.row_kind();
        ui.heading(self.title);
        ui.add_space(5.0);

        for &file in self.files {
            ui.push_id(&file.id, |ui| match kind {
                RowKind::Pending => upload_row(ui, file, style),
                RowKind::Completed => {
                    if completed_row(ui, file, style) {
                        if let Some(handler) = self.event_handler.as_mut() {
                            handler(file);
                        }
                    }
                }
            });
            ui.add_space(4.0);
        }
    }
}

fn upload_row(ui: &mut egui::Ui, file: &FileViewModel, style: &ViewStyle) {
    ui.horizontal(|ui| {
        ui.label(file.name.as_str());
        match &file.status {
            UploadStatus::Uploading(progress) => {
                ui.add(
                    egui::ProgressBar::new(progress.fraction())
                        .show_percentage()
                        .animate(false)
                        .fill(style.accent),
                );
            }
            UploadStatus::Succeeded { .. } => {
                ui.add(egui::ProgressBar::new(1.0).show_percentage().fill(style.accent));
            }
            UploadStatus::Failed { message } => {
                ui.colored_label(style.failure, message.as_str());
            }
        }
    });
}

/// Returns true when the enlarge trigger was clicked.
fn completed_row(ui: &mut egui::Ui, file: &FileViewModel, style: &ViewStyle) -> bool {
    let mut clicked = false;
    egui::Frame::group(ui.style()).show(ui, |ui| match &file.status {
        UploadStatus::Succeeded { url } => {
            ui.add(
                egui::Image::from_uri(url.as_str())
                    .max_width(style.thumbnail_width),
            );
            ui.label(RichText::new(&file.name).small());
            clicked = ui.button("🔍 Enlarge").clicked();
        }
        UploadStatus::Failed { message } => {
            ui.colored_label(style.failure, message.as_str());
        }
        UploadStatus::Uploading(_) => {
            ui.label(RichText::new(&file.name).small());
        }
    });
    clicked
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completed_title_is_case_insensitive() {
        assert_eq!(RowKind::for_title("Completed"), RowKind::Completed);
        assert_eq!(RowKind::for_title("COMPLETED"), RowKind::Completed);
        assert_eq!(RowKind::for_title("completed"), RowKind::Completed);
        assert_eq!(RowKind::for_title("In Progress"), RowKind::Pending);
        assert_eq!(RowKind::for_title("Completed uploads"), RowKind::Pending);
        assert_eq!(RowKind::for_title(""), RowKind::Pending);
    }

    use crate::ui::testing::{click, frame, text_rects, texts};
    use crate::upload::FileId;

    fn sample() -> [FileViewModel; 4] {
        [
            FileViewModel::uploading(1, "a.png", 30.0),
            FileViewModel::succeeded(2, "b.png", "file:///b.png"),
            FileViewModel::failed(3, "c.png", "Upload rejected"),
            FileViewModel::succeeded(4, "d.png", "file:///d.png"),
        ]
    }

    #[test]
    fn failed_rows_show_their_error_and_no_enlarge() {
        let files = sample();
        let refs: Vec<&FileViewModel> = files.iter().collect();
        let style = ViewStyle::default();
        let ctx = egui::Context::default();

        let output = frame(&ctx, Vec::new(), &mut |ui| {
            FileListView::new("Completed", &refs).show(ui, &style);
        });
        let painted = texts(&output);
        assert!(painted.iter().any(|(text, _)| text == "Upload rejected"));
        assert!(painted.iter().all(|(text, _)| text != "c.png"));
        // One trigger per succeeded file.
        assert_eq!(text_rects(&output, "Enlarge").len(), 2);
    }

    #[test]
    fn pending_rows_have_no_enlarge() {
        let files = sample();
        let refs: Vec<&FileViewModel> = files.iter().collect();
        let style = ViewStyle::default();
        let ctx = egui::Context::default();

        let output = frame(&ctx, Vec::new(), &mut |ui| {
            FileListView::new("In Progress", &refs).show(ui, &style);
        });
        assert!(text_rects(&output, "Enlarge").is_empty());
        assert_eq!(text_rects(&output, "Upload rejected").len(), 1);
        assert_eq!(text_rects(&output, "a.png").len(), 1);
    }

    #[test]
    fn clicking_enlarge_reports_that_file() {
        let files = sample();
        let refs: Vec<&FileViewModel> = files.iter().collect();
        let style = ViewStyle::default();
        let ctx = egui::Context::default();
        let mut picked: Vec<FileId> = Vec::new();

        let mut contents = |ui: &mut egui::Ui| {
            let mut handler = |file: &FileViewModel| picked.push(file.id.clone());
            FileListView::new("Completed", &refs)
                .event_handler(&mut handler)
                .show(ui, &style);
        };

        let layout = frame(&ctx, Vec::new(), &mut contents);
        let targets = text_rects(&layout, "Enlarge");
        assert_eq!(targets.len(), 2);

        click(&ctx, targets[1].center(), &mut contents);
        assert_eq!(picked, vec![FileId::from(4)]);
    }

    #[test]
    fn renders_every_row_kind_without_clicks() {
        let files = sample();
        let refs: Vec<&FileViewModel> = files.iter().collect();
        let style = ViewStyle::default();
        let ctx = egui::Context::default();
        let mut calls = 0;

        for title in ["In Progress", "Completed"] {
            frame(&ctx, Vec::new(), &mut |ui| {
                let mut handler = |_: &FileViewModel| calls += 1;
                FileListView::new(title, &refs)
                    .event_handler(&mut handler)
                    .show(ui, &style);
            });
        }

        assert_eq!(calls, 0);
    }
}
