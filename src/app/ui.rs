use super::ImageUploader;
use eframe::egui::{self, Align, RichText};

impl ImageUploader {
    pub fn render(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let footer_height = 30.0;
            let content_height = ui.available_height() - footer_height;

            egui::ScrollArea::vertical()
                .max_height(content_height)
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    ui.add_space(10.0);
                    self.view
                        .show(ui, &self.uploads, self.actions.as_mut(), &self.style);
                    ui.add_space(20.0);
                });

            ui.with_layout(egui::Layout::bottom_up(Align::Center), |ui| {
                ui.add_space(8.0);
                self.render_footer(ui);
            });
        });
    }

    fn render_footer(&self, ui: &mut egui::Ui) {
        let status = self.uploads.get_status_text();
        if !status.is_empty() {
            ui.label(RichText::new(status).color(ui.visuals().text_color().gamma_multiply(0.7)));
        }
    }
}
