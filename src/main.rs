use image_uploader::logging::init_logging;
use image_uploader::settings::Settings;
use image_uploader::{ImageUploader, LocalUploader, UploadsCollectionState};
use std::path::PathBuf;
use std::sync::mpsc;
use tracing::{error, info, warn};

/// Optional JSON snapshot to pre-populate the uploads collection.
const SNAPSHOT_ENV: &str = "IMAGE_UPLOADER_SNAPSHOT";

fn load_snapshot() -> Option<UploadsCollectionState> {
    let path = std::env::var_os(SNAPSHOT_ENV)?;
    let path = PathBuf::from(path);
    let json = match std::fs::read_to_string(&path) {
        Ok(json) => json,
        Err(e) => {
            warn!(error = %e, path = %path.display(), "Failed to read snapshot");
            return None;
        }
    };
    match UploadsCollectionState::from_json(&json) {
        Ok(uploads) => Some(uploads),
        Err(e) => {
            warn!(error = %e, path = %path.display(), "Rejected snapshot");
            None
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let data_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("Image Uploader");
    std::fs::create_dir_all(&data_dir).ok();

    let _log_guard = init_logging(&data_dir);
    info!(version = env!("CARGO_PKG_VERSION"), "Image uploader starting");

    let settings = Settings::load(&data_dir);
    if !data_dir.join("settings.json").exists() {
        settings.save(&data_dir);
    }

    let snapshot = load_snapshot();
    let (sender, receiver) = mpsc::channel();
    let mut uploader = LocalUploader::new(settings.uploader_config(), sender).map_err(|e| {
        error!(error = %e, "Failed to start upload runtime");
        e
    })?;
    if let Some(uploads) = &snapshot {
        uploader = uploader.with_taken_ids(uploads.ids());
    }

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([settings.window_w, settings.window_h])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Image Uploader",
        options,
        Box::new(move |cc| {
            egui_extras::install_image_loaders(&cc.egui_ctx);
            let uploader = uploader.with_repaint(cc.egui_ctx.clone());
            let app = ImageUploader::new(Box::new(uploader), receiver, &settings);
            Box::new(match snapshot {
                Some(uploads) => app.with_uploads(uploads),
                None => app,
            })
        }),
    )?;

    info!("Image uploader closed");
    Ok(())
}
