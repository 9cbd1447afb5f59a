//! User settings stored as settings.json in the app data directory

use crate::ui::ViewStyle;
use crate::upload::UploaderConfig;
use crate::utils::color::ColorExt;
use eframe::egui::Color32;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // Window geometry
    pub window_w: f32,
    pub window_h: f32,

    // Appearance
    pub accent_color: String,
    pub thumbnail_width: f32,
    pub enlarged_width: f32,

    // Local uploads
    pub accepted_extensions: Vec<String>,
    pub read_buffer_size: usize,
}

impl Default for Settings {
    fn default() -> Self {
        let uploader = UploaderConfig::default();
        Self {
            window_w: 900.0,
            window_h: 700.0,
            accent_color: "#a159e1".to_string(),
            thumbnail_width: 160.0,
            enlarged_width: 480.0,
            accepted_extensions: uploader.accepted_extensions,
            read_buffer_size: uploader.read_buffer_size,
        }
    }
}

impl Settings {
    pub fn load(data_dir: &Path) -> Self {
        let path = data_dir.join("settings.json");
        match std::fs::read_to_string(&path) {
            Ok(s) => match serde_json::from_str(&s) {
                Ok(settings) => {
                    debug!(path = %path.display(), "Settings loaded");
                    settings
                }
                Err(e) => {
                    warn!(error = %e, "Failed to parse settings, using defaults");
                    Self::default()
                }
            },
            Err(_) => {
                debug!("No settings file found, using defaults");
                Self::default()
            }
        }
    }

    pub fn save(&self, data_dir: &Path) {
        let path = data_dir.join("settings.json");
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = std::fs::write(&path, json) {
                    warn!(error = %e, "Failed to save settings");
                }
            }
            Err(e) => warn!(error = %e, "Failed to serialize settings"),
        }
    }

    pub fn view_style(&self) -> ViewStyle {
        let defaults = ViewStyle::default();
        let accent = Color32::from_hex(&self.accent_color).unwrap_or_else(|| {
            warn!(value = %self.accent_color, "Invalid accent colour, using default");
            defaults.accent
        });
        ViewStyle {
            accent,
            thumbnail_width: self.thumbnail_width,
            enlarged_width: self.enlarged_width,
            ..defaults
        }
    }

    pub fn uploader_config(&self) -> UploaderConfig {
        UploaderConfig {
            accepted_extensions: self.accepted_extensions.clone(),
            read_buffer_size: self.read_buffer_size,
        }
    }
}
