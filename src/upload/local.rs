use crate::upload::types::{FileId, UploadEvent, UploadOutcome};
use crate::upload::{UploadActions, UploadError};
use eframe::egui;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender;
use tokio::io::AsyncReadExt;
use tokio::runtime::Runtime;
use tracing::{debug, info, warn};

#[derive(Debug, Clone)]
pub struct UploaderConfig {
    pub accepted_extensions: Vec<String>,
    pub read_buffer_size: usize,
}

impl Default for UploaderConfig {
    fn default() -> Self {
        Self {
            accepted_extensions: ["png", "jpg", "jpeg", "gif", "webp", "bmp"]
                .iter()
                .map(|ext| ext.to_string())
                .collect(),
            read_buffer_size: 64 * 1024,
        }
    }
}

/// Upload collaborator that streams picked files from the local disk and
/// reports read progress. Files are only read, never copied or sent.
pub struct LocalUploader {
    runtime: Runtime,
    sender: Sender<UploadEvent>,
    config: UploaderConfig,
    next_id: u64,
    taken_ids: HashSet<FileId>,
    repaint: Option<egui::Context>,
}

impl LocalUploader {
    pub fn new(config: UploaderConfig, sender: Sender<UploadEvent>) -> Result<Self, UploadError> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("uploader")
            .enable_all()
            .build()?;

        Ok(Self {
            runtime,
            sender,
            config,
            next_id: 1,
            taken_ids: HashSet::new(),
            repaint: None,
        })
    }

    /// Wake the UI whenever an event is sent.
    pub fn with_repaint(mut self, ctx: egui::Context) -> Self {
        self.repaint = Some(ctx);
        self
    }

    /// Ids already present in the collection; new uploads never reuse them.
    pub fn with_taken_ids<'a>(mut self, ids: impl IntoIterator<Item = &'a FileId>) -> Self {
        self.taken_ids.extend(ids.into_iter().cloned());
        self
    }

    fn allocate_id(&mut self) -> FileId {
        loop {
            let id = FileId::Text(format!("local-{}", self.next_id));
            self.next_id += 1;
            if !self.taken_ids.contains(&id) {
                return id;
            }
        }
    }
}

impl UploadActions for LocalUploader {
    fn upload(&mut self, file: PathBuf) {
        let id = self.allocate_id();
        let name = display_name(&file);
        info!(id = %id, path = %file.display(), "Queueing upload");

        let notifier = Notifier {
            sender: self.sender.clone(),
            repaint: self.repaint.clone(),
        };
        notifier.send(UploadEvent::Queued {
            id: id.clone(),
            name,
        });

        let config = self.config.clone();
        self.runtime.spawn(async move {
            let outcome = match stream_file(&id, &file, &config, &notifier).await {
                Ok(()) => {
                    info!(id = %id, "Upload finished");
                    let resolved = tokio::fs::canonicalize(&file).await.unwrap_or(file);
                    UploadOutcome::Succeeded {
                        url: file_uri(&resolved),
                    }
                }
                Err(e) => {
                    warn!(id = %id, error = %e, "Upload failed");
                    UploadOutcome::Failed {
                        message: e.to_string(),
                    }
                }
            };
            notifier.send(UploadEvent::Finished { id, outcome });
        });
    }
}

struct Notifier {
    sender: Sender<UploadEvent>,
    repaint: Option<egui::Context>,
}

impl Notifier {
    fn send(&self, event: UploadEvent) {
        if self.sender.send(event).is_err() {
            debug!("Event receiver dropped");
        }
        if let Some(ctx) = &self.repaint {
            ctx.request_repaint();
        }
    }
}

async fn stream_file(
    id: &FileId,
    path: &Path,
    config: &UploaderConfig,
    notifier: &Notifier,
) -> Result<(), UploadError> {
    if !is_supported_file(path, &config.accepted_extensions) {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("none")
            .to_string();
        return Err(UploadError::UnsupportedFileType(ext));
    }

    let mut file = tokio::fs::File::open(path).await?;
    let total = file.metadata().await?.len();
    let mut buffer = vec![0u8; config.read_buffer_size.max(1)];
    let mut read: u64 = 0;

    loop {
        let n = file.read(&mut buffer).await?;
        if n == 0 {
            break;
        }
        read += n as u64;
        if total > 0 {
            let percent = (read as f64 / total as f64 * 100.0) as f32;
            notifier.send(UploadEvent::Progress {
                id: id.clone(),
                percent,
            });
        }
    }

    debug!(id = %id, bytes = read, "Read complete");
    Ok(())
}

pub fn is_supported_file(path: &Path, accepted_extensions: &[String]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|ext| {
            accepted_extensions
                .iter()
                .any(|accepted| accepted.eq_ignore_ascii_case(ext))
        })
        .unwrap_or(false)
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string()
}

/// `file://` URI in the form the egui file loader reads back: the plain path
/// after the scheme, without the Windows verbatim prefix and with forward slashes.
fn file_uri(path: &Path) -> String {
    let raw = path.to_string_lossy();
    let raw = raw.strip_prefix(r"\\?\").unwrap_or(&raw);
    let raw = if cfg!(windows) {
        raw.replace('\\', "/")
    } else {
        raw.to_string()
    };
    format!("file://{}", raw)
}
