use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub const LOG_FILE_PREFIX: &str = "image-uploader.log";
const DEFAULT_FILTER: &str = "info,image_uploader=debug";

/// Daily rolling log under `<data_dir>/logs`, mirrored to stderr in debug
/// builds. `RUST_LOG` overrides the default filter. Hold the returned guard
/// until exit or buffered lines are lost.
pub fn init_logging(data_dir: &Path) -> WorkerGuard {
    let logs_dir = data_dir.join("logs");
    std::fs::create_dir_all(&logs_dir).ok();

    let (file_writer, guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::daily(&logs_dir, LOG_FILE_PREFIX));

    // Upload work runs on the "uploader" runtime threads; the name tells it
    // apart from the UI thread.
    let file_layer = fmt::layer()
        .with_writer(file_writer)
        .with_ansi(false)
        .with_thread_names(true);

    let console_layer = cfg!(debug_assertions).then(|| {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .compact()
    });

    tracing_subscriber::registry()
        .with(filter_from_env())
        .with(file_layer)
        .with(console_layer)
        .init();

    guard
}

fn filter_from_env() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}
