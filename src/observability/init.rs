//! Tracing initialization and subscriber setup.

use super::file_writer::RotatingFile;
use crate::Config;
use std::sync::Mutex;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Name of the log file inside the data directory.
const LOG_FILE_NAME: &str = "nodelist.log";

/// Installs the global subscriber writing JSON lines to the log file.
///
/// Does nothing if the data directory cannot be created or a subscriber is
/// already installed; the pane works the same without logging.
pub fn init_tracing(config: &Config) {
    let level = config
        .log_level
        .clone()
        .unwrap_or_else(|| "info".to_string());

    let data_dir = crate::infrastructure::get_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let writer = Mutex::new(RotatingFile::new(data_dir.join(LOG_FILE_NAME)));
    let file_layer = fmt::layer()
        .json()
        .with_ansi(false)
        .with_current_span(true)
        .with_writer(writer);

    let _ = tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(file_layer)
        .try_init();
}
