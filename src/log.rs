//! Timestamped file logging.
//!
//! Until `init` succeeds every call here is a no-op, so library code can log
//! freely without forcing a log file on embedders or tests.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use once_cell::sync::Lazy;
use chrono::Local;

static LOG_FILE: Lazy<Mutex<Option<File>>> = Lazy::new(|| Mutex::new(None));

/// Default directory for log files (`~/.uiloop/logs`)
pub fn default_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".uiloop")
        .join("logs")
}

/// Initialize logging to a fresh file in `dir`
pub fn init(dir: &Path) -> std::io::Result<PathBuf> {
    let timestamp = Local::now().format("%Y%m%d_%H%M%S");

    std::fs::create_dir_all(dir)?;

    let log_path = dir.join(format!("uiloop_{}.log", timestamp));

    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&log_path)?;

    *LOG_FILE.lock().unwrap() = Some(file);

    log("=== uiloop started ===");

    Ok(log_path)
}

/// Log a message with timestamp
pub fn log(msg: &str) {
    let timestamp = Local::now().format("%H:%M:%S%.3f");
    let line = format!("[{}] {}\n", timestamp, msg);

    if let Ok(mut guard) = LOG_FILE.lock() {
        if let Some(ref mut file) = *guard {
            let _ = file.write_all(line.as_bytes());
            let _ = file.flush();
        }
    }
}

/// Log a delivered event
pub fn log_event(event: &str) {
    log(&format!("[EVENT] {}", event));
}

/// Log a warning
pub fn warn(msg: &str) {
    log(&format!("[WARN] {}", msg));
}

/// Route panic messages into the log file before the default hook runs
pub fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        log(&format!("[PANIC] {}", info));
        default_hook(info);
    }));
}
