// src/logger.rs
// File sink for the `log` facade: `[HH:MM:SS.mmm][LEVEL] message` lines,
// stamped with time since the logger was installed.
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::{Mutex, OnceLock};
use std::time::Instant;

use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};

use crate::config::consts::{LOG_DIR, LOG_ENV, LOG_FILE};

static LOGGER: OnceLock<FileLogger> = OnceLock::new();

pub struct FileLogger {
    start: Instant,
    level: LevelFilter,
    file: Mutex<Option<File>>,
}

impl FileLogger {
    /// Append to `path`. A file that cannot be opened disables output
    /// rather than failing the program.
    pub fn new(path: &Path, level: LevelFilter) -> Self {
        if let Some(parent) = path.parent() {
            let _ = fs::create_dir_all(parent);
        }
        let file = OpenOptions::new().create(true).append(true).open(path).ok();
        Self { start: Instant::now(), level, file: Mutex::new(file) }
    }

    pub fn format_line(&self, record: &Record) -> String {
        let elapsed = fmt_elapsed(self.start.elapsed().as_millis());
        format!("[{elapsed}][{}] {}\n", record.level(), record.args())
    }
}

impl Log for FileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = self.format_line(record);
        if let Ok(mut guard) = self.file.lock() {
            if let Some(file) = guard.as_mut() {
                let _ = file.write_all(line.as_bytes());
            }
        }
    }

    fn flush(&self) {
        if let Ok(mut guard) = self.file.lock() {
            if let Some(file) = guard.as_mut() {
                let _ = file.flush();
            }
        }
    }
}

fn fmt_elapsed(ms: u128) -> String {
    let total_ms = ms as u64;
    let h = total_ms / 3_600_000;
    let m = (total_ms % 3_600_000) / 60_000;
    let s = (total_ms % 60_000) / 1_000;
    let ms = total_ms % 1_000;
    format!("{h:02}:{m:02}:{s:02}.{ms:03}")
}

/// Level from `ICRA_LOG` (`off`, `error` … `trace`), default `info`.
pub fn level_from_env() -> LevelFilter {
    std::env::var(LOG_ENV)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(LevelFilter::Info)
}

/// Install the file logger at `.store/debug.log`. Call once, from a binary.
pub fn init() -> Result<(), SetLoggerError> {
    let level = level_from_env();
    let logger = LOGGER.get_or_init(|| FileLogger::new(&Path::new(LOG_DIR).join(LOG_FILE), level));
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(())
}
