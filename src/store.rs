// src/store.rs
//! JSON dumps: one file per day plus the aggregate the search tool reads.

use std::{fs, io::{BufReader, BufWriter, Write}, path::{Path, PathBuf}};

use serde::Serialize;

use crate::config::consts::DAY_FILE_PREFIX;
use crate::core::sanitize::sanitize_file_stem;
use crate::error::{Error, Result};
use crate::model::{Program, Session};

pub fn day_path(out_dir: &Path, day: &str) -> PathBuf {
    out_dir.join(format!("{DAY_FILE_PREFIX}{}.json", sanitize_file_stem(day)))
}

/// Write one day's sessions. Returns the file written.
pub fn save_day(out_dir: &Path, day: &str, sessions: &[Session]) -> Result<PathBuf> {
    let path = day_path(out_dir, day);
    write_json(&path, sessions)?;
    Ok(path)
}

pub fn save_program(path: &Path, program: &Program) -> Result<()> {
    write_json(path, program)
}

pub fn load_program(path: &Path) -> Result<Program> {
    let file = fs::File::open(path).map_err(|e| Error::io(path, e))?;
    Ok(serde_json::from_reader(BufReader::new(file))?)
}

fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
        }
    }

    let file = fs::File::create(path).map_err(|e| Error::io(path, e))?;
    let mut w = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut w, value)?;
    w.write_all(b"\n").map_err(|e| Error::io(path, e))?;
    w.flush().map_err(|e| Error::io(path, e))?;
    log::debug!("Wrote {}", path.display());
    Ok(())
}
