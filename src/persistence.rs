//! Atomic JSON output
//!
//! Every artifact is serialized into a temporary file next to its destination
//! and then renamed over it, so an interrupted run never leaves a truncated
//! file behind.

use serde::Serialize;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PersistError {
    #[error("Failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to serialize {}: {source}", path.display())]
    Serialize {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// JSON layout of a written artifact
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonStyle {
    /// Two-space indented, one field per line
    Pretty,
    /// No whitespace
    Compact,
}

/// Serialize `value` to `path` through a temp file and rename
///
/// Parent directories are created when missing.
///
/// # Errors
///
/// Returns `PersistError::Io` if the directory, temp file or rename fails,
/// and `PersistError::Serialize` if `value` cannot be encoded.
pub fn write_json_atomic<T: Serialize + ?Sized>(
    path: &Path,
    value: &T,
    style: JsonStyle,
) -> Result<(), PersistError> {
    let io_err = |source: std::io::Error| PersistError::Io {
        path: path.to_path_buf(),
        source,
    };

    let parent_dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent_dir).map_err(io_err)?;

    let temp_file = NamedTempFile::new_in(parent_dir).map_err(io_err)?;
    {
        let mut writer = BufWriter::new(temp_file.as_file());
        let encoded = match style {
            JsonStyle::Pretty => serde_json::to_writer_pretty(&mut writer, value),
            JsonStyle::Compact => serde_json::to_writer(&mut writer, value),
        };
        encoded.map_err(|source| PersistError::Serialize {
            path: path.to_path_buf(),
            source,
        })?;
        writer.write_all(b"\n").map_err(io_err)?;
        writer.flush().map_err(io_err)?;
    }

    temp_file.persist(path).map_err(|e| io_err(e.error))?;
    Ok(())
}
