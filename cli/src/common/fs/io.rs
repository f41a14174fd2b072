//! # ChatBot Filesystem I/O Operations
//!
//! File: cli/src/common/fs/io.rs
//!
//! ## Overview
//!
//! Small wrappers around `std::fs` used by the transcript writer:
//! - **`ensure_dir_exists`**: creates a directory (and parents) if missing and
//!   rejects paths that exist but are not directories.
//! - **`open_append`**: opens a file for appending, creating it and its parent
//!   directory when needed, and reports whether the file is new.
//!
//! ```ignore
//! use crate::common::fs::io;
//!
//! let (file, created) = io::open_append(Path::new("./logs/chat.log"))?;
//! if created {
//!     // write a header
//! }
//! ```
//!
use crate::core::error::{ChatbotError, Result};
use anyhow::Context;
use std::fs::{self, File, OpenOptions};
use std::path::Path;
use tracing::{debug, info};

/// Ensures that a directory exists at the specified path.
///
/// If the path does not exist it is created, including any missing parents
/// (similar to `mkdir -p`).
///
/// # Errors
///
/// Returns an `Err` if:
/// - The path exists but is not a directory.
/// - Creating the directory fails (e.g., due to permissions).
pub fn ensure_dir_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)
            .with_context(|| format!("Failed to create directory {:?}", path))?;
        info!("Created directory: {:?}", path);
    } else if !path.is_dir() {
        anyhow::bail!(ChatbotError::FileSystem(format!(
            "Path exists but is not a directory: {:?}",
            path
        )));
    } else {
        debug!("Directory already exists: {:?}", path);
    }
    Ok(())
}

/// Opens `path` for appending, creating the file and its parent directory
/// when they do not exist yet.
///
/// # Returns
///
/// * `Result<(File, bool)>` - The open file handle and `true` when the file
///   was created (or was empty), so callers know to write a header.
pub fn open_append(path: &Path) -> Result<(File, bool)> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_dir_exists(parent)?;
        }
    }

    let is_new = fs::metadata(path).map(|m| m.len() == 0).unwrap_or(true);

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open {:?} for appending", path))?;
    debug!("Opened {:?} for appending (new: {})", path, is_new);
    Ok((file, is_new))
}
