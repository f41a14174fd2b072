//! # ChatBot Filesystem Utilities (`common::fs`)
//!
//! File: cli/src/common/fs/mod.rs
//!
//! ## Overview
//!
//! Groups filesystem helpers. Currently only `io`, which the transcript
//! writer uses to create directories and open files in append mode.
//!

/// Contains basic file I/O operations (e.g., `ensure_dir_exists`, `open_append`).
pub mod io;
