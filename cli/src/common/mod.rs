//! # ChatBot Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//!
//! ## Overview
//!
//! Shared utilities used by the command modules, kept apart from the
//! classifier (`intent::`) and the infrastructure (`core::`):
//!
//! - **`fs`**: directory creation and append-mode file handling.
//! - **`ui`**: the welcome banner and the typing effect.
//!

/// Utilities for filesystem operations.
pub mod fs;
/// Utilities for terminal output (banner, typing effect).
pub mod ui;
