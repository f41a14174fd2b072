//! # ChatBot Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the error types used throughout the chatbot CLI.
//! The classifier itself is total and never fails; errors only arise at the
//! edges: reading configuration, writing transcripts, and rejecting input the
//! caller is expected to guard against.
//!
//! ## Architecture
//!
//! - `ChatbotError`: a `thiserror` enum for the failures commands report.
//! - `Result<T>`: an alias for `anyhow::Result<T>` so call sites can attach
//!   context with `anyhow::Context`.
//!
//! ## Examples
//!
//! ```ignore
//! if text.trim().is_empty() {
//!     return Err(ChatbotError::EmptyInput.into());
//! }
//!
//! let content = fs::read_to_string(&path)
//!     .with_context(|| format!("Failed to read file: {}", path.display()))?;
//! ```
//!
use thiserror::Error;

/// Custom error type for the chatbot application.
#[derive(Error, Debug)]
pub enum ChatbotError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Filesystem error: {0}")]
    FileSystem(String),

    #[error("Nothing to respond to: the input is empty.")]
    EmptyInput,

    #[error("Failed to write transcript '{path}': {source}")]
    Transcript {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;
