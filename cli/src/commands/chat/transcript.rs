//! # ChatBot Conversation Transcript
//!
//! File: cli/src/commands/chat/transcript.rs
//!
//! ## Overview
//!
//! Appends a chat session to a plain-text log. The file gets a header when it
//! is first created; every session then adds a start marker, one timestamped
//! line per message, and an end marker with the turn count.
//!
//! ```text
//! CHATBOT CONVERSATION TRANSCRIPT
//! ========================================
//!
//! --- Session started 2026-10-18 09:30:12 ---
//! [09:30:15] You: hello
//! [09:30:15] ChatBot (greeting): Hey! What's up?
//! --- Session ended: 1 turns ---
//! ```
//!
use super::session::SessionStats;
use crate::common::fs::io;
use crate::core::error::{ChatbotError, Result};
use crate::intent::Category;
use chrono::Local;
use std::io::Write;
use std::path::Path;
use tracing::{info, warn};

const HEADER: &str = "CHATBOT CONVERSATION TRANSCRIPT";

/// Append-only writer for one chat session.
pub struct Transcript {
    label: String,
    writer: Box<dyn Write>,
}

impl Transcript {
    /// Opens (or creates) the transcript file at `path` and writes the
    /// session start marker.
    pub fn open(path: &Path) -> Result<Self> {
        let (file, is_new) = io::open_append(path)?;
        info!("Recording conversation to {}", path.display());
        Self::from_writer(path.display().to_string(), Box::new(file), is_new)
    }

    /// Wraps an arbitrary writer. `label` names the destination in errors.
    pub fn from_writer(label: String, writer: Box<dyn Write>, write_header: bool) -> Result<Self> {
        let mut transcript = Self { label, writer };
        if write_header {
            transcript.write_raw(&format!("{}\n{}\n", HEADER, "=".repeat(40)))?;
        }
        let started = Local::now().format("%Y-%m-%d %H:%M:%S");
        transcript.write_raw(&format!("\n--- Session started {} ---\n", started))?;
        Ok(transcript)
    }

    /// Records a line typed by the user.
    pub fn user_line(&mut self, text: &str) -> Result<()> {
        self.write_line(&format!("You: {}", text))
    }

    /// Records a line printed by the bot, tagged with its category if any.
    pub fn bot_line(&mut self, bot_name: &str, category: Option<Category>, text: &str) -> Result<()> {
        match category {
            Some(category) => self.write_line(&format!("{} ({}): {}", bot_name, category, text)),
            None => self.write_line(&format!("{}: {}", bot_name, text)),
        }
    }

    /// Writes the end marker. Failures are logged, not returned.
    pub fn finish(&mut self, stats: &SessionStats) {
        let marker = format!("--- Session ended: {} turns ---\n", stats.turns);
        if let Err(e) = self.write_raw(&marker) {
            warn!("{:#}", e);
        }
    }

    fn write_line(&mut self, body: &str) -> Result<()> {
        let stamp = Local::now().format("%H:%M:%S");
        self.write_raw(&format!("[{}] {}\n", stamp, body))
    }

    fn write_raw(&mut self, text: &str) -> Result<()> {
        self.writer
            .write_all(text.as_bytes())
            .and_then(|_| self.writer.flush())
            .map_err(|source| {
                anyhow::Error::from(ChatbotError::Transcript {
                    path: self.label.clone(),
                    source,
                })
            })
    }
}
