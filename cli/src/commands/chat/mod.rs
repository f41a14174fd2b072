//! # ChatBot Interactive Chat
//!
//! File: cli/src/commands/chat/mod.rs
//!
//! ## Overview
//!
//! Implements `chatbot chat`, the line-oriented conversation loop. Each line
//! the user types is handed to the intent classifier and the reply is
//! rendered with a typing effect.
//!
//! ## Architecture
//!
//! - `session.rs`: the read-respond loop, written against `BufRead`/`Write`
//!   so it can be driven from tests.
//! - `transcript.rs`: optional append-only log of the conversation.
//!
//! `handle_chat` merges the command-line flags into the loaded configuration,
//! opens the transcript if one is configured, and runs the session on the
//! process's stdin/stdout. Stdin is read on its own thread and Ctrl+C is
//! delivered on the same channel, so an interrupt ends the session cleanly
//! even while a read is blocked.
//!
//! ## Examples
//!
//! ```bash
//! # Start chatting with the defaults
//! chatbot chat
//!
//! # Reproducible replies, no typing delay, conversation logged to a file
//! chatbot chat --seed 7 --no-typing --transcript ~/chat.log --stats
//! ```
//!
use crate::commands::session_rng;
use crate::core::config::{self, Config};
use crate::core::error::Result;
use anyhow::Context;
use clap::Parser;
use std::io;
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;
use tracing::{debug, info};

pub mod session;
pub mod transcript;

use session::{read_lines, run_session, Input, SessionSettings};
use transcript::Transcript;

/// # Chat Command Arguments (`ChatArgs`)
///
/// Flags given here take precedence over the configuration files.
#[derive(Parser, Debug, Default)]
pub struct ChatArgs {
    /// Seed for reply selection. The same seed and input give the same replies.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print replies instantly instead of character by character.
    #[arg(long)]
    pub no_typing: bool,

    /// Delay between typed characters, in milliseconds.
    #[arg(long, value_name = "MS", conflicts_with = "no_typing")]
    pub delay_ms: Option<u64>,

    /// Append the conversation to this file.
    #[arg(long, value_name = "PATH")]
    pub transcript: Option<PathBuf>,

    /// Print a per-category summary when the session ends.
    #[arg(long)]
    pub stats: bool,
}

/// # Handle Chat Command (`handle_chat`)
///
/// Loads configuration, applies the command-line overrides and runs an
/// interactive session on stdin/stdout until the user quits or input ends.
pub fn handle_chat(args: ChatArgs) -> Result<()> {
    info!("Handling chat command with args: {:?}", args);
    let cfg = config::load_config()?;

    let settings = settings_from(&cfg, &args);
    debug!("Effective session settings: {:?}", settings);

    let transcript_path = args
        .transcript
        .clone()
        .or_else(|| cfg.transcript.path.as_ref().map(PathBuf::from));
    let mut transcript = match transcript_path {
        Some(path) => Some(Transcript::open(&path)?),
        None => None,
    };

    let mut rng = session_rng(args.seed);
    let events = spawn_input_events()?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let stats = run_session(
        events,
        &mut out,
        &mut rng,
        &settings,
        transcript.as_mut(),
    )?;

    drop(out);

    if let Some(t) = transcript.as_mut() {
        t.finish(&stats);
    }

    info!("Chat session ended after {} turns", stats.turns);
    if args.stats {
        print!("{}", stats.summary());
    }
    Ok(())
}

/// Feeds stdin lines and Ctrl+C presses into one channel.
fn spawn_input_events() -> Result<mpsc::Receiver<Input>> {
    let (tx, rx) = mpsc::channel();

    let interrupt_tx = tx.clone();
    ctrlc::set_handler(move || {
        let _ = interrupt_tx.send(Input::Interrupted);
    })
    .context("Failed to install the Ctrl+C handler")?;

    thread::spawn(move || {
        for item in read_lines(io::stdin().lock()) {
            if tx.send(item).is_err() {
                break;
            }
        }
    });
    Ok(rx)
}

fn settings_from(cfg: &Config, args: &ChatArgs) -> SessionSettings {
    let typing_delay = if args.no_typing {
        Duration::ZERO
    } else if let Some(ms) = args.delay_ms {
        Duration::from_millis(ms)
    } else if cfg.chat.typing_effect {
        Duration::from_millis(cfg.chat.typing_delay_ms)
    } else {
        Duration::ZERO
    };

    SessionSettings {
        bot_name: cfg.chat.bot_name.clone(),
        typing_delay,
        encouragement_interval: cfg.chat.encouragement_interval,
    }
}
