//! # ChatBot One-Shot Reply
//!
//! File: cli/src/commands/ask.rs
//!
//! ## Overview
//!
//! Implements `chatbot ask <TEXT>...`: classifies a single message given on
//! the command line and prints the reply. Handy for scripting and for
//! checking which category a phrase lands in.
//!
//! ```bash
//! chatbot ask "tell me a joke"
//! chatbot ask --seed 1 --show-category my name is Alice
//! ```
//!
use crate::commands::session_rng;
use crate::core::error::{ChatbotError, Result};
use crate::intent;
use clap::Parser;
use rand::Rng;
use std::io::{self, Write};
use tracing::{debug, info};

/// # Ask Command Arguments (`AskArgs`)
#[derive(Parser, Debug)]
pub struct AskArgs {
    /// The message to respond to. Multiple words are joined with spaces.
    #[arg(required = true, num_args = 1..)]
    pub text: Vec<String>,

    /// Seed for reply selection.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Prefix the reply with the selected category, e.g. `[greeting]`.
    #[arg(long)]
    pub show_category: bool,
}

/// # Handle Ask Command (`handle_ask`)
///
/// Rejects blank input, then prints one reply to stdout.
pub fn handle_ask(args: AskArgs) -> Result<()> {
    info!("Handling ask command with args: {:?}", args);
    let text = args.text.join(" ");
    if text.trim().is_empty() {
        return Err(ChatbotError::EmptyInput.into());
    }

    let mut rng = session_rng(args.seed);
    let line = answer(&text, &mut rng, args.show_category);

    let stdout = io::stdout();
    writeln!(stdout.lock(), "{}", line)?;
    Ok(())
}

/// The line to print for `text`, optionally tagged with its category.
fn answer<R: Rng + ?Sized>(text: &str, rng: &mut R, show_category: bool) -> String {
    if show_category {
        let reply = intent::respond(text, rng);
        debug!("Classified {:?} as {}", text, reply.category);
        format!("[{}] {}", reply.category, reply.text)
    } else {
        intent::classify_and_respond(text, rng)
    }
}
