//! # ChatBot Session Loop
//!
//! File: cli/src/commands/chat/session.rs
//!
//! ## Overview
//!
//! Drives one conversation: prompt, read a line, answer, repeat.
//!
//! The loop consumes [`Input`] events rather than reading a stream
//! directly, so an interrupt can arrive while a read is still blocked.
//! [`read_lines`] turns any `BufRead` into such events.
//!
//! Turn handling:
//! 1. End of input or Ctrl+C ends the session with a goodbye line.
//! 2. A blank line gets a nudge and does not count as a turn.
//! 3. `quit`, `exit` or `stop` (whole line, any case) end the session.
//! 4. Anything else goes through the intent classifier; the reply is typed
//!    out and the turn is counted. Every `encouragement_interval` turns an
//!    extra encouragement line is printed.
//!
//! A turn that fails (undecodable input, transcript write error) is reported
//! and the session carries on with the next line.
//!
use super::transcript::Transcript;
use crate::common::ui;
use crate::core::error::Result;
use crate::intent::{self, Category};
use anyhow::Context;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::BTreeMap;
use std::io::{self, BufRead, Write};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Whole-line commands that end the session before classification.
pub const EXIT_COMMANDS: &[&str] = &["quit", "exit", "stop"];

const ENCOURAGEMENTS: &[&str] = &[
    "(I'm enjoying our conversation! Keep it going! 😄)",
    "(You're a great conversationalist! 🌟)",
    "(This is fun! What else would you like to talk about? 💬)",
];

/// One event from the user's side of the conversation.
#[derive(Debug)]
pub enum Input {
    Line(String),
    /// A line that could not be decoded. The session skips it.
    Unreadable(io::Error),
    /// Reading failed for good. The session ends with this error.
    Failed(io::Error),
    /// The user pressed Ctrl+C.
    Interrupted,
    Closed,
}

/// Reads `reader` line by line, ending with [`Input::Closed`] or
/// [`Input::Failed`].
pub fn read_lines<B: BufRead>(mut reader: B) -> impl Iterator<Item = Input> {
    let mut done = false;
    std::iter::from_fn(move || {
        if done {
            return None;
        }
        let mut line = String::new();
        let item = match reader.read_line(&mut line) {
            Ok(0) => Input::Closed,
            Ok(_) => Input::Line(line),
            Err(e) if e.kind() == io::ErrorKind::InvalidData => Input::Unreadable(e),
            Err(e) => Input::Failed(e),
        };
        done = matches!(item, Input::Closed | Input::Failed(_));
        Some(item)
    })
}

/// Effective settings for one session, after config and flags are merged.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSettings {
    pub bot_name: String,
    pub typing_delay: Duration,
    /// `0` disables encouragement lines.
    pub encouragement_interval: u32,
}

/// Counters collected over one session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionStats {
    /// Lines that reached the classifier.
    pub turns: u32,
    pub by_category: BTreeMap<Category, u32>,
}

impl SessionStats {
    fn record(&mut self, category: Category) {
        self.turns += 1;
        *self.by_category.entry(category).or_insert(0) += 1;
    }

    /// Human-readable summary, one category per line in priority order.
    pub fn summary(&self) -> String {
        let mut text = format!("Session stats: {} turns\n", self.turns);
        for (category, count) in &self.by_category {
            text.push_str(&format!("  {:<18} {}\n", category.label(), count));
        }
        text
    }
}

/// Runs a conversation over the events in `input`, writing to `out`, until
/// the user quits, interrupts, or the input is exhausted. An exhausted
/// iterator counts as [`Input::Closed`].
pub fn run_session<I, O, R>(
    input: I,
    out: &mut O,
    rng: &mut R,
    settings: &SessionSettings,
    mut transcript: Option<&mut Transcript>,
) -> Result<SessionStats>
where
    I: IntoIterator<Item = Input>,
    O: Write,
    R: Rng + ?Sized,
{
    let bot = settings.bot_name.as_str();
    let mut stats = SessionStats::default();

    ui::print_banner(out, bot)?;
    writeln!(out, "\n{}: Hi there! I'm excited to chat with you! 😊", bot)?;

    let mut events = input.into_iter();
    loop {
        write!(out, "\nYou: ")?;
        out.flush()?;

        let line = match events.next().unwrap_or(Input::Closed) {
            Input::Line(line) => line,
            Input::Closed => {
                writeln!(out, "\n\n{}: Looks like you've gone quiet. Goodbye! 👋", bot)?;
                break;
            }
            Input::Interrupted => {
                info!("Chat interrupted by Ctrl+C");
                writeln!(out, "\n\n{}: Oops! Looks like you pressed Ctrl+C. Goodbye! 👋", bot)?;
                break;
            }
            Input::Unreadable(e) => {
                warn!("Skipping unreadable input line: {}", e);
                writeln!(out, "\n{}: Sorry, I encountered an error: {}", bot, e)?;
                writeln!(out, "But I'm still here to chat! Try again.")?;
                continue;
            }
            Input::Failed(e) => return Err(e).context("Failed to read from input"),
        };

        let user_input = line.trim();
        if user_input.is_empty() {
            writeln!(out, "{}: I'm listening... please say something!", bot)?;
            continue;
        }
        record(&mut transcript, |t| t.user_line(user_input));

        if EXIT_COMMANDS.contains(&user_input.to_lowercase().as_str()) {
            let farewell = "Thanks for chatting! Have a great day! 👋";
            writeln!(out, "{}: {}", bot, farewell)?;
            record(&mut transcript, |t| t.bot_line(bot, None, farewell));
            break;
        }

        let reply = intent::respond(user_input, rng);
        debug!("Turn {} classified as {}", stats.turns + 1, reply.category);

        write!(out, "{}: ", bot)?;
        ui::type_out(out, &reply.text, settings.typing_delay)?;
        record(&mut transcript, |t| {
            t.bot_line(bot, Some(reply.category), &reply.text)
        });
        stats.record(reply.category);

        let interval = settings.encouragement_interval;
        if interval > 0 && stats.turns % interval == 0 {
            if let Some(encouragement) = ENCOURAGEMENTS.choose(rng) {
                writeln!(out, "\n{}", encouragement)?;
            }
        }
    }

    Ok(stats)
}

fn record<F>(transcript: &mut Option<&mut Transcript>, write: F)
where
    F: FnOnce(&mut Transcript) -> Result<()>,
{
    if let Some(t) = transcript.as_deref_mut() {
        if let Err(e) = write(t) {
            warn!("{:#}", e);
        }
    }
}
