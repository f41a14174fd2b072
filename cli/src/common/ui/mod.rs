//! # ChatBot UI Utilities Module (`common::ui`)
//!
//! File: cli/src/common/ui/mod.rs
//!
//! ## Overview
//!
//! Terminal output helpers for the chat session:
//! - **`print_banner`**: the welcome box with sample prompts.
//! - **`type_out`**: writes text one character at a time with a delay, so
//!   replies appear to be typed.
//!
//! Both write to any `std::io::Write`, which lets tests capture the output in
//! a `Vec<u8>`.
//!
use std::io::{self, Write};
use std::thread;
use std::time::Duration;

const RULE_WIDTH: usize = 60;

/// Writes the welcome banner shown at the start of a chat session.
pub fn print_banner<W: Write>(out: &mut W, bot_name: &str) -> io::Result<()> {
    let rule = "=".repeat(RULE_WIDTH);
    writeln!(out, "{}", rule)?;
    writeln!(
        out,
        "{:^width$}",
        format!("🤖 WELCOME TO {}! 🤖", bot_name.to_uppercase()),
        width = RULE_WIDTH
    )?;
    writeln!(out, "{}", rule)?;
    writeln!(out, "Hi! I'm a friendly chatbot ready to chat with you!")?;
    writeln!(
        out,
        "I can respond to greetings, questions, and casual conversation."
    )?;
    writeln!(out, "\nTry saying things like:")?;
    for sample in [
        "Hello, hi, hey",
        "How are you?",
        "What's your name?",
        "Tell me a joke",
        "Help",
        "Bye (to exit)",
    ] {
        writeln!(out, "  • {}", sample)?;
    }
    writeln!(
        out,
        "\nType 'quit' or 'exit' anytime to end our conversation."
    )?;
    writeln!(out, "{}", rule)
}

/// Writes `text` one character at a time, sleeping `delay` between
/// characters, then ends the line. A zero delay writes the text in one go.
pub fn type_out<W: Write>(out: &mut W, text: &str, delay: Duration) -> io::Result<()> {
    if delay.is_zero() {
        return writeln!(out, "{}", text);
    }
    let mut buf = [0u8; 4];
    for ch in text.chars() {
        out.write_all(ch.encode_utf8(&mut buf).as_bytes())?;
        out.flush()?;
        thread::sleep(delay);
    }
    writeln!(out)
}
