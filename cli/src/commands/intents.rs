//! # ChatBot Trigger Table Listing
//!
//! File: cli/src/commands/intents.rs
//!
//! ## Overview
//!
//! Implements `chatbot intents`, which prints every category in the order
//! the classifier checks them, with its trigger phrases and how many replies
//! its pool holds. Categories earlier in the list win when an input contains
//! triggers from several of them.
//!
use crate::core::error::Result;
use crate::intent::Category;
use clap::Parser;
use std::io::{self, Write};
use tracing::info;

/// # Intents Command Arguments (`IntentsArgs`)
#[derive(Parser, Debug)]
pub struct IntentsArgs {
    /// Only show the category with this label (e.g. `farewell`).
    #[arg(long, short)]
    pub category: Option<String>,
}

/// # Handle Intents Command (`handle_intents`)
pub fn handle_intents(args: IntentsArgs) -> Result<()> {
    info!("Handling intents command with args: {:?}", args);
    let stdout = io::stdout();
    write_table(&mut stdout.lock(), args.category.as_deref())?;
    Ok(())
}

fn write_table<W: Write>(out: &mut W, only: Option<&str>) -> io::Result<()> {
    writeln!(out, "{:<4} {:<18} {:<6} Triggers", "#", "Category", "Pool")?;
    writeln!(out, "{}", "-".repeat(70))?;
    let mut shown = 0;
    for (priority, category) in Category::ALL.iter().enumerate() {
        if only.is_some_and(|label| !label.eq_ignore_ascii_case(category.label())) {
            continue;
        }
        let triggers = if category.triggers().is_empty() {
            "(fallback)".to_string()
        } else {
            category
                .triggers()
                .iter()
                .map(|t| format!("\"{}\"", t))
                .collect::<Vec<_>>()
                .join(", ")
        };
        writeln!(
            out,
            "{:<4} {:<18} {:<6} {}",
            priority + 1,
            category.label(),
            category.responses().len(),
            triggers
        )?;
        shown += 1;
    }
    if shown == 0 {
        writeln!(out, "No category matches '{}'.", only.unwrap_or_default())?;
    }
    Ok(())
}
