//! # ChatBot Command Modules
//!
//! File: cli/src/commands/mod.rs
//!
//! ## Overview
//!
//! This module aggregates the top-level commands of the chatbot CLI and the
//! small helpers they share.
//!
//! ## Commands
//!
//! - `chat`: interactive conversation loop (the default when no command is given)
//! - `ask`: reply to a single message passed on the command line
//! - `intents`: list the trigger table in priority order
//!
//! Each command defines its own arguments structure and handler function.
//!
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

/// Reply to a single message and exit.
pub mod ask;
/// Interactive chat session, including the transcript writer.
pub mod chat;
/// Listing of categories and their triggers.
pub mod intents;

/// Builds the random source used for reply selection: seeded when `seed`
/// is given, otherwise from OS entropy.
pub fn session_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => {
            debug!("Using fixed seed {} for reply selection", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    }
}
