//! # ChatBot Main Entry Point
//!
//! File: cli/src/main.rs
//!
//! ## Overview
//!
//! This file serves as the main entry point for the chatbot CLI.
//! It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Routing execution to the appropriate command handler
//!
//! ## Architecture
//!
//! - `intent`: the pattern-matching classifier (categories, triggers, replies)
//! - `commands`: one module per subcommand (`chat`, `ask`, `intents`)
//! - `common`: terminal and filesystem helpers
//! - `core`: configuration and error types
//!
//! Running `chatbot` without a subcommand starts an interactive chat.
//!
//! ## Examples
//!
//! ```bash
//! # Start chatting
//! chatbot
//!
//! # One-shot reply with the selected category, more logging
//! chatbot -vv ask --show-category "how are you"
//! ```
//!
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands; // Command handlers (chat, ask, intents)
mod common; // Shared utilities (ui, fs)
mod core; // Core infrastructure (errors, config)
mod intent; // Intent classifier

/// Defines the top-level command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "chatbot",
    about = "🤖 ChatBot: a friendly pattern-matching chat responder",
    long_about = "Chat with a rule-based bot that recognises greetings, questions and small talk.\n\
                  Run without a command to start an interactive conversation.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

/// Enum defining all available top-level commands.
#[derive(Subcommand, Debug)]
enum Commands {
    #[command(alias = "c")]
    Chat(commands::chat::ChatArgs),
    #[command(alias = "a")]
    Ask(commands::ask::AskArgs),
    #[command(alias = "i")]
    Intents(commands::intents::IntentsArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let command_result = match cli.command {
        Some(Commands::Chat(args)) => commands::chat::handle_chat(args),
        Some(Commands::Ask(args)) => commands::ask::handle_ask(args),
        Some(Commands::Intents(args)) => commands::intents::handle_intents(args),
        None => commands::chat::handle_chat(commands::chat::ChatArgs::default()),
    };

    if let Err(e) = command_result {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}
