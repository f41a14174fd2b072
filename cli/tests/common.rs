//! # ChatBot CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! ## Overview
//!
//! Shared helpers for the integration tests (`ask.rs`, `chat.rs`, ...).
//! Each `.rs` file in `cli/tests/` is compiled as its own test crate and
//! pulls this module in with `mod common;`.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use tempfile::TempDir;

/// Returns an `assert_cmd::Command` for the compiled `chatbot` binary.
///
/// The command runs inside `workdir` with `CHATBOT_CONFIG` pointing at an
/// empty config file there. That file is then the only configuration read,
/// so neither a stray `.chatbot.toml` nor the developer's own
/// `~/.config/chatbot/config.toml` leaks into the test.
pub fn chatbot_cmd(workdir: &TempDir) -> Command {
    Command::from_std(chatbot_process(workdir))
}

/// Same setup as [`chatbot_cmd`], as a plain `std::process::Command` for
/// tests that need to talk to a running process.
pub fn chatbot_process(workdir: &TempDir) -> std::process::Command {
    let config = workdir.path().join("test-config.toml");
    if !config.exists() {
        std::fs::write(&config, "").expect("Failed to write empty test config");
    }
    let mut cmd = std::process::Command::new(assert_cmd::cargo::cargo_bin("chatbot"));
    cmd.current_dir(workdir.path())
        .env("CHATBOT_CONFIG", &config)
        .env_remove("RUST_LOG");
    cmd
}

/// Writes `content` as the config file used by [`chatbot_cmd`].
pub fn write_config(workdir: &TempDir, content: &str) {
    std::fs::write(workdir.path().join("test-config.toml"), content)
        .expect("Failed to write test config");
}
