//! # ChatBot CLI Intents Integration Tests
//!
//! File: cli/tests/intents.rs
//!
//! ## Overview
//!
//! Integration tests for `chatbot intents`, which prints the trigger table.
//!

mod common;
use common::*;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_intents_lists_table() {
    let dir = tempdir().unwrap();
    chatbot_cmd(&dir)
        .arg("intents")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("greeting")
                .and(predicate::str::contains("\"call me\""))
                .and(predicate::str::contains("(fallback)")),
        );
}

#[test]
fn test_intents_single_category() {
    let dir = tempdir().unwrap();
    chatbot_cmd(&dir)
        .args(["intents", "--category", "joke_request"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("\"laugh\"").and(predicate::str::contains("weather").not()),
        );
}
