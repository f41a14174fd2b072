//! # ChatBot CLI Ask Integration Tests
//!
//! File: cli/tests/ask.rs
//!
//! ## Overview
//!
//! Integration tests for `chatbot ask`, the one-shot reply command.
//!

mod common;
use common::*;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_ask_greeting_shows_category() {
    let dir = tempdir().unwrap();
    chatbot_cmd(&dir)
        .args(["ask", "--show-category", "HELLO"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("[greeting] "));
}

#[test]
fn test_ask_joins_words_and_extracts_name() {
    let dir = tempdir().unwrap();
    chatbot_cmd(&dir)
        .args(["ask", "my", "name", "is", "Alice", "and", "I", "like", "cats"])
        .assert()
        .success()
        .stdout("Nice to meet you, Alice! That's a lovely name.\n");
}

#[test]
fn test_ask_first_match_wins() {
    let dir = tempdir().unwrap();
    chatbot_cmd(&dir)
        .args(["ask", "--show-category", "hello, I am sad"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("[greeting] "));
}

#[test]
fn test_ask_unmatched() {
    let dir = tempdir().unwrap();
    chatbot_cmd(&dir)
        .args(["ask", "--show-category", "xyzzy plugh"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("[unmatched] "));
}

#[test]
fn test_ask_same_seed_same_reply() {
    let dir = tempdir().unwrap();
    let first = chatbot_cmd(&dir)
        .args(["ask", "--seed", "5", "tell me a joke"])
        .output()
        .unwrap();
    let second = chatbot_cmd(&dir)
        .args(["ask", "--seed", "5", "tell me a joke"])
        .output()
        .unwrap();
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn test_ask_blank_input_fails() {
    let dir = tempdir().unwrap();
    chatbot_cmd(&dir)
        .args(["ask", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("the input is empty"));
}

#[test]
fn test_ask_requires_text() {
    let dir = tempdir().unwrap();
    chatbot_cmd(&dir).arg("ask").assert().failure();
}
