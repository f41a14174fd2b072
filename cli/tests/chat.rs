//! # ChatBot CLI Chat Integration Tests
//!
//! File: cli/tests/chat.rs
//!
//! ## Overview
//!
//! Integration tests for `chatbot chat`. Input is piped through stdin and
//! `--no-typing` keeps the replies instant.
//!

mod common;
use common::*;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_chat_conversation_until_quit() {
    let dir = tempdir().unwrap();
    chatbot_cmd(&dir)
        .args(["chat", "--no-typing", "--seed", "1"])
        .write_stdin("\ncall me bob\nquit\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("I'm listening... please say something!")
                .and(predicate::str::contains(
                    "ChatBot: Nice to meet you, Bob! That's a lovely name.",
                ))
                .and(predicate::str::contains("Thanks for chatting!")),
        );
}

#[test]
fn test_chat_end_of_input() {
    let dir = tempdir().unwrap();
    chatbot_cmd(&dir)
        .args(["chat", "--no-typing"])
        .write_stdin("what can you do\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("I can chat with you, answer basic questions")
                .and(predicate::str::contains("Goodbye!")),
        );
}

#[test]
fn test_chat_stats_flag() {
    let dir = tempdir().unwrap();
    chatbot_cmd(&dir)
        .args(["chat", "--no-typing", "--stats"])
        .write_stdin("hello\nhey\nso sleepy\nstop\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Session stats: 3 turns")
                .and(predicate::str::is_match(r"greeting\s+2").unwrap())
                .and(predicate::str::is_match(r"tiredness\s+1").unwrap()),
        );
}

#[test]
fn test_chat_uses_configured_bot_name() {
    let dir = tempdir().unwrap();
    write_config(&dir, "[chat]\nbot_name = \"Robo\"\nencouragement_interval = 0\n");
    chatbot_cmd(&dir)
        .args(["chat", "--no-typing"])
        .write_stdin("who are you\nexit\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("WELCOME TO ROBO!")
                .and(predicate::str::contains("Robo: I'm ChatBot, your friendly AI assistant!")),
        );
}

#[test]
fn test_chat_writes_transcript() {
    let dir = tempdir().unwrap();
    let log = dir.path().join("logs").join("chat.log");
    chatbot_cmd(&dir)
        .args(["chat", "--no-typing", "--transcript"])
        .arg(&log)
        .write_stdin("hello\nquit\n")
        .assert()
        .success();

    let content = fs::read_to_string(&log).unwrap();
    assert!(content.starts_with("CHATBOT CONVERSATION TRANSCRIPT"));
    assert!(content.contains("] You: hello\n"));
    assert!(content.contains("] ChatBot (greeting): "));
    assert!(content.contains("--- Session ended: 1 turns ---"));
}

#[test]
fn test_chat_transcript_from_config() {
    let dir = tempdir().unwrap();
    let log = dir.path().join("configured.log");
    write_config(
        &dir,
        &format!("[transcript]\npath = {:?}\n", log.to_string_lossy()),
    );
    chatbot_cmd(&dir)
        .args(["chat", "--no-typing"])
        .write_stdin("pizza\nquit\n")
        .assert()
        .success();

    let content = fs::read_to_string(&log).unwrap();
    assert!(content.contains("] ChatBot (food): "));
}

#[test]
fn test_chat_ignores_user_config_when_config_file_is_named() {
    let dir = tempdir().unwrap();
    let user_dir = dir.path().join("xdg").join("chatbot");
    fs::create_dir_all(&user_dir).unwrap();
    fs::write(user_dir.join("config.toml"), "[chat]\nbot_name = \"Robo\"\n").unwrap();

    chatbot_cmd(&dir)
        .args(["chat", "--no-typing"])
        .env("XDG_CONFIG_HOME", dir.path().join("xdg"))
        .write_stdin("call me bob\nquit\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("ChatBot: Nice to meet you, Bob!")
                .and(predicate::str::contains("Robo").not()),
        );
}

#[cfg(unix)]
#[test]
fn test_chat_ctrl_c_says_goodbye_and_closes_transcript() {
    use std::io::{Read, Write};
    use std::process::{Command as StdCommand, Stdio};

    let dir = tempdir().unwrap();
    let log = dir.path().join("chat.log");
    let mut child = chatbot_process(&dir)
        .args(["chat", "--no-typing", "--transcript"])
        .arg(&log)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .unwrap();

    // Stdin stays open for the whole test so only the signal can end the chat.
    let mut stdin = child.stdin.take().unwrap();
    let mut stdout = child.stdout.take().unwrap();
    stdin.write_all(b"hello\n").unwrap();

    // Wait for the reply and the next prompt before interrupting.
    let mut seen = Vec::new();
    let mut buf = [0u8; 256];
    while String::from_utf8_lossy(&seen).matches("You: ").count() < 2 {
        let n = stdout.read(&mut buf).unwrap();
        assert!(n > 0, "chat ended early: {}", String::from_utf8_lossy(&seen));
        seen.extend_from_slice(&buf[..n]);
    }

    let killed = StdCommand::new("kill")
        .args(["-INT", &child.id().to_string()])
        .status()
        .unwrap();
    assert!(killed.success());

    stdout.read_to_end(&mut seen).unwrap();
    let status = child.wait().unwrap();
    drop(stdin);

    let output = String::from_utf8_lossy(&seen);
    assert!(status.success(), "exit status: {:?}", status);
    assert!(output.contains("ChatBot: Oops! Looks like you pressed Ctrl+C. Goodbye!"));

    let content = fs::read_to_string(&log).unwrap();
    assert!(content.contains("] You: hello\n"));
    assert!(content.contains("--- Session ended: 1 turns ---"));
}
