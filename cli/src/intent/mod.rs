//! # ChatBot Intent Classification
//!
//! File: cli/src/intent/mod.rs
//!
//! ## Overview
//!
//! The pattern-matching core of the chat responder. One line of user text
//! goes in, exactly one category is selected by ordered substring matching,
//! and one reply from that category's pool comes back out.
//!
//! ## Architecture
//!
//! - `category`: the `Category` enum, the ordered trigger table and the
//!   response pools.
//! - `classifier`: normalization, first-match-wins dispatch and reply
//!   selection with an injected random source.
//! - `name`: extracts a name from self-introductions.
//!
//! Nothing in this module keeps state between calls. Callers that want
//! reproducible replies pass a seeded generator.
//!
pub mod category;
pub mod classifier;
pub mod name;

pub use category::Category;
pub use classifier::{classify_and_respond, respond};
