//! # ChatBot Intent Classifier
//!
//! File: cli/src/intent/classifier.rs
//!
//! ## Overview
//!
//! Maps one raw line of user text to exactly one [`Category`] and picks a
//! reply for it.
//!
//! ## Architecture
//!
//! 1. **Normalize**: lowercase, then trim surrounding whitespace.
//! 2. **Classify**: walk [`TRIGGER_TABLE`] in order and stop at the first row
//!    with any trigger occurring as a substring. No row matching means
//!    `Unmatched`. Overlaps between rows are settled purely by row order.
//! 3. **Respond**: draw uniformly from the category's response pool using the
//!    caller's random source. `NameIntroduction` additionally runs
//!    [`extract_name`] and personalises the reply when a name is found.
//!
//! Classification is a pure function of the input text. The random source
//! only influences which reply from the pool is returned.
//!
//! ## Examples
//!
//! ```ignore
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let reply = respond("Hello there", &mut rng);
//! assert_eq!(reply.category, Category::Greeting);
//! ```
//!
use super::category::{Category, NAME_TEMPLATE, TRIGGER_TABLE};
use super::name::extract_name;
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::trace;

/// The outcome of one classification turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    /// The category the input was classified into.
    pub category: Category,
    /// The reply text to show the user.
    pub text: String,
    /// The extracted name, only ever set for `NameIntroduction`.
    pub name: Option<String>,
}

/// Lowercases and trims the input before any matching.
pub fn normalize(input: &str) -> String {
    input.to_lowercase().trim().to_string()
}

/// Selects the category for `input` (first-match-wins over the trigger table).
pub fn classify(input: &str) -> Category {
    let normalized = normalize(input);
    for (category, triggers) in TRIGGER_TABLE {
        if let Some(trigger) = triggers.iter().find(|t| normalized.contains(**t)) {
            trace!("Trigger '{}' selected category {}", trigger, category);
            return *category;
        }
    }
    Category::Unmatched
}

/// Classifies `input` and picks a reply using `rng` for pool selection.
pub fn respond<R: Rng + ?Sized>(input: &str, rng: &mut R) -> Reply {
    let category = classify(input);

    if category == Category::NameIntroduction {
        if let Some(name) = extract_name(input.trim()) {
            return Reply {
                category,
                text: NAME_TEMPLATE.replace("{name}", &name),
                name: Some(name),
            };
        }
    }

    let text = category
        .responses()
        .choose(rng)
        .copied()
        .unwrap_or_default();

    Reply {
        category,
        text: text.to_string(),
        name: None,
    }
}

/// One string in, one string out: the reply text for `input`.
pub fn classify_and_respond<R: Rng + ?Sized>(input: &str, rng: &mut R) -> String {
    respond(input, rng).text
}
