//! # ChatBot Intent Categories
//!
//! File: cli/src/intent/category.rs
//!
//! ## Overview
//!
//! Defines the closed set of categories an input line can fall into, the
//! ordered trigger table used to pick one, and the response pool attached to
//! each category.
//!
//! ## Architecture
//!
//! - `Category`: the enumerated tag. Exactly one is chosen per input.
//! - `TRIGGER_TABLE`: `(Category, triggers)` pairs in priority order. The
//!   classifier walks it front to back and stops at the first hit, so the
//!   position of a row in this table *is* its priority.
//! - `Category::responses`: the candidate replies for a category. Every pool
//!   is non-empty; single-entry pools make the reply deterministic.
//!
//! `Unmatched` never appears in the trigger table. It is what the classifier
//! falls back to when no row matches.
//!
use std::fmt;

/// A mutually exclusive classification bucket for one line of user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Greeting,
    WellBeing,
    IdentityQuery,
    NameIntroduction,
    AgeQuery,
    HelpRequest,
    Compliment,
    Sadness,
    Happiness,
    Tiredness,
    Weather,
    TimeQuery,
    Food,
    Technology,
    JokeRequest,
    CapabilityQuery,
    Farewell,
    Unmatched,
}

/// Ordered trigger table. Rows are evaluated top to bottom; first hit wins.
pub const TRIGGER_TABLE: &[(Category, &[&str])] = &[
    (Category::Greeting, &["hello", "hi", "hey", "greetings"]),
    (
        Category::WellBeing,
        &["how are you", "how do you do", "how's it going"],
    ),
    (
        Category::IdentityQuery,
        &["what is your name", "what's your name", "who are you"],
    ),
    (
        Category::NameIntroduction,
        &["my name is", "i am", "i'm", "call me"],
    ),
    (Category::AgeQuery, &["how old", "your age", "age are you"]),
    (Category::HelpRequest, &["help", "assist", "support"]),
    (
        Category::Compliment,
        &["good", "great", "awesome", "amazing", "cool", "nice"],
    ),
    (Category::Sadness, &["sad", "unhappy", "depressed", "down"]),
    (
        Category::Happiness,
        &["happy", "excited", "great", "wonderful"],
    ),
    (Category::Tiredness, &["tired", "sleepy", "exhausted"]),
    (
        Category::Weather,
        &["weather", "rain", "sunny", "cold", "hot"],
    ),
    (Category::TimeQuery, &["time", "date", "day"]),
    (
        Category::Food,
        &["food", "eat", "hungry", "pizza", "burger"],
    ),
    (
        Category::Technology,
        &["python", "programming", "code", "computer"],
    ),
    (Category::JokeRequest, &["joke", "funny", "laugh"]),
    (
        Category::CapabilityQuery,
        &["what can you do", "what do you do", "your abilities"],
    ),
    (
        Category::Farewell,
        &["bye", "goodbye", "see you", "farewell", "exit", "quit"],
    ),
];

/// Reply used for `NameIntroduction` when a name was extracted.
/// `{name}` is replaced with the extracted name.
pub const NAME_TEMPLATE: &str = "Nice to meet you, {name}! That's a lovely name.";

const GREETING_REPLIES: &[&str] = &[
    "Hi there! How can I help you today?",
    "Hello! Nice to meet you!",
    "Hey! What's up?",
    "Greetings! How are you doing?",
    "Hi! I'm excited to chat with you!",
];

const WELL_BEING_REPLIES: &[&str] = &[
    "I'm doing great, thanks for asking! How about you?",
    "I'm fine, thanks! Having a wonderful day chatting with people.",
    "Fantastic! I love helping people. How are you feeling?",
    "I'm doing well! Ready to assist you with anything you need.",
    "Great! I'm here and ready to chat. How's your day going?",
];

const COMPLIMENT_REPLIES: &[&str] = &[
    "Thank you! That's very kind of you to say.",
    "I appreciate the compliment! You're pretty awesome too!",
    "Thanks! I'm glad you think so. You made my day!",
    "That's so nice! I try my best to be helpful.",
    "Thank you! You're making me blush (if I could)!",
];

const JOKES: &[&str] = &[
    "Why don't scientists trust atoms? Because they make up everything!",
    "Why did the programmer quit his job? He didn't get arrays! (a raise)",
    "What do you call a bear with no teeth? A gummy bear!",
    "Why don't eggs tell jokes? They'd crack each other up!",
    "What's a computer's favorite snack? Microchips!",
];

const FAREWELL_REPLIES: &[&str] = &[
    "Goodbye! It was great chatting with you!",
    "See you later! Have a wonderful day!",
    "Farewell! Thanks for the lovely conversation!",
    "Bye! Hope to chat with you again soon!",
    "Take care! It was a pleasure talking with you!",
];

const UNMATCHED_REPLIES: &[&str] = &[
    "That's interesting! Tell me more about that.",
    "I'm not sure I understand, but I'm listening!",
    "Could you rephrase that? I want to make sure I understand.",
    "Hmm, that's something new for me. Can you explain more?",
    "I'm still learning! Could you try asking that differently?",
    "That sounds fascinating! I'd love to learn more about it.",
    "I'm not quite sure how to respond to that, but I'm here to chat!",
];

impl Category {
    /// Every category in priority order, with `Unmatched` last.
    pub const ALL: [Category; 18] = [
        Category::Greeting,
        Category::WellBeing,
        Category::IdentityQuery,
        Category::NameIntroduction,
        Category::AgeQuery,
        Category::HelpRequest,
        Category::Compliment,
        Category::Sadness,
        Category::Happiness,
        Category::Tiredness,
        Category::Weather,
        Category::TimeQuery,
        Category::Food,
        Category::Technology,
        Category::JokeRequest,
        Category::CapabilityQuery,
        Category::Farewell,
        Category::Unmatched,
    ];

    /// Trigger phrases for this category. Empty for `Unmatched`.
    pub fn triggers(self) -> &'static [&'static str] {
        TRIGGER_TABLE
            .iter()
            .find(|(category, _)| *category == self)
            .map(|(_, triggers)| *triggers)
            .unwrap_or(&[])
    }

    /// Candidate replies for this category.
    ///
    /// For `NameIntroduction` this is the generic acknowledgement; the
    /// personalised reply is built from [`NAME_TEMPLATE`].
    pub fn responses(self) -> &'static [&'static str] {
        match self {
            Category::Greeting => GREETING_REPLIES,
            Category::WellBeing => WELL_BEING_REPLIES,
            Category::IdentityQuery => {
                &["I'm ChatBot, your friendly AI assistant! What's your name?"]
            }
            Category::NameIntroduction => &["Nice to meet you! Thanks for telling me your name."],
            Category::AgeQuery => &[
                "I don't have an age like humans do, but I was created recently! How old are you?",
            ],
            Category::HelpRequest => &[
                "I'm here to help! You can ask me about myself, chat casually, or just say hello. What would you like to know?",
            ],
            Category::Compliment => COMPLIMENT_REPLIES,
            Category::Sadness => &[
                "I'm sorry to hear you're feeling down. Sometimes talking helps. Want to share what's bothering you?",
            ],
            Category::Happiness => &[
                "That's fantastic! I love hearing when people are happy. What's making you feel so good?",
            ],
            Category::Tiredness => &[
                "You sound tired! Make sure to get some rest. Sleep is important for your health.",
            ],
            Category::Weather => &[
                "I can't check the actual weather, but I hope it's nice where you are! What's the weather like?",
            ],
            Category::TimeQuery => &[
                "I don't have access to real-time information, but I hope you're having a great day whenever it is!",
            ],
            Category::Food => {
                &["I don't eat, but I love hearing about food! What's your favorite dish?"]
            }
            Category::Technology => &[
                "I love talking about technology! Python is amazing for programming. Are you learning to code?",
            ],
            Category::JokeRequest => JOKES,
            Category::CapabilityQuery => &[
                "I can chat with you, answer basic questions, tell jokes, and try to be helpful! I'm still learning though.",
            ],
            Category::Farewell => FAREWELL_REPLIES,
            Category::Unmatched => UNMATCHED_REPLIES,
        }
    }

    /// Snake-case label used in logs, transcripts and `--show-category` output.
    pub fn label(self) -> &'static str {
        match self {
            Category::Greeting => "greeting",
            Category::WellBeing => "well_being",
            Category::IdentityQuery => "identity_query",
            Category::NameIntroduction => "name_introduction",
            Category::AgeQuery => "age_query",
            Category::HelpRequest => "help_request",
            Category::Compliment => "compliment",
            Category::Sadness => "sadness",
            Category::Happiness => "happiness",
            Category::Tiredness => "tiredness",
            Category::Weather => "weather",
            Category::TimeQuery => "time_query",
            Category::Food => "food",
            Category::Technology => "technology",
            Category::JokeRequest => "joke_request",
            Category::CapabilityQuery => "capability_query",
            Category::Farewell => "farewell",
            Category::Unmatched => "unmatched",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_follows_priority_order() {
        let table_order: Vec<Category> = TRIGGER_TABLE.iter().map(|(c, _)| *c).collect();
        assert_eq!(table_order, &Category::ALL[..Category::ALL.len() - 1]);
    }

    #[test]
    fn test_every_pool_is_non_empty() {
        for category in Category::ALL {
            assert!(
                !category.responses().is_empty(),
                "{} has an empty response pool",
                category
            );
        }
    }

    #[test]
    fn test_pool_sizes() {
        assert_eq!(Category::Greeting.responses().len(), 5);
        assert_eq!(Category::JokeRequest.responses().len(), 5);
        assert_eq!(Category::Unmatched.responses().len(), 7);
        assert_eq!(Category::Weather.responses().len(), 1);
    }

    #[test]
    fn test_unmatched_has_no_triggers() {
        assert!(Category::Unmatched.triggers().is_empty());
        assert_eq!(
            Category::Farewell.triggers(),
            &["bye", "goodbye", "see you", "farewell", "exit", "quit"]
        );
    }

    #[test]
    fn test_display_uses_label() {
        assert_eq!(Category::WellBeing.to_string(), "well_being");
        assert_eq!(Category::Unmatched.to_string(), "unmatched");
    }
}
