//! # ChatBot Name Extraction
//!
//! File: cli/src/intent/name.rs
//!
//! ## Overview
//!
//! Pulls a first name out of a self-introduction such as "my name is alice"
//! or "call me bob". Used by the classifier when an input lands in the
//! `NameIntroduction` category.
//!
//! The lead-in phrases are tried in list order, not by where they appear in
//! the text: for "i am here, my name is bob" the result is `Bob`, because
//! `"my name is "` is checked before `"i am "`.
//!

/// Phrases that introduce a name, in the order they are tried.
pub const LEAD_IN_PHRASES: &[&str] = &["my name is ", "i am ", "i'm ", "call me "];

/// Extracts the name following the first matching lead-in phrase.
///
/// The input is lowercased, the first phrase from [`LEAD_IN_PHRASES`] that
/// occurs anywhere in it is located, and the first whitespace-delimited token
/// after it becomes the name with its first character upper-cased.
///
/// Returns `None` when no phrase occurs or nothing follows the phrase.
pub fn extract_name(input: &str) -> Option<String> {
    let lowered = input.to_lowercase();

    let start = LEAD_IN_PHRASES
        .iter()
        .find_map(|phrase| lowered.find(*phrase).map(|pos| pos + phrase.len()))?;

    let token = lowered[start..].split_whitespace().next()?;
    Some(capitalize_first(token))
}

fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_after_my_name_is() {
        assert_eq!(
            extract_name("my name is Alice and I like cats"),
            Some("Alice".to_string())
        );
    }

    #[test]
    fn test_phrase_without_remainder_yields_none() {
        // "i am" lacks the trailing space of the lead-in phrase.
        assert_eq!(extract_name("i am"), None);
        assert_eq!(extract_name("call me    "), None);
    }

    #[test]
    fn test_no_phrase_yields_none() {
        assert_eq!(extract_name("xyzzy plugh"), None);
    }

    #[test]
    fn test_list_order_beats_text_position() {
        assert_eq!(
            extract_name("i am here, my name is bob"),
            Some("Bob".to_string())
        );
    }

    #[test]
    fn test_input_is_lowercased_first() {
        assert_eq!(extract_name("I'M SAM"), Some("Sam".to_string()));
        assert_eq!(extract_name("Call Me Ishmael."), Some("Ishmael.".to_string()));
    }

    #[test]
    fn test_extra_whitespace_after_phrase_is_skipped() {
        assert_eq!(extract_name("i am    \t zoe"), Some("Zoe".to_string()));
    }

    #[test]
    fn test_capitalize_first_handles_non_ascii() {
        assert_eq!(capitalize_first("élodie"), "Élodie");
        assert_eq!(capitalize_first(""), "");
    }
}
