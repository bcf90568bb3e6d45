//! Text helpers shared by both interpreters.
//!
//! All helpers expect already-lowercased input. A phrase "occurs" in a text
//! when it appears as a substring whose first and last characters are not glued
//! to a neighbouring word character.

use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

static MULTI_SPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s{2,}").expect("Invalid regex"));
static REMINDER_CLAUSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bremind me\b.*?\bbefore\b").expect("Invalid regex"));

fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

fn edge_is_bounded(text: &str, range: &Range<usize>, phrase: &str) -> bool {
    let starts_word = phrase.chars().next().is_some_and(is_word_char);
    let ends_word = phrase.chars().next_back().is_some_and(is_word_char);

    let before_ok = !starts_word
        || !text[..range.start]
            .chars()
            .next_back()
            .is_some_and(is_word_char);
    let after_ok = !ends_word || !text[range.end..].chars().next().is_some_and(is_word_char);
    before_ok && after_ok
}

/// Byte ranges of every bounded, non-overlapping occurrence of `phrase`.
pub fn phrase_ranges(text: &str, phrase: &str) -> Vec<Range<usize>> {
    if phrase.is_empty() {
        return Vec::new();
    }
    text.match_indices(phrase)
        .map(|(start, matched)| start..start + matched.len())
        .filter(|range| edge_is_bounded(text, range, phrase))
        .collect()
}

#[must_use]
pub fn contains_phrase(text: &str, phrase: &str) -> bool {
    !phrase_ranges(text, phrase).is_empty()
}

/// Remove every bounded occurrence of `phrase`, leaving the surrounding
/// whitespace for [`collapse_whitespace`] to tidy up.
#[must_use]
pub fn remove_phrase(text: &str, phrase: &str) -> String {
    let ranges = phrase_ranges(text, phrase);
    if ranges.is_empty() {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len());
    let mut cursor = 0;
    for range in ranges {
        out.push_str(&text[cursor..range.start]);
        cursor = range.end;
    }
    out.push_str(&text[cursor..]);
    out
}

/// Collapse runs of two or more whitespace characters into one space, then trim.
#[must_use]
pub fn collapse_whitespace(text: &str) -> String {
    MULTI_SPACE.replace_all(text, " ").trim().to_string()
}

/// Uppercase the first character and leave the rest untouched.
#[must_use]
pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

/// Blank out `remind me … before` clauses.
///
/// The pronoun in the clause is not about the task itself, so label
/// classification runs on the masked text.
#[must_use]
pub fn mask_reminder_clauses(text: &str) -> String {
    REMINDER_CLAUSE.replace_all(text, " ").into_owned()
}
