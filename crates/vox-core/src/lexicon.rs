//! Keyword tables consulted by the interpreters.
//!
//! A lexicon is plain data: ordered entries mapping a canonical label (or a
//! numeric offset) to the phrases that select it. Entry order is the tie-break
//! rule, the first entry with a matching phrase wins. Matching itself lives in
//! `vox-parser`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{Category, Priority};
use crate::errors::CoreError;

/// Phrases that select a priority level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PriorityEntry {
    pub priority: Priority,
    pub triggers: Vec<String>,
}

/// Phrases that select a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CategoryEntry {
    pub category: Category,
    pub triggers: Vec<String>,
}

/// A relative-day phrase and its offset from today.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct RelativeDateEntry {
    pub phrase: String,
    pub days: i64,
}

/// A reminder lead-time phrase and its value in minutes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ReminderEntry {
    pub phrase: String,
    pub minutes: u32,
}

/// The four keyword tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Lexicon {
    #[serde(default = "builtin_priority")]
    pub priority: Vec<PriorityEntry>,
    #[serde(default = "builtin_category")]
    pub category: Vec<CategoryEntry>,
    #[serde(default = "builtin_relative_dates")]
    pub relative_dates: Vec<RelativeDateEntry>,
    #[serde(default = "builtin_reminders")]
    pub reminders: Vec<ReminderEntry>,
}

/// Largest relative-date offset, in either direction (about a century).
pub const MAX_RELATIVE_DAYS: i64 = 36_500;

impl Default for Lexicon {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Lexicon {
    /// The English tables shipped with voxtask.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            priority: builtin_priority(),
            category: builtin_category(),
            relative_dates: builtin_relative_dates(),
            reminders: builtin_reminders(),
        }
    }

    /// Reject tables that would match everything or nothing.
    ///
    /// An empty phrase is a substring of every input, so it would make its
    /// label win unconditionally.
    pub fn validate(&self) -> Result<(), CoreError> {
        for entry in &self.priority {
            check_triggers(&format!("priority.{}", entry.priority), &entry.triggers)?;
        }
        for entry in &self.category {
            check_triggers(&format!("category.{}", entry.category), &entry.triggers)?;
        }
        for entry in &self.relative_dates {
            check_phrase("relative_dates", &entry.phrase)?;
            if !(-MAX_RELATIVE_DAYS..=MAX_RELATIVE_DAYS).contains(&entry.days) {
                return Err(CoreError::Validation(format!(
                    "relative_dates '{}' offset {} is beyond {MAX_RELATIVE_DAYS} days",
                    entry.phrase, entry.days
                )));
            }
        }
        for entry in &self.reminders {
            check_phrase("reminders", &entry.phrase)?;
        }
        Ok(())
    }
}

fn check_triggers(section: &str, triggers: &[String]) -> Result<(), CoreError> {
    if triggers.is_empty() {
        return Err(CoreError::Validation(format!(
            "{section} has no trigger phrases"
        )));
    }
    triggers
        .iter()
        .try_for_each(|trigger| check_phrase(section, trigger))
}

fn check_phrase(section: &str, phrase: &str) -> Result<(), CoreError> {
    if phrase.trim().is_empty() {
        return Err(CoreError::Validation(format!(
            "{section} contains an empty phrase"
        )));
    }
    Ok(())
}

fn phrases(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|phrase| (*phrase).to_string()).collect()
}

fn builtin_priority() -> Vec<PriorityEntry> {
    vec![
        PriorityEntry {
            priority: Priority::High,
            triggers: phrases(&["urgent", "important", "asap", "critical", "high priority"]),
        },
        PriorityEntry {
            priority: Priority::Medium,
            triggers: phrases(&["medium", "moderate", "normal"]),
        },
        PriorityEntry {
            priority: Priority::Low,
            triggers: phrases(&["low", "minor", "whenever"]),
        },
    ]
}

fn builtin_category() -> Vec<CategoryEntry> {
    vec![
        CategoryEntry {
            category: Category::Family,
            triggers: phrases(&["family", "home", "kids", "spouse", "parents"]),
        },
        CategoryEntry {
            category: Category::Personal,
            triggers: phrases(&["personal", "self", "me", "myself"]),
        },
        CategoryEntry {
            category: Category::Office,
            triggers: phrases(&["work", "office", "job", "meeting", "project", "client"]),
        },
    ]
}

fn builtin_relative_dates() -> Vec<RelativeDateEntry> {
    [
        ("today", 0),
        ("tomorrow", 1),
        ("in 2 days", 2),
        ("in 3 days", 3),
        ("next week", 7),
    ]
    .into_iter()
    .map(|(phrase, days)| RelativeDateEntry {
        phrase: phrase.to_string(),
        days,
    })
    .collect()
}

fn builtin_reminders() -> Vec<ReminderEntry> {
    [5, 10, 20, 25]
        .into_iter()
        .map(|minutes| ReminderEntry {
            phrase: format!("{minutes} minutes"),
            minutes,
        })
        .collect()
}
