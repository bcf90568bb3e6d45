//! Task-creation utterances → [`TaskDraft`].
//!
//! The pipeline threads the lowercased text through each stage. Classification
//! stages read the text; the date stage returns the text with its phrases
//! removed, and the name is cleaned up from what is left.

use std::sync::{Arc, LazyLock};

use chrono::{Local, NaiveDateTime};
use regex::Regex;
use tracing::debug;
use vox_core::{PLACEHOLDER_NAME, TaskDraft};

use crate::datetime::extract_due_date;
use crate::matcher::CompiledLexicon;
use crate::text::{capitalize_first, collapse_whitespace, mask_reminder_clauses, remove_phrase};

static FILLER_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:add|create|new|make)\s+(?:a\s+)?(?:task\s+)?(?:to\s+)?")
        .expect("Invalid regex")
});
static POLITE_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+(?:please|thanks|thank you)$").expect("Invalid regex"));
static REMIND_ME_MINUTES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"remind me (\d+) minutes before").expect("Invalid regex"));

/// Turns a task-creation sentence into a draft.
#[derive(Debug, Clone, Default)]
pub struct UtteranceInterpreter {
    lexicon: Arc<CompiledLexicon>,
}

impl UtteranceInterpreter {
    #[must_use]
    pub const fn new(lexicon: Arc<CompiledLexicon>) -> Self {
        Self { lexicon }
    }

    /// Interpret `text` relative to the local clock.
    #[must_use]
    pub fn interpret(&self, text: &str) -> TaskDraft {
        self.interpret_at(text, Local::now().naive_local())
    }

    /// Interpret `text` with `now` as the reference for relative dates.
    #[must_use]
    pub fn interpret_at(&self, text: &str, now: NaiveDateTime) -> TaskDraft {
        let lower = text.to_lowercase();

        let labelled = mask_reminder_clauses(&lower);
        let priority = self.lexicon.priority_in(&labelled).unwrap_or_default();
        let category = self.lexicon.category_in(&labelled);

        let due = extract_due_date(&self.lexicon, &lower, now);
        let reminder_minutes = self.extract_reminder(&lower);
        let name = self.extract_name(&due.remaining);

        debug!(
            %priority,
            category = ?category,
            due_date = ?due.value,
            reminder_minutes = ?reminder_minutes,
            name = %name,
            "interpreted task utterance"
        );

        TaskDraft {
            is_complete: TaskDraft::name_is_complete(&name),
            name,
            description: None,
            due_date: due.value,
            priority,
            category,
            reminder_minutes,
        }
    }

    fn extract_reminder(&self, text: &str) -> Option<u32> {
        self.lexicon.reminder_in(text).or_else(|| {
            REMIND_ME_MINUTES
                .captures(text)
                .and_then(|caps| caps[1].parse().ok())
        })
    }

    fn extract_name(&self, remaining: &str) -> String {
        let without_prefix = FILLER_PREFIX.replace(remaining.trim(), "");
        let mut name = POLITE_SUFFIX.replace(&without_prefix, "").into_owned();

        for phrase in self.lexicon.label_phrases() {
            name = remove_phrase(&name, phrase);
        }
        for phrase in self.lexicon.reminder_phrases() {
            name = name.replace(&format!("remind me {phrase} before"), "");
        }

        let name = collapse_whitespace(&name);
        if name.is_empty() {
            PLACEHOLDER_NAME.to_string()
        } else {
            capitalize_first(&name)
        }
    }
}
