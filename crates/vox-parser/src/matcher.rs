//! First-match-wins lookups over a validated, lowercased lexicon.

use vox_core::lexicon::Lexicon;
use vox_core::{Category, Priority};

use crate::error::ParserError;
use crate::text::contains_phrase;

/// A relative-day phrase that matched, with its day offset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelativeMatch<'a> {
    pub phrase: &'a str,
    pub days: i64,
}

/// A lexicon prepared for matching: phrases lowercased, order preserved.
#[derive(Debug, Clone)]
pub struct CompiledLexicon {
    priority: Vec<(Priority, Vec<String>)>,
    category: Vec<(Category, Vec<String>)>,
    relative_dates: Vec<(String, i64)>,
    reminders: Vec<(String, u32)>,
}

impl Default for CompiledLexicon {
    fn default() -> Self {
        Self::from_valid(&Lexicon::builtin())
    }
}

impl CompiledLexicon {
    /// Validate `lexicon` and prepare it for matching.
    pub fn compile(lexicon: &Lexicon) -> Result<Self, ParserError> {
        lexicon.validate()?;
        Ok(Self::from_valid(lexicon))
    }

    /// Build without validating; callers outside tests go through [`Self::compile`].
    pub(crate) fn from_valid(lexicon: &Lexicon) -> Self {
        Self {
            priority: lexicon
                .priority
                .iter()
                .map(|entry| (entry.priority, lowercase_all(&entry.triggers)))
                .collect(),
            category: lexicon
                .category
                .iter()
                .map(|entry| (entry.category, lowercase_all(&entry.triggers)))
                .collect(),
            relative_dates: lexicon
                .relative_dates
                .iter()
                .map(|entry| (normalize(&entry.phrase), entry.days))
                .collect(),
            reminders: lexicon
                .reminders
                .iter()
                .map(|entry| (normalize(&entry.phrase), entry.minutes))
                .collect(),
        }
    }

    /// First priority whose triggers occur in `text`.
    #[must_use]
    pub fn priority_in(&self, text: &str) -> Option<Priority> {
        first_label(&self.priority, text)
    }

    #[must_use]
    pub fn category_in(&self, text: &str) -> Option<Category> {
        first_label(&self.category, text)
    }

    #[must_use]
    pub fn relative_date_in(&self, text: &str) -> Option<RelativeMatch<'_>> {
        self.relative_dates
            .iter()
            .find(|(phrase, _)| contains_phrase(text, phrase))
            .map(|(phrase, days)| RelativeMatch {
                phrase: phrase.as_str(),
                days: *days,
            })
    }

    #[must_use]
    pub fn reminder_in(&self, text: &str) -> Option<u32> {
        self.reminders
            .iter()
            .find(|(phrase, _)| contains_phrase(text, phrase))
            .map(|(_, minutes)| *minutes)
    }

    /// Priority triggers followed by category triggers, in declaration order.
    pub fn label_phrases(&self) -> impl Iterator<Item = &str> {
        self.priority
            .iter()
            .flat_map(|(_, triggers)| triggers.iter())
            .chain(self.category.iter().flat_map(|(_, triggers)| triggers.iter()))
            .map(String::as_str)
    }

    pub fn reminder_phrases(&self) -> impl Iterator<Item = &str> {
        self.reminders.iter().map(|(phrase, _)| phrase.as_str())
    }
}

fn first_label<L: Copy>(table: &[(L, Vec<String>)], text: &str) -> Option<L> {
    table
        .iter()
        .find(|(_, triggers)| triggers.iter().any(|trigger| contains_phrase(text, trigger)))
        .map(|(label, _)| *label)
}

fn normalize(phrase: &str) -> String {
    phrase.trim().to_lowercase()
}

fn lowercase_all(phrases: &[String]) -> Vec<String> {
    phrases.iter().map(|phrase| normalize(phrase)).collect()
}
