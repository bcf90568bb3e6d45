use chrono::{Duration, NaiveDateTime};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{Category, MissingField, Priority, RecognizedField};

/// Name given to a draft when nothing usable was left after cleanup.
pub const PLACEHOLDER_NAME: &str = "New Task";

/// A partially populated task understood from a creation utterance.
///
/// `due_date` is a local wall-clock timestamp. `description` is never filled
/// by the interpreter and is reserved for the caller.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TaskDraft {
    pub name: String,
    pub description: Option<String>,
    pub due_date: Option<NaiveDateTime>,
    pub priority: Priority,
    pub category: Option<Category>,
    pub reminder_minutes: Option<u32>,
    pub is_complete: bool,
}

impl TaskDraft {
    /// Completeness only looks at the name. A missing due date is reported by
    /// [`TaskDraft::missing_fields`] instead.
    #[must_use]
    pub fn name_is_complete(name: &str) -> bool {
        !name.is_empty() && name != PLACEHOLDER_NAME
    }

    #[must_use]
    pub fn has_placeholder_name(&self) -> bool {
        self.name == PLACEHOLDER_NAME
    }

    /// Fields the caller should prompt for before saving.
    #[must_use]
    pub fn missing_fields(&self) -> Vec<MissingField> {
        let mut missing = Vec::new();
        if !Self::name_is_complete(&self.name) {
            missing.push(MissingField::Name);
        }
        if self.due_date.is_none() {
            missing.push(MissingField::DueDate);
        }
        missing
    }

    /// Fields that came from the utterance rather than from a default.
    #[must_use]
    pub fn recognized_fields(&self) -> Vec<RecognizedField> {
        let mut recognized = Vec::new();
        if Self::name_is_complete(&self.name) {
            recognized.push(RecognizedField::Name);
        }
        if self.due_date.is_some() {
            recognized.push(RecognizedField::DueDate);
        }
        if self.priority.is_explicit() {
            recognized.push(RecognizedField::Priority);
        }
        if self.category.is_some() {
            recognized.push(RecognizedField::Category);
        }
        if self.reminder_minutes.is_some() {
            recognized.push(RecognizedField::Reminder);
        }
        recognized
    }

    /// When the reminder should fire: the due date minus the lead time.
    #[must_use]
    pub fn reminder_at(&self) -> Option<NaiveDateTime> {
        let due = self.due_date?;
        let minutes = self.reminder_minutes?;
        due.checked_sub_signed(Duration::minutes(i64::from(minutes)))
    }

    /// [`TaskDraft::reminder_at`], unless that moment is not after `now`.
    #[must_use]
    pub fn reminder_trigger(&self, now: NaiveDateTime) -> Option<NaiveDateTime> {
        self.reminder_at().filter(|at| *at > now)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    use super::*;

    fn at(hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 15)
            .and_then(|d| d.and_hms_opt(hour, minute, 0))
            .unwrap()
    }

    fn draft(name: &str) -> TaskDraft {
        TaskDraft {
            name: name.into(),
            description: None,
            due_date: None,
            priority: Priority::Medium,
            category: None,
            reminder_minutes: None,
            is_complete: TaskDraft::name_is_complete(name),
        }
    }

    #[test]
    fn placeholder_is_not_complete() {
        assert!(!TaskDraft::name_is_complete(PLACEHOLDER_NAME));
        assert!(!TaskDraft::name_is_complete(""));
        assert!(TaskDraft::name_is_complete("Call mom"));
    }

    #[test]
    fn missing_fields_reports_name_and_date() {
        let empty = draft(PLACEHOLDER_NAME);
        assert_eq!(
            empty.missing_fields(),
            vec![MissingField::Name, MissingField::DueDate]
        );

        let mut dated = draft("Call mom");
        dated.due_date = Some(at(9, 0));
        assert!(dated.missing_fields().is_empty());
        assert!(dated.is_complete);
    }

    #[test]
    fn complete_draft_can_still_miss_a_date() {
        let named = draft("Call mom");
        assert!(named.is_complete);
        assert_eq!(named.missing_fields(), vec![MissingField::DueDate]);
    }

    #[test]
    fn recognized_fields_skip_defaults() {
        let mut d = draft("Standup");
        d.priority = Priority::High;
        d.reminder_minutes = Some(10);
        assert_eq!(
            d.recognized_fields(),
            vec![
                RecognizedField::Name,
                RecognizedField::Priority,
                RecognizedField::Reminder
            ]
        );
        assert!(draft(PLACEHOLDER_NAME).recognized_fields().is_empty());
    }

    #[test]
    fn reminder_at_subtracts_lead_time() {
        let mut d = draft("Standup");
        d.due_date = Some(at(15, 0));
        d.reminder_minutes = Some(10);
        assert_eq!(d.reminder_at(), Some(at(14, 50)));
    }

    #[test]
    fn reminder_needs_both_date_and_minutes() {
        let mut d = draft("Standup");
        d.reminder_minutes = Some(10);
        assert_eq!(d.reminder_at(), None);
    }

    #[test]
    fn reminder_in_the_past_is_dropped() {
        let mut d = draft("Standup");
        d.due_date = Some(at(15, 0));
        d.reminder_minutes = Some(10);
        assert_eq!(d.reminder_trigger(at(14, 0)), Some(at(14, 50)));
        assert_eq!(d.reminder_trigger(at(14, 50)), None);
        assert_eq!(d.reminder_trigger(at(16, 0)), None);
    }
}
