use chrono::NaiveDateTime;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::draft::TaskDraft;
use crate::enums::{Category, Priority};

/// A stored task, as kept by the task-list collaborator.
///
/// `category` is a free label: besides the fixed categories the app lets the
/// user type a custom one when choosing `Other`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TaskRecord {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub due_date: Option<NaiveDateTime>,
    #[serde(default)]
    pub priority: Priority,
    pub category: String,
    #[serde(default)]
    pub reminder_minutes: Option<u32>,
    #[serde(default)]
    pub dependency: Option<String>,
    pub created_at: NaiveDateTime,
}

impl TaskRecord {
    /// Category used when a draft carries none (the form default).
    pub const DEFAULT_CATEGORY: Category = Category::Personal;

    #[must_use]
    pub fn from_draft(id: u64, draft: &TaskDraft, created_at: NaiveDateTime) -> Self {
        Self {
            id,
            name: draft.name.clone(),
            description: draft.description.clone(),
            due_date: draft.due_date,
            priority: draft.priority,
            category: draft
                .category
                .unwrap_or(Self::DEFAULT_CATEGORY)
                .label()
                .to_string(),
            reminder_minutes: draft.reminder_minutes,
            dependency: None,
            created_at,
        }
    }
}
