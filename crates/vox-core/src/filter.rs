use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{Category, Priority};
use crate::task::TaskRecord;

/// Criteria extracted from a query. Every field is optional and absent
/// fields do not constrain anything.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TaskFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    /// Calendar day, serialized as `yyyy-MM-dd`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
}

impl TaskFilter {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.priority.is_none() && self.category.is_none() && self.date.is_none()
    }

    /// Whether `task` satisfies every present criterion.
    ///
    /// A task with no due date is not excluded by a date criterion.
    #[must_use]
    pub fn matches(&self, task: &TaskRecord) -> bool {
        if let Some(priority) = self.priority {
            if task.priority != priority {
                return false;
            }
        }
        if let Some(category) = self.category {
            if !task.category.eq_ignore_ascii_case(category.label()) {
                return false;
            }
        }
        if let (Some(date), Some(due)) = (self.date, task.due_date) {
            if due.date() != date {
                return false;
            }
        }
        true
    }
}

/// Result of interpreting a query utterance.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum FilterSpec {
    /// Narrow the task list.
    Filter { filter: TaskFilter },
    /// The user said how many minutes they have.
    TimeBased { time_available: u32 },
    /// Nothing recognizable; the caller tells the user.
    Unknown,
}

impl FilterSpec {
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Filter { .. } => "filter",
            Self::TimeBased { .. } => "time-based",
            Self::Unknown => "unknown",
        }
    }

    #[must_use]
    pub const fn filter(&self) -> Option<&TaskFilter> {
        match self {
            Self::Filter { filter } => Some(filter),
            Self::TimeBased { .. } | Self::Unknown => None,
        }
    }
}
