//! CLI response types returned as JSON by `vox` commands.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::draft::TaskDraft;
use crate::enums::{MissingField, RecognizedField};
use crate::filter::FilterSpec;
use crate::task::TaskRecord;

/// Response from `vox parse`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ParseResponse {
    pub draft: TaskDraft,
    pub missing_fields: Vec<MissingField>,
    pub recognized: Vec<RecognizedField>,
}

impl From<TaskDraft> for ParseResponse {
    fn from(draft: TaskDraft) -> Self {
        Self {
            missing_fields: draft.missing_fields(),
            recognized: draft.recognized_fields(),
            draft,
        }
    }
}

/// Response from `vox filter`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct FilterResponse {
    pub query: FilterSpec,
    pub tasks: Vec<TaskRecord>,
    pub total_matches: u32,
}
