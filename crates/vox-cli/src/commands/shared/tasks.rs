//! The JSON task file read by `filter` and extended by `add`: one array of
//! task records.

use std::fs;
use std::path::Path;

use anyhow::Context;
use vox_core::TaskRecord;

pub fn read_tasks(path: &Path) -> anyhow::Result<Vec<TaskRecord>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read task file {}", path.display()))?;
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_json::from_str(&raw)
        .with_context(|| format!("task file {} is not a JSON array of tasks", path.display()))
}

/// Like [`read_tasks`], but a missing file is an empty list.
pub fn read_tasks_or_empty(path: &Path) -> anyhow::Result<Vec<TaskRecord>> {
    if path.exists() {
        read_tasks(path)
    } else {
        Ok(Vec::new())
    }
}

pub fn write_tasks(path: &Path, tasks: &[TaskRecord]) -> anyhow::Result<()> {
    let mut body = serde_json::to_string_pretty(tasks)?;
    body.push('\n');
    fs::write(path, body).with_context(|| format!("failed to write task file {}", path.display()))
}

/// One past the highest id in use.
pub fn next_id(tasks: &[TaskRecord]) -> u64 {
    tasks
        .iter()
        .map(|task| task.id)
        .max()
        .map_or(1, |id| id.saturating_add(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::shared::testing::{record, write_json};

    #[test]
    fn roundtrips_through_disk() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("tasks.json");
        let tasks = vec![record(1, "Call mom"), record(4, "Pay rent")];

        write_tasks(&path, &tasks).expect("write");
        assert_eq!(read_tasks(&path).expect("read"), tasks);
    }

    #[test]
    fn missing_file_is_empty_only_when_allowed() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("absent.json");
        assert!(read_tasks(&path).is_err());
        assert!(read_tasks_or_empty(&path).expect("empty").is_empty());
    }

    #[test]
    fn blank_file_is_empty() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = write_json(&dir, "  \n");
        assert!(read_tasks(&path).expect("read").is_empty());
    }

    #[test]
    fn malformed_file_names_the_path() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = write_json(&dir, r#"{"id": 1}"#);
        let err = read_tasks(&path).expect_err("should fail");
        assert!(err.to_string().contains("tasks.json"));
    }

    #[test]
    fn next_id_skips_past_the_highest() {
        assert_eq!(next_id(&[]), 1);
        assert_eq!(next_id(&[record(3, "a"), record(7, "b")]), 8);
    }
}
