//! Fixtures shared by command tests.

use std::path::PathBuf;

use chrono::{NaiveDate, NaiveDateTime};
use tempfile::TempDir;
use vox_config::VoxConfig;
use vox_core::{Priority, TaskRecord};

use crate::cli::{ColorMode, GlobalFlags, OutputFormat};
use crate::context::AppContext;

pub fn now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 10, 14)
        .and_then(|d| d.and_hms_opt(8, 30, 0))
        .unwrap()
}

pub fn ctx() -> AppContext {
    AppContext::init(VoxConfig::default(), Some(now())).expect("default context")
}

pub fn flags() -> GlobalFlags {
    GlobalFlags {
        format: OutputFormat::Json,
        limit: None,
        quiet: true,
        color: ColorMode::Never,
        now: Some(now()),
    }
}

pub fn record(id: u64, name: &str) -> TaskRecord {
    TaskRecord {
        id,
        name: name.into(),
        description: None,
        due_date: None,
        priority: Priority::Medium,
        category: "Personal".into(),
        reminder_minutes: None,
        dependency: None,
        created_at: now(),
    }
}

pub fn write_json(dir: &TempDir, body: &str) -> PathBuf {
    let path = dir.path().join("tasks.json");
    std::fs::write(&path, body).expect("write fixture");
    path
}
