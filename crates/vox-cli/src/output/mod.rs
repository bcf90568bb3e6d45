use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;

use table::{TableOptions, render_entity_table};

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => render_table(value, table_options()),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

fn table_options() -> TableOptions {
    let prefs = ui::prefs();
    TableOptions {
        max_width: prefs.term_width,
        color: prefs.table_color,
    }
}

fn render_table<T: Serialize>(value: &T, options: TableOptions) -> anyhow::Result<String> {
    Ok(match serde_json::to_value(value)? {
        Value::Array(items) => render_rows(&items, options),
        Value::Object(map) => {
            let rows = map
                .iter()
                .map(|(key, value)| vec![key.clone(), value_to_cell(value)])
                .collect::<Vec<_>>();
            render_entity_table(&["field", "value"], &rows, options)
        }
        scalar => render_entity_table(&["value"], &[vec![value_to_cell(&scalar)]], options),
    })
}

/// One row per array item; columns are the union of object keys.
fn render_rows(items: &[Value], options: TableOptions) -> String {
    if items.is_empty() {
        return String::from("(no tasks)");
    }

    if !items.iter().all(Value::is_object) {
        let rows = items
            .iter()
            .map(|item| vec![value_to_cell(item)])
            .collect::<Vec<_>>();
        return render_entity_table(&["value"], &rows, options);
    }

    let mut columns = Vec::<&str>::new();
    for key in items.iter().filter_map(Value::as_object).flat_map(|map| map.keys()) {
        if !columns.contains(&key.as_str()) {
            columns.push(key);
        }
    }

    let rows = items
        .iter()
        .filter_map(Value::as_object)
        .map(|map| {
            columns
                .iter()
                .map(|column| map.get(*column).map_or_else(|| String::from("-"), value_to_cell))
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    render_entity_table(&columns, &rows, options)
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.clone(),
        // Trigger lists and field lists read better as plain text.
        Value::Array(items) if items.iter().all(Value::is_string) => items
            .iter()
            .filter_map(Value::as_str)
            .collect::<Vec<_>>()
            .join(", "),
        other => serde_json::to_string(other).unwrap_or_else(|_| String::from("<invalid-json>")),
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use vox_core::responses::ParseResponse;
    use vox_core::{Priority, TaskDraft, TaskRecord};

    use super::*;

    fn plain() -> TableOptions {
        TableOptions {
            max_width: None,
            color: false,
        }
    }

    fn draft() -> TaskDraft {
        TaskDraft {
            name: "Call mom".into(),
            description: None,
            due_date: None,
            priority: Priority::High,
            category: None,
            reminder_minutes: None,
            is_complete: true,
        }
    }

    fn record(id: u64, name: &str) -> TaskRecord {
        let created_at = NaiveDate::from_ymd_opt(2026, 10, 14)
            .and_then(|d| d.and_hms_opt(8, 0, 0))
            .unwrap();
        TaskRecord::from_draft(
            id,
            &TaskDraft {
                name: name.into(),
                ..draft()
            },
            created_at,
        )
    }

    #[test]
    fn json_render_is_valid_json() {
        let out = render(&draft(), OutputFormat::Json).expect("json render should work");
        let parsed: Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["name"], "Call mom");
        assert_eq!(parsed["priority"], "high");
    }

    #[test]
    fn raw_render_is_single_line_json() {
        let response = ParseResponse::from(draft());
        let out = render(&response, OutputFormat::Raw).expect("raw render should work");
        let parsed: Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["missing_fields"][0], "due_date");
        assert!(!out.contains('\n'));
    }

    #[test]
    fn object_renders_as_field_value_table() {
        let out = render_table(&draft(), plain()).expect("table render should work");
        let lines: Vec<&str> = out.lines().collect();
        assert!(lines[0].starts_with("field"));
        assert!(lines[1].chars().all(|c| c == '-'));
        assert!(lines.iter().any(|line| line.starts_with("name") && line.contains("Call mom")));
        assert!(lines.iter().any(|line| line.starts_with("due_date") && line.ends_with('-')));
    }

    #[test]
    fn task_list_renders_one_row_per_task() {
        let out = render_table(&vec![record(1, "Call mom"), record(2, "Pay rent")], plain())
            .expect("table render should work");
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("category"));
        assert!(lines[0].contains("priority"));
        assert!(lines[3].contains("Pay rent"));
        assert!(lines[3].contains("Personal"));
    }

    #[test]
    fn empty_task_list_has_a_placeholder() {
        let out = render_table(&Vec::<TaskRecord>::new(), plain()).expect("table render");
        assert_eq!(out, "(no tasks)");
    }

    #[test]
    fn string_lists_join_with_commas() {
        let value = serde_json::json!(["urgent", "asap"]);
        assert_eq!(value_to_cell(&value), "urgent, asap");
        assert_eq!(value_to_cell(&serde_json::json!([1, 2])), "[1,2]");
    }
}
