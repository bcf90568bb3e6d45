use anyhow::bail;
use vox_core::TaskRecord;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::AddArgs;
use crate::commands::shared::tasks::{next_id, read_tasks_or_empty, write_tasks};
use crate::context::AppContext;
use crate::output::output;

/// Handle `vox add`.
pub fn handle(args: &AddArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&run(args, ctx)?, flags.format)
}

/// Interpret the utterance and store the resulting task at the front of the task file.
pub fn run(args: &AddArgs, ctx: &AppContext) -> anyhow::Result<TaskRecord> {
    let utterance = args.utterance.utterance();
    let now = ctx.now();
    let draft = ctx.parser.interpret_at(&utterance, now);
    if !draft.is_complete {
        bail!("no task name found in '{utterance}'; say what the task is, e.g. 'call mom tomorrow'");
    }

    let missing = draft.missing_fields();
    if !missing.is_empty() {
        let labels = missing
            .iter()
            .map(|field| field.label())
            .collect::<Vec<_>>()
            .join(", ");
        tracing::warn!(missing = %labels, name = %draft.name, "storing task with missing fields");
    }

    let mut tasks = read_tasks_or_empty(&args.tasks)?;
    let record = TaskRecord::from_draft(next_id(&tasks), &draft, now);
    // Newest first, like the task list the app shows.
    tasks.insert(0, record.clone());
    write_tasks(&args.tasks, &tasks)?;
    tracing::debug!(id = record.id, path = %args.tasks.display(), "task stored");

    Ok(record)
}
