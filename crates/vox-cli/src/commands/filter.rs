use anyhow::bail;
use vox_core::responses::FilterResponse;
use vox_core::{FilterSpec, TaskRecord};

use crate::cli::root_commands::FilterArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::shared::limit::effective_limit;
use crate::commands::shared::tasks::read_tasks;
use crate::context::AppContext;
use crate::output::output;

/// Offered back when a query is not understood.
const EXAMPLE_QUERIES: [&str; 3] = [
    "show today's high priority tasks",
    "show office tasks",
    "I have 15 minutes",
];

/// Handle `vox filter`. Table output lists only the tasks.
pub fn handle(args: &FilterArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let response = run(args, ctx, flags)?;
    if flags.format == OutputFormat::Table {
        return output(&response.tasks, flags.format);
    }
    output(&response, flags.format)
}

pub fn run(
    args: &FilterArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<FilterResponse> {
    let utterance = args.utterance.utterance();
    let query = ctx
        .parser
        .interpret_query_at(&utterance, ctx.now().date());

    let tasks = read_tasks(&args.tasks)?;
    let mut matched: Vec<TaskRecord> = match &query {
        FilterSpec::Filter { filter } => tasks.into_iter().filter(|t| filter.matches(t)).collect(),
        // Every task is a candidate; durations are not tracked per task.
        FilterSpec::TimeBased { .. } => tasks,
        FilterSpec::Unknown => bail!(
            "could not understand '{utterance}'. Try: {}",
            EXAMPLE_QUERIES
                .iter()
                .map(|example| format!("\"{example}\""))
                .collect::<Vec<_>>()
                .join(", ")
        ),
    };

    let total_matches = u32::try_from(matched.len())?;
    let limit = effective_limit(args.limit, flags.limit, ctx.config.general.default_limit);
    matched.truncate(usize::try_from(limit)?);
    tracing::debug!(kind = query.kind(), total_matches, shown = matched.len(), "filtered tasks");

    Ok(FilterResponse {
        query,
        tasks: matched,
        total_matches,
    })
}
