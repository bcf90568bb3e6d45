use vox_core::FilterSpec;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::TextArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `vox query`.
pub fn handle(args: &TextArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&run(args, ctx), flags.format)
}

pub fn run(args: &TextArgs, ctx: &AppContext) -> FilterSpec {
    ctx.parser
        .interpret_query_at(&args.utterance(), ctx.now().date())
}
