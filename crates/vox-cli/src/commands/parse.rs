use vox_core::responses::ParseResponse;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::TextArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `vox parse`.
pub fn handle(args: &TextArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&run(args, ctx), flags.format)
}

pub fn run(args: &TextArgs, ctx: &AppContext) -> ParseResponse {
    ParseResponse::from(ctx.parser.interpret_at(&args.utterance(), ctx.now()))
}
