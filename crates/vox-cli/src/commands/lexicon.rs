use crate::cli::GlobalFlags;
use crate::cli::root_commands::LexiconArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `vox lexicon`.
pub fn handle(args: &LexiconArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    if args.toml {
        print!("{}", ctx.config.lexicon_toml()?);
        return Ok(());
    }
    output(&ctx.config.lexicon, flags.format)
}
