use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Parse(args) => commands::parse::handle(&args, ctx, flags),
        Commands::Add(args) => commands::add::handle(&args, ctx, flags),
        Commands::Query(args) => commands::query::handle(&args, ctx, flags),
        Commands::Filter(args) => commands::filter::handle(&args, ctx, flags),
        Commands::Lexicon(args) => commands::lexicon::handle(&args, ctx, flags),
        Commands::Schema(args) => commands::schema::handle(&args, flags),
    }
}
