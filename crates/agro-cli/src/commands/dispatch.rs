use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(command: Commands, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Menu => commands::menu::handle(ctx),
        Commands::List => commands::list::handle(ctx, flags),
        Commands::Find(args) => commands::find::handle(&args, ctx, flags),
        Commands::Search(args) => commands::search::handle(&args, ctx, flags),
        Commands::Sorted => commands::sorted::handle(ctx, flags),
        Commands::Stats => commands::stats::handle(ctx, flags),
        Commands::Show(args) => commands::show::handle(&args, ctx, flags),
        Commands::Exercise(args) => commands::exercise::handle(&args, ctx, flags),
    }
}
