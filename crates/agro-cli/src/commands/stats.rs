use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Handle `agro stats`.
pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&ctx.service.stats(), flags.format, ToString::to_string)
}
