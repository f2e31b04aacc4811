use std::io;

use crate::context::AppContext;

/// Handle `agro menu` (also the default with no subcommand).
pub fn handle(ctx: &mut AppContext) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    crate::menu::run(ctx, stdin.lock(), stdout.lock())
}
