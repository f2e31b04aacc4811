use agro_registry::error::RegistryError;
use anyhow::Context;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ExerciseArgs;
use crate::context::AppContext;
use crate::output::{notice, output, text};

/// Handle `agro exercise`.
pub fn handle(args: &ExerciseArgs, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let tail = ctx.config.general.log_tail;
    match ctx
        .service
        .exercise(&args.code, args.instruction.as_deref(), tail)
    {
        Ok(report) => output(&report, flags.format, text::exercise),
        Err(RegistryError::UnknownCode(code)) => {
            notice(&text::not_found(&code), flags.format)
        }
        Err(error) => Err(error).with_context(|| format!("failed to exercise {}", args.code)),
    }
}
