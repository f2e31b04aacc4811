use agro_registry::error::RegistryError;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ShowArgs;
use crate::context::AppContext;
use crate::output::{notice, output, text};

/// Handle `agro show`.
pub fn handle(args: &ShowArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match ctx.service.details(&args.code) {
        Ok(details) => output(&details, flags.format, text::details),
        Err(RegistryError::UnknownCode(code)) => {
            notice(&text::not_found(&code), flags.format)
        }
        Err(error) => Err(error.into()),
    }
}
