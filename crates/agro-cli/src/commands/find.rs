use agro_core::responses::EquipmentRow;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::FindArgs;
use crate::context::AppContext;
use crate::output::{notice, output, text};

/// Handle `agro find`.
pub fn handle(args: &FindArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match ctx.service.find_by_code(&args.code) {
        Some(equipment) => output(&EquipmentRow::from(equipment), flags.format, |_| {
            equipment.summary()
        }),
        None => notice(&text::not_found(args.code.trim()), flags.format),
    }
}
