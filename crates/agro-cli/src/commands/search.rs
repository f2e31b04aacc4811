use agro_core::responses::EquipmentRow;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SearchArgs;
use crate::context::AppContext;
use crate::output::{output, text};

/// Handle `agro search`.
pub fn handle(args: &SearchArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let records = ctx.service.find_by_name(&args.text);
    let rows: Vec<EquipmentRow> = records.iter().copied().map(EquipmentRow::from).collect();
    output(&rows, flags.format, |_| text::search_results(&args.text, &records))
}
