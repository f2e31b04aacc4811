use agro_core::responses::EquipmentRow;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::{output, text};

/// Handle `agro sorted`.
pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let records = ctx.service.sorted_by_power();
    let rows: Vec<EquipmentRow> = records.iter().copied().map(EquipmentRow::from).collect();
    output(&rows, flags.format, |_| text::power_ranking(&records))
}
