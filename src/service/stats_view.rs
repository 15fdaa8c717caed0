use web_sys::Element;

use super::PageContext;
use crate::constants::{STAT_FREE_ID, STAT_LEVEL_ID, STAT_OCCUPIED_ID};
use crate::dependency::dom;
use crate::logic::compute_stats;
use crate::types::GridStats;

pub(crate) fn render(ctx: &PageContext) -> GridStats {
    let stats = compute_stats(&ctx.data.grid_infos());
    if stats.total == 0 {
        return stats;
    }

    let document = ctx.data.document();
    write(document, STAT_OCCUPIED_ID, &stats.occupied.to_string());
    write(document, STAT_FREE_ID, &stats.free.to_string());
    write(document, STAT_LEVEL_ID, &stats.level_label());
    log::debug!(
        "grid stats: {} occupied, {} free, {}",
        stats.occupied,
        stats.free,
        stats.level_label()
    );
    stats
}

fn write(document: &web_sys::Document, id: &str, text: &str) {
    if let Some(element) = dom::by_id::<Element>(document, id) {
        element.set_text_content(Some(text));
    }
}
