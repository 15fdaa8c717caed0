use gloo_timers::callback::Timeout;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use super::PageContext;
use crate::constants::{CLASS_BUILT_ON_LOAD, CLASS_OCCUPIED};
use crate::dependency::{dom, focus_target, strip_query};
use crate::error::{log_failure, PageResult};

/// Scrolls to the cell named by `new_building` / `removed_cell`, flashes a
/// freshly built one, then drops the query so a reload does not replay it.
pub(crate) fn bind(ctx: &PageContext) -> PageResult<()> {
    let window = dom::window()?;
    let Some(target) = focus_target(&window)? else {
        return Ok(());
    };
    let Some(cell) = ctx.data.find_cell(&target.cell) else {
        log::debug!("focus target {} not on this page", target.cell);
        return Ok(());
    };

    if target.wants_highlight(dom::has_class(&cell, CLASS_OCCUPIED)) {
        dom::add_class(&cell, CLASS_BUILT_ON_LOAD)?;
        let highlighted = cell.clone();
        // Not tied to the page: an unmount inside the window must still clear the class
        let _timer_id = Timeout::new(ctx.config.highlight_ms, move || {
            log_failure(
                "highlight removal",
                dom::remove_class(&highlighted, CLASS_BUILT_ON_LOAD),
            );
        })
        .forget();
    }

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Center);
    cell.scroll_into_view_with_scroll_into_view_options(&options);

    strip_query(&window)?;
    log::debug!("focused cell {} ({:?})", target.cell, target.reason);
    Ok(())
}
