use gloo_events::EventListener;
use web_sys::HtmlElement;

use super::{Bindings, PageContext};
use crate::config::PageConfig;
use crate::constants::{CLASS_HIDDEN, CLASS_VISIBLE, TOOLTIP_ID};
use crate::data::read_cell;
use crate::dependency::dom;
use crate::error::{log_failure, PageResult};
use crate::logic::{above_cell, tooltip_text};
use crate::types::Viewer;

pub(crate) fn bind(ctx: &PageContext, bindings: &mut Bindings) -> PageResult<()> {
    let (Some(tooltip), Some(wrapper)) = (
        dom::by_id::<HtmlElement>(ctx.data.document(), TOOLTIP_ID),
        ctx.data.wrapper().cloned(),
    ) else {
        return Ok(());
    };

    for cell in ctx.data.grid_cells() {
        {
            let tooltip = tooltip.clone();
            let wrapper = wrapper.clone();
            let config = ctx.config.clone();
            let viewer = ctx.data.viewer().clone();
            let hovered = cell.clone();
            bindings.listen(EventListener::new(&cell, "mouseenter", move |_| {
                log_failure(
                    "tooltip",
                    show(&tooltip, &wrapper, &hovered, &viewer, &config),
                );
            }));
        }

        let tooltip = tooltip.clone();
        bindings.listen(EventListener::new(&cell, "mouseleave", move |_| {
            log_failure("tooltip", hide(&tooltip));
        }));
    }
    Ok(())
}

fn show(
    tooltip: &HtmlElement,
    wrapper: &HtmlElement,
    cell: &HtmlElement,
    viewer: &Viewer,
    config: &PageConfig,
) -> PageResult<()> {
    let text = tooltip_text(&read_cell(cell), viewer, &config.labels);
    tooltip.set_text_content(Some(&text));
    dom::remove_class(tooltip, CLASS_HIDDEN)?;
    dom::add_class(tooltip, CLASS_VISIBLE)?;

    let placement = above_cell(
        dom::rect_of(cell),
        dom::rect_of(wrapper),
        dom::rect_of(tooltip),
        config.tooltip_gap_px,
        config.tooltip_top_margin_px,
    );
    dom::place(tooltip, placement)?;
    dom::set_style(tooltip, "transform", "translateX(-50%)")
}

fn hide(tooltip: &HtmlElement) -> PageResult<()> {
    dom::add_class(tooltip, CLASS_HIDDEN)?;
    dom::remove_class(tooltip, CLASS_VISIBLE)
}
