use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, Node};

use super::{submit_action, Bindings, PageContext};
use crate::config::PageConfig;
use crate::constants::{
    ATTR_BUILDING_TYPE, BUILDING_OPTION_SELECTOR, BUILD_MENU_ID, CLASS_HIDDEN, FREE_CELL_SELECTOR,
};
use crate::data::read_cell;
use crate::dependency::dom;
use crate::error::{log_failure, PageResult};
use crate::logic::{below_cell, BuildMenuState};
use crate::types::BuildingKind;

pub(crate) fn bind(
    ctx: &PageContext,
    state: &Rc<RefCell<BuildMenuState>>,
    bindings: &mut Bindings,
) -> PageResult<()> {
    let document = ctx.data.document();
    let (Some(menu), Some(wrapper)) = (
        dom::by_id::<HtmlElement>(document, BUILD_MENU_ID),
        ctx.data.wrapper().cloned(),
    ) else {
        log::debug!("build menu not rendered");
        return Ok(());
    };

    let free_cells = ctx.data.cells(FREE_CELL_SELECTOR);
    for cell in free_cells {
        let state = Rc::clone(state);
        let config = Rc::clone(&ctx.config);
        let menu = menu.clone();
        let wrapper = wrapper.clone();
        let target = cell.clone();
        bindings.listen(EventListener::new(&target, "click", move |event| {
            event.stop_propagation();
            let Some(id) = read_cell(&cell).id else {
                return;
            };
            state.borrow_mut().open(id);
            log_failure("build menu", show(&menu, &wrapper, &cell, &config));
        }));
    }

    let options: Vec<HtmlElement> = dom::query_all(document, BUILDING_OPTION_SELECTOR);
    for option in options {
        annotate_option(&option, &ctx.config);

        let state = Rc::clone(state);
        let theme = Rc::clone(&ctx.theme);
        let sink = Rc::clone(&ctx.sink);
        let target = option.clone();
        bindings.listen(EventListener::new(&target, "click", move |_| {
            let kind = option.get_attribute(ATTR_BUILDING_TYPE).unwrap_or_default();
            let Some(action) = state.borrow().choose(&kind) else {
                return;
            };
            log_failure("build", submit_action(&theme, &*sink, action));
        }));
    }

    let state = Rc::clone(state);
    bindings.listen(EventListener::new(document, "click", move |event| {
        let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
            return;
        };
        let inside_menu = menu.contains(Some(target.unchecked_ref::<Node>()));
        let on_free_cell = target.closest(FREE_CELL_SELECTOR).ok().flatten().is_some();
        if !inside_menu && !on_free_cell {
            log_failure("build menu", dom::add_class(&menu, CLASS_HIDDEN));
            state.borrow_mut().close();
        }
    }));

    Ok(())
}

/// Shows the menu invisibly, measures it, then places it under the cell
fn show(
    menu: &HtmlElement,
    wrapper: &HtmlElement,
    cell: &HtmlElement,
    config: &PageConfig,
) -> PageResult<()> {
    dom::remove_class(menu, CLASS_HIDDEN)?;
    dom::set_style(menu, "visibility", "hidden")?;

    let wrapper_rect = dom::rect_of(wrapper);
    let cell_rect = dom::rect_of(cell);

    dom::set_style(menu, "display", "flex")?;
    let menu_rect = dom::rect_of(menu);

    let placement = below_cell(
        cell_rect,
        wrapper_rect,
        menu_rect,
        config.popup_gap_px,
        config.popup_margin_px,
    );
    dom::place(menu, placement)?;
    dom::set_style(menu, "visibility", "visible")
}

fn annotate_option(option: &HtmlElement, config: &PageConfig) {
    if option.has_attribute("title") {
        return;
    }
    let kind = option
        .get_attribute(ATTR_BUILDING_TYPE)
        .and_then(|raw| BuildingKind::from_type_id(&raw));
    if let Some(kind) = kind {
        option.set_title(&kind.hint(&config.labels.currency));
    }
}
