use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::{EventListener, EventListenerOptions};
use wasm_bindgen::JsValue;
use web_sys::HtmlElement;

use super::{submit_action, Bindings, PageContext};
use crate::constants::{
    CLASS_HIDDEN, DELETE_MODAL_ID, MODAL_CANCEL_ID, MODAL_CONFIRM_ID, OCCUPIED_CELL_SELECTOR,
};
use crate::data::read_cell;
use crate::dependency::dom;
use crate::error::{log_failure, PageResult};
use crate::logic::{DeleteModalState, OccupiedClick};

pub(crate) fn bind(
    ctx: &PageContext,
    state: &Rc<RefCell<DeleteModalState>>,
    bindings: &mut Bindings,
) -> PageResult<()> {
    let document = ctx.data.document();
    let modal = dom::by_id::<HtmlElement>(document, DELETE_MODAL_ID);

    if let Some(cancel) = dom::by_id::<HtmlElement>(document, MODAL_CANCEL_ID) {
        let state = Rc::clone(state);
        let modal = modal.clone();
        bindings.listen(EventListener::new_with_options(
            &cancel,
            "click",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                event.prevent_default();
                close(&state, modal.as_ref());
            },
        ));
    }

    if let Some(confirm) = dom::by_id::<HtmlElement>(document, MODAL_CONFIRM_ID) {
        let state = Rc::clone(state);
        let modal = modal.clone();
        let theme = Rc::clone(&ctx.theme);
        let sink = Rc::clone(&ctx.sink);
        bindings.listen(EventListener::new_with_options(
            &confirm,
            "click",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                event.prevent_default();
                let Some(action) = state.borrow_mut().confirm() else {
                    return;
                };
                close(&state, modal.as_ref());
                log_failure("release", submit_action(&theme, &*sink, action));
            },
        ));
    }

    if let Some(background) = modal.clone() {
        let state = Rc::clone(state);
        let target = background.clone();
        bindings.listen(EventListener::new(&target, "click", move |event| {
            let background_value: &JsValue = background.as_ref();
            let on_background = event
                .target()
                .is_some_and(|target| JsValue::from(target) == *background_value);
            if on_background {
                close(&state, Some(&background));
            }
        }));
    }

    for cell in ctx.data.cells(OCCUPIED_CELL_SELECTOR) {
        let state = Rc::clone(state);
        let modal = modal.clone();
        let data = Rc::clone(&ctx.data);
        let theme = Rc::clone(&ctx.theme);
        let sink = Rc::clone(&ctx.sink);
        let target = cell.clone();
        bindings.listen(EventListener::new_with_options(
            &target,
            "click",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                event.prevent_default();
                let info = read_cell(&cell);
                let click = state
                    .borrow_mut()
                    .on_occupied_click(&info, data.viewer(), modal.is_some());
                match click {
                    Some(OccupiedClick::Confirm(id)) => {
                        log::debug!("confirm release of cell {id}");
                        if let Some(modal) = &modal {
                            log_failure("delete modal", dom::remove_class(modal, CLASS_HIDDEN));
                        }
                    }
                    Some(OccupiedClick::Submit(action)) => {
                        log_failure("toggle", submit_action(&theme, &*sink, action));
                    }
                    None => {}
                }
            },
        ));
    }

    Ok(())
}

fn close(state: &Rc<RefCell<DeleteModalState>>, modal: Option<&HtmlElement>) {
    state.borrow_mut().cancel();
    if let Some(modal) = modal {
        log_failure("delete modal", dom::add_class(modal, CLASS_HIDDEN));
    }
}
