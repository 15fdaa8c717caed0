use gloo_timers::callback::Timeout;
use web_sys::Element;

use super::{Bindings, PageContext};
use crate::constants::{CLASS_FLASH_HIDE, FLASH_SELECTOR};
use crate::dependency::dom;
use crate::error::log_failure;

pub(crate) fn bind(ctx: &PageContext, bindings: &mut Bindings) {
    let flashes: Vec<Element> = dom::query_all(ctx.data.document(), FLASH_SELECTOR);
    if flashes.is_empty() {
        return;
    }

    bindings.schedule(Timeout::new(ctx.config.flash_delay_ms, move || {
        for flash in &flashes {
            log_failure("flash dismiss", dom::add_class(flash, CLASS_FLASH_HIDE));
        }
    }));
}
