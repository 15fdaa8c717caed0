use std::rc::Rc;

use gloo_events::EventListener;
use web_sys::HtmlFormElement;

use super::{Bindings, PageContext};
use crate::constants::{POST_FORM_SELECTOR, THEME_FIELD};
use crate::dependency::{dom, upsert_hidden_field};
use crate::error::log_failure;

/// Server-rendered POST forms (login, register, top-up, profile release)
/// carry the theme on screen too, so the next render keeps it.
pub(crate) fn bind(ctx: &PageContext, bindings: &mut Bindings) {
    let forms: Vec<HtmlFormElement> = dom::query_all(ctx.data.document(), POST_FORM_SELECTOR);
    for form in forms {
        let theme = Rc::clone(&ctx.theme);
        let document = ctx.data.document().clone();
        let target = form.clone();
        bindings.listen(EventListener::new(&target, "submit", move |_| {
            let current = theme.borrow().current();
            log_failure(
                "form theme",
                upsert_hidden_field(&document, &form, THEME_FIELD, current.as_str()),
            );
        }));
    }
}
