use std::rc::Rc;

use gloo_events::EventListener;
use web_sys::{Element, HtmlElement};

use super::{Bindings, PageContext};
use crate::config::Labels;
use crate::constants::{CLASS_NIGHT, TOGGLE_THEME_ID};
use crate::dependency::dom;
use crate::error::{log_failure, PageResult};
use crate::types::Theme;

pub(crate) fn bind(ctx: &PageContext, bindings: &mut Bindings) -> PageResult<()> {
    let controller = &ctx.theme;
    let root = ctx.data.root().clone();
    let button = dom::by_id::<HtmlElement>(ctx.data.document(), TOGGLE_THEME_ID);

    let theme = controller.borrow_mut().init();
    apply(&root, button.as_ref(), &ctx.config.labels, theme)?;
    log::debug!("theme initialized: {theme}");

    let Some(button) = button else {
        return Ok(());
    };

    let controller = Rc::clone(controller);
    let config = Rc::clone(&ctx.config);
    let target = button.clone();
    bindings.listen(EventListener::new(&target, "click", move |_| {
        let next = controller.borrow_mut().toggle(visual_theme(&root));
        log_failure(
            "theme toggle",
            apply(&root, Some(&button), &config.labels, next),
        );
    }));
    Ok(())
}

/// Theme currently shown by the root element
pub(crate) fn visual_theme(root: &Element) -> Theme {
    if dom::has_class(root, CLASS_NIGHT) {
        Theme::Night
    } else {
        Theme::Day
    }
}

fn apply(
    root: &Element,
    button: Option<&HtmlElement>,
    labels: &Labels,
    theme: Theme,
) -> PageResult<()> {
    dom::add_class(root, theme.root_class())?;
    dom::remove_class(root, theme.toggled().root_class())?;

    if let Some(button) = button {
        let label = match theme {
            Theme::Day => &labels.switch_to_night,
            Theme::Night => &labels.switch_to_day,
        };
        button.set_text_content(Some(label));
    }
    Ok(())
}
