use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Window};

use crate::error::{PageError, PageResult};
use crate::types::{Placement, Rect};

pub fn window() -> PageResult<Window> {
    web_sys::window().ok_or(PageError::NoWindow)
}

pub fn document() -> PageResult<Document> {
    window()?.document().ok_or(PageError::NoDocument)
}

/// Element by id, `None` when missing or of another type
pub fn by_id<T: JsCast>(document: &Document, id: &str) -> Option<T> {
    document.get_element_by_id(id)?.dyn_into::<T>().ok()
}

pub fn query<T: JsCast>(document: &Document, selector: &str) -> Option<T> {
    document
        .query_selector(selector)
        .ok()
        .flatten()?
        .dyn_into::<T>()
        .ok()
}

pub fn query_all<T: JsCast>(document: &Document, selector: &str) -> Vec<T> {
    let Ok(nodes) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<T>().ok())
        .collect()
}

pub fn has_class(element: &Element, class: &str) -> bool {
    element.class_list().contains(class)
}

pub fn add_class(element: &Element, class: &str) -> PageResult<()> {
    Ok(element.class_list().add_1(class)?)
}

pub fn remove_class(element: &Element, class: &str) -> PageResult<()> {
    Ok(element.class_list().remove_1(class)?)
}

pub fn rect_of(element: &Element) -> Rect {
    Rect::from(&element.get_bounding_client_rect())
}

pub fn set_style(element: &HtmlElement, property: &str, value: &str) -> PageResult<()> {
    Ok(element.style().set_property(property, value)?)
}

pub fn place(element: &HtmlElement, placement: Placement) -> PageResult<()> {
    set_style(element, "left", &format!("{}px", placement.left))?;
    set_style(element, "top", &format!("{}px", placement.top))
}
