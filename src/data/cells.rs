use web_sys::Element;

use crate::constants::{
    ATTR_CELL_ID, ATTR_OCCUPIED, ATTR_OWNER, CLASS_FREE, OCCUPIED_MARKER,
};
use crate::types::{cell::normalize_name, CellId, CellInfo};

/// Reads the server-rendered attributes of a cell element
pub fn read_cell(element: &Element) -> CellInfo {
    let id = element
        .get_attribute(ATTR_CELL_ID)
        .and_then(|raw| CellId::parse(&raw));
    let occupied = element.get_attribute(ATTR_OCCUPIED).as_deref() == Some(OCCUPIED_MARKER);
    let owner = normalize_name(element.get_attribute(ATTR_OWNER).as_deref());

    CellInfo {
        id,
        occupied,
        owner,
        free: element.class_list().contains(CLASS_FREE),
    }
}

pub fn has_cell_id(element: &Element, id: &CellId) -> bool {
    element.get_attribute(ATTR_CELL_ID).as_deref().map(str::trim) == Some(id.as_str())
}
