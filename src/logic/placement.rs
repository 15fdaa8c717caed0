use crate::types::{Placement, Rect};

/// Build menu: centered under the cell, `gap` below it, kept `margin` away
/// from every wrapper edge. Coordinates are relative to the wrapper.
pub fn below_cell(cell: Rect, wrapper: Rect, popup: Rect, gap: f64, margin: f64) -> Placement {
    let left = cell.center_x() - wrapper.left - popup.width / 2.0;
    let top = cell.bottom() - wrapper.top + gap;

    Placement {
        left: margin.max(left.min(wrapper.width - popup.width - margin)),
        top: margin.max(top.min(wrapper.height - popup.height - margin)),
    }
}

/// Tooltip: anchored at the cell's horizontal center (the element is shifted
/// by `translateX(-50%)`), `gap` above the cell, never past the wrapper sides
/// and never above `top_margin`.
pub fn above_cell(cell: Rect, wrapper: Rect, tooltip: Rect, gap: f64, top_margin: f64) -> Placement {
    let half = tooltip.width / 2.0;
    let left = cell.center_x() - wrapper.left;
    let top = cell.top - wrapper.top - tooltip.height - gap;

    Placement {
        left: half.max(left.min(wrapper.width - half)),
        top: top_margin.max(top),
    }
}
