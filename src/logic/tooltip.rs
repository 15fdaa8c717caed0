use crate::config::Labels;
use crate::types::{CellInfo, Viewer};

pub fn tooltip_text(cell: &CellInfo, viewer: &Viewer, labels: &Labels) -> String {
    match cell.owner.as_deref() {
        Some(_) if cell.is_owned_by(viewer) => labels.own_house.clone(),
        Some(owner) => labels.other_house.replace("{owner}", owner),
        None => labels.free_plot.clone(),
    }
}
