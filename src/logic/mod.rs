mod build_menu;
mod delete_modal;
mod placement;
mod stats;
mod theme;
mod tooltip;

pub use build_menu::BuildMenuState;
pub use delete_modal::{DeleteModalState, OccupiedClick};
pub use placement::{above_cell, below_cell};
pub use stats::compute_stats;
pub use theme::ThemeController;
pub use tooltip::tooltip_text;
