pub mod building;
pub mod cell;
pub mod focus;
pub mod rect;
pub mod request;
pub mod stats;
pub mod theme;

pub use building::BuildingKind;
pub use cell::{CellId, CellInfo, Viewer};
pub use focus::{FocusReason, FocusTarget};
pub use rect::{Placement, Rect};
pub use request::{CellAction, FormRequest};
pub use stats::GridStats;
pub use theme::Theme;
