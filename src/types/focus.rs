use super::cell::CellId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusReason {
    Built,
    Removed,
}

/// Cell to scroll to after a build or release redirect
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FocusTarget {
    pub cell: CellId,
    pub reason: FocusReason,
}

impl FocusTarget {
    /// A non-empty `new_building` wins over `removed_cell`.
    pub fn from_params(new_building: Option<&str>, removed_cell: Option<&str>) -> Option<Self> {
        if let Some(cell) = new_building.and_then(CellId::parse) {
            return Some(Self {
                cell,
                reason: FocusReason::Built,
            });
        }
        removed_cell.and_then(CellId::parse).map(|cell| Self {
            cell,
            reason: FocusReason::Removed,
        })
    }

    /// Only a freshly built, still occupied cell gets the highlight animation
    pub fn wants_highlight(&self, cell_occupied: bool) -> bool {
        self.reason == FocusReason::Built && cell_occupied
    }
}
