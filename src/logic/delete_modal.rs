use crate::types::{CellAction, CellId, CellInfo, Viewer};

/// What a click on an occupied cell should do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OccupiedClick {
    /// Own building: ask first
    Confirm(CellId),
    /// Someone else's building: the server answers with the owner's name
    Submit(CellAction),
}

/// Delete confirmation: closed, or open with a pending cell
#[derive(Debug, Default)]
pub struct DeleteModalState {
    pending: Option<CellId>,
}

impl DeleteModalState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.pending.is_some()
    }

    pub fn pending(&self) -> Option<&CellId> {
        self.pending.as_ref()
    }

    /// `modal_available` is false when the page renders no modal, in which
    /// case own buildings are released without confirmation.
    pub fn on_occupied_click(
        &mut self,
        cell: &CellInfo,
        viewer: &Viewer,
        modal_available: bool,
    ) -> Option<OccupiedClick> {
        let id = cell.id.clone()?;
        if modal_available && cell.is_owned_by(viewer) {
            self.pending = Some(id.clone());
            return Some(OccupiedClick::Confirm(id));
        }
        Some(OccupiedClick::Submit(CellAction::Toggle { cell: id }))
    }

    /// Takes the pending cell; a no-op when nothing is pending
    pub fn confirm(&mut self) -> Option<CellAction> {
        self.pending.take().map(|cell| CellAction::Toggle { cell })
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn anna() -> Viewer {
        Viewer::new(Some("anna"))
    }

    #[test]
    fn test_own_cell_asks_for_confirmation() {
        let mut modal = DeleteModalState::new();
        let cell = CellInfo::with_owner("5", "anna");
        let click = modal.on_occupied_click(&cell, &anna(), true).unwrap();
        assert_eq!(click, OccupiedClick::Confirm(CellId::parse("5").unwrap()));
        assert!(modal.is_open());
    }

    #[test]
    fn test_foreign_cell_submits_immediately() {
        let mut modal = DeleteModalState::new();
        let cell = CellInfo::with_owner("5", "boris");
        let click = modal.on_occupied_click(&cell, &anna(), true).unwrap();
        match click {
            OccupiedClick::Submit(action) => assert_eq!(action.path(), "/cell/5/toggle"),
            other => panic!("unexpected {other:?}"),
        }
        assert!(!modal.is_open());
    }

    #[test]
    fn test_own_cell_without_modal_submits() {
        let mut modal = DeleteModalState::new();
        let cell = CellInfo::with_owner("5", "anna");
        let click = modal.on_occupied_click(&cell, &anna(), false).unwrap();
        assert!(matches!(click, OccupiedClick::Submit(_)));
        assert!(!modal.is_open());
    }

    #[test]
    fn test_cell_without_id_is_ignored() {
        let mut modal = DeleteModalState::new();
        let cell = CellInfo::with_owner("", "anna");
        assert_eq!(modal.on_occupied_click(&cell, &anna(), true), None);
    }

    #[test]
    fn test_confirm_without_pending_is_noop() {
        let mut modal = DeleteModalState::new();
        assert_eq!(modal.confirm(), None);
        assert!(!modal.is_open());
    }

    #[test]
    fn test_confirm_consumes_pending() {
        let mut modal = DeleteModalState::new();
        let cell = CellInfo::with_owner("9", "anna");
        modal.on_occupied_click(&cell, &anna(), true);
        let action = modal.confirm().unwrap();
        assert_eq!(action.path(), "/cell/9/toggle");
        assert!(!modal.is_open());
        assert_eq!(modal.confirm(), None);
    }

    #[test]
    fn test_cancel_clears_pending() {
        let mut modal = DeleteModalState::new();
        let cell = CellInfo::with_owner("9", "anna");
        modal.on_occupied_click(&cell, &anna(), true);
        modal.cancel();
        assert_eq!(modal.pending(), None);
        assert_eq!(modal.confirm(), None);
    }
}
