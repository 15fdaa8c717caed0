use crate::types::{CellAction, CellId};

/// Build menu selection: closed, or open for one free cell
#[derive(Debug, Default)]
pub struct BuildMenuState {
    selected: Option<CellId>,
}

impl BuildMenuState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opening for another cell replaces the selection, no close needed
    pub fn open(&mut self, cell: CellId) {
        self.selected = Some(cell);
    }

    pub fn close(&mut self) {
        self.selected = None;
    }

    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    pub fn selected(&self) -> Option<&CellId> {
        self.selected.as_ref()
    }

    pub fn choose(&self, kind: &str) -> Option<CellAction> {
        let kind = kind.trim();
        if kind.is_empty() {
            return None;
        }
        self.selected.clone().map(|cell| CellAction::Build {
            cell,
            kind: kind.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(id: &str) -> CellId {
        CellId::parse(id).unwrap()
    }

    #[test]
    fn test_choose_without_selection_is_none() {
        let menu = BuildMenuState::new();
        assert!(!menu.is_open());
        assert_eq!(menu.choose("1"), None);
    }

    #[test]
    fn test_reopen_moves_selection() {
        let mut menu = BuildMenuState::new();
        menu.open(cell("3"));
        menu.open(cell("8"));
        assert_eq!(menu.selected(), Some(&cell("8")));
        assert_eq!(
            menu.choose("2").map(|action| action.path()),
            Some("/cell/8/build/2".to_string())
        );
    }

    #[test]
    fn test_close_clears_selection() {
        let mut menu = BuildMenuState::new();
        menu.open(cell("3"));
        menu.close();
        assert!(!menu.is_open());
        assert_eq!(menu.choose("2"), None);
    }

    #[test]
    fn test_blank_type_is_ignored() {
        let mut menu = BuildMenuState::new();
        menu.open(cell("3"));
        assert_eq!(menu.choose(" "), None);
        assert!(menu.is_open());
    }
}
