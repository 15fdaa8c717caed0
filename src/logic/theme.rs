use std::rc::Rc;

use crate::dependency::ThemeStore;
use crate::types::Theme;

/// Owns the persisted theme. Every applied value is written straight back
/// to the store, so the store always holds what the page shows.
pub struct ThemeController {
    store: Rc<dyn ThemeStore>,
    applied: Option<Theme>,
}

impl ThemeController {
    pub fn new(store: Rc<dyn ThemeStore>) -> Self {
        Self {
            store,
            applied: None,
        }
    }

    /// Persisted theme, `Day` when unset or unrecognized
    pub fn load(&self) -> Theme {
        self.store.load()
    }

    pub fn applied(&self) -> Option<Theme> {
        self.applied
    }

    /// Theme the page is showing; the stored value only before `init`.
    /// A store that failed to persist does not change what requests carry.
    pub fn current(&self) -> Theme {
        self.applied.unwrap_or_else(|| self.load())
    }

    pub fn init(&mut self) -> Theme {
        let theme = self.load();
        self.set(theme)
    }

    pub fn set(&mut self, theme: Theme) -> Theme {
        self.applied = Some(theme);
        self.store.save(theme);
        theme
    }

    pub fn set_day(&mut self) -> Theme {
        self.set(Theme::Day)
    }

    pub fn set_night(&mut self) -> Theme {
        self.set(Theme::Night)
    }

    /// `visual` is what the root element currently shows
    pub fn toggle(&mut self, visual: Theme) -> Theme {
        self.set(visual.toggled())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dependency::MemoryThemeStore;

    fn controller(initial: Option<&str>) -> (ThemeController, Rc<MemoryThemeStore>) {
        let store = Rc::new(MemoryThemeStore::new(initial));
        (ThemeController::new(store.clone()), store)
    }

    /// Drops every write, like `localStorage` in a full or private profile
    struct ReadOnlyStore;

    impl ThemeStore for ReadOnlyStore {
        fn load_raw(&self) -> Option<String> {
            None
        }

        fn save_raw(&self, _value: &str) {}
    }

    #[test]
    fn test_current_follows_applied_when_store_rejects_writes() {
        let mut theme = ThemeController::new(Rc::new(ReadOnlyStore));
        assert_eq!(theme.current(), Theme::Day);
        theme.init();
        let night = theme.toggle(Theme::Day);
        assert_eq!(night, Theme::Night);
        assert_eq!(theme.load(), Theme::Day);
        assert_eq!(theme.current(), Theme::Night);
    }

    #[test]
    fn test_current_before_init_reads_store() {
        let (theme, _) = controller(Some("night"));
        assert_eq!(theme.applied(), None);
        assert_eq!(theme.current(), Theme::Night);
    }

    #[test]
    fn test_first_load_defaults_to_day_and_persists() {
        let (mut theme, store) = controller(None);
        assert_eq!(theme.init(), Theme::Day);
        assert_eq!(store.value().as_deref(), Some("day"));
    }

    #[test]
    fn test_unrecognized_value_is_replaced() {
        let (mut theme, store) = controller(Some("purple"));
        assert_eq!(theme.init(), Theme::Day);
        assert_eq!(store.value().as_deref(), Some("day"));
    }

    #[test]
    fn test_init_applies_night() {
        let (mut theme, _) = controller(Some("night"));
        assert_eq!(theme.init(), Theme::Night);
        assert_eq!(theme.applied(), Some(Theme::Night));
    }

    #[test]
    fn test_toggle_twice_restores() {
        let (mut theme, store) = controller(None);
        let start = theme.init();
        let once = theme.toggle(start);
        assert_eq!(once, Theme::Night);
        assert_eq!(store.value().as_deref(), Some("night"));
        let twice = theme.toggle(once);
        assert_eq!(twice, start);
        assert_eq!(store.value().as_deref(), Some("day"));
    }

    #[test]
    fn test_persisted_matches_applied() {
        let (mut theme, store) = controller(None);
        for step in [Theme::Night, Theme::Night, Theme::Day] {
            let applied = theme.set(step);
            assert_eq!(Theme::from(store.value().unwrap()), applied);
            assert_eq!(theme.load(), applied);
        }
        theme.set_night();
        assert_eq!(theme.load(), Theme::Night);
        theme.set_day();
        assert_eq!(theme.load(), Theme::Day);
    }
}
