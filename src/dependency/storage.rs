use std::cell::RefCell;

use crate::types::Theme;

/// Where the theme survives page loads
pub trait ThemeStore {
    fn load_raw(&self) -> Option<String>;
    fn save_raw(&self, value: &str);

    fn load(&self) -> Theme {
        self.load_raw().map(Theme::from).unwrap_or_default()
    }

    fn save(&self, theme: Theme) {
        self.save_raw(theme.as_str());
    }
}

/// `window.localStorage`, stored as the bare string (`day` / `night`)
pub struct LocalThemeStore {
    key: String,
}

impl LocalThemeStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl ThemeStore for LocalThemeStore {
    fn load_raw(&self) -> Option<String> {
        Self::storage()?.get_item(&self.key).ok().flatten()
    }

    fn save_raw(&self, value: &str) {
        let Some(storage) = Self::storage() else {
            log::warn!("localStorage unavailable, theme not persisted");
            return;
        };
        if storage.set_item(&self.key, value).is_err() {
            log::warn!("failed to persist theme `{value}`");
        }
    }
}

#[derive(Debug, Default)]
pub struct MemoryThemeStore {
    value: RefCell<Option<String>>,
}

impl MemoryThemeStore {
    pub fn new(initial: Option<&str>) -> Self {
        Self {
            value: RefCell::new(initial.map(str::to_string)),
        }
    }

    pub fn value(&self) -> Option<String> {
        self.value.borrow().clone()
    }
}

impl ThemeStore for MemoryThemeStore {
    fn load_raw(&self) -> Option<String> {
        self.value()
    }

    fn save_raw(&self, value: &str) {
        *self.value.borrow_mut() = Some(value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_round_trip() {
        let store = MemoryThemeStore::default();
        assert_eq!(store.load(), Theme::Day);
        store.save(Theme::Night);
        assert_eq!(store.value().as_deref(), Some("night"));
        assert_eq!(store.load(), Theme::Night);
    }
}
