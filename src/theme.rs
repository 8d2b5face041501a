pub const THEME_KEY: &str = "theme";
pub const THEME_ATTRIBUTE: &str = "data-theme";
pub const THEME_TRANSITION: &str = "background-color 0.4s ease, color 0.4s ease";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Default for Theme {
    fn default() -> Self {
        Self::Dark
    }
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// The icon shows the theme a click switches to.
    pub fn icon_class(self) -> &'static str {
        match self {
            Self::Light => "fas fa-moon",
            Self::Dark => "fas fa-sun",
        }
    }

    pub fn toggle_label(self) -> String {
        let next = self.toggled().as_str();
        format!("Switch to {next} theme")
    }
}

/// Key/value storage for the single persisted preference.
///
/// Reads that fail are reported as absent and writes that fail are dropped;
/// the page keeps working with the in-memory value either way.
pub trait PreferenceStore {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&mut self, key: &str, value: &str);
}

pub struct ThemeManager<S> {
    store: S,
    current: Theme,
}

impl<S: PreferenceStore> ThemeManager<S> {
    pub fn load(store: S) -> Self {
        let current = store
            .read(THEME_KEY)
            .and_then(|value| Theme::from_str(value.trim()))
            .unwrap_or_default();

        Self { store, current }
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    pub fn toggle(&mut self) -> Theme {
        let next = self.current.toggled();
        self.store.write(THEME_KEY, next.as_str());
        self.current = next;
        next
    }

    #[cfg(test)]
    fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MemoryStore(HashMap<String, String>);

    impl PreferenceStore for MemoryStore {
        fn read(&self, key: &str) -> Option<String> {
            self.0.get(key).cloned()
        }

        fn write(&mut self, key: &str, value: &str) {
            self.0.insert(key.to_string(), value.to_string());
        }
    }

    fn store_with(value: &str) -> MemoryStore {
        let mut store = MemoryStore::default();
        store.write(THEME_KEY, value);
        store
    }

    #[test]
    fn missing_preference_defaults_to_dark() {
        let manager = ThemeManager::load(MemoryStore::default());
        assert_eq!(manager.current(), Theme::Dark);
        assert_eq!(manager.store().read(THEME_KEY), None);
    }

    #[test]
    fn unknown_preference_defaults_to_dark() {
        let manager = ThemeManager::load(store_with("sepia"));
        assert_eq!(manager.current(), Theme::Dark);
    }

    #[test]
    fn stored_light_preference_is_restored() {
        let manager = ThemeManager::load(store_with("light"));
        assert_eq!(manager.current(), Theme::Light);
    }

    #[test]
    fn toggle_persists_new_value() {
        let mut manager = ThemeManager::load(MemoryStore::default());

        let next = manager.toggle();
        assert_eq!(next, Theme::Light);
        assert_eq!(manager.store().read(THEME_KEY).as_deref(), Some("light"));
    }

    #[test]
    fn toggling_twice_restores_theme_and_stored_flag() {
        let mut manager = ThemeManager::load(store_with("light"));

        manager.toggle();
        manager.toggle();

        assert_eq!(manager.current(), Theme::Light);
        assert_eq!(manager.store().read(THEME_KEY).as_deref(), Some("light"));
    }

    #[test]
    fn icon_points_at_the_other_theme() {
        assert_eq!(Theme::Dark.icon_class(), "fas fa-sun");
        assert_eq!(Theme::Light.icon_class(), "fas fa-moon");
        assert_eq!(Theme::Dark.toggle_label(), "Switch to light theme");
    }
}
