//! Local UI chrome state (theme).
//!
//! DESIGN
//! ======
//! Keeps presentation concerns out of `chat` so the theme can be toggled and
//! synced independently of identity and history.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::error::StoreError;
use crate::store::ChatStorage;

/// Color scheme, persisted as `"light"` or `"dark"`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// UI state for the theme.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub theme: Theme,
    /// Fallback when nothing valid is stored.
    pub default_theme: Theme,
}

impl UiState {
    /// Read the stored theme (or the default) and write it back so every tab
    /// sees an explicit value.
    pub fn load(storage: &ChatStorage, default_theme: Theme) -> Self {
        let theme = storage.load_theme().unwrap_or(default_theme);
        if let Err(err) = storage.save_theme(theme) {
            log::warn!("failed to persist theme: {err}");
        }
        Self { theme, default_theme }
    }

    /// Flip light/dark and persist the choice.
    ///
    /// The new theme takes effect in this tab even if the write fails.
    pub fn toggle_theme(&mut self, storage: &ChatStorage) -> Result<Theme, StoreError> {
        self.theme = self.theme.toggled();
        storage.save_theme(self.theme)?;
        Ok(self.theme)
    }

    /// Adopt whatever theme is stored now, falling back to the default.
    pub fn reload_theme(&mut self, storage: &ChatStorage) -> Theme {
        self.theme = storage.load_theme().unwrap_or(self.default_theme);
        self.theme
    }
}
