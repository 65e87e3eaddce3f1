//! Cycling theme switcher.
//!
//! Each click moves to the next theme and wraps around. The choice is
//! remembered in a [`KeyValueStore`] between visits.

use crate::error::WidgetError;
use folio_traits::{KeyValueStore, StoreError};
use serde::{Deserialize, Serialize};

pub const THEME_STORAGE_KEY: &str = "portfolio-theme";

/// How long the body keeps its transition style after a switch.
pub const THEME_TRANSITION_MS: u32 = 300;

/// How long the toggle button stays pressed-in after a click.
pub const PRESS_FEEDBACK_MS: u32 = 150;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    /// Value written to the body's `data-theme` attribute.
    pub name: String,
    /// Text shown on the toggle.
    pub label: String,
}

impl Theme {
    pub fn new(name: &str, label: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ThemeConfig {
    pub themes: Vec<Theme>,
    pub storage_key: String,
    pub transition_ms: u32,
    pub press_feedback_ms: u32,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            themes: vec![
                Theme::new("default", "Indigo"),
                Theme::new("blue", "Ocean"),
                Theme::new("purple", "Purple"),
                Theme::new("green", "Forest"),
            ],
            storage_key: THEME_STORAGE_KEY.to_string(),
            transition_ms: THEME_TRANSITION_MS,
            press_feedback_ms: PRESS_FEEDBACK_MS,
        }
    }
}

#[derive(Debug)]
pub struct ThemeCycler<K: KeyValueStore> {
    themes: Vec<Theme>,
    index: usize,
    storage_key: String,
    store: K,
}

impl<K: KeyValueStore> ThemeCycler<K> {
    /// Creates a cycler positioned on the saved theme, or on the first theme
    /// when nothing usable was saved.
    ///
    /// # Errors
    ///
    /// Returns `WidgetError::NoThemes` for an empty theme list. A store that
    /// cannot be read is not an error; the first theme is used.
    pub fn restore(config: &ThemeConfig, store: K) -> Result<Self, WidgetError> {
        if config.themes.is_empty() {
            return Err(WidgetError::NoThemes);
        }

        let saved = match store.get(&config.storage_key) {
            Ok(saved) => saved,
            Err(e) => {
                log::warn!("Could not read saved theme: {}", e);
                None
            }
        };
        let index = saved
            .and_then(|name| config.themes.iter().position(|t| t.name == name))
            .unwrap_or(0);

        Ok(Self {
            themes: config.themes.clone(),
            index,
            storage_key: config.storage_key.clone(),
            store,
        })
    }

    pub fn current(&self) -> &Theme {
        &self.themes[self.index]
    }

    /// Moves to the next theme, wrapping after the last.
    pub fn advance(&mut self) -> &Theme {
        self.index = (self.index + 1) % self.themes.len();
        self.current()
    }

    /// Saves the current theme.
    pub fn persist(&self) -> Result<(), StoreError> {
        self.store.set(&self.storage_key, &self.current().name)
    }

    pub fn store(&self) -> &K {
        &self.store
    }
}
