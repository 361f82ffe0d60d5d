//! # folio Visitor Preferences
//!
//! File: cli/src/prefs/mod.rs
//!
//! ## Overview
//!
//! The site remembers two things about a visitor: the chosen visual theme and
//! their accessibility settings. They are stored under two keys:
//!
//! - `portfolio-theme`: the theme id, e.g. `terminal`.
//! - `portfolio-a11y`: a JSON object, see `a11y`.
//!
//! `Preferences` loads both once, then writes through on every change. A
//! failed write is logged and otherwise ignored; the in-memory value still
//! changes, it just will not survive a restart.
//!
//! ## Architecture
//!
//! - `theme`: the `Theme` enum.
//! - `a11y`: `A11yPrefs`, `A11yPatch` and the CSS effects they produce.
//! - `store`: the `KeyValueStore` trait with file and memory backends.
//!
use tracing::{debug, warn};

pub mod a11y;
pub mod store;
pub mod theme;

pub use a11y::{A11yPatch, A11yPrefs};
pub use store::{JsonFileStore, KeyValueStore, MemoryStore};
pub use theme::Theme;

pub const THEME_KEY: &str = "portfolio-theme";
pub const A11Y_KEY: &str = "portfolio-a11y";

pub struct Preferences<S: KeyValueStore> {
    store: S,
    theme: Theme,
    a11y: A11yPrefs,
}

impl<S: KeyValueStore> Preferences<S> {
    /// Reads both keys. Anything missing, unreadable or invalid falls back to
    /// its default.
    pub fn load(store: S) -> Self {
        let theme = match store.get(THEME_KEY) {
            Ok(Some(id)) => id.parse::<Theme>().unwrap_or_else(|_| {
                debug!("Ignoring stored theme '{}'", id);
                Theme::default()
            }),
            Ok(None) => Theme::default(),
            Err(e) => {
                warn!("Could not read saved theme: {:#}", e);
                Theme::default()
            }
        };
        let a11y = match store.get(A11Y_KEY) {
            Ok(Some(raw)) => A11yPrefs::from_stored(&raw),
            Ok(None) => A11yPrefs::default(),
            Err(e) => {
                warn!("Could not read saved accessibility settings: {:#}", e);
                A11yPrefs::default()
            }
        };
        Self { store, theme, a11y }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn a11y(&self) -> &A11yPrefs {
        &self.a11y
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Switches theme. Unknown ids leave everything unchanged and return
    /// `false`.
    pub fn set_theme(&mut self, id: &str) -> bool {
        match id.parse::<Theme>() {
            Ok(theme) => {
                self.theme = theme;
                self.save_theme();
                true
            }
            Err(_) => {
                debug!("Ignoring unknown theme '{}'", id);
                false
            }
        }
    }

    pub fn update_a11y(&mut self, patch: A11yPatch) {
        self.a11y.apply(patch);
        self.save_a11y();
    }

    /// Back to the default theme and accessibility settings.
    pub fn reset(&mut self) {
        self.theme = Theme::default();
        self.a11y = A11yPrefs::default();
        self.save_theme();
        self.save_a11y();
    }

    fn save_theme(&mut self) {
        if let Err(e) = self.store.set(THEME_KEY, self.theme.id()) {
            warn!("Theme not saved: {:#}", e);
        }
    }

    fn save_a11y(&mut self) {
        if let Err(e) = self.store.set(A11Y_KEY, &self.a11y.to_stored()) {
            warn!("Accessibility settings not saved: {:#}", e);
        }
    }
}
