use std::cell::Cell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

/// Light/dark presentation theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }
}

#[derive(Debug, Default)]
struct ThemeInputs {
    system_prefers_dark: Cell<bool>,
    dark_toggle: Cell<bool>,
}

/// Shared, single-threaded theme flag.
///
/// The host's theme observer owns the writes; the lifecycle manager only
/// reads. The effective theme is dark when either the explicit host toggle
/// or the system preference says so.
#[derive(Debug, Clone, Default)]
pub struct ThemeState {
    inputs: Rc<ThemeInputs>,
}

impl ThemeState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_theme(theme: Theme) -> Self {
        let state = Self::default();
        state.set_dark_toggle(theme.is_dark());
        state
    }

    pub fn set_system_prefers_dark(&self, prefers_dark: bool) {
        self.inputs.system_prefers_dark.set(prefers_dark);
    }

    pub fn set_dark_toggle(&self, enabled: bool) {
        self.inputs.dark_toggle.set(enabled);
    }

    #[must_use]
    pub fn current(&self) -> Theme {
        if self.inputs.dark_toggle.get() || self.inputs.system_prefers_dark.get() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}
