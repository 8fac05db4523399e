//! Resolver state.

use serde::Serialize;

use crate::Theme;

/// Where the active theme came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PreferenceSource {
    /// The user made an explicit choice that was persisted.
    Stored,
    /// No explicit choice; following the OS color scheme.
    System,
}

/// The three theme values tracked by the resolver.
///
/// `active` is always derived: it equals `stored` when that is set, and the
/// latest `system` reading otherwise. Fields are private so the only way to
/// change them is through the resolver, which keeps that relation intact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ThemeState {
    stored: Option<Theme>,
    system: Theme,
    active: Theme,
}

impl ThemeState {
    pub fn new(stored: Option<Theme>, system: Theme) -> Self {
        Self {
            stored,
            system,
            active: stored.unwrap_or(system),
        }
    }

    pub fn stored(&self) -> Option<Theme> {
        self.stored
    }

    pub fn system(&self) -> Theme {
        self.system
    }

    pub fn active(&self) -> Theme {
        self.active
    }

    pub fn source(&self) -> PreferenceSource {
        if self.stored.is_some() {
            PreferenceSource::Stored
        } else {
            PreferenceSource::System
        }
    }

    /// Records an explicit choice. It becomes both stored and active.
    pub(crate) fn choose(&mut self, theme: Theme) {
        self.stored = Some(theme);
        self.active = theme;
    }

    /// Records a system reading. Returns `true` if the active theme followed it.
    pub(crate) fn observe_system(&mut self, theme: Theme) -> bool {
        self.system = theme;
        if self.stored.is_some() {
            return false;
        }
        self.active = theme;
        true
    }
}
