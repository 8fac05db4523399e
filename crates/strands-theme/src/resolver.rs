//! Theme preference resolution.
//!
//! [`ThemeResolver`] owns a [`ThemeState`] and reduces [`ThemeEvent`]s into
//! [`ThemeEffect`]s. It never touches storage or the OS itself; callers apply
//! the effects it returns.
//!
//! Precedence is fixed:
//!
//! 1. A stored (explicit) preference always wins.
//! 2. Without one, the latest system reading is applied.
//!
//! ```rust
//! use strands_theme::{Theme, ThemeEffect, ThemeResolver};
//!
//! let (mut resolver, _) = ThemeResolver::initialize(None, Theme::Light);
//! let effects = resolver.toggle();
//!
//! assert_eq!(resolver.state().active(), Theme::Dark);
//! assert!(effects.contains(&ThemeEffect::Persist(Theme::Dark)));
//! assert!(effects.contains(&ThemeEffect::Notify("Switched to dark theme".into())));
//! ```

use serde::Serialize;

use crate::{Theme, ThemeState};

/// An input to the resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeEvent {
    /// The user activated the theme toggle (pointer or keyboard).
    Toggled,
    /// The OS color scheme changed.
    SystemChanged(Theme),
}

/// A side effect requested by the resolver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "effect", content = "value", rename_all = "snake_case")]
pub enum ThemeEffect {
    /// Set the document-root theme attribute.
    Apply(Theme),
    /// Set the toggle control's accessible label.
    Label(&'static str),
    /// Write the explicit preference.
    Persist(Theme),
    /// Show a transient notification.
    Notify(String),
}

/// Accessible label for the toggle: it names the theme the control switches *to*.
pub fn toggle_label(active: Theme) -> &'static str {
    match active {
        Theme::Dark => "Switch to light theme",
        Theme::Light => "Switch to dark theme",
    }
}

pub(crate) fn switched_message(theme: Theme) -> String {
    format!("Switched to {} theme", theme)
}

pub(crate) fn detected_message(theme: Theme) -> String {
    format!("System theme detected: {}", theme)
}

/// Owns the theme state and applies events to it.
#[derive(Debug, Clone)]
pub struct ThemeResolver {
    state: ThemeState,
}

impl ThemeResolver {
    /// Builds the startup state from the stored preference and the current
    /// system reading.
    ///
    /// Returns the effects needed to bring the page in line: the applied
    /// theme and the toggle label. Nothing is persisted here.
    pub fn initialize(stored: Option<Theme>, system: Theme) -> (Self, Vec<ThemeEffect>) {
        let resolver = Self {
            state: ThemeState::new(stored, system),
        };
        let active = resolver.state.active();
        tracing::debug!(%active, source = ?resolver.state.source(), "theme initialized");
        (
            resolver,
            vec![ThemeEffect::Apply(active), ThemeEffect::Label(toggle_label(active))],
        )
    }

    pub fn state(&self) -> &ThemeState {
        &self.state
    }

    /// Switches to the opposite theme and makes it the explicit preference.
    pub fn toggle(&mut self) -> Vec<ThemeEffect> {
        let next = self.state.active().opposite();
        self.state.choose(next);
        tracing::debug!(theme = %next, "theme toggled");
        vec![
            ThemeEffect::Apply(next),
            ThemeEffect::Persist(next),
            ThemeEffect::Label(toggle_label(next)),
            ThemeEffect::Notify(switched_message(next)),
        ]
    }

    /// Handles an OS color-scheme change.
    ///
    /// With an explicit preference stored this only records the reading and
    /// returns no effects.
    pub fn on_system_preference_changed(&mut self, theme: Theme) -> Vec<ThemeEffect> {
        if !self.state.observe_system(theme) {
            tracing::debug!(system = %theme, "system theme change ignored, explicit preference set");
            return Vec::new();
        }
        tracing::debug!(%theme, "following system theme");
        vec![
            ThemeEffect::Apply(theme),
            ThemeEffect::Label(toggle_label(theme)),
            ThemeEffect::Notify(detected_message(theme)),
        ]
    }

    /// Reduces a single event.
    pub fn dispatch(&mut self, event: ThemeEvent) -> Vec<ThemeEffect> {
        match event {
            ThemeEvent::Toggled => self.toggle(),
            ThemeEvent::SystemChanged(theme) => self.on_system_preference_changed(theme),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initialize_no_stored_system_dark() {
        let (resolver, effects) = ThemeResolver::initialize(None, Theme::Dark);
        assert_eq!(resolver.state().active(), Theme::Dark);
        assert_eq!(
            effects,
            vec![
                ThemeEffect::Apply(Theme::Dark),
                ThemeEffect::Label("Switch to light theme"),
            ]
        );
    }

    #[test]
    fn test_initialize_stored_light_system_dark() {
        let (resolver, effects) = ThemeResolver::initialize(Some(Theme::Light), Theme::Dark);
        assert_eq!(resolver.state().active(), Theme::Light);
        assert_eq!(
            effects,
            vec![
                ThemeEffect::Apply(Theme::Light),
                ThemeEffect::Label("Switch to dark theme"),
            ]
        );
    }

    #[test]
    fn test_initialize_never_persists() {
        for stored in [None, Some(Theme::Light), Some(Theme::Dark)] {
            for system in Theme::ALL {
                let (_, effects) = ThemeResolver::initialize(stored, system);
                assert!(!effects
                    .iter()
                    .any(|e| matches!(e, ThemeEffect::Persist(_))));
            }
        }
    }

    #[test]
    fn test_toggle_from_light() {
        let (mut resolver, _) = ThemeResolver::initialize(None, Theme::Light);
        let effects = resolver.toggle();

        assert_eq!(resolver.state().active(), Theme::Dark);
        assert_eq!(resolver.state().stored(), Some(Theme::Dark));
        assert_eq!(
            effects,
            vec![
                ThemeEffect::Apply(Theme::Dark),
                ThemeEffect::Persist(Theme::Dark),
                ThemeEffect::Label("Switch to light theme"),
                ThemeEffect::Notify("Switched to dark theme".to_string()),
            ]
        );
    }

    #[test]
    fn test_toggle_twice_restores() {
        let (mut resolver, _) = ThemeResolver::initialize(None, Theme::Dark);
        resolver.toggle();
        resolver.toggle();
        assert_eq!(resolver.state().active(), Theme::Dark);
        assert_eq!(resolver.state().stored(), Some(Theme::Dark));
    }

    #[test]
    fn test_system_change_ignored_with_stored() {
        let (mut resolver, _) = ThemeResolver::initialize(Some(Theme::Light), Theme::Light);
        let effects = resolver.on_system_preference_changed(Theme::Dark);
        assert!(effects.is_empty());
        assert_eq!(resolver.state().active(), Theme::Light);
    }

    #[test]
    fn test_system_change_followed_without_stored() {
        let (mut resolver, _) = ThemeResolver::initialize(None, Theme::Light);
        let effects = resolver.on_system_preference_changed(Theme::Dark);
        assert_eq!(resolver.state().active(), Theme::Dark);
        assert_eq!(
            effects,
            vec![
                ThemeEffect::Apply(Theme::Dark),
                ThemeEffect::Label("Switch to light theme"),
                ThemeEffect::Notify("System theme detected: dark".to_string()),
            ]
        );
    }

    #[test]
    fn test_system_change_ignored_after_toggle() {
        let (mut resolver, _) = ThemeResolver::initialize(None, Theme::Light);
        resolver.toggle();
        assert!(resolver
            .on_system_preference_changed(Theme::Light)
            .is_empty());
        assert_eq!(resolver.state().active(), Theme::Dark);
    }

    #[test]
    fn test_dispatch_matches_direct_calls() {
        let (mut a, _) = ThemeResolver::initialize(None, Theme::Light);
        let (mut b, _) = ThemeResolver::initialize(None, Theme::Light);

        assert_eq!(a.dispatch(ThemeEvent::Toggled), b.toggle());
        assert_eq!(
            a.dispatch(ThemeEvent::SystemChanged(Theme::Dark)),
            b.on_system_preference_changed(Theme::Dark)
        );
    }

    #[test]
    fn test_effect_serializes_tagged() {
        let json = serde_json::to_value(ThemeEffect::Apply(Theme::Dark)).unwrap();
        assert_eq!(json["effect"], "apply");
        assert_eq!(json["value"], "dark");
    }
}
