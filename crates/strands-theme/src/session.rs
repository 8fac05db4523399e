//! A resolver bound to a preference store.

use crate::store::{load_theme, save_theme, PreferenceStore, StoreError};
use crate::{Theme, ThemeEffect, ThemeEvent, ThemeResolver, ThemeState};

/// Couples a [`ThemeResolver`] with the store that holds the explicit
/// preference, applying `Persist` effects as they are produced.
///
/// Effects returned from the session never contain [`ThemeEffect::Persist`];
/// those have already been written.
#[derive(Debug)]
pub struct ThemeSession<S> {
    resolver: ThemeResolver,
    store: S,
}

impl<S: PreferenceStore> ThemeSession<S> {
    /// Reads the stored preference once and resolves the startup theme.
    pub fn initialize(store: S, system: Theme) -> Result<(Self, Vec<ThemeEffect>), StoreError> {
        let stored = load_theme(&store)?;
        let (resolver, effects) = ThemeResolver::initialize(stored, system);
        Ok((Self { resolver, store }, effects))
    }

    pub fn state(&self) -> &ThemeState {
        self.resolver.state()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Gives the store back.
    pub fn into_store(self) -> S {
        self.store
    }

    pub fn toggle(&mut self) -> Result<Vec<ThemeEffect>, StoreError> {
        self.dispatch(ThemeEvent::Toggled)
    }

    pub fn on_system_preference_changed(&mut self, theme: Theme) -> Result<Vec<ThemeEffect>, StoreError> {
        self.dispatch(ThemeEvent::SystemChanged(theme))
    }

    /// Reduces an event and writes any preference it produced.
    ///
    /// On a store failure the in-memory state has already moved on; the
    /// error only reports that the choice will not survive the session.
    pub fn dispatch(&mut self, event: ThemeEvent) -> Result<Vec<ThemeEffect>, StoreError> {
        let mut remaining = Vec::new();
        for effect in self.resolver.dispatch(event) {
            match effect {
                ThemeEffect::Persist(theme) => save_theme(&mut self.store, theme)?,
                other => remaining.push(other),
            }
        }
        Ok(remaining)
    }
}
