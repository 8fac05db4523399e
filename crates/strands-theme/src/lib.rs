//! # Strands Theme - Light/Dark Preference Resolution
//!
//! `strands-theme` decides which display theme a page shows and keeps that
//! decision in sync with three inputs:
//!
//! - an explicit user toggle,
//! - a persisted preference (one key, `"theme"`),
//! - the operating system's color scheme, which can change at runtime.
//!
//! ## Core Concepts
//!
//! - [`Theme`]: `light` or `dark`
//! - [`ThemeState`]: stored, system and active theme, owned by one resolver
//! - [`ThemeResolver`]: reduces [`ThemeEvent`]s into [`ThemeEffect`]s
//! - [`PreferenceStore`]: where the explicit choice lives ([`FileStore`], [`MemoryStore`])
//! - [`ThemeSession`]: a resolver that writes its choices to a store
//! - [`SystemWatcher`]: turns OS readings into change events
//!
//! ## Precedence
//!
//! A stored preference always wins. Without one, the latest system reading
//! is applied. Toggling always stores the new theme, after which system
//! changes are recorded but no longer applied.
//!
//! ```rust
//! use strands_theme::{MemoryStore, Theme, ThemeSession};
//!
//! let (mut session, _) = ThemeSession::initialize(MemoryStore::new(), Theme::Dark).unwrap();
//! assert_eq!(session.state().active(), Theme::Dark);
//!
//! session.toggle().unwrap();
//! assert_eq!(session.state().active(), Theme::Light);
//!
//! // Explicit choice now beats the OS
//! let effects = session.on_system_preference_changed(Theme::Dark).unwrap();
//! assert!(effects.is_empty());
//! ```

mod resolver;
mod session;
mod state;
pub mod store;
mod system;
mod theme;

pub use resolver::{toggle_label, ThemeEffect, ThemeEvent, ThemeResolver};
pub use session::ThemeSession;
pub use state::{PreferenceSource, ThemeState};
pub use store::{FileStore, MemoryStore, PreferenceStore, StoreError, THEME_KEY};
pub use system::{
    detect_system_theme, reset_scheme_detector, set_scheme_detector, SchemeDetector,
    SystemWatcher,
};
pub use theme::{Theme, ThemeParseError};
