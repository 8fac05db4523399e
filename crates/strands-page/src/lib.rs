//! # Strands Page - Headless Page Behavior
//!
//! `strands-page` models the interactive parts of the Strands site as plain
//! state plus effect lists: the theme toggle (through [`strands_theme`]), the
//! mobile navigation drawer, toasts, the subscribe form, the embedded game
//! frame, in-page anchor scrolling and feature card links.
//!
//! Hosts translate DOM (or terminal, or test) input into [`PageEvent`]s, pass
//! them to [`Page::dispatch`], and apply the returned [`Effect`]s in order.
//! Timers run on a virtual clock advanced with [`Page::advance`].
//!
//! ```rust
//! use std::time::Duration;
//! use strands_page::{Effect, Page, PageConfig, PageEvent};
//! use strands_theme::Theme;
//!
//! let mut page = Page::new(PageConfig::default(), None, Theme::Dark);
//! page.dispatch(PageEvent::Loaded);
//!
//! let effects = page.advance(Duration::from_millis(1000));
//! assert_eq!(effects, vec![Effect::ShowToast {
//!     message: "Welcome to Strands Unlimited!".into(),
//! }]);
//! ```

pub mod config;
mod effect;
mod frame;
pub mod links;
mod nav;
mod page;
pub mod script;
mod subscribe;
mod timers;
mod toast;

pub use config::{ConfigError, PageConfig};
pub use effect::{Effect, Target};
pub use frame::{FrameState, GameFrame};
pub use links::{Layout, StaticLayout};
pub use nav::MobileNav;
pub use page::{Page, PageEvent};
pub use script::{Script, ScriptError, StepOutcome};
pub use subscribe::{SubscribeForm, Submission};
pub use timers::{TimerQueue, TimerToken};
pub use toast::Toasts;
