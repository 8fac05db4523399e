//! The page controller.
//!
//! [`Page`] owns every behavior on the page and is the single entry point
//! for events. Each [`PageEvent`] is handled to completion and returns the
//! effects to apply, in order. Nothing on the page runs concurrently; timers
//! fire only when the host calls [`Page::advance`].
//!
//! ```rust
//! use strands_page::{Effect, Page, PageConfig, PageEvent, Target};
//! use strands_theme::Theme;
//!
//! let mut page = Page::new(PageConfig::default(), None, Theme::Light);
//! page.dispatch(PageEvent::Loaded);
//!
//! let effects = page.dispatch(PageEvent::ThemeToggleClicked);
//! assert!(effects.contains(&Effect::SetAttribute {
//!     target: Target::Root,
//!     name: "data-theme",
//!     value: "dark".into(),
//! }));
//! ```

use std::time::Duration;

use strands_theme::{toggle_label, Theme, ThemeEffect, ThemeResolver, ThemeState, THEME_KEY};

use crate::config::PageConfig;
use crate::effect::{Effect, Target};
use crate::frame::{FrameState, GameFrame};
use crate::links::{is_activation_key, resolve_anchor, should_prevent, AnchorAction, Layout, StaticLayout};
use crate::nav::MobileNav;
use crate::subscribe::{SubscribeForm, Submission};
use crate::timers::{TimerQueue, TimerToken};
use crate::toast::Toasts;

/// Something that happened on the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageEvent {
    /// The document finished loading.
    Loaded,
    ThemeToggleClicked,
    /// A key was pressed while the theme toggle had focus.
    ThemeToggleKey(String),
    /// The OS color scheme changed.
    SystemSchemeChanged { prefers_dark: bool },
    MenuToggleClicked,
    /// A click anywhere on the document. `inside_menu` is true when it landed
    /// on the menu toggle or inside the drawer.
    DocumentClicked { inside_menu: bool },
    NavLinkClicked,
    SubscribeSubmitted { email: String },
    FrameLoaded,
    FrameFailed,
    FrameRetry,
    AnchorClicked { href: String, from_mobile_nav: bool },
    FeatureCardClicked { href: String },
    TimerFired(TimerToken),
}

/// Every behavior on the page, driven by [`PageEvent`]s.
#[derive(Debug)]
pub struct Page<L = StaticLayout> {
    config: PageConfig,
    theme: ThemeResolver,
    nav: MobileNav,
    toasts: Toasts,
    form: SubscribeForm,
    frame: GameFrame,
    timers: TimerQueue,
    layout: L,
    location: String,
}

impl Page<StaticLayout> {
    /// Builds a page with an empty layout.
    ///
    /// `stored` is the persisted theme preference, if any, and `system` the
    /// current OS reading.
    pub fn new(config: PageConfig, stored: Option<Theme>, system: Theme) -> Self {
        Self::with_layout(config, stored, system, StaticLayout::new())
    }
}

impl<L: Layout> Page<L> {
    pub fn with_layout(config: PageConfig, stored: Option<Theme>, system: Theme, layout: L) -> Self {
        // Load-time theme effects are emitted on `Loaded`, from the state at that point.
        let (theme, _) = ThemeResolver::initialize(stored, system);
        Self {
            config,
            theme,
            nav: MobileNav::new(),
            toasts: Toasts::new(),
            form: SubscribeForm::new(),
            frame: GameFrame::new(),
            timers: TimerQueue::new(),
            layout,
            location: String::new(),
        }
    }

    /// Sets the page's own URL, used to spot feature cards linking to it.
    pub fn at_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    pub fn theme_state(&self) -> &ThemeState {
        self.theme.state()
    }

    pub fn nav_open(&self) -> bool {
        self.nav.is_open()
    }

    pub fn toast(&self) -> Option<&str> {
        self.toasts.visible()
    }

    pub fn frame_state(&self) -> FrameState {
        self.frame.state()
    }

    pub fn subscriptions(&self) -> usize {
        self.form.accepted()
    }

    /// Elapsed time on the page clock.
    pub fn now(&self) -> Duration {
        self.timers.now()
    }

    /// Handles one event.
    pub fn dispatch(&mut self, event: PageEvent) -> Vec<Effect> {
        tracing::trace!(?event, "dispatch");
        match event {
            PageEvent::Loaded => self.on_loaded(),
            PageEvent::ThemeToggleClicked => self.toggle_theme(),
            PageEvent::ThemeToggleKey(key) => {
                if !is_activation_key(&key) {
                    return Vec::new();
                }
                let mut effects = vec![Effect::PreventDefault];
                effects.extend(self.toggle_theme());
                effects
            }
            PageEvent::SystemSchemeChanged { prefers_dark } => {
                let effects = self
                    .theme
                    .on_system_preference_changed(Theme::from_prefers_dark(prefers_dark));
                self.apply_theme_effects(effects)
            }
            PageEvent::MenuToggleClicked => self.nav.toggle(),
            PageEvent::DocumentClicked { inside_menu } => {
                if inside_menu {
                    Vec::new()
                } else {
                    self.nav.close()
                }
            }
            PageEvent::NavLinkClicked => self.nav.close(),
            PageEvent::SubscribeSubmitted { email } => self.on_submit(&email),
            PageEvent::FrameLoaded => self.frame.loaded(),
            PageEvent::FrameFailed => self.frame.failed(&self.config.frame_error_message),
            PageEvent::FrameRetry => self.frame.retry(),
            PageEvent::AnchorClicked {
                href,
                from_mobile_nav,
            } => self.on_anchor(&href, from_mobile_nav),
            PageEvent::FeatureCardClicked { href } => {
                if should_prevent(&href, &self.location) {
                    vec![Effect::PreventDefault]
                } else {
                    Vec::new()
                }
            }
            PageEvent::TimerFired(token) => self.on_timer(token),
        }
    }

    /// Moves the page clock forward, firing timers as they come due.
    ///
    /// A timer that schedules another one (the welcome toast scheduling its
    /// own dismissal) is measured from its own due time, not from the end
    /// of the advance.
    pub fn advance(&mut self, by: Duration) -> Vec<Effect> {
        let until = self.timers.now() + by;
        let mut effects = Vec::new();
        while let Some(token) = self.timers.pop_due(until) {
            effects.extend(self.dispatch(PageEvent::TimerFired(token)));
        }
        self.timers.advance_to(until);
        effects
    }

    fn on_loaded(&mut self) -> Vec<Effect> {
        let active = self.theme.state().active();
        let mut effects = self.apply_theme_effects(vec![
            ThemeEffect::Apply(active),
            ThemeEffect::Label(toggle_label(active)),
        ]);
        effects.extend(self.nav.initial_effects());
        self.timers
            .schedule(self.config.welcome_delay(), TimerToken::Welcome);
        effects
    }

    fn toggle_theme(&mut self) -> Vec<Effect> {
        let effects = self.theme.toggle();
        self.apply_theme_effects(effects)
    }

    fn on_submit(&mut self, email: &str) -> Vec<Effect> {
        let mut effects = vec![Effect::PreventDefault];
        if let Submission::Accepted(_) = self.form.submit(email) {
            effects.push(Effect::ClearInput {
                target: Target::SubscribeInput,
            });
            let message = self.config.subscribe_message.clone();
            effects.push(self.show_toast(message));
        }
        effects
    }

    fn on_anchor(&mut self, href: &str, from_mobile_nav: bool) -> Vec<Effect> {
        let action = resolve_anchor(href, &self.layout, self.config.scroll_offset);
        let mut effects = Vec::new();
        if let AnchorAction::ScrollTo(_) = action {
            effects.push(Effect::PreventDefault);
        }
        // Drawer links close the drawer whether or not the target exists.
        if from_mobile_nav {
            effects.extend(self.nav.close());
        }
        if let AnchorAction::ScrollTo(top) = action {
            effects.push(Effect::ScrollTo { top, smooth: true });
        }
        effects
    }

    fn on_timer(&mut self, token: TimerToken) -> Vec<Effect> {
        match token {
            TimerToken::Welcome => {
                let message = self.config.welcome_message.clone();
                vec![self.show_toast(message)]
            }
            TimerToken::HideToast(generation) => self.toasts.expire(generation),
        }
    }

    fn show_toast(&mut self, message: String) -> Effect {
        self.toasts
            .show(message, self.config.toast_duration(), &mut self.timers)
    }

    fn apply_theme_effects(&mut self, effects: Vec<ThemeEffect>) -> Vec<Effect> {
        effects
            .into_iter()
            .map(|effect| match effect {
                ThemeEffect::Apply(theme) => Effect::attribute(Target::Root, "data-theme", theme.as_str()),
                ThemeEffect::Label(label) => Effect::attribute(Target::ThemeToggle, "aria-label", label),
                ThemeEffect::Persist(theme) => Effect::Persist {
                    key: THEME_KEY,
                    value: theme.as_str().to_string(),
                },
                ThemeEffect::Notify(message) => self.show_toast(message),
            })
            .collect()
    }
}
