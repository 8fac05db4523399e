//! Mobile navigation drawer.

use crate::effect::{Effect, Target};

/// Open/closed state of the mobile drawer and its toggle's `aria-expanded`.
#[derive(Debug, Clone, Default)]
pub struct MobileNav {
    open: bool,
}

impl MobileNav {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) -> Vec<Effect> {
        self.open = !self.open;
        self.sync()
    }

    /// Closes the drawer. Effects are emitted even when it was already closed.
    pub fn close(&mut self) -> Vec<Effect> {
        self.open = false;
        self.sync()
    }

    /// The load-time accessibility state.
    pub fn initial_effects(&self) -> Vec<Effect> {
        vec![Effect::attribute(
            Target::MenuToggle,
            "aria-expanded",
            self.open.to_string(),
        )]
    }

    fn sync(&self) -> Vec<Effect> {
        vec![
            Effect::SetClass {
                target: Target::MobileNav,
                class: "active",
                enabled: self.open,
            },
            Effect::attribute(Target::MenuToggle, "aria-expanded", self.open.to_string()),
        ]
    }
}
