//! In-page anchors, feature card links and keyboard activation.

use std::collections::HashMap;

/// Where sections sit on the rendered page.
pub trait Layout {
    /// Distance in pixels from the top of the document to the element with
    /// this id, or `None` if there is no such element.
    fn offset_top(&self, id: &str) -> Option<i32>;
}

/// A fixed table of section offsets.
#[derive(Debug, Clone, Default)]
pub struct StaticLayout {
    sections: HashMap<String, i32>,
}

impl StaticLayout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_section(mut self, id: impl Into<String>, offset_top: i32) -> Self {
        self.sections.insert(id.into(), offset_top);
        self
    }
}

impl Layout for StaticLayout {
    fn offset_top(&self, id: &str) -> Option<i32> {
        self.sections.get(id).copied()
    }
}

/// How an anchor click is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorAction {
    /// Leave it to the browser.
    Ignore,
    /// Smooth-scroll to this position instead of jumping.
    ScrollTo(i32),
}

/// Resolves an anchor click against the layout.
///
/// A bare `#`, a link that is not a fragment, and a fragment with no matching
/// element are all left alone. Otherwise the target is brought to
/// `scroll_offset` pixels below the top of the viewport, never above the
/// start of the document.
pub fn resolve_anchor<L: Layout + ?Sized>(href: &str, layout: &L, scroll_offset: i32) -> AnchorAction {
    if href == "#" {
        return AnchorAction::Ignore;
    }
    let Some(id) = href.strip_prefix('#') else {
        return AnchorAction::Ignore;
    };
    match layout.offset_top(id) {
        Some(top) => AnchorAction::ScrollTo(top.saturating_sub(scroll_offset).max(0)),
        None => AnchorAction::Ignore,
    }
}

/// Whether a feature card click should be suppressed.
///
/// Cards without a real destination (empty, `#`, or the current page) would
/// only reload or jump to the top.
pub fn should_prevent(href: &str, current_location: &str) -> bool {
    href.is_empty() || href == "#" || href == current_location
}

/// Whether a key activates a button-like control: Enter or Space.
///
/// Accepts both the `KeyboardEvent.key` value for space (`" "`) and the
/// names some hosts report (`"Space"`, `"Spacebar"`).
pub fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " " | "Space" | "Spacebar")
}
