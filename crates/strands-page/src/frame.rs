//! Loading state of the embedded game frame.

use serde::Serialize;

use crate::effect::Effect;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FrameState {
    #[default]
    Loading,
    Loaded,
    Failed,
}

/// The game frame and its overlay.
///
/// The overlay shows a spinner while loading. On failure it shows the error
/// message and a retry action, which reloads the page.
#[derive(Debug, Clone, Default)]
pub struct GameFrame {
    state: FrameState,
}

impl GameFrame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> FrameState {
        self.state
    }

    pub fn loaded(&mut self) -> Vec<Effect> {
        self.state = FrameState::Loaded;
        vec![Effect::HideFrameOverlay]
    }

    pub fn failed(&mut self, message: &str) -> Vec<Effect> {
        self.state = FrameState::Failed;
        tracing::debug!("game frame failed to load");
        vec![Effect::ShowFrameError {
            message: message.to_string(),
        }]
    }

    /// The retry action only exists on the error overlay.
    pub fn retry(&mut self) -> Vec<Effect> {
        if self.state != FrameState::Failed {
            return Vec::new();
        }
        self.state = FrameState::Loading;
        vec![Effect::ShowFrameOverlay, Effect::Reload]
    }
}
