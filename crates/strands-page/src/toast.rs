//! Transient toast notifications.

use std::time::Duration;

use crate::effect::Effect;
use crate::timers::{TimerQueue, TimerToken};

/// The single toast slot.
///
/// Each `show` starts a new generation. A hide timer only dismisses the toast
/// of its own generation, so a toast replaced mid-way keeps its full duration.
#[derive(Debug, Clone, Default)]
pub struct Toasts {
    visible: Option<String>,
    generation: u64,
}

impl Toasts {
    pub fn new() -> Self {
        Self::default()
    }

    /// The message currently on screen.
    pub fn visible(&self) -> Option<&str> {
        self.visible.as_deref()
    }

    /// Shows `message` and schedules its dismissal after `duration`.
    pub fn show(
        &mut self,
        message: impl Into<String>,
        duration: Duration,
        timers: &mut TimerQueue,
    ) -> Effect {
        let message = message.into();
        self.generation += 1;
        self.visible = Some(message.clone());
        timers.schedule(duration, TimerToken::HideToast(self.generation));
        tracing::debug!(generation = self.generation, %message, "toast shown");
        Effect::ShowToast { message }
    }

    /// Handles a hide timer. Stale generations are ignored.
    pub fn expire(&mut self, generation: u64) -> Vec<Effect> {
        if generation != self.generation || self.visible.is_none() {
            return Vec::new();
        }
        self.visible = None;
        vec![Effect::HideToast]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_then_expire() {
        let mut timers = TimerQueue::new();
        let mut toasts = Toasts::new();

        let effect = toasts.show("hello", Duration::from_millis(3000), &mut timers);
        assert_eq!(
            effect,
            Effect::ShowToast {
                message: "hello".into()
            }
        );
        assert_eq!(toasts.visible(), Some("hello"));

        let fired = timers.advance(Duration::from_millis(3000));
        assert_eq!(fired, vec![TimerToken::HideToast(1)]);
        assert_eq!(toasts.expire(1), vec![Effect::HideToast]);
        assert_eq!(toasts.visible(), None);
    }

    #[test]
    fn test_stale_timer_does_not_hide_newer_toast() {
        let mut timers = TimerQueue::new();
        let mut toasts = Toasts::new();
        let duration = Duration::from_millis(3000);

        toasts.show("first", duration, &mut timers);
        timers.advance(Duration::from_millis(2000));
        toasts.show("second", duration, &mut timers);

        // First toast's timer fires at 3000
        assert_eq!(
            timers.advance(Duration::from_millis(1000)),
            vec![TimerToken::HideToast(1)]
        );
        assert!(toasts.expire(1).is_empty());
        assert_eq!(toasts.visible(), Some("second"));

        assert_eq!(
            timers.advance(Duration::from_millis(2000)),
            vec![TimerToken::HideToast(2)]
        );
        assert_eq!(toasts.expire(2), vec![Effect::HideToast]);
    }

    #[test]
    fn test_expire_twice_is_noop() {
        let mut timers = TimerQueue::new();
        let mut toasts = Toasts::new();
        toasts.show("once", Duration::ZERO, &mut timers);
        assert_eq!(toasts.expire(1).len(), 1);
        assert!(toasts.expire(1).is_empty());
    }
}
