//! Virtual-clock timers.
//!
//! Nothing here sleeps. The host moves the clock forward and the queue hands
//! back whatever came due, in due order, on the caller's thread.

use std::time::Duration;

use serde::Serialize;

/// What a timer does when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "timer", content = "generation", rename_all = "snake_case")]
pub enum TimerToken {
    /// Show the welcome toast.
    Welcome,
    /// Dismiss the toast shown in this generation.
    HideToast(u64),
}

#[derive(Debug, Clone)]
struct Pending {
    due: Duration,
    seq: u64,
    token: TimerToken,
}

#[derive(Debug, Clone, Default)]
pub struct TimerQueue {
    now: Duration,
    seq: u64,
    pending: Vec<Pending>,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Time elapsed on the virtual clock.
    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Schedules `token` to fire `after` from now.
    pub fn schedule(&mut self, after: Duration, token: TimerToken) {
        self.seq += 1;
        self.pending.push(Pending {
            due: self.now + after,
            seq: self.seq,
            token,
        });
    }

    /// Removes and returns the earliest timer due at or before `until`,
    /// moving the clock to its due time. Ties fire in scheduling order.
    ///
    /// Returns `None` without touching the clock when nothing is due.
    pub fn pop_due(&mut self, until: Duration) -> Option<TimerToken> {
        let index = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, p)| p.due <= until)
            .min_by_key(|(_, p)| (p.due, p.seq))
            .map(|(i, _)| i)?;
        let timer = self.pending.swap_remove(index);
        self.now = self.now.max(timer.due);
        Some(timer.token)
    }

    /// Moves the clock to `until` if that is later than now.
    pub fn advance_to(&mut self, until: Duration) {
        self.now = self.now.max(until);
    }

    /// Moves the clock forward by `by` and returns every token that came due.
    ///
    /// Use this when firing a timer never schedules another one; otherwise
    /// drive [`pop_due`](Self::pop_due) so new timers are seen.
    pub fn advance(&mut self, by: Duration) -> Vec<TimerToken> {
        let until = self.now + by;
        let mut fired = Vec::new();
        while let Some(token) = self.pop_due(until) {
            fired.push(token);
        }
        self.advance_to(until);
        fired
    }
}
