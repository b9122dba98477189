//! Copy button label with a self-reverting confirmation.

use std::time::{Duration, Instant};

/// How long a confirmation stays up before the label reverts.
pub const REVERT_AFTER: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelState {
    Idle,
    Copied,
    Failed,
}

/// A cancellable one-shot timer attached to the copy label.
///
/// Scheduling a new confirmation replaces the pending revert, so a second
/// copy inside the window restarts the full delay.
#[derive(Debug)]
pub struct CopyLabel {
    state: LabelState,
    revert_at: Option<Instant>,
    delay: Duration,
}

impl CopyLabel {
    pub fn new(delay: Duration) -> Self {
        Self {
            state: LabelState::Idle,
            revert_at: None,
            delay,
        }
    }

    pub fn confirm(&mut self, now: Instant) {
        self.schedule(LabelState::Copied, now);
    }

    pub fn fail(&mut self, now: Instant) {
        self.schedule(LabelState::Failed, now);
    }

    fn schedule(&mut self, state: LabelState, now: Instant) {
        self.state = state;
        self.revert_at = Some(now + self.delay);
    }

    /// Drop any pending revert and show the idle label now.
    pub fn cancel(&mut self) {
        self.state = LabelState::Idle;
        self.revert_at = None;
    }

    /// Revert if the deadline has passed. Returns true if the label changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.revert_at {
            Some(at) if now >= at => {
                self.cancel();
                true
            }
            _ => false,
        }
    }

    /// Time left until the pending revert, if any.
    pub fn timeout(&self, now: Instant) -> Option<Duration> {
        self.revert_at.map(|at| at.saturating_duration_since(now))
    }

    pub fn state(&self) -> LabelState {
        self.state
    }

    pub fn text(&self) -> &'static str {
        match self.state {
            LabelState::Idle => "Copy",
            LabelState::Copied => "Copied!",
            LabelState::Failed => "Copy failed",
        }
    }
}

impl Default for CopyLabel {
    fn default() -> Self {
        Self::new(REVERT_AFTER)
    }
}
