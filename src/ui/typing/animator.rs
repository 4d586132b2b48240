//! Deadline scheduling for the banner typewriter.
//!
//! There is no background timer: the animator keeps the instant its next tick
//! is due and the event loop polls it. Each tick schedules the following one
//! from the moment it fired, so a late frame shifts the timeline instead of
//! triggering a burst of catch-up ticks.

use std::time::{Duration, Instant};

use crate::clock::{Clock, SystemClock};
use crate::config::BannerConfig;
use crate::ui::mvi::Reducer;

use super::intent::TypingIntent;
use super::reducer::TypingReducer;
use super::state::{TypingPhase, TypingState};

/// Cursor blink period (on for one period, off for the next).
pub const CURSOR_BLINK: Duration = Duration::from_millis(800);

/// Per-phase tick delays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypingCadence {
    pub typing: Duration,
    pub deleting: Duration,
    pub pause: Duration,
}

impl TypingCadence {
    /// Delay before the tick that follows a tick landing in `phase`.
    pub fn delay_for(&self, phase: TypingPhase) -> Duration {
        match phase {
            TypingPhase::Typing => self.typing,
            TypingPhase::Paused => self.pause,
            TypingPhase::Deleting => self.deleting,
        }
    }
}

impl Default for TypingCadence {
    fn default() -> Self {
        Self::from(&BannerConfig::default())
    }
}

impl From<&BannerConfig> for TypingCadence {
    fn from(config: &BannerConfig) -> Self {
        Self {
            typing: Duration::from_millis(config.typing_ms),
            deleting: Duration::from_millis(config.deleting_ms),
            pause: Duration::from_millis(config.pause_ms),
        }
    }
}

pub struct TypingAnimator<C: Clock = SystemClock> {
    state: TypingState,
    cadence: TypingCadence,
    clock: C,
    mounted_at: Instant,
    next_due: Option<Instant>,
}

impl<C: Clock> TypingAnimator<C> {
    /// Mount the animator. The first tick is scheduled immediately.
    ///
    /// An empty phrase list mounts an animator that never ticks.
    pub fn start(phrases: Vec<String>, cadence: TypingCadence, clock: C) -> Self {
        let state = TypingState::new(phrases);
        let now = clock.now();
        let next_due = if state.phrase_count() == 0 {
            None
        } else {
            Some(now + cadence.delay_for(state.phase))
        };

        Self {
            state,
            cadence,
            clock,
            mounted_at: now,
            next_due,
        }
    }

    /// Fire the pending tick if it is due. Returns true when state changed.
    ///
    /// At most one tick per call.
    pub fn poll(&mut self) -> bool {
        let Some(due) = self.next_due else {
            return false;
        };
        let now = self.clock.now();
        if now < due {
            return false;
        }

        let before = self.state.clone();
        self.state = TypingReducer::reduce(std::mem::take(&mut self.state), TypingIntent::Tick);
        self.next_due = Some(now + self.cadence.delay_for(self.state.phase));
        self.state != before
    }

    /// Clear the pending tick. A stopped animator never ticks again.
    pub fn stop(&mut self) {
        if self.next_due.take().is_some() {
            tracing::trace!("Banner animation stopped");
        }
    }

    pub fn is_running(&self) -> bool {
        self.next_due.is_some()
    }

    pub fn state(&self) -> &TypingState {
        &self.state
    }

    pub fn cadence(&self) -> TypingCadence {
        self.cadence
    }

    pub fn visible_text(&self) -> &str {
        self.state.visible_text()
    }

    /// Time left until the pending tick, zero if overdue.
    pub fn time_until_tick(&self) -> Option<Duration> {
        self.next_due
            .map(|due| due.saturating_duration_since(self.clock.now()))
    }

    /// Step-end blink: visible during even periods since mount.
    pub fn cursor_visible(&self) -> bool {
        let elapsed = self.clock.now().saturating_duration_since(self.mounted_at);
        (elapsed.as_millis() / CURSOR_BLINK.as_millis()) % 2 == 0
    }

    /// Time until the next tick or cursor toggle, whichever comes first.
    pub fn time_until_redraw(&self) -> Option<Duration> {
        if !self.is_running() {
            return None;
        }
        let elapsed = self.clock.now().saturating_duration_since(self.mounted_at);
        let period = CURSOR_BLINK.as_millis();
        let into_period = elapsed.as_millis() % period;
        let until_blink = Duration::from_millis((period - into_period) as u64);

        Some(match self.time_until_tick() {
            Some(tick) => tick.min(until_blink),
            None => until_blink,
        })
    }
}

impl<C: Clock> Drop for TypingAnimator<C> {
    fn drop(&mut self) {
        self.stop();
    }
}
