//! Playback controller: replays a finished trace under user control.
//!
//! Playback is single-threaded cooperative scheduling. The controller owns
//! the only mutable playback state (a cursor index and at most one pending
//! tick deadline) and the UI loop drives it by calling
//! [`Player::advance_if_due`] each iteration. Starting playback, pausing,
//! stepping manually, or resetting always cancels the pending deadline first,
//! so two ticks can never race to advance the same cursor.
//!
//! The controller is independent of which engine produced the trace: it only
//! reads steps by index and never mutates them. Because every step is an
//! immutable snapshot, stepping backward and jumping are as safe as stepping
//! forward.

use std::time::{Duration, Instant};

use crate::trace::{Step, Trace};

/// Default tick period between auto-advance steps.
pub const DEFAULT_PERIOD: Duration = Duration::from_millis(800);
/// Fastest allowed tick period.
pub const MIN_PERIOD: Duration = Duration::from_millis(50);
/// Slowest allowed tick period.
pub const MAX_PERIOD: Duration = Duration::from_secs(5);

/// Replays one trace. Owns the cursor and the (single) pending tick deadline.
#[derive(Debug)]
pub struct Player<S> {
    trace: Trace<S>,
    cursor: usize,
    period: Duration,
    playing: bool,
    /// The outstanding timer: when the next auto-advance fires. `None` means
    /// no timer is pending.
    next_tick: Option<Instant>,
}

impl<S> Player<S> {
    pub fn new(trace: Trace<S>) -> Self {
        Player {
            trace,
            cursor: 0,
            period: DEFAULT_PERIOD,
            playing: false,
            next_tick: None,
        }
    }

    pub fn trace(&self) -> &Trace<S> {
        &self.trace
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.trace.len()
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn at_end(&self) -> bool {
        self.trace.len() <= 1 || self.cursor + 1 >= self.trace.len()
    }

    /// The step under the cursor. `None` only for an empty trace, which
    /// engines never produce.
    pub fn current_step(&self) -> Option<&Step<S>> {
        self.trace.get(self.cursor)
    }

    /// Start auto-advancing. No-op at the final step or when there is
    /// nothing to animate (fewer than two steps).
    pub fn play(&mut self, now: Instant) {
        if self.at_end() {
            return;
        }
        // Overwriting the deadline cancels any pending tick: there is never
        // more than one outstanding.
        self.playing = true;
        self.next_tick = Some(now + self.period);
    }

    /// Stop auto-advancing; the cursor stays in place.
    pub fn pause(&mut self) {
        self.playing = false;
        self.next_tick = None;
    }

    /// Advance exactly one step, regardless of play state. Cancels any
    /// pending auto-advance so the manual step cannot double with a tick.
    /// No-op at the final step.
    pub fn step_forward(&mut self) {
        self.pause();
        if self.cursor + 1 < self.trace.len() {
            self.cursor += 1;
        }
    }

    /// Move back one step. No-op at the first step.
    pub fn step_back(&mut self) {
        self.pause();
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn jump_to_start(&mut self) {
        self.pause();
        self.cursor = 0;
    }

    pub fn jump_to_end(&mut self) {
        self.pause();
        self.cursor = self.trace.len().saturating_sub(1);
    }

    /// Discard the current trace and start over from a regenerated one.
    pub fn reset(&mut self, trace: Trace<S>) {
        self.pause();
        self.trace = trace;
        self.cursor = 0;
    }

    /// Change the tick period, clamped to a sane range. A pending tick is
    /// re-armed at the new period.
    pub fn set_period(&mut self, now: Instant, period: Duration) {
        self.period = period.clamp(MIN_PERIOD, MAX_PERIOD);
        if self.playing {
            self.next_tick = Some(now + self.period);
        }
    }

    /// Advance the cursor if a pending tick deadline has passed. Returns
    /// whether the cursor moved. Reaching the final step stops playback.
    pub fn advance_if_due(&mut self, now: Instant) -> bool {
        if !self.playing {
            return false;
        }
        let Some(deadline) = self.next_tick else {
            return false;
        };
        if now < deadline {
            return false;
        }
        if self.cursor + 1 < self.trace.len() {
            self.cursor += 1;
        }
        if self.at_end() {
            self.pause();
        } else {
            self.next_tick = Some(now + self.period);
        }
        true
    }
}
