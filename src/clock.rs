//! Session/break countdown state machine.
//!
//! [`SessionClock`] owns the configured lengths, the tagged clock state and
//! the single live driver handle. Host effects go through two seams:
//! [`Scheduler`] starts the 1 Hz driver (dropping the handle cancels it) and
//! [`AlertCue`] plays or rewinds the beep.
//!
//! # Transition cadence
//! A phase counts down to `00:00` and stays there for one full tick. The
//! following tick switches to the other phase, seeded from that phase's
//! configured length, and only the tick after that starts counting it down.

use crate::config::{
    DEFAULT_BREAK_MINUTES, DEFAULT_SESSION_MINUTES, MAX_LENGTH_MINUTES, MIN_LENGTH_MINUTES,
    MS_PER_MINUTE, TICK_MS,
};
use crate::format_clock;
use log::{debug, info};
use serde::Serialize;
use std::fmt;

/// One of the two countdown intervals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Phase {
    Session,
    Break,
}

impl Phase {
    /// Text shown in the timer label.
    pub fn label(self) -> &'static str {
        match self {
            Phase::Session => "Session",
            Phase::Break => "Break",
        }
    }

    /// The phase that follows this one when it expires.
    pub fn other(self) -> Phase {
        match self {
            Phase::Session => Phase::Break,
            Phase::Break => Phase::Session,
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Runtime state of the clock.
///
/// Paused is a state of its own rather than a flag next to the phase, so a
/// paused clock always knows which phase it will resume and from where.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockState {
    /// Never started since mount or the last reset.
    Idle,
    Running { phase: Phase, remaining_ms: u64 },
    Paused { phase: Phase, remaining_ms: u64 },
}

impl ClockState {
    pub fn phase(&self) -> Option<Phase> {
        match *self {
            ClockState::Idle => None,
            ClockState::Running { phase, .. } | ClockState::Paused { phase, .. } => Some(phase),
        }
    }

    pub fn remaining_ms(&self) -> Option<u64> {
        match *self {
            ClockState::Idle => None,
            ClockState::Running { remaining_ms, .. } | ClockState::Paused { remaining_ms, .. } => {
                Some(remaining_ms)
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ClockState::Idle => "idle",
            ClockState::Running { .. } => "running",
            ClockState::Paused { .. } => "paused",
        }
    }
}

/// Configured session and break lengths in whole minutes.
///
/// Both values stay within `MIN_LENGTH_MINUTES..=MAX_LENGTH_MINUTES`;
/// adjustments past either bound are silently clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Lengths {
    session_minutes: u32,
    break_minutes: u32,
}

impl Default for Lengths {
    fn default() -> Self {
        Self {
            session_minutes: DEFAULT_SESSION_MINUTES,
            break_minutes: DEFAULT_BREAK_MINUTES,
        }
    }
}

impl Lengths {
    pub fn new(session_minutes: u32, break_minutes: u32) -> Self {
        Self {
            session_minutes: clamp_length(session_minutes),
            break_minutes: clamp_length(break_minutes),
        }
    }

    pub fn session_minutes(&self) -> u32 {
        self.session_minutes
    }

    pub fn break_minutes(&self) -> u32 {
        self.break_minutes
    }

    pub fn minutes(&self, phase: Phase) -> u32 {
        match phase {
            Phase::Session => self.session_minutes,
            Phase::Break => self.break_minutes,
        }
    }

    /// Full length of `phase` in milliseconds.
    pub fn phase_ms(&self, phase: Phase) -> u64 {
        self.minutes(phase) as u64 * MS_PER_MINUTE
    }

    pub fn increment(&mut self, phase: Phase) {
        let slot = self.slot(phase);
        *slot = (*slot + 1).min(MAX_LENGTH_MINUTES);
    }

    pub fn decrement(&mut self, phase: Phase) {
        let slot = self.slot(phase);
        *slot = slot.saturating_sub(1).max(MIN_LENGTH_MINUTES);
    }

    fn slot(&mut self, phase: Phase) -> &mut u32 {
        match phase {
            Phase::Session => &mut self.session_minutes,
            Phase::Break => &mut self.break_minutes,
        }
    }
}

#[inline]
fn clamp_length(minutes: u32) -> u32 {
    minutes.clamp(MIN_LENGTH_MINUTES, MAX_LENGTH_MINUTES)
}

/// Starts the recurring countdown driver.
///
/// The returned handle keeps the driver alive; dropping it cancels the
/// driver. Each expiry of the period must result in one call to
/// [`SessionClock::tick`].
pub trait Scheduler {
    type Handle;

    fn every(&mut self, period_ms: u32) -> Self::Handle;
}

/// The audible cue played when a phase reaches zero.
///
/// Both operations are best effort and must not fail the caller.
pub trait AlertCue {
    /// Stop playback and seek back to the start. Safe to call when idle.
    fn rewind(&mut self);

    /// Start playback from the current position.
    fn play(&mut self);
}

/// What a single driver tick did to the clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The clock was not running; nothing changed.
    Idle,
    /// One second was taken off the active phase.
    Counted,
    /// The active phase just reached zero and the alert was fired.
    Expired(Phase),
    /// The expired phase was replaced by the next one.
    Switched { from: Phase, to: Phase },
}

/// Serializable view of the clock used for debug logging.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClockSnapshot {
    pub state: &'static str,
    pub phase: &'static str,
    pub remaining_ms: Option<u64>,
    pub session_minutes: u32,
    pub break_minutes: u32,
    pub display: String,
}

/// The 25 + 5 clock: lengths, runtime state and the driver handle.
pub struct SessionClock<S: Scheduler, A: AlertCue> {
    lengths: Lengths,
    state: ClockState,
    scheduler: S,
    alert: A,
    driver: Option<S::Handle>,
}

impl<S: Scheduler, A: AlertCue> SessionClock<S, A> {
    pub fn new(scheduler: S, alert: A) -> Self {
        Self {
            lengths: Lengths::default(),
            state: ClockState::Idle,
            scheduler,
            alert,
            driver: None,
        }
    }

    pub fn lengths(&self) -> Lengths {
        self.lengths
    }

    pub fn state(&self) -> ClockState {
        self.state
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn alert(&self) -> &A {
        &self.alert
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, ClockState::Running { .. })
    }

    /// Whether a driver handle is currently held.
    pub fn has_driver(&self) -> bool {
        self.driver.is_some()
    }

    /// Label of the active phase; "Session" while idle.
    pub fn phase_label(&self) -> &'static str {
        self.state.phase().unwrap_or(Phase::Session).label()
    }

    /// Milliseconds shown on the display.
    ///
    /// While idle this is always derived from the configured session length,
    /// so adjusting it is reflected immediately.
    pub fn display_ms(&self) -> u64 {
        self.state
            .remaining_ms()
            .unwrap_or_else(|| self.lengths.phase_ms(Phase::Session))
    }

    pub fn display(&self) -> String {
        format_clock(self.display_ms())
    }

    /// Lengthen `phase` by a minute. Never touches a countdown in progress.
    pub fn increment(&mut self, phase: Phase) {
        self.lengths.increment(phase);
        debug!("{} length now {}", phase, self.lengths.minutes(phase));
    }

    /// Shorten `phase` by a minute. Never touches a countdown in progress.
    pub fn decrement(&mut self, phase: Phase) {
        self.lengths.decrement(phase);
        debug!("{} length now {}", phase, self.lengths.minutes(phase));
    }

    /// Start, pause or resume.
    pub fn toggle(&mut self) {
        match self.state {
            ClockState::Idle => {
                let remaining_ms = self.lengths.phase_ms(Phase::Session);
                info!("Starting session at {}", format_clock(remaining_ms));
                self.run(Phase::Session, remaining_ms);
            }
            ClockState::Paused {
                phase,
                remaining_ms,
            } => {
                info!("Resuming {} at {}", phase, format_clock(remaining_ms));
                self.run(phase, remaining_ms);
            }
            ClockState::Running {
                phase,
                remaining_ms,
            } => {
                self.driver = None;
                self.state = ClockState::Paused {
                    phase,
                    remaining_ms,
                };
                info!("Paused {} at {}", phase, format_clock(remaining_ms));
            }
        }
    }

    /// Stop everything and return to the default 25/5 idle clock.
    pub fn reset(&mut self) {
        self.driver = None;
        self.lengths = Lengths::default();
        self.state = ClockState::Idle;
        self.alert.rewind();
        info!("Clock reset");
    }

    /// Advance the active phase by one tick.
    pub fn tick(&mut self) -> TickOutcome {
        let (phase, remaining_ms) = match self.state {
            ClockState::Running {
                phase,
                remaining_ms,
            } => (phase, remaining_ms),
            other => {
                debug!("Ignoring tick while {}", other.name());
                return TickOutcome::Idle;
            }
        };

        // Zero was already shown for a full tick.
        if remaining_ms == 0 {
            let next = phase.other();
            let seeded = self.lengths.phase_ms(next);
            info!("{} finished, starting {} at {}", phase, next, format_clock(seeded));
            self.run(next, seeded);
            return TickOutcome::Switched {
                from: phase,
                to: next,
            };
        }

        let remaining_ms = remaining_ms.saturating_sub(TICK_MS as u64);
        self.state = ClockState::Running {
            phase,
            remaining_ms,
        };

        if remaining_ms == 0 {
            self.alert.rewind();
            self.alert.play();
            TickOutcome::Expired(phase)
        } else {
            TickOutcome::Counted
        }
    }

    /// Cancel the driver without touching state. Used when the view goes away.
    pub fn shutdown(&mut self) {
        if self.driver.take().is_some() {
            debug!("Driver cancelled on shutdown");
        }
    }

    pub fn snapshot(&self) -> ClockSnapshot {
        ClockSnapshot {
            state: self.state.name(),
            phase: self.phase_label(),
            remaining_ms: self.state.remaining_ms(),
            session_minutes: self.lengths.session_minutes(),
            break_minutes: self.lengths.break_minutes(),
            display: self.display(),
        }
    }

    fn run(&mut self, phase: Phase, remaining_ms: u64) {
        // Cancel before replace: at most one driver is ever live.
        self.driver = None;
        self.driver = Some(self.scheduler.every(TICK_MS));
        self.state = ClockState::Running {
            phase,
            remaining_ms,
        };
    }
}
