//! Millisecond tick clock shared by every combat timer.
//!
//! The clock is sampled exactly once at the start of each tick and every
//! cooldown comparison in that tick reads the same value.

use bevy::prelude::*;

/// Where the clock takes its time from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClockSource {
    /// Follows `Time<Real>` (wall clock since startup).
    #[default]
    Realtime,
    /// Only moves when told to. Used by headless tests and replays.
    Manual,
}

/// Monotonic millisecond clock, sampled once per tick.
#[derive(Resource, Debug, Clone, Default)]
pub struct GameClock {
    now_ms: u64,
    source: ClockSource,
}

impl GameClock {
    /// A clock that only advances through [`GameClock::advance`] or [`GameClock::set`].
    pub fn manual(start_ms: u64) -> Self {
        Self {
            now_ms: start_ms,
            source: ClockSource::Manual,
        }
    }

    /// Current tick time in milliseconds.
    pub fn now(&self) -> u64 {
        self.now_ms
    }

    /// Move a manual clock forward. Time never runs backwards.
    pub fn advance(&mut self, delta_ms: u64) {
        self.now_ms = self.now_ms.saturating_add(delta_ms);
    }

    /// Jump a manual clock to an absolute time (ignored if earlier than now).
    pub fn set(&mut self, now_ms: u64) {
        self.now_ms = self.now_ms.max(now_ms);
    }
}

/// Sample the wall clock into [`GameClock`] at the start of the tick.
pub fn sample_clock(time: Res<Time<Real>>, mut clock: ResMut<GameClock>) {
    if clock.source != ClockSource::Realtime {
        return;
    }
    let elapsed = time.elapsed().as_millis() as u64;
    clock.set(elapsed);
}
