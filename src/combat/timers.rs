//! Millisecond cooldowns driven by the tick clock.

use bevy::prelude::*;

/// A window that starts at some tick time and expires `duration` ms later.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cooldown {
    started_at: u64,
    duration: u64,
    running: bool,
}

impl Cooldown {
    pub fn start(&mut self, now: u64, duration: u64) {
        self.started_at = now;
        self.duration = duration;
        self.running = true;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Stop the window once `duration` has elapsed.
    ///
    /// Returns true only on the call that actually stopped it, so repeated
    /// calls with the same `now` leave the state unchanged.
    pub fn tick(&mut self, now: u64) -> bool {
        if self.running && now.saturating_sub(self.started_at) >= self.duration {
            self.running = false;
            return true;
        }
        false
    }
}

/// Attack and post-hit windows carried by the player and by enemies.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct CombatTimers {
    /// Player: attack window in progress. Enemy: attack recharge in progress.
    pub attack: Cooldown,
    pub invulnerability: Cooldown,
}

impl CombatTimers {
    pub fn vulnerable(&self) -> bool {
        !self.invulnerability.is_running()
    }
}

/// Opacity of a blinking sprite: a square wave over the tick time.
pub fn blink_alpha(now: u64) -> f32 {
    if (now as f64).sin() >= 0.0 {
        1.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expires_after_duration() {
        let mut cooldown = Cooldown::default();
        cooldown.start(1_000, 200);
        assert!(!cooldown.tick(1_199));
        assert!(cooldown.is_running());
        assert!(cooldown.tick(1_200));
        assert!(!cooldown.is_running());
    }

    #[test]
    fn tick_is_idempotent_within_a_tick() {
        let mut cooldown = Cooldown::default();
        cooldown.start(0, 300);
        let first = (cooldown.tick(150), cooldown.is_running());
        let second = (cooldown.tick(150), cooldown.is_running());
        assert_eq!(first, second);

        let mut timers = CombatTimers::default();
        timers.invulnerability.start(0, 300);
        timers.invulnerability.tick(400);
        let vulnerable = timers.vulnerable();
        timers.invulnerability.tick(400);
        assert_eq!(timers.vulnerable(), vulnerable);
        assert!(vulnerable);
    }

    #[test]
    fn blink_is_square_wave() {
        assert_eq!(blink_alpha(0), 1.0);
        // sin(4) < 0
        assert_eq!(blink_alpha(4), 0.0);
    }
}
