//! Per-frog death countdown
//!
//! Counts down by a fixed amount per tick rather than comparing against a
//! wall-clock deadline, so respawn delay follows tick cadence.

use serde::{Deserialize, Serialize};

/// Result of advancing a timer by one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerStep {
    /// Not running
    Idle,
    /// Still counting down
    Running,
    /// Countdown finished on an earlier tick; the frog respawns now
    Expired,
}

/// Death cooldown state: Alive (inactive), Dying (remaining > 0),
/// Respawning (remaining <= 0, clears on the next advance)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeathTimer {
    active: bool,
    remaining_ms: i64,
}

impl DeathTimer {
    /// Begin a full cooldown
    pub fn start(&mut self, duration_ms: i64) {
        self.active = true;
        self.remaining_ms = duration_ms;
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Advance one tick. May go negative; never clamped.
    pub fn advance(&mut self, tick_ms: i64) -> TimerStep {
        if !self.active {
            return TimerStep::Idle;
        }
        if self.remaining_ms > 0 {
            self.remaining_ms -= tick_ms;
            TimerStep::Running
        } else {
            self.active = false;
            TimerStep::Expired
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_timer_does_nothing() {
        let mut timer = DeathTimer::default();
        assert_eq!(timer.advance(20), TimerStep::Idle);
        assert_eq!(timer.remaining_ms, 0);
    }

    #[test]
    fn test_countdown_goes_negative_then_expires() {
        let mut timer = DeathTimer::default();
        timer.start(50);

        assert_eq!(timer.advance(20), TimerStep::Running); // 30
        assert_eq!(timer.advance(20), TimerStep::Running); // 10
        assert_eq!(timer.advance(20), TimerStep::Running); // -10
        assert_eq!(timer.remaining_ms, -10);
        assert!(timer.is_active());

        assert_eq!(timer.advance(20), TimerStep::Expired);
        assert!(!timer.is_active());
        assert_eq!(timer.advance(20), TimerStep::Idle);
    }

    #[test]
    fn test_expiry_after_ceil_steps() {
        for (duration, step) in [(1500, 20), (1000, 30), (40, 20), (1, 7)] {
            let mut timer = DeathTimer::default();
            timer.start(duration);
            let mut advances = 0;
            while timer.advance(step) != TimerStep::Expired {
                advances += 1;
            }
            assert_eq!(advances, (duration as u64).div_ceil(step as u64) as i32);
        }
    }

    #[test]
    fn test_restart_resets_remaining() {
        let mut timer = DeathTimer::default();
        timer.start(100);
        timer.advance(60);
        timer.start(100);
        assert_eq!(timer.remaining_ms, 100);
    }
}
