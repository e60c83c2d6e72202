//! Simulated clock: time-of-day and day counter
//!
//! Time-of-day is a free-running value in [0, 1200). The day counter
//! increments exactly when time-of-day wraps; the overflow remainder is
//! carried into the new day so large increments (sleep acceleration) do not
//! lose time.

use serde::{Deserialize, Serialize};

/// Length of one in-game day in time units
pub const DAY_LENGTH: f32 = 1200.0;

/// Start of the working window in time units
pub const WORK_START: f32 = 300.0;

/// End of the working window in time units
pub const WORK_END: f32 = 850.0;

/// Agents head for bed after this time (and before [`WORK_START`])
pub const BEDTIME: f32 = 1100.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Clock {
    time_of_day: f32,
    day: u32,
}

impl Clock {
    /// A fresh world starts on day 1 at early morning, just as the working
    /// window opens
    pub fn new() -> Self {
        Self { time_of_day: WORK_START, day: 1 }
    }

    /// Restore a clock from persisted values, clamping out-of-range input
    pub fn restore(time_of_day: f32, day: u32) -> Self {
        let mut clock = Self { time_of_day, day };
        clock.clamp_time();
        clock
    }

    pub fn time_of_day(&self) -> f32 {
        self.time_of_day
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    /// Night spans the late evening and the small hours
    pub fn is_night(&self) -> bool {
        self.time_of_day > 850.0 || self.time_of_day < 350.0
    }

    /// Advance time by `increment` units. Returns true when the day rolled
    /// over; the remainder past the boundary is kept.
    pub fn advance(&mut self, increment: f32) -> bool {
        self.time_of_day += increment;
        if self.time_of_day >= DAY_LENGTH {
            self.time_of_day -= DAY_LENGTH;
            self.day += 1;
            self.clamp_time();
            return true;
        }
        false
    }

    /// time_of_day must stay inside [0, DAY_LENGTH). A violation here means
    /// an increment larger than a whole day slipped through.
    fn clamp_time(&mut self) {
        if !(0.0..DAY_LENGTH).contains(&self.time_of_day) {
            tracing::warn!(
                time_of_day = self.time_of_day,
                "clock out of range after advance, clamping"
            );
            self.time_of_day = self.time_of_day.rem_euclid(DAY_LENGTH);
        }
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_clock_starts_day_one() {
        let clock = Clock::new();
        assert_eq!(clock.day(), 1);
        assert!((clock.time_of_day() - WORK_START).abs() < f32::EPSILON);
    }

    #[test]
    fn test_advance_without_wrap() {
        let mut clock = Clock::new();
        assert!(!clock.advance(10.0));
        assert_eq!(clock.day(), 1);
        assert!((clock.time_of_day() - 310.0).abs() < 1e-4);
    }

    #[test]
    fn test_wrap_carries_overflow() {
        let mut clock = Clock::restore(1199.5, 3);
        assert!(clock.advance(1.0));
        assert_eq!(clock.day(), 4);
        assert!((clock.time_of_day() - 0.5).abs() < 1e-4);
    }

    #[test]
    fn test_wrap_exactly_at_boundary() {
        let mut clock = Clock::restore(1199.0, 1);
        assert!(clock.advance(1.0));
        assert_eq!(clock.day(), 2);
        assert!(clock.time_of_day().abs() < 1e-4);
    }

    #[test]
    fn test_wrap_happens_once_per_boundary() {
        let mut clock = Clock::restore(1100.0, 1);
        let mut rollovers = 0;
        for _ in 0..1000 {
            if clock.advance(0.2) {
                rollovers += 1;
            }
        }
        assert_eq!(rollovers, 1);
        assert_eq!(clock.day(), 2);
    }

    #[test]
    fn test_is_night() {
        assert!(Clock::restore(900.0, 1).is_night());
        assert!(Clock::restore(100.0, 1).is_night());
        assert!(!Clock::restore(500.0, 1).is_night());
    }
}
