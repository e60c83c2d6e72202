//! Simulation configuration with documented constants
//!
//! All tunable numbers are collected here with explanations of their purpose.
//! The defaults reproduce the reference village pacing.

use crate::core::error::{Result, SimError};

/// Configuration for the simulation systems
///
/// These values have been tuned so a full in-game day passes in a few minutes
/// of wall-clock time at 60 ticks per second. Changing them shifts pacing,
/// not correctness.
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    // === CLOCK ===
    /// Base time-of-day increment per tick, before the speed multiplier
    ///
    /// At 0.2 and a 1200-unit day, one day lasts 6000 ticks at 1x speed.
    pub time_speed: f32,

    /// Clock multiplier applied while the player rests near a bed
    ///
    /// At 100x, sleeping through the night takes a few seconds of real time
    /// without pausing the rest of the simulation.
    pub sleep_acceleration: f32,

    /// Distance from a bed coordinate within which the player counts as
    /// sleeping (world units)
    pub sleep_radius: f32,

    // === BEHAVIOR ===
    /// Per-tick chance that an agent scans for a spontaneous interaction
    ///
    /// At 0.005 an idle crowd produces a conversation every few seconds
    /// rather than constant chatter.
    pub interaction_chance: f64,

    /// Maximum distance between two agents for a spontaneous interaction
    /// (world units)
    pub interaction_radius: f32,

    /// Uniform jitter applied to each axis of a scheduled destination
    ///
    /// Prevents agents with the same itinerary from stacking on one point.
    pub target_jitter: f32,

    /// Distance at which a path waypoint counts as reached (world units)
    pub waypoint_radius: f32,

    /// Per-tick chance that a working Fisher or Farmer speaks a job line
    pub work_chatter_chance: f64,

    // === PRESENTATION STATE ===
    /// Ticks a speech bubble stays visible
    pub speech_duration: u32,

    /// Maximum retained interaction log entries; oldest are dropped
    pub log_capacity: usize,

    // === WORLD ===
    /// Total roster size including the player
    pub roster_size: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            time_speed: 0.2,
            sleep_acceleration: 100.0,
            sleep_radius: 40.0,

            interaction_chance: 0.005,
            interaction_radius: 40.0,
            target_jitter: 20.0,
            waypoint_radius: 10.0,
            work_chatter_chance: 0.002,

            speech_duration: 180,
            log_capacity: 100,

            roster_size: 16,
        }
    }
}

impl SimulationConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.time_speed <= 0.0 {
            return Err(SimError::Config(format!(
                "time_speed must be positive, got {}",
                self.time_speed
            )));
        }
        if self.sleep_acceleration < 1.0 {
            return Err(SimError::Config(format!(
                "sleep_acceleration must be >= 1, got {}",
                self.sleep_acceleration
            )));
        }
        if !(0.0..=1.0).contains(&self.interaction_chance) {
            return Err(SimError::Config(format!(
                "interaction_chance must be a probability, got {}",
                self.interaction_chance
            )));
        }
        if !(0.0..=1.0).contains(&self.work_chatter_chance) {
            return Err(SimError::Config(format!(
                "work_chatter_chance must be a probability, got {}",
                self.work_chatter_chance
            )));
        }
        if self.interaction_radius <= 0.0 || self.sleep_radius <= 0.0 {
            return Err(SimError::Config(
                "interaction_radius and sleep_radius must be positive".into(),
            ));
        }
        if self.target_jitter < 0.0 {
            return Err(SimError::Config(format!(
                "target_jitter must be non-negative, got {}",
                self.target_jitter
            )));
        }
        if self.waypoint_radius <= 0.0 {
            return Err(SimError::Config(format!(
                "waypoint_radius must be positive, got {}",
                self.waypoint_radius
            )));
        }
        if self.roster_size == 0 {
            return Err(SimError::Config("roster_size must be at least 1".into()));
        }
        if self.log_capacity == 0 {
            return Err(SimError::Config("log_capacity must be at least 1".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(SimulationConfig::default().validate().is_ok());
    }

    #[test]
    fn test_bad_probability_rejected() {
        let mut config = SimulationConfig::default();
        config.interaction_chance = 1.5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_roster_rejected() {
        let mut config = SimulationConfig::default();
        config.roster_size = 0;
        assert!(config.validate().is_err());
    }
}
