//! Save-blob encoding
//!
//! The whole durable state is one JSON document: the ordered agent roster
//! (relationship ledgers and job scratchpads included), the clock, and which
//! roster entry the player controls. Decoding validates everything before
//! any of it is applied, so a failed load never leaves a half-restored
//! world.

use serde::{Deserialize, Serialize};

use crate::agent::Agent;
use crate::core::clock::DAY_LENGTH;
use crate::core::error::{Result, SimError};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveState {
    pub agents: Vec<Agent>,
    pub day: u32,
    pub time_of_day: f32,
    pub player_index: usize,
}

impl SaveState {
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        serde_json::to_vec(self)
            .map_err(|e| SimError::Persistence(format!("encode failed: {e}")))
    }

    /// Decode and validate a save blob. Returns `Persistence` errors for
    /// corrupt JSON, an empty roster, or an out-of-range player index.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let state: Self = serde_json::from_slice(bytes)
            .map_err(|e| SimError::Persistence(format!("corrupt save blob: {e}")))?;
        state.validate()?;
        Ok(state)
    }

    pub fn validate(&self) -> Result<()> {
        if self.agents.is_empty() {
            return Err(SimError::Persistence("save contains no agents".into()));
        }
        if self.player_index >= self.agents.len() {
            return Err(SimError::Persistence(format!(
                "player index {} out of range for roster of {}",
                self.player_index,
                self.agents.len()
            )));
        }
        if !(0.0..DAY_LENGTH).contains(&self.time_of_day) {
            return Err(SimError::Persistence(format!(
                "time_of_day {} outside the day",
                self.time_of_day
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Vec2;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn sample_state() -> SaveState {
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        let mut a = Agent::spawn("Arin", Vec2::new(10.0, 20.0), (1, 2, 3), &mut rng);
        a.relationship_with("Bela").friendship = 12;
        let b = Agent::spawn("Bela", Vec2::new(30.0, 40.0), (4, 5, 6), &mut rng);
        SaveState { agents: vec![a, b], day: 7, time_of_day: 456.5, player_index: 0 }
    }

    #[test]
    fn test_round_trip_preserves_everything() {
        let state = sample_state();
        let bytes = state.to_bytes().unwrap();
        let restored = SaveState::from_bytes(&bytes).unwrap();
        assert_eq!(restored.day, 7);
        assert_eq!(restored.player_index, 0);
        assert_eq!(restored.agents, state.agents);
        assert_eq!(restored.agents[0].relationship_view("Bela").friendship, 12);
    }

    #[test]
    fn test_corrupt_blob_is_persistence_error() {
        let err = SaveState::from_bytes(b"{broken").unwrap_err();
        assert!(matches!(err, SimError::Persistence(_)));
    }

    #[test]
    fn test_out_of_range_player_index_rejected() {
        let mut state = sample_state();
        state.player_index = 9;
        let bytes = serde_json::to_vec(&state).unwrap();
        assert!(SaveState::from_bytes(&bytes).is_err());
    }

    #[test]
    fn test_out_of_range_time_rejected() {
        let mut state = sample_state();
        state.time_of_day = 1300.0;
        let bytes = serde_json::to_vec(&state).unwrap();
        assert!(SaveState::from_bytes(&bytes).is_err());
    }
}
