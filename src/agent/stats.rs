//! Agent attribute block
//!
//! Six integer attributes, each held in [1, 10]. Values are drawn fresh on
//! creation or an explicit reroll, then shifted by race and personality
//! modifiers before clamping.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::identity::{Personality, Race};

/// The six attributes every agent carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatKind {
    Social,
    Intellect,
    Strength,
    Joy,
    Libido,
    WorkEthic,
}

pub const STAT_MIN: i32 = 1;
pub const STAT_MAX: i32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatBlock {
    pub social: i32,
    pub intellect: i32,
    pub strength: i32,
    pub joy: i32,
    pub libido: i32,
    pub work_ethic: i32,
}

impl Default for StatBlock {
    fn default() -> Self {
        Self {
            social: 5,
            intellect: 5,
            strength: 5,
            joy: 5,
            libido: 5,
            work_ethic: 5,
        }
    }
}

impl StatBlock {
    /// Draw all six attributes uniformly in [3, 8], apply race and
    /// personality modifiers, clamp to [1, 10]
    pub fn roll<R: Rng>(race: Race, personality: Personality, rng: &mut R) -> Self {
        let mut stats = Self {
            social: rng.gen_range(3..=8),
            intellect: rng.gen_range(3..=8),
            strength: rng.gen_range(3..=8),
            joy: rng.gen_range(3..=8),
            libido: rng.gen_range(3..=8),
            work_ethic: rng.gen_range(3..=8),
        };

        if let Some(kind) = race.stat_bonus() {
            stats.add(kind, 3);
        }

        if personality.is_extravert() {
            stats.add(StatKind::Social, 2);
        } else {
            stats.add(StatKind::Social, -1);
        }
        if personality.is_thinking() {
            stats.add(StatKind::Intellect, 1);
        } else {
            stats.add(StatKind::Joy, 1);
        }

        stats.clamp_all();
        stats
    }

    pub fn get(&self, kind: StatKind) -> i32 {
        match kind {
            StatKind::Social => self.social,
            StatKind::Intellect => self.intellect,
            StatKind::Strength => self.strength,
            StatKind::Joy => self.joy,
            StatKind::Libido => self.libido,
            StatKind::WorkEthic => self.work_ethic,
        }
    }

    pub fn add(&mut self, kind: StatKind, amount: i32) {
        let slot = match kind {
            StatKind::Social => &mut self.social,
            StatKind::Intellect => &mut self.intellect,
            StatKind::Strength => &mut self.strength,
            StatKind::Joy => &mut self.joy,
            StatKind::Libido => &mut self.libido,
            StatKind::WorkEthic => &mut self.work_ethic,
        };
        *slot += amount;
    }

    /// Force every attribute back into [1, 10]. Repeated out-of-range values
    /// indicate a modifier bug upstream.
    pub fn clamp_all(&mut self) {
        for kind in [
            StatKind::Social,
            StatKind::Intellect,
            StatKind::Strength,
            StatKind::Joy,
            StatKind::Libido,
            StatKind::WorkEthic,
        ] {
            let value = self.get(kind);
            let clamped = value.clamp(STAT_MIN, STAT_MAX);
            if value != clamped {
                self.add(kind, clamped - value);
            }
        }
    }

    pub fn in_range(&self) -> bool {
        [
            self.social,
            self.intellect,
            self.strength,
            self.joy,
            self.libido,
            self.work_ethic,
        ]
        .iter()
        .all(|v| (STAT_MIN..=STAT_MAX).contains(v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_roll_always_in_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for race in Race::ALL {
            for personality in Personality::ALL {
                let stats = StatBlock::roll(race, personality, &mut rng);
                assert!(stats.in_range(), "{race:?}/{personality:?} produced {stats:?}");
            }
        }
    }

    #[test]
    fn test_orc_strength_bonus_applied() {
        // Orcs get +3 strength on a [3,8] base, so the floor is 6
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        for _ in 0..50 {
            let stats = StatBlock::roll(Race::Orc, Personality::Istj, &mut rng);
            assert!(stats.strength >= 6);
        }
    }

    #[test]
    fn test_extravert_social_floor() {
        // E types get +2 social on a [3,8] base, so the floor is 5
        let mut rng = ChaCha8Rng::seed_from_u64(13);
        for _ in 0..50 {
            let stats = StatBlock::roll(Race::Human, Personality::Entp, &mut rng);
            assert!(stats.social >= 5);
        }
    }

    #[test]
    fn test_clamp_all() {
        let mut stats = StatBlock::default();
        stats.strength = 14;
        stats.joy = -2;
        stats.clamp_all();
        assert_eq!(stats.strength, STAT_MAX);
        assert_eq!(stats.joy, STAT_MIN);
    }
}
