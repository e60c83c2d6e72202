//! Agent identity: race, personality type, job
//!
//! Personality types follow the sixteen four-letter combinations over the
//! E/I, N/S, T/F, J/P axes. Only the E/I, T/F and J/P axes feed behavior;
//! N/S is cosmetic.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::stats::StatKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Race {
    Human,
    Elf,
    Dwarf,
    Orc,
    Goblin,
    Tiefling,
    Halfling,
}

impl Race {
    pub const ALL: [Race; 7] = [
        Race::Human,
        Race::Elf,
        Race::Dwarf,
        Race::Orc,
        Race::Goblin,
        Race::Tiefling,
        Race::Halfling,
    ];

    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }

    /// The attribute this race gets +3 on, if any
    pub fn stat_bonus(&self) -> Option<StatKind> {
        match self {
            Race::Orc => Some(StatKind::Strength),
            Race::Elf => Some(StatKind::Intellect),
            Race::Halfling => Some(StatKind::Social),
            Race::Dwarf => Some(StatKind::WorkEthic),
            Race::Human | Race::Goblin | Race::Tiefling => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Race::Human => "Human",
            Race::Elf => "Elf",
            Race::Dwarf => "Dwarf",
            Race::Orc => "Orc",
            Race::Goblin => "Goblin",
            Race::Tiefling => "Tiefling",
            Race::Halfling => "Halfling",
        }
    }
}

impl std::fmt::Display for Race {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Personality {
    Intj,
    Intp,
    Entj,
    Entp,
    Infj,
    Infp,
    Enfj,
    Enfp,
    Istj,
    Isfj,
    Estj,
    Esfj,
    Istp,
    Isfp,
    Estp,
    Esfp,
}

impl Personality {
    pub const ALL: [Personality; 16] = [
        Personality::Intj,
        Personality::Intp,
        Personality::Entj,
        Personality::Entp,
        Personality::Infj,
        Personality::Infp,
        Personality::Enfj,
        Personality::Enfp,
        Personality::Istj,
        Personality::Isfj,
        Personality::Estj,
        Personality::Esfj,
        Personality::Istp,
        Personality::Isfp,
        Personality::Estp,
        Personality::Esfp,
    ];

    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Personality::Intj => "INTJ",
            Personality::Intp => "INTP",
            Personality::Entj => "ENTJ",
            Personality::Entp => "ENTP",
            Personality::Infj => "INFJ",
            Personality::Infp => "INFP",
            Personality::Enfj => "ENFJ",
            Personality::Enfp => "ENFP",
            Personality::Istj => "ISTJ",
            Personality::Isfj => "ISFJ",
            Personality::Estj => "ESTJ",
            Personality::Esfj => "ESFJ",
            Personality::Istp => "ISTP",
            Personality::Isfp => "ISFP",
            Personality::Estp => "ESTP",
            Personality::Esfp => "ESFP",
        }
    }

    pub fn is_extravert(&self) -> bool {
        self.as_str().starts_with('E')
    }

    pub fn is_thinking(&self) -> bool {
        self.as_str().contains('T')
    }

    pub fn is_judging(&self) -> bool {
        self.as_str().ends_with('J')
    }

    pub fn is_perceiving(&self) -> bool {
        self.as_str().ends_with('P')
    }
}

impl std::fmt::Display for Personality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Job {
    Innkeeper,
    Blacksmith,
    Scholar,
    Guard,
    Merchant,
    Fisher,
    Farmer,
    Unemployed,
}

impl Job {
    pub const ALL: [Job; 8] = [
        Job::Innkeeper,
        Job::Blacksmith,
        Job::Scholar,
        Job::Guard,
        Job::Merchant,
        Job::Fisher,
        Job::Farmer,
        Job::Unemployed,
    ];

    /// The attribute that weighs double in suitability scoring
    pub fn primary_stat(&self) -> StatKind {
        match self {
            Job::Innkeeper | Job::Merchant | Job::Unemployed => StatKind::Social,
            Job::Blacksmith | Job::Guard => StatKind::Strength,
            Job::Scholar => StatKind::Intellect,
            Job::Fisher => StatKind::Joy,
            Job::Farmer => StatKind::WorkEthic,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Job::Innkeeper => "Innkeeper",
            Job::Blacksmith => "Blacksmith",
            Job::Scholar => "Scholar",
            Job::Guard => "Guard",
            Job::Merchant => "Merchant",
            Job::Fisher => "Fisher",
            Job::Farmer => "Farmer",
            Job::Unemployed => "Unemployed",
        }
    }
}

impl std::fmt::Display for Job {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
