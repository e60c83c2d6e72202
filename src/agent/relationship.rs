//! Pairwise relationship state
//!
//! Each agent keeps one record per peer it has interacted with, keyed by the
//! peer's name. A's record about B is independent of B's record about A.
//! Records are created on first access and never deleted.

use serde::{Deserialize, Serialize};

/// Derived label shown to the player
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RelationshipStatus {
    #[default]
    Strangers,
    Bestie,
    Lover,
    Crush,
    Enemy,
    /// Sticky: once set, the automatic derivation never replaces it
    Exes,
}

impl RelationshipStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RelationshipStatus::Strangers => "Strangers",
            RelationshipStatus::Bestie => "Bestie",
            RelationshipStatus::Lover => "Lover",
            RelationshipStatus::Crush => "Crush",
            RelationshipStatus::Enemy => "Enemy",
            RelationshipStatus::Exes => "Exes",
        }
    }
}

impl std::fmt::Display for RelationshipStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relationship {
    pub friendship: i32,
    pub romance: i32,
    pub status: RelationshipStatus,
}

impl Relationship {
    /// Re-derive the status label from the accumulators.
    ///
    /// Checks run in fixed priority order: romance thresholds before
    /// friendship thresholds. Exes is never overwritten. When no threshold
    /// matches, the prior label stands.
    pub fn refresh_status(&mut self) {
        if self.status == RelationshipStatus::Exes {
            return;
        }
        if self.romance > 40 {
            self.status = RelationshipStatus::Lover;
        } else if self.romance > 20 {
            self.status = RelationshipStatus::Crush;
        } else if self.friendship > 40 {
            self.status = RelationshipStatus::Bestie;
        } else if self.friendship < -20 {
            self.status = RelationshipStatus::Enemy;
        }
    }
}
