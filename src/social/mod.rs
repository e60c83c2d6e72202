//! Social interaction resolution
//!
//! A single state-free entry point decides what happens when two agents
//! interact, mutates both relationship ledgers, re-derives their status
//! labels, and hands back a display line.

pub mod dialogue;

use rand::Rng;

use crate::agent::relationship::RelationshipStatus;
use crate::agent::Agent;

/// Chance an agent with an established crush flirts instead of chatting
const FLIRT_CHANCE: f64 = 0.4;
/// Romance level above which an agent considers flirting on its own
const FLIRT_ROMANCE_THRESHOLD: i32 = 15;
/// Friendship level below which an agent opens with an insult
const INSULT_FRIENDSHIP_THRESHOLD: i32 = -15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InteractionKind {
    Chat,
    Flirt,
    Insult,
}

impl InteractionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            InteractionKind::Chat => "Chat",
            InteractionKind::Flirt => "Flirt",
            InteractionKind::Insult => "Insult",
        }
    }
}

impl std::fmt::Display for InteractionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolve one interaction between `actor` and `target`.
///
/// `manual_choice` maps 1/2/3 to Chat/Flirt/Insult; anything else falls
/// through to Chat. Without a manual choice the kind is picked from the
/// actor's regard for the target. Both ledgers are mutated in place and both
/// status labels re-derived before returning.
pub fn resolve<R: Rng>(
    actor: &mut Agent,
    target: &mut Agent,
    manual_choice: Option<u8>,
    rng: &mut R,
) -> (InteractionKind, String) {
    let target_name = target.name.clone();
    let actor_name = actor.name.clone();

    // Records exist from here on, even when the outcome mutates nothing
    actor.relationship_with(&target_name);
    target.relationship_with(&actor_name);

    let kind = match manual_choice {
        Some(2) => InteractionKind::Flirt,
        Some(3) => InteractionKind::Insult,
        Some(_) => InteractionKind::Chat,
        None => {
            let rel = actor.relationship_view(&target_name);
            if rel.romance > FLIRT_ROMANCE_THRESHOLD {
                if rng.gen_bool(FLIRT_CHANCE) {
                    InteractionKind::Flirt
                } else {
                    InteractionKind::Chat
                }
            } else if rel.friendship < INSULT_FRIENDSHIP_THRESHOLD {
                InteractionKind::Insult
            } else {
                InteractionKind::Chat
            }
        }
    };

    let line = match kind {
        InteractionKind::Chat => {
            if actor.relationship_view(&target_name).friendship >= 0 {
                actor.relationship_with(&target_name).friendship += 1;
                target.relationship_with(&actor_name).friendship += 1;
                dialogue::pick(dialogue::GREET_FRIENDLY, rng).to_string()
            } else {
                dialogue::pick(dialogue::GREET_HOSTILE, rng).to_string()
            }
        }
        InteractionKind::Flirt => {
            let line = dialogue::pick(dialogue::FLIRT, rng).to_string();
            let attraction = actor.stats.social + actor.stats.libido;
            let standards = target.stats.intellect;
            if attraction >= standards || actor.relationship_view(&target_name).romance > 5 {
                actor.relationship_with(&target_name).romance += 4;
                target.relationship_with(&actor_name).romance += 3;
                line
            } else {
                actor.relationship_with(&target_name).friendship -= 2;
                dialogue::pick(dialogue::REJECTION, rng).to_string()
            }
        }
        InteractionKind::Insult => {
            actor.relationship_with(&target_name).friendship -= 5;
            let rel = target.relationship_with(&actor_name);
            rel.friendship -= 8;
            rel.status = RelationshipStatus::Enemy;
            dialogue::pick(dialogue::INSULT, rng).to_string()
        }
    };

    actor.relationship_with(&target_name).refresh_status();
    target.relationship_with(&actor_name).refresh_status();

    (kind, line)
}
