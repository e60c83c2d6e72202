//! Fixed dialogue pools
//!
//! Outcome rules choose the pool; the line within a pool is a uniform draw.

use rand::Rng;

pub const GREET_FRIENDLY: &[&str] = &[
    "Hail, friend!",
    "Good to see you.",
    "Hello there!",
    "Well met!",
    "Hi!",
];

pub const GREET_HOSTILE: &[&str] = &[
    "Step aside.",
    "No time for you.",
    "Ugh...",
    "Don't test me.",
    "Hmph.",
];

pub const FLIRT: &[&str] = &[
    "You shine like the stars.",
    "Care for a drink?",
    "You have a fire in you.",
    "Stunning.",
];

pub const REJECTION: &[&str] = &["...I don't think so."];

pub const INSULT: &[&str] = &[
    "You look like a wet dog.",
    "Pathetic worm.",
    "Get lost.",
    "Coward.",
];

pub const JOB_FISHER: &[&str] = &[
    "Fish are biting today.",
    "Big one got away...",
    "Smells like salt.",
];

pub const JOB_FARMER: &[&str] = &[
    "Harvest will be good.",
    "Rain's coming.",
    "Hard work, honest life.",
];

/// Uniform draw from a pool
pub fn pick<'a, R: Rng>(pool: &[&'a str], rng: &mut R) -> &'a str {
    if pool.is_empty() {
        return "...";
    }
    pool[rng.gen_range(0..pool.len())]
}
