//! Hearthvale - Village Life Simulation Engine
//!
//! Autonomous agents on a fixed 2D map follow clock-driven daily schedules,
//! job itineraries, and stochastic social interactions. The crate is the
//! behavior and scheduling core; rendering, audio and input are left to
//! front ends, which consume the read-only snapshot accessors on
//! [`world::World`].

pub mod agent;
pub mod behavior;
pub mod core;
pub mod persistence;
pub mod social;
pub mod world;
