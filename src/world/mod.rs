pub mod environment;
pub mod regions;
#[allow(clippy::module_inception)]
pub mod world;

pub use world::{ControlMode, PlayerConfig, World, VILLAGER_NAMES};
