//! The per-tick schedule cascade
//!
//! Maps the agent's phase-shifted view of the shared clock to a destination:
//! sleep outside waking hours, the job itinerary during the working window,
//! then an evening at the bar or at home depending on sociability.

use rand::Rng;

use crate::agent::identity::Job;
use crate::agent::{Agent, TaskLabel};
use crate::behavior::itinerary;
use crate::core::clock::{BEDTIME, WORK_END, WORK_START};
use crate::core::config::SimulationConfig;
use crate::core::types::Vec2;
use crate::social::dialogue;
use crate::world::regions::RegionTable;

/// Decide the agent's target for this tick.
///
/// The schedule offset makes the effective time a free-running phase; it is
/// only compared against ordering thresholds, so no wraparound is applied.
pub fn plan_agent<R: Rng>(
    agent: &mut Agent,
    time_of_day: f32,
    regions: &RegionTable,
    config: &SimulationConfig,
    rng: &mut R,
) {
    agent.job_state.vehicle_active = false;
    agent.job_state.task = TaskLabel::Idle;

    let effective = time_of_day + agent.schedule_offset as f32;

    let destination = if effective > BEDTIME || effective < WORK_START {
        agent.bed_coords
    } else if effective < WORK_END {
        agent.job_state.task = TaskLabel::Working;
        let dest = itinerary::work_destination(agent, regions, config.waypoint_radius, rng);
        work_chatter(agent, config, rng);
        dest
    } else if agent.stats.social > 5 {
        regions.social_hub()
    } else {
        agent.home_coords
    };

    let jitter = config.target_jitter;
    agent.target = Vec2::new(
        destination.x + rng.gen_range(-jitter..=jitter),
        destination.y + rng.gen_range(-jitter..=jitter),
    );
}

/// Fishers and farmers mutter about the day's work once in a while
fn work_chatter<R: Rng>(agent: &mut Agent, config: &SimulationConfig, rng: &mut R) {
    if agent.speech_timer > 0 {
        return;
    }
    let pool = match agent.job {
        Job::Fisher => dialogue::JOB_FISHER,
        Job::Farmer => dialogue::JOB_FARMER,
        _ => return,
    };
    if rng.gen_bool(config.work_chatter_chance) {
        let line = dialogue::pick(pool, rng).to_string();
        agent.say(line, config.speech_duration);
    }
}
