//! Job itineraries: where a working agent goes
//!
//! One rule per job, dispatched exhaustively so a new job cannot ship
//! without a destination rule. The daily routine slot selects among up to
//! three variants of each rule.

use rand::Rng;

use crate::agent::identity::Job;
use crate::agent::Agent;
use crate::core::types::{Rect, Vec2};
use crate::world::regions::RegionTable;

/// Rows walked per field by a farmer
const FIELD_ROWS: usize = 5;
/// Vertical spacing between field rows
const ROW_SPACING: f32 = 80.0;
/// Margin kept from the field edges
const ROW_INSET: f32 = 20.0;

/// Destination for an agent whose schedule says "work right now".
///
/// May mutate the agent's job-state scratchpad (cached farmer path,
/// fisher boat flag).
pub fn work_destination<R: Rng>(
    agent: &mut Agent,
    regions: &RegionTable,
    waypoint_radius: f32,
    rng: &mut R,
) -> Vec2 {
    match agent.job {
        Job::Farmer => farmer_destination(agent, regions, waypoint_radius),
        Job::Guard => {
            let points = &regions.patrol_points;
            points[agent.routine_slot as usize % points.len()]
        }
        Job::Fisher => fisher_destination(agent, regions, rng),
        Job::Innkeeper => {
            if agent.routine_slot == 0 {
                // back room
                Vec2::new(regions.inn.x + 250.0, regions.inn.y + 200.0)
            } else {
                regions.bar_area.center()
            }
        }
        Job::Unemployed => match agent.routine_slot {
            0 => regions.park.center(),
            1 => regions.market.center(),
            _ => regions.docks.center(),
        },
        Job::Blacksmith | Job::Scholar | Job::Merchant => agent.work_coords,
    }
}

/// Routine slots 0 and 1 sweep one of the two fields along a cached
/// serpentine path; slot 2 tends the ranch instead (no path).
fn farmer_destination(agent: &mut Agent, regions: &RegionTable, waypoint_radius: f32) -> Vec2 {
    let field_index = if agent.routine_slot == 0 { 0 } else { 1 };
    if agent.routine_slot == 2 {
        return regions.ranch.center();
    }

    let position = agent.position;
    let state = &mut agent.job_state;
    if state.path.is_empty() || state.field_index != Some(field_index) {
        state.path = field_path(&regions.fields[field_index % regions.fields.len()]);
        state.path_index = 0;
        state.field_index = Some(field_index);
    }

    let current = state.path[state.path_index];
    if position.distance(&current) < waypoint_radius {
        state.path_index = (state.path_index + 1) % state.path.len();
    }
    state.path[state.path_index]
}

/// Serpentine sweep: evenly spaced rows, alternating direction each row
fn field_path(field: &Rect) -> Vec<Vec2> {
    let mut path = Vec::with_capacity(FIELD_ROWS * 2);
    let start_x = field.x + ROW_INSET;
    let end_x = field.right() - ROW_INSET;
    for row in 0..FIELD_ROWS {
        let y = field.y + 40.0 + row as f32 * ROW_SPACING;
        if row % 2 == 0 {
            path.push(Vec2::new(start_x, y));
            path.push(Vec2::new(end_x, y));
        } else {
            path.push(Vec2::new(end_x, y));
            path.push(Vec2::new(start_x, y));
        }
    }
    path
}

/// Slot 0 takes the boat out on open water; slots 1 and 2 work the dock
fn fisher_destination<R: Rng>(agent: &mut Agent, regions: &RegionTable, rng: &mut R) -> Vec2 {
    match agent.routine_slot {
        0 => {
            let water = &regions.open_water;
            agent.job_state.vehicle_active = agent.position.y > regions.deep_water_y;
            Vec2::new(rng.gen_range(water.x..=water.right()), water.y)
        }
        1 => Vec2::new(regions.docks.x + 50.0, regions.docks.y + 350.0),
        _ => Vec2::new(regions.docks.x + 50.0, regions.docks.y + 50.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn setup() -> (Agent, RegionTable, ChaCha8Rng) {
        let mut rng = ChaCha8Rng::seed_from_u64(99);
        let regions = RegionTable::village();
        let agent = Agent::spawn("Tess", Vec2::new(0.0, 0.0), (10, 10, 10), &mut rng);
        (agent, regions, rng)
    }

    #[test]
    fn test_field_path_shape() {
        let field = Rect::new(1750.0, 150.0, 200.0, 500.0);
        let path = field_path(&field);
        assert_eq!(path.len(), 10);
        // First row sweeps left to right
        assert_eq!(path[0], Vec2::new(1770.0, 190.0));
        assert_eq!(path[1], Vec2::new(1930.0, 190.0));
        // Second row sweeps back
        assert_eq!(path[2], Vec2::new(1930.0, 270.0));
        assert_eq!(path[3], Vec2::new(1770.0, 270.0));
        // Rows are evenly spaced
        assert!((path[4].y - path[2].y - 80.0).abs() < 1e-4);
    }

    #[test]
    fn test_farmer_path_cached_until_field_changes() {
        let (mut agent, regions, mut rng) = setup();
        agent.job = Job::Farmer;
        agent.routine_slot = 0;
        work_destination(&mut agent, &regions, 10.0, &mut rng);
        assert_eq!(agent.job_state.field_index, Some(0));
        let cached = agent.job_state.path.clone();

        // Same slot: path untouched
        work_destination(&mut agent, &regions, 10.0, &mut rng);
        assert_eq!(agent.job_state.path, cached);

        // Other field: regenerated
        agent.routine_slot = 1;
        work_destination(&mut agent, &regions, 10.0, &mut rng);
        assert_eq!(agent.job_state.field_index, Some(1));
        assert_ne!(agent.job_state.path, cached);
    }

    #[test]
    fn test_farmer_waypoint_advances_and_wraps() {
        let (mut agent, regions, mut rng) = setup();
        agent.job = Job::Farmer;
        agent.routine_slot = 0;
        let first = work_destination(&mut agent, &regions, 10.0, &mut rng);

        // Standing on the waypoint advances to the next one
        agent.position = first;
        let second = work_destination(&mut agent, &regions, 10.0, &mut rng);
        assert_ne!(second, first);
        assert_eq!(agent.job_state.path_index, 1);

        // Walk the whole circuit; the index wraps to the start
        for _ in 0..9 {
            agent.position = agent.job_state.path[agent.job_state.path_index];
            work_destination(&mut agent, &regions, 10.0, &mut rng);
        }
        assert_eq!(agent.job_state.path_index, 0);
    }

    #[test]
    fn test_farmer_ranch_slot_keeps_cache() {
        let (mut agent, regions, mut rng) = setup();
        agent.job = Job::Farmer;
        agent.routine_slot = 0;
        work_destination(&mut agent, &regions, 10.0, &mut rng);
        let cached = agent.job_state.path.clone();

        agent.routine_slot = 2;
        let dest = work_destination(&mut agent, &regions, 10.0, &mut rng);
        assert_eq!(dest, regions.ranch.center());
        assert_eq!(agent.job_state.path, cached);
    }

    #[test]
    fn test_guard_patrol_slot_indexing() {
        let (mut agent, regions, mut rng) = setup();
        agent.job = Job::Guard;
        for slot in 0..=2u8 {
            agent.routine_slot = slot;
            let dest = work_destination(&mut agent, &regions, 10.0, &mut rng);
            assert_eq!(dest, regions.patrol_points[slot as usize]);
        }
        // The fourth corner is unreachable by slot alone
    }

    #[test]
    fn test_fisher_open_water_and_boat_flag() {
        let (mut agent, regions, mut rng) = setup();
        agent.job = Job::Fisher;
        agent.routine_slot = 0;

        agent.position = Vec2::new(400.0, 100.0);
        let dest = work_destination(&mut agent, &regions, 10.0, &mut rng);
        assert!(!agent.job_state.vehicle_active);
        assert!(dest.x >= regions.open_water.x && dest.x <= regions.open_water.right());
        assert!((dest.y - regions.open_water.y).abs() < f32::EPSILON);

        // Deep enough south, the boat comes out
        agent.position = Vec2::new(400.0, 1200.0);
        work_destination(&mut agent, &regions, 10.0, &mut rng);
        assert!(agent.job_state.vehicle_active);
    }

    #[test]
    fn test_fisher_dock_slots() {
        let (mut agent, regions, mut rng) = setup();
        agent.job = Job::Fisher;
        agent.routine_slot = 1;
        let inner = work_destination(&mut agent, &regions, 10.0, &mut rng);
        assert_eq!(inner, Vec2::new(regions.docks.x + 50.0, regions.docks.y + 350.0));
        agent.routine_slot = 2;
        let entrance = work_destination(&mut agent, &regions, 10.0, &mut rng);
        assert_eq!(entrance, Vec2::new(regions.docks.x + 50.0, regions.docks.y + 50.0));
    }

    #[test]
    fn test_innkeeper_and_unemployed_slots() {
        let (mut agent, regions, mut rng) = setup();
        agent.job = Job::Innkeeper;
        agent.routine_slot = 0;
        let back_room = work_destination(&mut agent, &regions, 10.0, &mut rng);
        assert_eq!(back_room, Vec2::new(regions.inn.x + 250.0, regions.inn.y + 200.0));
        agent.routine_slot = 1;
        assert_eq!(work_destination(&mut agent, &regions, 10.0, &mut rng), regions.bar_area.center());

        agent.job = Job::Unemployed;
        agent.routine_slot = 0;
        assert_eq!(work_destination(&mut agent, &regions, 10.0, &mut rng), regions.park.center());
        agent.routine_slot = 2;
        assert_eq!(work_destination(&mut agent, &regions, 10.0, &mut rng), regions.docks.center());
    }

    #[test]
    fn test_fixed_jobs_use_work_coords() {
        let (mut agent, regions, mut rng) = setup();
        agent.job = Job::Scholar;
        agent.assign_work_coords(&regions);
        let dest = work_destination(&mut agent, &regions, 10.0, &mut rng);
        assert_eq!(dest, regions.guild.center());
    }
}
