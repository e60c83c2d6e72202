//! World orchestration: roster, clock, and the per-tick update pass
//!
//! One `update` call is one simulation tick: advance the clock (with the
//! sleep-acceleration rule), reroll routines at midnight, drift the ambient
//! environment, then walk the roster in order running each agent's schedule,
//! spontaneous-interaction scan, and movement step. Agents are updated
//! sequentially, so ledger mutations made early in a tick are visible to
//! agents updated later in the same tick.

use std::collections::VecDeque;
use std::path::Path;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::agent::identity::{Job, Personality, Race};
use crate::agent::Agent;
use crate::behavior::scheduler;
use crate::core::clock::Clock;
use crate::core::config::SimulationConfig;
use crate::core::error::{Result, SimError};
use crate::core::types::Vec2;
use crate::persistence::SaveState;
use crate::social::{self, InteractionKind};
use crate::world::environment::Environment;
use crate::world::regions::RegionTable;

/// Fixed villager name pool used at world creation
pub const VILLAGER_NAMES: [&str; 16] = [
    "Arin", "Bela", "Cian", "Dora", "Elian", "Fyn", "Gara", "Hux", "Ivy", "Jem", "Kae", "Lorn",
    "Mika", "Nora", "Odin", "Pia",
];

/// Job openings filled at world creation, in assignment order
const JOB_OPENINGS: [(Job, usize); 7] = [
    (Job::Innkeeper, 2),
    (Job::Blacksmith, 2),
    (Job::Scholar, 2),
    (Job::Guard, 3),
    (Job::Merchant, 2),
    (Job::Fisher, 2),
    (Job::Farmer, 2),
];

/// Whether the player agent is driven by input or by the scheduler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlMode {
    /// The player moves manually; the scheduler skips their agent
    Normal,
    /// The player agent runs on autopilot like everyone else
    Spectator,
}

/// Player identity chosen at world creation
#[derive(Debug, Clone)]
pub struct PlayerConfig {
    pub name: String,
    pub race: Race,
    pub job: Job,
    pub personality: Personality,
    pub color: (u8, u8, u8),
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            name: "Player".into(),
            race: Race::Human,
            job: Job::Guard,
            personality: Personality::Intj,
            color: (255, 255, 255),
        }
    }
}

#[derive(Debug)]
pub struct World {
    agents: Vec<Agent>,
    player_index: Option<usize>,
    clock: Clock,
    interaction_log: VecDeque<String>,
    environment: Environment,
    regions: RegionTable,
    config: SimulationConfig,
    rng: ChaCha8Rng,
}

impl World {
    /// Create a fresh world on the stock village map
    pub fn village(player: PlayerConfig, seed: u64) -> Result<Self> {
        Self::create_new(player, RegionTable::village(), SimulationConfig::default(), seed)
    }

    /// Create a fresh world: validate geography and config, spawn the
    /// roster, assign jobs by suitability, place everyone in bed.
    pub fn create_new(
        player: PlayerConfig,
        regions: RegionTable,
        config: SimulationConfig,
        seed: u64,
    ) -> Result<Self> {
        config.validate()?;
        regions.validate()?;
        if regions.beds.len() < config.roster_size {
            return Err(SimError::Config(format!(
                "roster of {} needs that many beds, map has {}",
                config.roster_size,
                regions.beds.len()
            )));
        }

        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut agents = Vec::with_capacity(config.roster_size);

        let mut hero = Agent::spawn(player.name, Vec2::default(), player.color, &mut rng);
        hero.race = player.race;
        hero.job = player.job;
        hero.personality = player.personality;
        hero.is_player = true;
        hero.recalculate_stats(&mut rng);
        hero.bed_coords = regions.beds[0];
        hero.home_coords = regions.houses[0].center();
        hero.position = hero.bed_coords;
        hero.target = hero.position;
        agents.push(hero);

        for (i, name) in VILLAGER_NAMES.iter().enumerate() {
            if agents.len() >= config.roster_size {
                break;
            }
            let color = (
                rng.gen_range(100..=200),
                rng.gen_range(100..=200),
                rng.gen_range(100..=200),
            );
            let mut villager = Agent::spawn(*name, Vec2::default(), color, &mut rng);
            let bed_index = i + 1;
            villager.bed_coords = regions.beds[bed_index];
            villager.home_coords = match regions.houses.get(bed_index) {
                Some(house) => house.center(),
                None => regions.inn.center(),
            };
            villager.position = villager.bed_coords;
            villager.target = villager.position;
            agents.push(villager);
        }

        assign_jobs(&mut agents);
        for agent in &mut agents {
            agent.assign_work_coords(&regions);
        }

        let mut world = Self {
            agents,
            player_index: Some(0),
            clock: Clock::new(),
            interaction_log: VecDeque::new(),
            environment: Environment::new(),
            regions,
            config,
            rng,
        };
        world.push_log("New World Created.".to_string());
        tracing::info!(roster = world.agents.len(), seed, "world created");
        Ok(world)
    }

    /// One simulation tick
    pub fn update(&mut self, speed_multiplier: f32, mode: ControlMode) {
        let mut increment = self.config.time_speed * speed_multiplier;
        if self.player_sleeping() {
            increment *= self.config.sleep_acceleration;
        }

        if self.clock.advance(increment) {
            for agent in &mut self.agents {
                agent.roll_daily_routine(&mut self.rng);
            }
            tracing::debug!(day = self.clock.day(), "day rolled over, routines rerolled");
        }

        let is_night = self.clock.is_night();
        self.environment.update(
            is_night,
            self.regions.map_width,
            self.regions.map_height,
            &mut self.rng,
        );

        let time_of_day = self.clock.time_of_day();
        for i in 0..self.agents.len() {
            self.agents[i].tick_speech();

            if self.agents[i].is_player && mode == ControlMode::Normal {
                continue;
            }

            scheduler::plan_agent(
                &mut self.agents[i],
                time_of_day,
                &self.regions,
                &self.config,
                &mut self.rng,
            );

            if self.rng.gen_bool(self.config.interaction_chance) {
                if let Some(j) = self.nearby_agent(i) {
                    let (_, line) = {
                        let (actor, partner) = pair_mut(&mut self.agents, i, j);
                        social::resolve(actor, partner, None, &mut self.rng)
                    };
                    self.agents[i].say(line.clone(), self.config.speech_duration);
                    let name = self.agents[i].name.clone();
                    self.push_log(format!("{name}: {line}"));
                }
            }

            self.agents[i].apply_movement();
        }
    }

    /// Player-driven interaction entry point. Returns None when either index
    /// is invalid or actor and target are the same agent.
    pub fn resolve_manual(
        &mut self,
        actor: usize,
        target: usize,
        choice: u8,
    ) -> Option<(InteractionKind, String)> {
        if actor == target || actor >= self.agents.len() || target >= self.agents.len() {
            return None;
        }
        let (kind, line) = {
            let (a, t) = pair_mut(&mut self.agents, actor, target);
            social::resolve(a, t, Some(choice), &mut self.rng)
        };
        self.agents[actor].say(line.clone(), self.config.speech_duration);
        let name = self.agents[actor].name.clone();
        self.push_log(format!("{name} ({kind}): {line}"));
        Some((kind, line))
    }

    /// One frame of manual movement for the player agent
    pub fn move_player(&mut self, dx: i8, dy: i8, sprint: bool) {
        if let Some(index) = self.player_index {
            self.agents[index].move_manual(dx, dy, sprint);
        }
    }

    /// Transfer player control to another roster agent
    pub fn possess(&mut self, index: usize) -> bool {
        if index >= self.agents.len() {
            return false;
        }
        if let Some(old) = self.player_index {
            self.agents[old].is_player = false;
        }
        self.agents[index].is_player = true;
        self.player_index = Some(index);
        true
    }

    /// Redraw an agent's stats (editor feature)
    pub fn reroll_agent_stats(&mut self, index: usize) -> bool {
        if index >= self.agents.len() {
            return false;
        }
        self.agents[index].recalculate_stats(&mut self.rng);
        true
    }

    /// First agent whose position is within `radius` of `pos` on both axes
    pub fn agent_at(&self, pos: Vec2, radius: f32) -> Option<usize> {
        self.agents
            .iter()
            .position(|a| (a.position.x - pos.x).abs() < radius && (a.position.y - pos.y).abs() < radius)
    }

    /// Nearest other agent to the given roster entry, if within `radius`
    pub fn closest_to(&self, index: usize, radius: f32) -> Option<usize> {
        let origin = self.agents.get(index)?.position;
        self.agents
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != index)
            .min_by(|(_, a), (_, b)| {
                a.position
                    .distance(&origin)
                    .partial_cmp(&b.position.distance(&origin))
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
            .filter(|(_, a)| a.position.distance(&origin) < radius)
            .map(|(i, _)| i)
    }

    // === Persistence ===

    pub fn save_state(&self) -> Result<SaveState> {
        let player_index = self
            .player_index
            .ok_or_else(|| SimError::Persistence("no player agent to anchor the save".into()))?;
        Ok(SaveState {
            agents: self.agents.clone(),
            day: self.clock.day(),
            time_of_day: self.clock.time_of_day(),
            player_index,
        })
    }

    /// Replace the whole roster and clock from a decoded save. Validation
    /// happens before any field is touched, so a rejected state leaves the
    /// world unchanged.
    pub fn restore(&mut self, state: SaveState) -> Result<()> {
        state.validate()?;
        self.clock = Clock::restore(state.time_of_day, state.day);
        self.agents = state.agents;
        for agent in &mut self.agents {
            agent.is_player = false;
        }
        self.agents[state.player_index].is_player = true;
        self.player_index = Some(state.player_index);
        self.push_log("Game Loaded.".to_string());
        tracing::info!(day = state.day, "world restored from save");
        Ok(())
    }

    pub fn save_to_file(&mut self, path: &Path) -> Result<()> {
        let bytes = self.save_state()?.to_bytes()?;
        std::fs::write(path, bytes)?;
        self.push_log("Game Saved.".to_string());
        Ok(())
    }

    /// Load from disk. On any failure the current world state is untouched.
    pub fn load_from_file(&mut self, path: &Path) -> Result<()> {
        let bytes = std::fs::read(path)
            .map_err(|e| SimError::Persistence(format!("cannot read save: {e}")))?;
        let state = SaveState::from_bytes(&bytes)?;
        self.restore(state)
    }

    // === Queries ===

    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    pub fn agent(&self, index: usize) -> Option<&Agent> {
        self.agents.get(index)
    }

    pub fn player_index(&self) -> Option<usize> {
        self.player_index
    }

    pub fn player(&self) -> Option<&Agent> {
        self.player_index.and_then(|i| self.agents.get(i))
    }

    pub fn clock(&self) -> &Clock {
        &self.clock
    }

    pub fn regions(&self) -> &RegionTable {
        &self.regions
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    pub fn interaction_log(&self) -> impl DoubleEndedIterator<Item = &str> + '_ {
        self.interaction_log.iter().map(String::as_str)
    }

    fn push_log(&mut self, entry: String) {
        self.interaction_log.push_back(entry);
        while self.interaction_log.len() > self.config.log_capacity {
            self.interaction_log.pop_front();
        }
    }

    /// Sleep acceleration applies while the player rests near any bed
    fn player_sleeping(&self) -> bool {
        let Some(player) = self.player() else {
            return false;
        };
        self.regions
            .beds
            .iter()
            .any(|bed| player.position.distance(bed) < self.config.sleep_radius)
    }

    /// First other agent within the spontaneous-interaction radius, in
    /// roster order
    fn nearby_agent(&self, index: usize) -> Option<usize> {
        let origin = self.agents[index].position;
        self.agents
            .iter()
            .enumerate()
            .find(|(i, a)| *i != index && a.position.distance(&origin) < self.config.interaction_radius)
            .map(|(i, _)| i)
    }
}

/// Greedy suitability assignment over the opening table
fn assign_jobs(agents: &mut [Agent]) {
    for (job, slots) in JOB_OPENINGS {
        for _ in 0..slots {
            let mut best: Option<(usize, i32)> = None;
            for (i, agent) in agents.iter().enumerate() {
                if agent.job != Job::Unemployed || agent.is_player {
                    continue;
                }
                let score = agent.job_suitability(job);
                if best.map_or(true, |(_, s)| score > s) {
                    best = Some((i, score));
                }
            }
            match best {
                Some((i, _)) => agents[i].job = job,
                None => return,
            }
        }
    }
}

/// Disjoint mutable access to two roster entries
fn pair_mut(agents: &mut [Agent], i: usize, j: usize) -> (&mut Agent, &mut Agent) {
    debug_assert_ne!(i, j);
    if i < j {
        let (head, tail) = agents.split_at_mut(j);
        (&mut head[i], &mut tail[0])
    } else {
        let (head, tail) = agents.split_at_mut(i);
        (&mut tail[0], &mut head[j])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_world() -> World {
        World::village(PlayerConfig::default(), 1234).unwrap()
    }

    #[test]
    fn test_create_new_fills_roster_and_jobs() {
        let world = test_world();
        assert_eq!(world.agents().len(), 16);
        assert_eq!(world.player_index(), Some(0));
        assert!(world.player().unwrap().is_player);

        // 15 villagers cover the 15 openings exactly
        for (job, slots) in JOB_OPENINGS {
            let holders = world
                .agents()
                .iter()
                .filter(|a| !a.is_player && a.job == job)
                .count();
            assert_eq!(holders, slots, "{job} should have {slots} holders");
        }
        assert!(world
            .agents()
            .iter()
            .filter(|a| !a.is_player)
            .all(|a| a.job != Job::Unemployed));
    }

    #[test]
    fn test_workers_have_work_coords() {
        let world = test_world();
        for agent in world.agents().iter().filter(|a| a.job != Job::Unemployed) {
            assert_ne!(agent.work_coords, Vec2::default(), "{} has no workplace", agent.name);
        }
    }

    #[test]
    fn test_everyone_starts_in_bed() {
        let world = test_world();
        for agent in world.agents() {
            assert_eq!(agent.position, agent.bed_coords);
        }
    }

    #[test]
    fn test_too_small_bed_count_is_config_error() {
        let mut regions = RegionTable::village();
        regions.beds.truncate(4);
        let err = World::create_new(
            PlayerConfig::default(),
            regions,
            SimulationConfig::default(),
            1,
        )
        .unwrap_err();
        assert!(matches!(err, SimError::Config(_)));
    }

    #[test]
    fn test_update_advances_clock() {
        let mut world = test_world();
        // Move the player away from bed so sleep acceleration stays off
        world.agents[0].position = Vec2::new(600.0, 600.0);
        world.agents[0].target = world.agents[0].position;
        let before = world.clock().time_of_day();
        world.update(1.0, ControlMode::Normal);
        let expected = before + world.config().time_speed;
        assert!((world.clock().time_of_day() - expected).abs() < 1e-4);
    }

    #[test]
    fn test_sleep_acceleration_near_bed() {
        let mut world = test_world();
        // Player starts in bed, so the multiplier applies
        let before = world.clock().time_of_day();
        world.update(1.0, ControlMode::Normal);
        let expected =
            before + world.config().time_speed * world.config().sleep_acceleration;
        assert!((world.clock().time_of_day() - expected).abs() < 1e-2);
    }

    #[test]
    fn test_log_is_bounded() {
        let mut world = test_world();
        for i in 0..500 {
            world.push_log(format!("entry {i}"));
        }
        assert_eq!(world.interaction_log().count(), world.config().log_capacity);
    }

    #[test]
    fn test_agent_at_uses_axis_distance() {
        let mut world = test_world();
        world.agents[3].position = Vec2::new(700.0, 700.0);
        assert_eq!(world.agent_at(Vec2::new(710.0, 690.0), 20.0), Some(3));
        assert_eq!(world.agent_at(Vec2::new(2300.0, 50.0), 20.0), None);
    }

    #[test]
    fn test_possess_moves_player_flag() {
        let mut world = test_world();
        assert!(world.possess(5));
        assert_eq!(world.player_index(), Some(5));
        assert!(world.agents()[5].is_player);
        assert!(!world.agents()[0].is_player);
        assert!(!world.possess(99));
    }

    #[test]
    fn test_resolve_manual_validates_indices() {
        let mut world = test_world();
        assert!(world.resolve_manual(0, 0, 1).is_none());
        assert!(world.resolve_manual(0, 99, 1).is_none());
        let (kind, _) = world.resolve_manual(0, 1, 3).unwrap();
        assert_eq!(kind, InteractionKind::Insult);
        let target_name = world.agents()[1].name.clone();
        let rel = world.agents()[0].relationship_view(&target_name);
        assert_eq!(rel.friendship, -5);
    }

    #[test]
    fn test_pair_mut_order() {
        let mut world = test_world();
        let (a, b) = pair_mut(&mut world.agents, 4, 2);
        assert_eq!(a.name, VILLAGER_NAMES[3]); // roster index 4
        assert_eq!(b.name, VILLAGER_NAMES[1]); // roster index 2
    }
}
