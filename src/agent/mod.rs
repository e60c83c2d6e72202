//! Agents: identity, attributes, physical state, and per-job scratchpad

pub mod identity;
pub mod movement;
pub mod relationship;
pub mod stats;

use ahash::AHashMap;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::types::Vec2;
use crate::world::regions::RegionTable;
use identity::{Job, Personality, Race};
use relationship::{Relationship, RelationshipStatus};
use stats::StatBlock;

/// Base walking speed in world units per tick
pub const BASE_SPEED: f32 = 2.0;

/// What an agent is currently doing, as shown to observers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskLabel {
    #[default]
    Idle,
    Working,
}

impl TaskLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskLabel::Idle => "Idle",
            TaskLabel::Working => "Working",
        }
    }
}

/// Transient per-job working state.
///
/// The cached path survives across ticks and is only regenerated when the
/// routine selects a different field or no path exists yet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobState {
    pub task: TaskLabel,
    pub path: Vec<Vec2>,
    pub path_index: usize,
    pub field_index: Option<usize>,
    /// Fisher boat mode; doubles movement speed while set
    pub vehicle_active: bool,
}

/// Redacted or full identity view for display
#[derive(Debug, Clone, PartialEq)]
pub struct AgentInfo {
    pub name: String,
    pub race: Race,
    /// None when the observer has not earned this detail
    pub job: Option<Job>,
    /// None when the observer has not earned this detail
    pub personality: Option<Personality>,
    /// None when viewing oneself
    pub status: Option<RelationshipStatus>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    pub name: String,
    pub color: (u8, u8, u8),
    pub is_player: bool,

    pub race: Race,
    pub personality: Personality,
    pub job: Job,
    pub stats: StatBlock,

    /// Keyed by peer name; entries are created on first interaction and
    /// never removed
    pub relationships: AHashMap<String, Relationship>,

    pub job_state: JobState,
    /// Daily routine variant, rerolled at midnight
    pub routine_slot: u8,
    /// Fixed phase shift applied to the shared clock, desynchronizing
    /// otherwise identical routines
    pub schedule_offset: i32,

    pub speech_text: Option<String>,
    pub speech_timer: u32,

    pub position: Vec2,
    pub target: Vec2,
    pub home_coords: Vec2,
    pub bed_coords: Vec2,
    pub work_coords: Vec2,
    pub speed: f32,
}

impl Agent {
    /// Create an agent with random race, personality and stats, unemployed,
    /// standing at `position`
    pub fn spawn<R: Rng>(name: impl Into<String>, position: Vec2, color: (u8, u8, u8), rng: &mut R) -> Self {
        let race = Race::random(rng);
        let personality = Personality::random(rng);
        Self {
            name: name.into(),
            color,
            is_player: false,
            race,
            personality,
            job: Job::Unemployed,
            stats: StatBlock::roll(race, personality, rng),
            relationships: AHashMap::new(),
            job_state: JobState::default(),
            routine_slot: 0,
            schedule_offset: rng.gen_range(-40..=40),
            speech_text: None,
            speech_timer: 0,
            position,
            target: position,
            home_coords: Vec2::default(),
            bed_coords: Vec2::default(),
            work_coords: Vec2::default(),
            speed: BASE_SPEED,
        }
    }

    /// Redraw all six stats; used at creation and by the editor reroll
    pub fn recalculate_stats<R: Rng>(&mut self, rng: &mut R) {
        self.stats = StatBlock::roll(self.race, self.personality, rng);
    }

    /// Pick a new routine variant for the day. Farmers drop their cached
    /// path so the next working tick regenerates it.
    pub fn roll_daily_routine<R: Rng>(&mut self, rng: &mut R) {
        self.routine_slot = rng.gen_range(0..=2);
        if self.job == Job::Farmer {
            self.job_state.path.clear();
        }
    }

    /// Set the work coordinate from the job's region. Unemployed agents
    /// have no workplace and keep their current coordinate.
    pub fn assign_work_coords(&mut self, regions: &RegionTable) {
        let region = match self.job {
            Job::Innkeeper => &regions.inn,
            Job::Blacksmith => &regions.blacksmith,
            Job::Farmer => &regions.farm,
            Job::Fisher => &regions.docks,
            Job::Merchant => &regions.market,
            Job::Scholar => &regions.guild,
            Job::Guard => &regions.guard_post,
            Job::Unemployed => return,
        };
        self.work_coords = region.center();
    }

    /// Score this agent's fit for a job: twice the primary attribute plus
    /// fixed personality bonuses for a few job/axis pairings
    pub fn job_suitability(&self, job: Job) -> i32 {
        let mut score = self.stats.get(job.primary_stat()) * 2;
        if job == Job::Guard && self.personality.is_judging() {
            score += 3;
        }
        if job == Job::Innkeeper && self.personality.is_extravert() {
            score += 5;
        }
        if job == Job::Fisher && self.personality.is_perceiving() {
            score += 4;
        }
        score
    }

    /// Mutable relationship record toward `peer`, created on first access
    pub fn relationship_with(&mut self, peer: &str) -> &mut Relationship {
        self.relationships.entry(peer.to_string()).or_default()
    }

    /// Read-only relationship view; absent records read as defaults without
    /// being created
    pub fn relationship_view(&self, peer: &str) -> Relationship {
        self.relationships.get(peer).cloned().unwrap_or_default()
    }

    pub fn say(&mut self, text: impl Into<String>, duration: u32) {
        self.speech_text = Some(text.into());
        self.speech_timer = duration;
    }

    /// Count down the speech bubble; clears the text when it expires
    pub fn tick_speech(&mut self) {
        if self.speech_timer > 0 {
            self.speech_timer -= 1;
            if self.speech_timer == 0 {
                self.speech_text = None;
            }
        }
    }

    pub fn effective_speed(&self) -> f32 {
        if self.job_state.vehicle_active {
            self.speed * 2.0
        } else {
            self.speed
        }
    }

    /// One movement step toward the current target
    pub fn apply_movement(&mut self) {
        self.position = movement::step_toward(self.position, self.target, self.effective_speed());
    }

    /// One frame of direct player input. Pins the target to the new position
    /// so the AI resolver does not pull the agent back.
    pub fn move_manual(&mut self, dx: i8, dy: i8, sprint: bool) {
        let speed = if sprint { self.speed * 2.0 } else { self.speed };
        self.position = movement::manual_step(self.position, dx, dy, speed);
        self.target = self.position;
    }

    /// What `observer` knows about this agent.
    ///
    /// The job is revealed by any positive regard or by catching the agent
    /// at work; the personality type only by a substantial bond.
    pub fn known_info(&self, observer: &Agent) -> AgentInfo {
        if observer.name == self.name {
            return self.full_info();
        }
        let rel = observer.relationship_view(&self.name);
        let job = if rel.friendship > 0 || rel.romance > 0 || self.job_state.task == TaskLabel::Working
        {
            Some(self.job)
        } else {
            None
        };
        let personality = if rel.friendship > 30 || rel.romance > 20 {
            Some(self.personality)
        } else {
            None
        };
        AgentInfo {
            name: self.name.clone(),
            race: self.race,
            job,
            personality,
            status: Some(rel.status),
        }
    }

    pub fn full_info(&self) -> AgentInfo {
        AgentInfo {
            name: self.name.clone(),
            race: self.race,
            job: Some(self.job),
            personality: Some(self.personality),
            status: None,
        }
    }
}
