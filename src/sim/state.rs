//! Game state and core simulation types
//!
//! Everything the simulation owns lives here. Entities are exclusively owned
//! by the collections on [`GameState`]; external layers only read snapshots
//! and feed input flags.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// No run active yet
    Idle,
    /// Simulation steps execute each tick
    Running,
    /// Run ended, final score frozen
    Over,
}

/// Axis-aligned body shared by all movable objects.
///
/// Position is the top-left corner, pixel space, y grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub pos: Vec2,
    pub size: Vec2,
    pub vel: Vec2,
}

impl Body {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self {
            pos,
            size,
            vel: Vec2::ZERO,
        }
    }

    /// Center point, used as the origin for particle bursts
    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }
}

/// The player-controlled entity. Exactly one per run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub body: Body,
    /// Airborne latch: set on jump, cleared on landing. Guards re-trigger.
    pub jumping: bool,
}

impl Player {
    /// Fresh player at the run spawn point (horizontal middle, on the ground)
    pub fn spawn(tuning: &Tuning) -> Self {
        let size = Vec2::splat(tuning.player_size);
        Self {
            body: Body::new(Vec2::new(tuning.view_width / 2.0, tuning.ground_y), size),
            jumping: false,
        }
    }
}

/// Hazard variants. The kind determines spawn size and render treatment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HazardKind {
    Spike,
    Fireball,
    Ghost,
}

impl HazardKind {
    pub const ALL: [HazardKind; 3] = [HazardKind::Spike, HazardKind::Fireball, HazardKind::Ghost];

    /// Render color (RGB), also used for impact particles
    pub fn color(self) -> u32 {
        match self {
            HazardKind::Spike => 0xef4444,
            HazardKind::Fireball => 0xf97316,
            HazardKind::Ghost => 0xa855f7,
        }
    }

    /// Ghosts are a little bigger than spikes and fireballs
    pub fn size(self, tuning: &Tuning) -> f32 {
        match self {
            HazardKind::Ghost => tuning.ghost_size,
            _ => tuning.hazard_size,
        }
    }
}

/// An adversarial entity; ends a life on contact
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hazard {
    pub id: u32,
    pub kind: HazardKind,
    pub body: Body,
}

/// A collectible coin
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pickup {
    pub id: u32,
    pub body: Body,
    pub value: u32,
    /// Collection latch: set on the overlap tick, entity removed next step
    pub collected: bool,
    /// Presentation-only spin (radians), advanced each tick
    pub rotation: f32,
    /// Presentation-only pulse. Never enters the hitbox test.
    pub pulse_scale: f32,
}

/// An ephemeral visual particle. Never read by gameplay logic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
    /// RGB color
    pub color: u32,
    /// Remaining life in ticks; retired at <= 0
    pub life: i32,
    /// Derived each tick: life / PARTICLE_FADE_TICKS
    pub alpha: f32,
}

/// Maximum live particles; oldest are dropped past this
pub const MAX_PARTICLES: usize = 256;

/// Typed events raised by the simulation step, consumed by the session
/// reducer and observable by external sinks (audio, UI, overlays).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    PlayerJumped,
    HazardSpawned { id: u32, kind: HazardKind },
    HazardRetired { id: u32 },
    PlayerHit,
    PickupCollected { id: u32, value: u32 },
    GameOver { score: u32, new_best: bool },
}

/// Complete simulation state (serializable; particles excluded)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Session seed for reproducibility
    pub seed: u64,
    /// Spawner RNG, advanced across runs within the session
    pub rng: Pcg32,
    /// Separate RNG stream for particle cosmetics. Keeping it apart from the
    /// spawner stream means disabling particles cannot shift gameplay.
    pub fx_rng: Pcg32,
    /// Balance parameters
    pub tuning: Tuning,
    /// Simulation tick counter, reset each run
    pub time_ticks: u64,
    /// Tick of the most recent hazard spawn
    pub last_hazard_spawn: u64,
    /// Tick of the most recent coin spawn
    pub last_pickup_spawn: u64,
    /// Current phase
    pub phase: GamePhase,
    /// Run score; mutated only by the session reducer
    pub score: u32,
    /// Remaining lives; mutated only by the session reducer
    pub lives: u8,
    /// Player entity
    pub player: Player,
    /// Live hazards
    pub hazards: Vec<Hazard>,
    /// Live coins
    pub pickups: Vec<Pickup>,
    /// Visual particles (not gameplay-affecting, not persisted)
    #[serde(skip)]
    pub particles: Vec<Particle>,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create an idle state with the given seed and default balance
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    /// Create an idle state with custom balance
    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        let player = Player::spawn(&tuning);
        let lives = tuning.start_lives;
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            fx_rng: Pcg32::seed_from_u64(seed.wrapping_add(0x9E3779B97F4A7C15)),
            tuning,
            time_ticks: 0,
            last_hazard_spawn: 0,
            last_pickup_spawn: 0,
            phase: GamePhase::Idle,
            score: 0,
            lives,
            player,
            hazards: Vec::new(),
            pickups: Vec::new(),
            particles: Vec::new(),
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Reinitialize all per-run state and enter `Running`.
    ///
    /// Clears every entity collection so nothing from a previous run can leak
    /// into the new one. The RNG stream continues so consecutive runs differ.
    pub fn reset_run(&mut self) {
        self.player = Player::spawn(&self.tuning);
        self.hazards.clear();
        self.pickups.clear();
        self.particles.clear();
        self.score = 0;
        self.lives = self.tuning.start_lives;
        self.time_ticks = 0;
        self.last_hazard_spawn = 0;
        self.last_pickup_spawn = 0;
        self.phase = GamePhase::Running;
    }
}
