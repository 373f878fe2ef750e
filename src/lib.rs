//! Sky Runner - a dodge-and-collect arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (player physics, spawning, collisions,
//!   particles, session state machine)
//! - `tuning`: Data-driven game balance
//! - `highscores`: Best-score tracking and the persistence seam
//!
//! Rendering, audio and UI are external collaborators: they read the state
//! snapshot after each step and react to the emitted [`sim::GameEvent`]s.

pub mod highscores;
pub mod sim;
pub mod tuning;

pub use highscores::{HighScoreStore, JsonFileStore, MemoryStore};
pub use sim::{GameEvent, GamePhase, GameState, Session, TickInput, tick};
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Simulation cadence expected from the external tick driver (Hz)
    pub const TICK_HZ: u32 = 60;

    /// Viewport dimensions (pixels)
    pub const VIEW_WIDTH: f32 = 800.0;
    pub const VIEW_HEIGHT: f32 = 600.0;
    /// Ground line the player stands on
    pub const GROUND_Y: f32 = 450.0;

    /// Player defaults
    pub const PLAYER_SIZE: f32 = 40.0;
    pub const PLAYER_RUN_SPEED: f32 = 6.0;
    /// Horizontal velocity decay per tick when no direction is held
    pub const PLAYER_FRICTION: f32 = 0.8;
    pub const GRAVITY: f32 = 0.8;
    pub const JUMP_IMPULSE: f32 = -15.0;

    /// Hazard spawning
    pub const HAZARD_INTERVAL: u64 = 80;
    pub const HAZARD_SIZE: f32 = 30.0;
    pub const GHOST_SIZE: f32 = 35.0;
    /// Upward hazard speed is drawn from [HAZARD_MIN_SPEED, HAZARD_MAX_SPEED)
    pub const HAZARD_MIN_SPEED: f32 = 2.0;
    pub const HAZARD_MAX_SPEED: f32 = 5.0;
    /// Hazards are retired once above this line
    pub const HAZARD_RETIRE_Y: f32 = -50.0;

    /// Pickup spawning
    pub const PICKUP_INTERVAL: u64 = 120;
    pub const COIN_SIZE: f32 = 25.0;
    pub const COIN_VALUE: u32 = 10;
    /// Horizontal margin of the coin spawn rectangle
    pub const COIN_MARGIN_X: f32 = 50.0;
    /// Vertical extent of the coin spawn rectangle
    pub const COIN_MIN_Y: f32 = 100.0;
    pub const COIN_MAX_Y: f32 = 400.0;

    /// Particle fade window: alpha = life / PARTICLE_FADE_TICKS
    pub const PARTICLE_FADE_TICKS: i32 = 30;
    /// Downward drift applied to particle vy each tick
    pub const PARTICLE_DRIFT: f32 = 0.3;

    /// Player lives at run start
    pub const START_LIVES: u8 = 3;
}
