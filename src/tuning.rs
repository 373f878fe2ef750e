//! Data-driven game balance
//!
//! Every gameplay number lives in [`Tuning`] so tests and embedders can run
//! variant simulations without patching code. `Default` reproduces the
//! shipped balance in [`crate::consts`].

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Gameplay balance parameters, stored on the game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tuning {
    /// Viewport width (pixels)
    pub view_width: f32,
    /// Viewport height (pixels)
    pub view_height: f32,
    /// Ground line the player lands on
    pub ground_y: f32,

    // === Player ===
    pub player_size: f32,
    /// Horizontal speed while a direction is held (px/tick)
    pub run_speed: f32,
    /// Horizontal velocity decay when no direction is held
    pub friction: f32,
    /// Vertical acceleration per tick
    pub gravity: f32,
    /// Vertical velocity applied on jump (negative = up)
    pub jump_impulse: f32,
    pub start_lives: u8,

    // === Hazards ===
    /// Ticks between hazard spawns
    pub hazard_interval: u64,
    pub hazard_size: f32,
    /// Ghosts are drawn and collided slightly larger
    pub ghost_size: f32,
    /// Upward speed range for new hazards: [min, max)
    pub hazard_min_speed: f32,
    pub hazard_max_speed: f32,
    /// Hazards above this y leave the playfield and are retired
    pub hazard_retire_y: f32,

    // === Pickups ===
    /// Ticks between coin spawns
    pub pickup_interval: u64,
    pub coin_size: f32,
    pub coin_value: u32,
    /// Coins spawn inside a margin-inset rectangle of the viewport
    pub coin_margin_x: f32,
    pub coin_min_y: f32,
    pub coin_max_y: f32,

    // === Cosmetics ===
    /// Particle effects toggle. Purely visual: disabling it must not change
    /// scores, lives or entity motion for a fixed input sequence.
    pub particles_enabled: bool,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            view_width: VIEW_WIDTH,
            view_height: VIEW_HEIGHT,
            ground_y: GROUND_Y,

            player_size: PLAYER_SIZE,
            run_speed: PLAYER_RUN_SPEED,
            friction: PLAYER_FRICTION,
            gravity: GRAVITY,
            jump_impulse: JUMP_IMPULSE,
            start_lives: START_LIVES,

            hazard_interval: HAZARD_INTERVAL,
            hazard_size: HAZARD_SIZE,
            ghost_size: GHOST_SIZE,
            hazard_min_speed: HAZARD_MIN_SPEED,
            hazard_max_speed: HAZARD_MAX_SPEED,
            hazard_retire_y: HAZARD_RETIRE_Y,

            pickup_interval: PICKUP_INTERVAL,
            coin_size: COIN_SIZE,
            coin_value: COIN_VALUE,
            coin_margin_x: COIN_MARGIN_X,
            coin_min_y: COIN_MIN_Y,
            coin_max_y: COIN_MAX_Y,

            particles_enabled: true,
        }
    }
}

impl Tuning {
    /// Rightmost x the player can occupy
    pub fn player_max_x(&self) -> f32 {
        self.view_width - self.player_size
    }
}
