//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure and
//! deterministic:
//! - Fixed timestep only, driven by an external tick source
//! - Seeded RNG only, owned by the game state
//! - No I/O, no timing primitives, no rendering dependencies
//!
//! The split mirrors the component layout: `spawn` introduces entities,
//! `collision` tests them, `particles` produces the cosmetic layer, `tick`
//! advances one frame, and `session` reduces the frame's events into
//! score/lives/phase.

pub mod collision;
pub mod particles;
pub mod session;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::overlaps;
pub use session::Session;
pub use state::{
    Body, GameEvent, GamePhase, GameState, Hazard, HazardKind, MAX_PARTICLES, Particle, Pickup,
    Player,
};
pub use tick::{TickInput, tick};
