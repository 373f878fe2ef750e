//! Entity spawner
//!
//! Decides when and where new hazards and coins enter the playfield. Both
//! families spawn unconditionally once their interval elapses; there is no
//! cap on live entities (retirement of off-screen hazards is the only bound).

use glam::Vec2;
use rand::Rng;

use super::state::{Body, GameEvent, GameState, Hazard, HazardKind, Pickup};

/// Run both spawn triggers for the current tick.
///
/// A family spawns when `tick - last_spawn > interval`, then records the new
/// spawn tick. Appends to the collections; never removes.
pub fn run(state: &mut GameState, events: &mut Vec<GameEvent>) {
    if state.time_ticks - state.last_hazard_spawn > state.tuning.hazard_interval {
        let (id, kind) = spawn_hazard(state);
        state.last_hazard_spawn = state.time_ticks;
        events.push(GameEvent::HazardSpawned { id, kind });
    }

    if state.time_ticks - state.last_pickup_spawn > state.tuning.pickup_interval {
        spawn_pickup(state);
        state.last_pickup_spawn = state.time_ticks;
    }
}

/// Introduce one hazard just below the viewport floor, drifting upward.
///
/// Kind is uniform over the three variants; x is uniform in
/// `[0, width - size)`; upward speed is uniform in `[min, max)`.
pub fn spawn_hazard(state: &mut GameState) -> (u32, HazardKind) {
    let kind = HazardKind::ALL[state.rng.random_range(0..HazardKind::ALL.len())];
    let size = kind.size(&state.tuning);
    let x = state.rng.random_range(0.0..state.tuning.view_width - size);
    let speed = state
        .rng
        .random_range(state.tuning.hazard_min_speed..state.tuning.hazard_max_speed);

    let id = state.next_entity_id();
    let mut body = Body::new(Vec2::new(x, state.tuning.view_height), Vec2::splat(size));
    body.vel.y = -speed;

    log::debug!("spawning {:?} hazard {} at x={:.1}", kind, id, x);
    state.hazards.push(Hazard { id, kind, body });
    (id, kind)
}

/// Introduce one coin inside the margin-inset spawn rectangle.
///
/// Coins do not move and never expire; they leave the collection only by
/// being collected.
pub fn spawn_pickup(state: &mut GameState) -> u32 {
    let t = &state.tuning;
    let x = state
        .rng
        .random_range(t.coin_margin_x..t.view_width - t.coin_margin_x);
    let y = state.rng.random_range(t.coin_min_y..t.coin_max_y);
    let size = t.coin_size;
    let value = t.coin_value;

    let id = state.next_entity_id();
    state.pickups.push(Pickup {
        id,
        body: Body::new(Vec2::new(x, y), Vec2::splat(size)),
        value,
        collected: false,
        rotation: 0.0,
        pulse_scale: 1.0,
    });
    id
}
