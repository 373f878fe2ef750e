//! Fixed timestep simulation step
//!
//! The per-tick state transition: player physics from sampled input, entity
//! spawning, hazard/pickup motion and collision, particle advance. The step
//! raises [`GameEvent`]s but never touches score, lives or phase — reducing
//! events into session state is [`super::session`]'s job.

use super::collision::overlaps;
use super::particles;
use super::spawn;
use super::state::{GameEvent, GamePhase, GameState, MAX_PARTICLES, Particle};
use crate::consts::{PARTICLE_DRIFT, PARTICLE_FADE_TICKS};

/// Impact bursts are red regardless of hazard kind
const IMPACT_COLOR: u32 = 0xef4444;

/// Sampled input flags for a single tick.
///
/// Current-state sampling only; unrecognized keys never reach the core
/// because the mapping to these three flags happens in the input layer.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
}

/// Advance the simulation by one fixed tick.
///
/// Declines to mutate anything unless the phase is `Running`. The tick
/// counter increments before the spawner reads it, so the first hazard of a
/// fresh run lands on tick 81 with the default 80-tick interval.
pub fn tick(state: &mut GameState, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if state.phase != GamePhase::Running {
        return events;
    }

    state.time_ticks += 1;

    step_player(state, input, &mut events);
    spawn::run(state, &mut events);
    step_hazards(state, &mut events);
    step_pickups(state, &mut events);
    step_particles(state);

    events
}

/// Player physics: edge-gated horizontal input, friction, gravity, jump
/// impulse, integration, ground clamp.
fn step_player(state: &mut GameState, input: &TickInput, events: &mut Vec<GameEvent>) {
    let run_speed = state.tuning.run_speed;
    let friction = state.tuning.friction;
    let gravity = state.tuning.gravity;
    let jump_impulse = state.tuning.jump_impulse;
    let ground_y = state.tuning.ground_y;
    let max_x = state.tuning.player_max_x();

    let p = &mut state.player;

    // Movement is suppressed when already at an edge (pre-move gating)
    if input.left && p.body.pos.x > 0.0 {
        p.body.vel.x = -run_speed;
    } else if input.right && p.body.pos.x < max_x {
        p.body.vel.x = run_speed;
    } else {
        p.body.vel.x *= friction;
    }

    // Airborne latch: holding jump does nothing until the player lands
    if input.jump && !p.jumping {
        p.body.vel.y = jump_impulse;
        p.jumping = true;
        events.push(GameEvent::PlayerJumped);
    }

    p.body.vel.y += gravity;
    p.body.pos.x += p.body.vel.x;
    p.body.pos.y += p.body.vel.y;

    // Residual decayed velocity can still nudge past an edge; keep the
    // bounding invariant exact
    p.body.pos.x = p.body.pos.x.clamp(0.0, max_x);

    if p.body.pos.y >= ground_y {
        p.body.pos.y = ground_y;
        p.body.vel.y = 0.0;
        p.jumping = false;
    }
}

/// Hazard motion, retirement past the top edge, and player collision
fn step_hazards(state: &mut GameState, events: &mut Vec<GameEvent>) {
    for h in &mut state.hazards {
        h.body.pos.y += h.body.vel.y;
    }

    let retire_y = state.tuning.hazard_retire_y;
    state.hazards.retain(|h| {
        if h.body.pos.y < retire_y {
            events.push(GameEvent::HazardRetired { id: h.id });
            false
        } else {
            true
        }
    });

    // Iterate from the end so removal never skips an entry
    let mut i = state.hazards.len();
    while i > 0 {
        i -= 1;
        if overlaps(&state.player.body, &state.hazards[i].body) {
            // Single-hit: the hazard is consumed
            state.hazards.remove(i);
            events.push(GameEvent::PlayerHit);
            if state.tuning.particles_enabled {
                let center = state.player.body.center();
                let burst = particles::explosion(center, IMPACT_COLOR, &mut state.fx_rng);
                push_particles(&mut state.particles, burst);
            }
        }
    }
}

/// Coin animation and edge-triggered collection.
///
/// Entries collected on the previous tick leave the live set first, so a
/// collected coin is never tested again. The pulse animation is advanced for
/// presentation but the hitbox stays at nominal size.
fn step_pickups(state: &mut GameState, events: &mut Vec<GameEvent>) {
    state.pickups.retain(|p| !p.collected);

    let pulse = 1.0 + (state.time_ticks as f32 * 0.1).sin() * 0.1;
    for p in &mut state.pickups {
        p.rotation += 0.1;
        p.pulse_scale = pulse;
    }

    for i in 0..state.pickups.len() {
        if state.pickups[i].collected {
            continue;
        }
        if overlaps(&state.player.body, &state.pickups[i].body) {
            state.pickups[i].collected = true;
            events.push(GameEvent::PickupCollected {
                id: state.pickups[i].id,
                value: state.pickups[i].value,
            });
            if state.tuning.particles_enabled {
                let center = state.pickups[i].body.center();
                let burst = particles::coin_sparkle(center, &mut state.fx_rng);
                push_particles(&mut state.particles, burst);
            }
        }
    }
}

/// Particle integration: drift, fade, retire
fn step_particles(state: &mut GameState) {
    for p in &mut state.particles {
        p.pos += p.vel;
        p.vel.y += PARTICLE_DRIFT;
        p.life -= 1;
        p.alpha = p.life as f32 / PARTICLE_FADE_TICKS as f32;
    }
    state.particles.retain(|p| p.life > 0);
}

/// Append a burst, dropping the oldest live particles past the cap
fn push_particles(live: &mut Vec<Particle>, burst: Vec<Particle>) {
    for p in burst {
        if live.len() >= MAX_PARTICLES {
            live.remove(0);
        }
        live.push(p);
    }
}
