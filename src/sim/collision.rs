//! Axis-aligned collision testing
//!
//! The whole game runs on one predicate: half-open AABB overlap between two
//! bodies. Hazards and coins are each tested against the player once per
//! tick; nothing else collides.

use super::state::Body;

/// Half-open AABB overlap test.
///
/// True iff the rectangles share interior area. Edge-touching bodies
/// (`a.x + a.w == b.x`) do not overlap. Symmetric, no side effects.
#[inline]
pub fn overlaps(a: &Body, b: &Body) -> bool {
    a.pos.x < b.pos.x + b.size.x
        && a.pos.x + a.size.x > b.pos.x
        && a.pos.y < b.pos.y + b.size.y
        && a.pos.y + a.size.y > b.pos.y
}
