//! Particle burst generators
//!
//! Pure value producers for the transient visual layer: an impact explosion
//! and a coin sparkle. The simulation step appends the results and advances
//! them; nothing in gameplay ever reads a particle back.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;
use std::f32::consts::TAU;

use super::state::Particle;

/// Particles in an impact explosion
pub const EXPLOSION_COUNT: usize = 15;
/// Particles in a coin sparkle
pub const SPARKLE_COUNT: usize = 12;

/// Sparkle palette: warm golds and white
const SPARKLE_COLORS: [u32; 4] = [0xfef3c7, 0xfbbf24, 0xf59e0b, 0xffffff];

/// Radial burst for a player impact, in the hazard's color.
///
/// Even angular fan, randomized speed, size and life per particle.
pub fn explosion(center: Vec2, color: u32, rng: &mut Pcg32) -> Vec<Particle> {
    (0..EXPLOSION_COUNT)
        .map(|i| {
            let angle = TAU * i as f32 / EXPLOSION_COUNT as f32;
            let speed = 2.0 + rng.random::<f32>() * 3.0;
            Particle {
                pos: center,
                vel: Vec2::new(angle.cos(), angle.sin()) * speed,
                size: 3.0 + rng.random::<f32>() * 3.0,
                color,
                life: 30 + rng.random_range(0..20),
                alpha: 1.0,
            }
        })
        .collect()
}

/// Upward-biased gold sparkle for a collected coin
pub fn coin_sparkle(center: Vec2, rng: &mut Pcg32) -> Vec<Particle> {
    (0..SPARKLE_COUNT)
        .map(|i| {
            let angle = TAU * i as f32 / SPARKLE_COUNT as f32;
            let speed = 1.0 + rng.random::<f32>() * 2.0;
            Particle {
                pos: center,
                vel: Vec2::new(angle.cos() * speed, angle.sin() * speed - 2.0),
                size: 2.0 + rng.random::<f32>() * 2.0,
                color: SPARKLE_COLORS[rng.random_range(0..SPARKLE_COLORS.len())],
                life: 25 + rng.random_range(0..15),
                alpha: 1.0,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn explosion_burst_size_and_color() {
        let mut rng = Pcg32::seed_from_u64(1);
        let burst = explosion(Vec2::new(100.0, 100.0), 0xef4444, &mut rng);
        assert_eq!(burst.len(), EXPLOSION_COUNT);
        assert!(burst.iter().all(|p| p.color == 0xef4444));
        assert!(burst.iter().all(|p| p.pos == Vec2::new(100.0, 100.0)));
    }

    #[test]
    fn explosion_life_within_window() {
        let mut rng = Pcg32::seed_from_u64(2);
        for p in explosion(Vec2::ZERO, 0xef4444, &mut rng) {
            assert!((30..50).contains(&p.life));
            assert!(p.size >= 3.0 && p.size < 6.0);
        }
    }

    #[test]
    fn sparkle_burst_is_upward_biased() {
        let mut rng = Pcg32::seed_from_u64(3);
        let burst = coin_sparkle(Vec2::ZERO, &mut rng);
        assert_eq!(burst.len(), SPARKLE_COUNT);
        // The -2 bias means average vy is negative (screen-up)
        let mean_vy: f32 = burst.iter().map(|p| p.vel.y).sum::<f32>() / burst.len() as f32;
        assert!(mean_vy < 0.0);
        for p in &burst {
            assert!((25..40).contains(&p.life));
            assert!(SPARKLE_COLORS.contains(&p.color));
        }
    }

    #[test]
    fn explosion_fans_in_all_directions() {
        let mut rng = Pcg32::seed_from_u64(4);
        let burst = explosion(Vec2::ZERO, 0xffffff, &mut rng);
        assert!(burst.iter().any(|p| p.vel.x > 0.0));
        assert!(burst.iter().any(|p| p.vel.x < 0.0));
        assert!(burst.iter().any(|p| p.vel.y > 0.0));
        assert!(burst.iter().any(|p| p.vel.y < 0.0));
    }
}
