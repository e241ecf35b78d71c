//! Deterministic scene generation
//!
//! Obstacle layouts for the driver. Seeded RNG only, so a seed fully
//! determines the scene.

use std::f32::consts::PI;

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::geometry::{Arena, CircleObstacle};
use super::vector::Vec2Ext;

/// The classic scene: one large obstacle on the +x axis, halfway out,
/// half the arena in radius
pub fn single_obstacle(arena: &Arena) -> Vec<CircleObstacle> {
    vec![CircleObstacle::new(
        arena.radius * 0.5,
        Vec2::from_polar(arena.radius * 0.5, 0.0),
    )]
}

/// Scatter up to `count` non-overlapping obstacles fully inside the
/// arena, each keeping `spawn_clearance` distance from `spawn` so the
/// player never starts penetrating. Deterministic per seed.
pub fn scatter_obstacles(
    seed: u64,
    arena: &Arena,
    count: usize,
    radius_range: (f32, f32),
    spawn: Vec2,
    spawn_clearance: f32,
) -> Vec<CircleObstacle> {
    let mut rng = Pcg32::seed_from_u64(seed);
    let mut placed: Vec<CircleObstacle> = Vec::with_capacity(count);

    // rejection sampling with a bounded attempt budget
    let max_attempts = count * 64;
    let mut attempts = 0;
    while placed.len() < count && attempts < max_attempts {
        attempts += 1;

        let radius = rng.random_range(radius_range.0..=radius_range.1);
        let max_center = arena.radius - radius;
        if max_center <= 0.0 {
            continue;
        }

        // sqrt for a uniform density over the disc of allowed centers
        let dist = max_center * rng.random::<f32>().sqrt();
        let center = Vec2::from_polar(dist, rng.random_range(-PI..PI));

        if (center - spawn).length() < radius + spawn_clearance {
            continue;
        }
        if placed
            .iter()
            .any(|o| (center - o.center).length() < radius + o.radius)
        {
            continue;
        }
        placed.push(CircleObstacle::new(radius, center));
    }

    if placed.len() < count {
        log::debug!(
            "scatter placed {}/{} obstacles before the attempt budget ran out",
            placed.len(),
            count
        );
    }
    placed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_obstacle_matches_arena_scale() {
        let arena = Arena::new(800.0);
        let obstacles = single_obstacle(&arena);
        assert_eq!(obstacles.len(), 1);
        assert_eq!(obstacles[0].radius, 400.0);
        assert!((obstacles[0].center - Vec2::new(400.0, 0.0)).length() < 1e-4);
    }

    #[test]
    fn test_scatter_is_deterministic() {
        let arena = Arena::new(800.0);
        let a = scatter_obstacles(7, &arena, 8, (40.0, 120.0), Vec2::ZERO, 60.0);
        let b = scatter_obstacles(7, &arena, 8, (40.0, 120.0), Vec2::ZERO, 60.0);
        assert_eq!(a, b);

        let c = scatter_obstacles(8, &arena, 8, (40.0, 120.0), Vec2::ZERO, 60.0);
        assert_ne!(a, c);
    }

    #[test]
    fn test_scatter_respects_constraints() {
        let arena = Arena::new(800.0);
        let spawn = Vec2::ZERO;
        let clearance = 60.0;
        let obstacles = scatter_obstacles(42, &arena, 10, (40.0, 120.0), spawn, clearance);
        assert!(!obstacles.is_empty());

        for (i, o) in obstacles.iter().enumerate() {
            // fully inside the arena
            assert!(o.center.length() + o.radius <= arena.radius + 1e-3);
            // clear of the spawn point
            assert!((o.center - spawn).length() >= o.radius + clearance - 1e-3);
            // clear of each other
            for other in &obstacles[i + 1..] {
                assert!((o.center - other.center).length() >= o.radius + other.radius - 1e-3);
            }
        }
    }
}
