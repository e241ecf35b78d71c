//! Contact detection for a disc against the arena wall and obstacles
//!
//! Detection only: each function reports whether a non-penetration
//! constraint is currently violated and, if so, the direction and depth
//! of the violation. Push-out and velocity response live in `stepper`.

use glam::Vec2;

use super::geometry::{Arena, CircleObstacle};

/// A violated non-penetration constraint
#[derive(Debug, Clone, Copy)]
pub struct Contact {
    /// Unit direction the body must move to leave the surface. Zero when
    /// the body sits exactly at the surface's center point and no
    /// direction is defined
    pub normal: Vec2,
    /// Overlap depth along `normal`
    pub depth: f32,
}

/// Test a disc against the arena wall.
///
/// Violated when the disc pokes past the boundary:
/// `|pos| + body_radius > arena.radius` (strict).
pub fn arena_contact(pos: Vec2, body_radius: f32, arena: &Arena) -> Option<Contact> {
    let dist = pos.length();
    if dist + body_radius > arena.radius {
        Some(Contact {
            normal: -pos.normalize_or_zero(),
            depth: dist + body_radius - arena.radius,
        })
    } else {
        None
    }
}

/// Test a disc against one obstacle.
///
/// Violated when the center distance drops below the combined radii:
/// `|pos - center| < obstacle.radius + body_radius` (strict).
pub fn obstacle_contact(
    pos: Vec2,
    body_radius: f32,
    obstacle: &CircleObstacle,
) -> Option<Contact> {
    let diff = pos - obstacle.center;
    let dist = diff.length();
    let clearance = obstacle.clearance(body_radius);
    if dist < clearance {
        Some(Contact {
            normal: diff.normalize_or_zero(),
            depth: clearance - dist,
        })
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arena_contact_inside() {
        let arena = Arena::new(400.0);
        assert!(arena_contact(Vec2::new(300.0, 0.0), 20.0, &arena).is_none());
    }

    #[test]
    fn test_arena_contact_touching_is_not_violated() {
        let arena = Arena::new(400.0);
        // exactly tangent: 380 + 20 == 400, strict test does not fire
        assert!(arena_contact(Vec2::new(380.0, 0.0), 20.0, &arena).is_none());
    }

    #[test]
    fn test_arena_contact_outside() {
        let arena = Arena::new(400.0);
        let contact = arena_contact(Vec2::new(390.0, 0.0), 20.0, &arena).unwrap();
        assert!((contact.depth - 10.0).abs() < 1e-4);
        // push direction points back toward the origin
        assert!((contact.normal - Vec2::new(-1.0, 0.0)).length() < 1e-4);
    }

    #[test]
    fn test_obstacle_contact_miss() {
        let obstacle = CircleObstacle::new(160.0, Vec2::new(-160.0, 320.0));
        assert!(obstacle_contact(Vec2::new(200.0, -200.0), 20.0, &obstacle).is_none());
    }

    #[test]
    fn test_obstacle_contact_hit() {
        let obstacle = CircleObstacle::new(160.0, Vec2::new(-160.0, 320.0));
        let contact = obstacle_contact(Vec2::new(-160.0, 300.0), 20.0, &obstacle).unwrap();
        // 20 units from center, clearance 180
        assert!((contact.depth - 160.0).abs() < 1e-4);
        // push direction points from obstacle center toward the body
        assert!((contact.normal - Vec2::new(0.0, -1.0)).length() < 1e-4);
    }

    #[test]
    fn test_obstacle_contact_degenerate_center() {
        let obstacle = CircleObstacle::new(50.0, Vec2::new(10.0, 10.0));
        let contact = obstacle_contact(Vec2::new(10.0, 10.0), 5.0, &obstacle).unwrap();
        assert_eq!(contact.normal, Vec2::ZERO);
        assert!((contact.depth - 55.0).abs() < 1e-4);
    }
}
