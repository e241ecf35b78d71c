//! Static scene geometry
//!
//! The arena is a circle centered on the world origin; obstacles are
//! fixed circles inside it. Both are plain data: detection lives in
//! `collision`, response in `stepper`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// The playfield boundary, centered on the origin
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    /// Boundary radius. Set once at startup, fixed during simulation
    pub radius: f32,
}

impl Arena {
    pub fn new(radius: f32) -> Self {
        Self { radius }
    }

    /// Largest center distance from the origin at which a body of
    /// `body_radius` is still fully inside
    #[inline]
    pub fn inner_limit(&self, body_radius: f32) -> f32 {
        self.radius - body_radius
    }
}

/// A static circular obstacle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CircleObstacle {
    pub radius: f32,
    pub center: Vec2,
}

impl CircleObstacle {
    pub fn new(radius: f32, center: Vec2) -> Self {
        Self { radius, center }
    }

    /// Smallest center-to-center distance at which a body of
    /// `body_radius` is clear of this obstacle
    #[inline]
    pub fn clearance(&self, body_radius: f32) -> f32 {
        self.radius + body_radius
    }
}
