//! Simulation state
//!
//! Everything the driver owns between ticks. All of it is serde-derived
//! so a whole run can be snapshotted and restored.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::{Arena, CircleObstacle};

/// The player disc
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Body {
    /// Body at rest at the given position
    pub fn at(pos: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
        }
    }
}

/// Complete simulation state, owned by the driver loop and passed by
/// exclusive reference into `tick`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimState {
    pub arena: Arena,
    /// Static scene; order fixes the resolver's per-pass visit order
    pub obstacles: Vec<CircleObstacle>,
    pub player: Body,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl SimState {
    /// New state with the player at rest at the origin
    pub fn new(arena: Arena, obstacles: Vec<CircleObstacle>) -> Self {
        Self {
            arena,
            obstacles,
            player: Body::default(),
            time_ticks: 0,
        }
    }

    /// New state with the player at rest at `spawn`
    pub fn with_spawn(arena: Arena, obstacles: Vec<CircleObstacle>, spawn: Vec2) -> Self {
        Self {
            player: Body::at(spawn),
            ..Self::new(arena, obstacles)
        }
    }
}
