//! Deterministic simulation module
//!
//! All physics lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only (scene generation)
//! - Stable obstacle iteration order
//! - No rendering or platform dependencies

pub mod collision;
pub mod geometry;
pub mod scene;
pub mod state;
pub mod stepper;
pub mod tick;
pub mod vector;

pub use collision::{Contact, arena_contact, obstacle_contact};
pub use geometry::{Arena, CircleObstacle};
pub use state::{Body, SimState};
pub use stepper::{StepParams, StepReport, step};
pub use tick::{TickInput, tick};
pub use vector::Vec2Ext;
