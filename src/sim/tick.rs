//! Fixed timestep simulation tick
//!
//! One tick turns held input into an acceleration, steps the player
//! against the static scene, and commits the result. Deterministic: the
//! same state, input, and dt always produce the same state.

use glam::Vec2;

use super::state::SimState;
use super::stepper::{StepReport, step};
use crate::config::SimConfig;

/// Thrust keys held during a tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub down: bool,
}

/// Advance the simulation by one fixed timestep.
///
/// The external acceleration is gravity (y points down the screen) plus
/// one thrust contribution per held key, vector-summed. `dt` is scaled
/// simulation time, not wall-clock time.
pub fn tick(state: &mut SimState, input: &TickInput, cfg: &SimConfig, dt: f32) -> StepReport {
    let mut accel = Vec2::new(0.0, cfg.gravity_strength);

    if input.left {
        accel += Vec2::new(-cfg.thrust_strength, 0.0);
    }
    if input.right {
        accel += Vec2::new(cfg.thrust_strength, 0.0);
    }
    if input.down {
        accel += Vec2::new(0.0, cfg.thrust_strength);
    }

    let report = step(
        &mut state.player,
        &state.arena,
        &state.obstacles,
        accel,
        dt,
        &cfg.step_params(),
    );

    state.time_ticks += 1;
    report
}
