//! Physics stepping: integration plus iterative contact resolution
//!
//! The heart of the sim. One step predicts the body's next state with
//! semi-implicit Euler, then relaxes the prediction until it violates no
//! non-penetration constraint: the arena wall is corrected first, then
//! every penetrated obstacle in collection order. Corrections are
//! sequential, so fixing one contact can re-open another; the loop
//! re-detects after every pass. A small slack distance grows each pass
//! and is added to every push-out, so corrected positions land strictly
//! clear of the surface instead of on the exact boundary where the
//! floating-point violation test could fire again.
//!
//! Contact response is fully inelastic and frictionless: the velocity
//! component along the contact normal is removed, the tangential
//! component survives. No bounce.

use glam::Vec2;

use super::collision::{arena_contact, obstacle_contact};
use super::geometry::{Arena, CircleObstacle};
use super::state::Body;
use super::vector::Vec2Ext;

/// Tuning for one physics step
#[derive(Debug, Clone, Copy)]
pub struct StepParams {
    /// Radius of the stepped body
    pub body_radius: f32,
    /// Slack growth per resolution pass, as a fraction of dt
    pub resolution_factor: f32,
    /// Resolution pass ceiling; past it the least-penetrating candidate
    /// seen is committed as-is
    pub max_iterations: u32,
}

/// What one step did, for logging and tests
#[derive(Debug, Clone, Copy)]
pub struct StepReport {
    /// Resolution passes run. Zero when the predicted state was already
    /// valid
    pub iterations: u32,
    /// False when the pass ceiling was hit with a constraint still
    /// violated
    pub converged: bool,
    /// The arena wall was corrected at least once
    pub arena_contact: bool,
    /// Obstacle push-outs applied, summed over all passes
    pub obstacle_contacts: u32,
}

/// Advance a body by one tick against a static scene.
///
/// Predict: `vel' = vel + accel * dt`, `pos' = pos + vel' * dt`
/// (acceleration first, position from the new velocity). Then resolve
/// the prediction and commit it. Never fails; with pathological geometry
/// (obstacles packed tighter than the body fits through) the pass
/// ceiling bounds the cost and the least-penetrating candidate wins.
pub fn step(
    body: &mut Body,
    arena: &Arena,
    obstacles: &[CircleObstacle],
    accel: Vec2,
    dt: f32,
    params: &StepParams,
) -> StepReport {
    let mut vel = body.vel + accel * dt;
    let mut pos = body.pos + vel * dt;

    let report = resolve(&mut pos, &mut vel, arena, obstacles, dt, params);

    body.pos = pos;
    body.vel = vel;
    report
}

/// Relax `(pos, vel)` until no constraint is violated.
///
/// Gauss-Seidel style: one pass corrects each violated constraint in
/// turn against the then-current position, then the whole set is
/// re-detected. An already-valid input returns after zero passes,
/// untouched.
fn resolve(
    pos: &mut Vec2,
    vel: &mut Vec2,
    arena: &Arena,
    obstacles: &[CircleObstacle],
    dt: f32,
    params: &StepParams,
) -> StepReport {
    let r = params.body_radius;

    let mut report = StepReport {
        iterations: 0,
        converged: true,
        arena_contact: false,
        obstacle_contacts: 0,
    };

    let mut slack = 0.0;
    let mut best = (*pos, *vel, worst_penetration(*pos, r, arena, obstacles));

    loop {
        let worst = worst_penetration(*pos, r, arena, obstacles);
        if worst <= 0.0 {
            return report;
        }
        if worst < best.2 {
            best = (*pos, *vel, worst);
        }

        if report.iterations >= params.max_iterations {
            *pos = best.0;
            *vel = best.1;
            report.converged = false;
            log::warn!(
                "contact resolution stopped at the {}-pass ceiling, residual penetration {:.4}",
                params.max_iterations,
                best.2
            );
            return report;
        }
        report.iterations += 1;

        if let Some(contact) = arena_contact(*pos, r, arena) {
            report.arena_contact = true;
            if contact.normal != Vec2::ZERO {
                *pos = pos.with_magnitude(arena.inner_limit(r) - slack);
                *vel = tangential(*vel, contact.normal);
            }
        }

        for obstacle in obstacles {
            if let Some(contact) = obstacle_contact(*pos, r, obstacle) {
                report.obstacle_contacts += 1;
                if contact.normal != Vec2::ZERO {
                    *pos = obstacle.center + contact.normal * (obstacle.clearance(r) + slack);
                    *vel = tangential(*vel, contact.normal);
                }
                // a zero normal (body exactly on the center) gives no
                // push direction; leave it for a later pass or the cap
            }
        }

        slack += params.resolution_factor * dt;
    }
}

/// Velocity component parallel to the contact surface; the part along
/// the normal is dropped
#[inline]
fn tangential(vel: Vec2, normal: Vec2) -> Vec2 {
    let tangent = normal.perp();
    tangent * vel.dot(tangent)
}

/// Deepest current violation, 0.0 when the position satisfies every
/// constraint
fn worst_penetration(
    pos: Vec2,
    body_radius: f32,
    arena: &Arena,
    obstacles: &[CircleObstacle],
) -> f32 {
    let mut worst = arena_contact(pos, body_radius, arena).map_or(0.0, |c| c.depth);
    for obstacle in obstacles {
        if let Some(contact) = obstacle_contact(pos, body_radius, obstacle) {
            worst = worst.max(contact.depth);
        }
    }
    worst
}
