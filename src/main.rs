//! Circle Drift entry point
//!
//! Headless driver: runs the simulation at a fixed tick rate with a
//! scripted thrust schedule and logs the player's motion. Pass a JSON
//! config path as the first argument to override the defaults;
//! `RUST_LOG=debug` shows individual contact events.

use std::env;
use std::path::PathBuf;
use std::thread;
use std::time::{Duration, Instant};

use circle_drift::SimConfig;
use circle_drift::consts::MAX_SUBSTEPS;
use circle_drift::sim::{Arena, SimState, TickInput, scene, tick};

/// Wall-clock seconds the driver runs before printing its summary
const RUN_SECONDS: f32 = 10.0;

fn main() {
    env_logger::init();

    let cfg = match env::args().nth(1) {
        Some(path) => SimConfig::load(&PathBuf::from(path)),
        None => SimConfig::default(),
    };

    let arena = Arena::new(cfg.arena_radius);
    let obstacles = scene::single_obstacle(&arena);
    let mut state = SimState::new(arena, obstacles);

    log::info!(
        "arena radius {}, {} obstacle(s), {} tps, time scale {}",
        cfg.arena_radius,
        state.obstacles.len(),
        cfg.target_tps,
        cfg.time_scale
    );

    let tick_period = cfg.tick_period();
    let dt = cfg.tick_dt();

    let started = Instant::now();
    let mut previous = started;
    let mut accumulator = 0.0f32;
    let mut simulated = 0.0f32;
    let mut next_status = 0u32;
    let mut unconverged_steps = 0u64;

    while started.elapsed().as_secs_f32() < RUN_SECONDS {
        let now = Instant::now();
        accumulator += (now - previous).as_secs_f32();
        previous = now;

        let mut substeps = 0;
        while accumulator >= tick_period && substeps < MAX_SUBSTEPS {
            let input = scripted_input(simulated);
            let report = tick(&mut state, &input, &cfg, dt);

            if report.arena_contact || report.obstacle_contacts > 0 {
                log::debug!(
                    "tick {}: {} resolution pass(es), wall={}, obstacle pushes={}",
                    state.time_ticks,
                    report.iterations,
                    report.arena_contact,
                    report.obstacle_contacts
                );
            }
            if !report.converged {
                unconverged_steps += 1;
            }

            accumulator -= tick_period;
            simulated += dt;
            substeps += 1;
        }

        if simulated >= next_status as f32 {
            next_status += 5;
            log::info!(
                "t={:5.1}s tick {} pos=({:7.1}, {:7.1}) speed={:6.1}",
                simulated,
                state.time_ticks,
                state.player.pos.x,
                state.player.pos.y,
                state.player.vel.length()
            );
        }

        thread::sleep(Duration::from_micros(500));
    }

    log::info!(
        "done: {} ticks, {:.1} simulated seconds, {} unconverged step(s), final pos=({:.1}, {:.1})",
        state.time_ticks,
        simulated,
        unconverged_steps,
        state.player.pos.x,
        state.player.pos.y
    );
}

/// Looping thrust schedule so the disc gets pushed around every surface:
/// right into the obstacle, rest, left up the wall, then slam down
fn scripted_input(t: f32) -> TickInput {
    let phase = t % 16.0;
    TickInput {
        right: phase < 4.0,
        left: (6.0..10.0).contains(&phase),
        down: (12.0..14.0).contains(&phase),
    }
}
