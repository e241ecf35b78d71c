//! Runtime simulation tuning
//!
//! Every knob the driver and stepper need, in one serde struct. Loaded
//! from a JSON file when one is given, falling back to defaults
//! otherwise. The defaults reproduce the classic scene at an 800-unit
//! arena scale.

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::sim::stepper::StepParams;

/// Simulation tuning values
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Arena boundary radius, world units
    pub arena_radius: f32,
    /// Player disc radius
    pub player_radius: f32,
    /// Downward gravity acceleration (y points down the screen)
    pub gravity_strength: f32,
    /// Thrust acceleration per held key
    pub thrust_strength: f32,
    /// Physics ticks per second
    pub target_tps: f32,
    /// Slack growth per resolution pass, as a fraction of dt
    pub resolution_factor: f32,
    /// Simulated seconds per wall-clock second
    pub time_scale: f32,
    /// Resolution pass ceiling per step
    pub max_resolve_iterations: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        const SCALE: f32 = 800.0;
        Self {
            arena_radius: 1.0 * SCALE,
            player_radius: 0.025 * SCALE,
            gravity_strength: 0.2 * SCALE,
            thrust_strength: 0.4 * SCALE,
            target_tps: 240.0,
            resolution_factor: 0.01,
            time_scale: 5.0,
            max_resolve_iterations: 50,
        }
    }
}

impl SimConfig {
    /// Seconds of wall-clock time consumed per physics tick
    #[inline]
    pub fn tick_period(&self) -> f32 {
        1.0 / self.target_tps
    }

    /// Simulated seconds advanced per physics tick
    #[inline]
    pub fn tick_dt(&self) -> f32 {
        self.tick_period() * self.time_scale
    }

    /// Stepper tuning derived from this config
    pub fn step_params(&self) -> StepParams {
        StepParams {
            body_radius: self.player_radius,
            resolution_factor: self.resolution_factor,
            max_iterations: self.max_resolve_iterations,
        }
    }

    /// Load from a JSON file, falling back to defaults when the file is
    /// missing or unreadable
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(cfg) => {
                    log::info!("loaded config from {}", path.display());
                    cfg
                }
                Err(err) => {
                    log::warn!("ignoring bad config {}: {err}", path.display());
                    Self::default()
                }
            },
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                log::info!("no config at {}, using defaults", path.display());
                Self::default()
            }
            Err(err) => {
                log::warn!("could not read config {}: {err}", path.display());
                Self::default()
            }
        }
    }

    /// Write this config as pretty JSON
    pub fn save(&self, path: &Path) -> io::Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(io::Error::other)?;
        fs::write(path, json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_classic_scale() {
        let cfg = SimConfig::default();
        assert_eq!(cfg.arena_radius, 800.0);
        assert_eq!(cfg.player_radius, 20.0);
        assert_eq!(cfg.gravity_strength, 160.0);
        assert_eq!(cfg.thrust_strength, 320.0);
    }

    #[test]
    fn test_json_round_trip() {
        let cfg = SimConfig {
            arena_radius: 512.0,
            time_scale: 2.0,
            ..SimConfig::default()
        };
        let json = serde_json::to_string(&cfg).unwrap();
        let back: SimConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.arena_radius, 512.0);
        assert_eq!(back.time_scale, 2.0);
        assert_eq!(back.target_tps, cfg.target_tps);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let cfg: SimConfig = serde_json::from_str(r#"{"arena_radius": 300.0}"#).unwrap();
        assert_eq!(cfg.arena_radius, 300.0);
        assert_eq!(cfg.player_radius, SimConfig::default().player_radius);
    }
}
