//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! (`Scenario`) containing:
//! - the engine at its configured initial condition
//! - the control script, sorted by fire time
//! - the end time the driver runs to
//!
//! Scripted inputs reach the engine exclusively through its public mutator
//! API; the engine itself knows nothing about events or scripts.

use crate::configuration::config::{ActionConfig, ScenarioConfig};
use crate::simulation::engine::PhysicsEngine;
use crate::simulation::params::Parameters;

/// A timed control input ready to be fed to the engine
#[derive(Debug, Clone)]
pub struct ControlEvent {
    pub at: f64, // s, simulation time the input fires
    pub action: ActionConfig,
}

impl ControlEvent {
    /// Drive the matching engine mutator. Sanitization happens inside the
    /// engine, so a script can carry raw slider-style values.
    pub fn apply(&self, engine: &mut PhysicsEngine) {
        match self.action {
            ActionConfig::Thrust(direction) => engine.set_thrust_direction(direction),
            ActionConfig::ThrustMagnitude(newtons) => engine.set_applied_force_magnitude(newtons),
            ActionConfig::Friction(enabled) => engine.set_friction_enabled(enabled),
            ActionConfig::AirDrag(enabled) => engine.set_air_drag_enabled(enabled),
            ActionConfig::FrictionCoefficient(mu) => engine.set_friction_coefficient(mu),
            ActionConfig::Reset => engine.reset(),
        }
    }
}

/// Fully-initialized runtime scenario
///
/// This is the main "runtime bundle" constructed from a [`ScenarioConfig`]:
/// it contains the engine at its initial condition, the sorted control
/// script, and the end time. The drivers in `runtime` consume it directly
pub struct Scenario {
    pub engine: PhysicsEngine,
    pub script: Vec<ControlEvent>,
    pub t_end: f64, // s
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Self {
        // Parameters (runtime) from ParametersConfig
        let p_cfg = cfg.parameters;
        let parameters = Parameters {
            mass: p_cfg.mass,
            gravity: p_cfg.gravity,
            friction_coefficient: p_cfg.friction_coefficient,
            air_drag_coefficient: p_cfg.air_drag_coefficient,
            base_thrust: p_cfg.base_thrust,
            thrust_limit: p_cfg.thrust_limit.unwrap_or(5000.0),
            max_speed: p_cfg.max_speed,
        };

        // Engine at the configured initial condition, toggles applied
        // through the mutator surface
        let mut engine = PhysicsEngine::with_initial(parameters, cfg.sled.position, cfg.sled.velocity);
        engine.set_friction_enabled(cfg.sled.friction);
        engine.set_air_drag_enabled(cfg.sled.air_drag);

        // Script: map config entries and sort by fire time so the drivers
        // can drain them front-to-back
        let mut script: Vec<ControlEvent> = cfg
            .script
            .into_iter()
            .map(|ec| ControlEvent {
                at: ec.at,
                action: ec.action,
            })
            .collect();
        script.sort_by(|a, b| a.at.partial_cmp(&b.at).unwrap_or(std::cmp::Ordering::Equal));

        Self {
            engine,
            script,
            t_end: cfg.t_end,
        }
    }
}
