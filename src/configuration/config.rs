//! Configuration types for loading sled scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`ParametersConfig`] – physical parameters and control ceilings
//! - [`SledConfig`]       – initial kinematics and resistance toggles
//! - [`EventConfig`]      – one timed control input for the script
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! parameters:
//!   mass: 500.0                # kg
//!   gravity: 9.8               # m/s^2
//!   friction_coefficient: 0.15
//!   air_drag_coefficient: 0.5  # N per (m/s)^2
//!   base_thrust: 2000.0        # N, commanded magnitude at start
//!   thrust_limit: 5000.0       # N, ceiling for the max-force control
//!   max_speed: 50.0            # m/s
//!
//! sled:
//!   position: 0.0              # m
//!   velocity: 0.0              # m/s
//!   friction: false
//!   air_drag: false
//!
//! t_end: 12.0                  # s, driver stops here
//!
//! script:
//!   - at: 0.5
//!     action:
//!       thrust: 1.0            # any nonzero sign commands a direction
//!   - at: 4.0
//!     action:
//!       air_drag: true
//!   - at: 6.0
//!     action:
//!       thrust: 0.0
//!   - at: 10.0
//!     action: reset
//! ```
//!
//! The engine maps this configuration into its runtime scenario bundle;
//! every scripted action goes through the engine's sanitizing mutators.

use serde::Deserialize;

/// One scripted control input, mirroring the engine's mutator surface
/// Values are sanitized by the engine when applied, not at parse time
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub enum ActionConfig {
    #[serde(rename = "thrust")] // commanded direction, any signed number
    Thrust(f64),

    #[serde(rename = "thrust_magnitude")] // commanded magnitude in newtons
    ThrustMagnitude(f64),

    #[serde(rename = "friction")] // toggle track friction
    Friction(bool),

    #[serde(rename = "air_drag")] // toggle air drag
    AirDrag(bool),

    #[serde(rename = "friction_coefficient")] // live μ adjustment
    FrictionCoefficient(f64),

    #[serde(rename = "reset")] // back to the initial condition
    Reset,
}

/// Physical parameters and control ceilings for a scenario
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub mass: f64,                 // kg
    pub gravity: f64,              // m/s^2
    pub friction_coefficient: f64, // default μ
    pub air_drag_coefficient: f64, // N per (m/s)^2
    pub base_thrust: f64,          // N, commanded magnitude at start
    pub thrust_limit: Option<f64>, // N, max-force ceiling (default 5000)
    pub max_speed: f64,            // m/s, velocity ceiling
}

/// Initial state of the sled
#[derive(Deserialize, Debug)]
pub struct SledConfig {
    pub position: f64, // m, signed displacement at t = 0
    pub velocity: f64, // m/s at t = 0
    pub friction: bool, // track friction on at t = 0
    pub air_drag: bool, // air drag on at t = 0
}

/// One timed entry of the control script
#[derive(Deserialize, Debug)]
pub struct EventConfig {
    pub at: f64, // s, simulation time the input fires
    pub action: ActionConfig, // which mutator it drives
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    pub parameters: ParametersConfig, // physical parameters and ceilings
    pub sled: SledConfig, // initial kinematics and toggles
    pub t_end: f64, // s, how long the driver runs
    #[serde(default)]
    pub script: Vec<EventConfig>, // timed control inputs, may be empty
}
