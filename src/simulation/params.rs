//! Physical parameters and fixed model thresholds
//!
//! `Parameters` holds the session tunables:
//! - sled mass and gravitational acceleration,
//! - default friction coefficient and air drag coefficient,
//! - commanded thrust baseline and its adjustable ceiling,
//! - the velocity ceiling
//!
//! The named constants below are part of the force model itself (rest
//! detection, static breakaway slack, low-speed snap, frame clamp) and are
//! not scenario-tunable.

/// Below this speed the sled counts as "at rest" for friction and drag.
pub const VELOCITY_EPS: f64 = 0.01; // m/s

/// Static friction holds until the commanded force exceeds the kinetic
/// threshold by this factor. The 10% slack keeps the lock from chattering
/// right at the boundary.
pub const STATIC_SLACK: f64 = 1.1;

/// Outer window for the low-speed snap rule.
pub const SNAP_WINDOW: f64 = 0.1; // m/s

/// With a resistance active and no commanded thrust, speeds below this are
/// snapped to exactly zero.
pub const SNAP_STOP: f64 = 0.05; // m/s

/// Ceiling a frame driver applies to the wall-clock delta before calling
/// `advance`, so a stalled frame (paused tab, modal) cannot extrapolate far.
pub const MAX_FRAME_DT: f64 = 0.05; // s

/// Speed fraction (percent of the velocity ceiling) past which the
/// overspeed alarm is raised.
pub const ALARM_FRACTION: f64 = 80.0;

#[derive(Debug, Clone)]
pub struct Parameters {
    pub mass: f64, // kg
    pub gravity: f64, // m/s^2
    pub friction_coefficient: f64, // default μ, live value kept in state
    pub air_drag_coefficient: f64, // N per (m/s)^2
    pub base_thrust: f64, // N, initial commanded magnitude
    pub thrust_limit: f64, // N, ceiling for the adjustable max-force control
    pub max_speed: f64, // m/s, velocity ceiling
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            mass: 500.0,
            gravity: 9.8,
            friction_coefficient: 0.15,
            air_drag_coefficient: 0.5,
            base_thrust: 2000.0,
            thrust_limit: 5000.0,
            max_speed: 50.0,
        }
    }
}
