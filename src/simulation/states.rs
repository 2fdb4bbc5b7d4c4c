//! Core state record for the sled simulation.
//!
//! Defines [`SledState`], the full kinematic and force state of the single
//! point mass on its horizontal track:
//! - kinematics (position, velocity, acceleration)
//! - the per-step force breakdown (applied, friction, drag, gravity, normal)
//! - the operator-commanded inputs (thrust direction/magnitude, toggles, μ)
//!
//! The record is `Copy`; the engine hands it out by value so callers can
//! never reach back into engine internals through a snapshot.

use crate::simulation::params::Parameters;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SledState {
    pub position: f64, // m, signed displacement from origin
    pub velocity: f64, // m/s, signed, bounded to [-max_speed, max_speed]
    pub acceleration: f64, // m/s^2, derived each step

    pub mass: f64, // kg, constant for the session

    pub applied_force: f64, // N, signed: thrust_direction * magnitude
    pub friction_force: f64, // N, signed, zero unless friction_enabled
    pub air_drag_force: f64, // N, signed, zero unless air_drag_enabled
    pub normal_force: f64, // N, magnitude, equals gravity_force on flat track
    pub gravity_force: f64, // N, magnitude, mass * g
    pub net_force: f64, // N, applied + friction + drag

    pub friction_enabled: bool, // toggle
    pub air_drag_enabled: bool, // toggle

    pub thrust_direction: i8, // -1, 0 or 1
    pub applied_force_magnitude: f64, // N, >= 0, commanded thrust
    pub friction_coefficient: f64, // >= 0, live value of μ
}

impl SledState {
    /// Initial condition: at rest at the origin, no commanded thrust,
    /// both resistances off. Gravity and normal load already carry the
    /// flat-track values so the first snapshot is consistent.
    pub fn initial(params: &Parameters) -> Self {
        let weight = params.mass * params.gravity;
        Self {
            position: 0.0,
            velocity: 0.0,
            acceleration: 0.0,
            mass: params.mass,
            applied_force: 0.0,
            friction_force: 0.0,
            air_drag_force: 0.0,
            normal_force: weight,
            gravity_force: weight,
            net_force: 0.0,
            friction_enabled: false,
            air_drag_enabled: false,
            thrust_direction: 0,
            applied_force_magnitude: params.base_thrust,
            friction_coefficient: params.friction_coefficient,
        }
    }
}
