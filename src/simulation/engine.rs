//! The physics engine facade
//!
//! [`PhysicsEngine`] owns the one mutable sled record plus the parameters
//! and force model acting on it. Control inputs go through sanitizing
//! mutators (sign-normalized or clamped, never rejected: a real-time loop
//! must not halt), the frame driver calls [`PhysicsEngine::advance`] once
//! per frame, and renderers read a by-value snapshot plus the derived
//! speed queries.

use crate::simulation::forces::ForceModel;
use crate::simulation::integrator::semi_implicit_euler;
use crate::simulation::params::{Parameters, ALARM_FRACTION};
use crate::simulation::states::SledState;

pub struct PhysicsEngine {
    params: Parameters,
    forces: ForceModel,
    state: SledState,
    t: f64, // s, simulation time accumulated by advance
}

impl PhysicsEngine {
    /// Engine at the initial condition with the standard force model.
    pub fn new(params: Parameters) -> Self {
        Self::with_initial(params, 0.0, 0.0)
    }

    /// Engine starting from a given position and velocity, for scenarios
    /// that begin mid-motion. The velocity ceiling applies from the start.
    pub fn with_initial(params: Parameters, position: f64, velocity: f64) -> Self {
        let mut state = SledState::initial(&params);
        state.position = position;
        state.velocity = velocity.clamp(-params.max_speed, params.max_speed);
        Self {
            params,
            forces: ForceModel::standard(),
            state,
            t: 0.0,
        }
    }

    /// Command a thrust direction. Any positive input maps to +1, any
    /// negative to -1; zero (and anything unordered) stays 0.
    pub fn set_thrust_direction(&mut self, direction: f64) {
        self.state.thrust_direction = if direction > 0.0 {
            1
        } else if direction < 0.0 {
            -1
        } else {
            0
        };
    }

    /// Command a thrust magnitude in newtons, clamped to
    /// [0, `thrust_limit`]. Takes effect on the next advance.
    pub fn set_applied_force_magnitude(&mut self, newtons: f64) {
        self.state.applied_force_magnitude = newtons.max(0.0).min(self.params.thrust_limit);
    }

    /// Toggle track friction. The stored friction force is left as-is;
    /// the next advance recomputes it from the flag.
    pub fn set_friction_enabled(&mut self, enabled: bool) {
        self.state.friction_enabled = enabled;
    }

    /// Toggle air drag. Same recompute-on-next-advance contract as friction.
    pub fn set_air_drag_enabled(&mut self, enabled: bool) {
        self.state.air_drag_enabled = enabled;
    }

    /// Set the friction coefficient, clamped to >= 0.
    pub fn set_friction_coefficient(&mut self, mu: f64) {
        self.state.friction_coefficient = mu.max(0.0);
    }

    /// Back to the initial condition: kinematics, horizontal forces and
    /// thrust direction zeroed, gravity/normal recomputed, time rewound.
    /// Enable flags, the friction coefficient and the commanded magnitude
    /// keep their last values; they are commanded settings, and a "full"
    /// reset of those belongs to the driving layer.
    pub fn reset(&mut self) {
        let weight = self.params.mass * self.params.gravity;
        self.state.position = 0.0;
        self.state.velocity = 0.0;
        self.state.acceleration = 0.0;
        self.state.applied_force = 0.0;
        self.state.friction_force = 0.0;
        self.state.air_drag_force = 0.0;
        self.state.gravity_force = weight;
        self.state.normal_force = weight;
        self.state.net_force = 0.0;
        self.state.thrust_direction = 0;
        self.t = 0.0;
    }

    /// Advance the sled by one frame of `dt` seconds.
    ///
    /// `dt` is the wall-clock delta the frame driver derived, already
    /// clamped to [`MAX_FRAME_DT`](crate::simulation::params::MAX_FRAME_DT)
    /// on the caller's side; negative or unordered inputs are floored to 0
    /// here so the facade never integrates backwards.
    pub fn advance(&mut self, dt: f64) {
        let dt = dt.max(0.0);
        semi_implicit_euler(&mut self.state, &self.forces, &self.params, dt);
        self.t += dt;
    }

    /// Snapshot of the full state record, by value.
    pub fn state(&self) -> SledState {
        self.state
    }

    /// Parameters the engine was built with.
    pub fn params(&self) -> &Parameters {
        &self.params
    }

    /// Simulation time accumulated by `advance`, in seconds.
    pub fn elapsed(&self) -> f64 {
        self.t
    }

    /// Current speed as a percentage of the velocity ceiling, in [0, 100].
    pub fn speed_fraction(&self) -> f64 {
        self.state.velocity.abs() / self.params.max_speed * 100.0
    }

    /// True once the speed fraction passes the overspeed threshold.
    pub fn in_alarm_zone(&self) -> bool {
        self.speed_fraction() > ALARM_FRACTION
    }
}
