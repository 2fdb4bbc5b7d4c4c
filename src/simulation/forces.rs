//! Force contributors for the sled engine
//!
//! Defines the horizontal force terms acting on the sled, each implementing
//! [`ForceTerm`]:
//! - `Thrust`: operator-commanded applied force
//! - `TrackFriction`: Coulomb friction (kinetic + static lock)
//! - `AirDrag`: velocity-squared aerodynamic drag
//!
//! A [`ForceModel`] holds the terms in registration order and accumulates
//! them into one [`ForceBreakdown`] per step. Order matters: friction reads
//! the applied force already accumulated ahead of it to decide whether the
//! sled is in static lock.

use crate::simulation::params::{Parameters, STATIC_SLACK, VELOCITY_EPS};
use crate::simulation::states::SledState;

/// Per-step force breakdown on the sled.
///
/// `applied`, `friction` and `air_drag` are signed horizontal forces;
/// `gravity` and `normal` are vertical magnitudes. On a flat track the
/// normal load always equals the weight, so both are fixed at construction
/// and recomputed fresh every step, never carried over stale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForceBreakdown {
    pub applied: f64, // N, signed
    pub friction: f64, // N, signed
    pub air_drag: f64, // N, signed
    pub gravity: f64, // N, magnitude, mass * g
    pub normal: f64, // N, magnitude, = gravity on a flat track
}

impl ForceBreakdown {
    /// Fresh breakdown with only the vertical pair filled in.
    pub fn new(params: &Parameters, state: &SledState) -> Self {
        let gravity = state.mass * params.gravity;
        Self {
            applied: 0.0,
            friction: 0.0,
            air_drag: 0.0,
            gravity,
            normal: gravity,
        }
    }

    /// Net horizontal force (the vertical pair cancels on a flat track).
    pub fn net(&self) -> f64 {
        self.applied + self.friction + self.air_drag
    }
}

/// Collection of horizontal force terms
/// Each term implements [`ForceTerm`] and their contributions are
/// accumulated, in registration order, into a single [`ForceBreakdown`]
pub struct ForceModel {
    terms: Vec<Box<dyn ForceTerm + Send + Sync>>,
}

impl ForceModel {
    /// Create an empty force model
    pub fn new() -> Self {
        Self {
            terms: Vec::new(),
        }
    }

    /// Add a force term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: ForceTerm + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    /// The standard sled model: thrust, then track friction, then air drag.
    /// Friction must be registered after thrust, since the static lock rule
    /// reacts to the accumulated applied force.
    pub fn standard() -> Self {
        Self::new().with(Thrust).with(TrackFriction).with(AirDrag)
    }

    /// Accumulate all terms for the current `state` into one breakdown
    pub fn accumulate(&self, params: &Parameters, state: &SledState) -> ForceBreakdown {
        let mut out = ForceBreakdown::new(params, state);
        // Iterate over all force contributors in registration order
        for term in &self.terms {
            term.contribute(params, state, &mut out);
        }
        out
    }
}

impl Default for ForceModel {
    fn default() -> Self {
        Self::standard()
    }
}

/// Trait for horizontal force sources acting on the sled
/// Implementations add their contribution into `out`
pub trait ForceTerm {
    fn contribute(&self, params: &Parameters, state: &SledState, out: &mut ForceBreakdown);
}

/// Operator-commanded thrust: direction sign times commanded magnitude.
pub struct Thrust;

impl ForceTerm for Thrust {
    fn contribute(&self, _params: &Parameters, state: &SledState, out: &mut ForceBreakdown) {
        out.applied = f64::from(state.thrust_direction) * state.applied_force_magnitude;
    }
}

/// Coulomb friction against the track.
///
/// Kinetic regime: while moving, a constant-magnitude force μN opposing
/// the current velocity sign.
///
/// Static regime: at rest (|v| <= VELOCITY_EPS), a commanded force smaller
/// than STATIC_SLACK * μN cannot break the sled loose: friction exactly
/// cancels it and no motion starts. A commanded force at or above that
/// threshold leaves friction at zero for the breakaway step; the kinetic
/// regime takes over once the sled is moving.
pub struct TrackFriction;

impl ForceTerm for TrackFriction {
    fn contribute(&self, _params: &Parameters, state: &SledState, out: &mut ForceBreakdown) {
        if !state.friction_enabled {
            return;
        }

        // Kinetic magnitude μN from the already-computed normal load
        let kinetic = state.friction_coefficient * out.normal;

        if state.velocity.abs() > VELOCITY_EPS {
            // Moving: oppose the current velocity sign, never the force's own
            out.friction = -state.velocity.signum() * kinetic;
        } else if out.applied.abs() < STATIC_SLACK * kinetic {
            // Static lock: cancel the commanded force exactly
            out.friction = -out.applied;
        }
    }
}

/// Aerodynamic drag, quadratic in speed: k * v^2 opposing the velocity
/// sign. Below the rest threshold it contributes nothing, so drag can
/// never become propulsive or flip the sled's direction on its own.
pub struct AirDrag;

impl ForceTerm for AirDrag {
    fn contribute(&self, params: &Parameters, state: &SledState, out: &mut ForceBreakdown) {
        if !state.air_drag_enabled {
            return;
        }

        let v = state.velocity;
        if v.abs() > VELOCITY_EPS {
            out.air_drag = -v.signum() * params.air_drag_coefficient * v * v;
        }
    }
}
