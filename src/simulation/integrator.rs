//! Frame-step time integrator for the sled state
//!
//! Provides the semi-implicit Euler step used once per rendered frame:
//! velocity is kicked from the freshly accumulated forces first, then
//! position drifts with the new velocity. Both the velocity clamp and the
//! low-speed snap policy live here, next to the update they guard.

use super::forces::ForceModel;
use super::params::{Parameters, SNAP_STOP, SNAP_WINDOW};
use super::states::SledState;

/// Advance the sled by one frame of `dt` seconds using semi-implicit Euler.
///
/// The step is total: every input has already been sanitized by the engine
/// facade, and the velocity clamp plus the caller-side frame ceiling keep
/// the scheme unconditionally stable. Callers are expected to clamp `dt`
/// to [`MAX_FRAME_DT`](super::params::MAX_FRAME_DT) beforehand.
pub fn semi_implicit_euler(state: &mut SledState, forces: &ForceModel, params: &Parameters, dt: f64) {
    // Accumulate this frame's forces from the current state.
    // Gravity and the normal load are recomputed inside unconditionally.
    let breakdown = forces.accumulate(params, state);

    // Publish the full breakdown into the state record so a renderer can
    // draw the force diagram from a single snapshot
    state.gravity_force = breakdown.gravity;
    state.normal_force = breakdown.normal;
    state.applied_force = breakdown.applied;
    state.friction_force = breakdown.friction;
    state.air_drag_force = breakdown.air_drag;
    state.net_force = breakdown.net();

    // Newton's second law: a = F_net / m
    state.acceleration = state.net_force / state.mass;

    // Kick: v_n+1 = v_n + a * dt, clamped to the velocity ceiling
    state.velocity += state.acceleration * dt;
    state.velocity = state.velocity.clamp(-params.max_speed, params.max_speed);

    // Low-speed snap. With no commanded thrust and a small residual speed:
    // - neither resistance active: leave the velocity alone, the sled
    //   coasts indefinitely (Newton's first law);
    // - a resistance active and the speed below SNAP_STOP: set it to
    //   exactly zero, ending the asymptotic creep the discretized drag and
    //   friction would otherwise produce.
    if state.thrust_direction == 0 && state.velocity.abs() < SNAP_WINDOW {
        let resisted = state.friction_enabled || state.air_drag_enabled;
        if resisted && state.velocity.abs() < SNAP_STOP {
            state.velocity = 0.0;
        }
    }

    // Drift: x_n+1 = x_n + dt * v_n+1 (the just-updated velocity)
    state.position += state.velocity * dt;
}
