use sledsim::configuration::config::{ActionConfig, ScenarioConfig};
use sledsim::simulation::engine::PhysicsEngine;
use sledsim::simulation::params::Parameters;
use sledsim::simulation::scenario::Scenario;

/// Default physics parameters for tests
pub fn test_params() -> Parameters {
    Parameters::default()
}

/// Engine at rest at the origin, both resistances off
pub fn engine_at_rest() -> PhysicsEngine {
    PhysicsEngine::new(test_params())
}

/// Engine already moving at `v0`, both resistances off
pub fn engine_moving(v0: f64) -> PhysicsEngine {
    PhysicsEngine::with_initial(test_params(), 0.0, v0)
}

// ==================================================================================
// Invariant tests
// ==================================================================================

#[test]
fn velocity_never_exceeds_ceiling() {
    let mut engine = engine_at_rest();
    engine.set_applied_force_magnitude(5000.0);
    engine.set_thrust_direction(1.0);

    // 10 m/s^2 of commanded acceleration for 100 s: far past the ceiling
    for _ in 0..2000 {
        engine.advance(0.05);
        let v = engine.state().velocity;
        assert!(v.abs() <= 50.0 + 1e-12, "Velocity ceiling violated: {}", v);
    }
    assert!((engine.state().velocity - 50.0).abs() < 1e-9, "Expected saturation at the ceiling");
}

#[test]
fn normal_force_tracks_weight() {
    let mut engine = engine_at_rest();
    engine.set_thrust_direction(1.0);

    for _ in 0..50 {
        engine.advance(0.016);
        let s = engine.state();
        assert!((s.gravity_force - 500.0 * 9.8).abs() < 1e-9, "Gravity drifted: {}", s.gravity_force);
        assert!((s.normal_force - s.gravity_force).abs() < 1e-9, "Normal != weight");
    }
}

#[test]
fn forces_zero_unless_enabled() {
    let mut engine = engine_moving(30.0);
    engine.set_thrust_direction(1.0);
    engine.advance(0.016);

    let s = engine.state();
    assert_eq!(s.friction_force, 0.0, "Friction active while disabled");
    assert_eq!(s.air_drag_force, 0.0, "Drag active while disabled");
    assert!((s.net_force - s.applied_force).abs() < 1e-12);
}

// ==================================================================================
// Stasis and coasting
// ==================================================================================

#[test]
fn zero_input_stasis() {
    let mut engine = engine_at_rest();

    for _ in 0..200 {
        engine.advance(0.016);
        let s = engine.state();
        assert_eq!(s.velocity, 0.0, "Spontaneous motion from rest");
        assert_eq!(s.position, 0.0, "Position drift from rest");
    }
}

#[test]
fn coasting_preserves_velocity() {
    // Thrust off, both resistances off: v must stay exactly v0
    let mut engine = engine_moving(10.0);

    for _ in 0..500 {
        engine.advance(0.016);
        assert_eq!(engine.state().velocity, 10.0, "First-law coasting violated");
    }
    assert!(engine.state().position > 0.0);
}

#[test]
fn slow_coasting_is_not_snapped() {
    // Below the snap window but with no resistance active, the residual
    // velocity must survive: free coasting has no reason to stop
    let mut engine = engine_moving(0.04);

    for _ in 0..200 {
        engine.advance(0.016);
        assert_eq!(engine.state().velocity, 0.04, "Free coasting was snapped to rest");
    }
}

// ==================================================================================
// Friction tests
// ==================================================================================

#[test]
fn static_lock_cancels_weak_thrust() {
    // 600 N commanded vs a 735 N kinetic threshold (breakaway at 808.5 N)
    let mut engine = engine_at_rest();
    engine.set_friction_enabled(true);
    engine.set_applied_force_magnitude(600.0);
    engine.set_thrust_direction(1.0);

    for _ in 0..100 {
        engine.advance(0.016);
        let s = engine.state();
        assert_eq!(s.velocity, 0.0, "Static lock failed to hold");
        assert!((s.friction_force + s.applied_force).abs() < 1e-9, "Friction does not cancel thrust: {} vs {}", s.friction_force, s.applied_force);
    }
    assert_eq!(engine.state().position, 0.0);
}

#[test]
fn breakaway_above_static_threshold() {
    // 900 N > 1.1 * mu * m * g: the lock must release
    let mut engine = engine_at_rest();
    engine.set_friction_enabled(true);
    engine.set_applied_force_magnitude(900.0);
    engine.set_thrust_direction(1.0);

    engine.advance(0.016);
    let s = engine.state();
    assert_eq!(s.friction_force, 0.0, "Friction nonzero on the breakaway step");
    assert!(s.velocity > 0.0, "Breakaway produced no motion");

    // Once moving, kinetic friction opposes the motion
    engine.advance(0.016);
    assert!(engine.state().friction_force < 0.0, "Kinetic friction missing after breakaway");
}

#[test]
fn kinetic_friction_opposes_motion() {
    let mut engine = engine_moving(20.0);
    engine.set_friction_enabled(true);
    engine.advance(0.016);
    let s = engine.state();
    assert!(s.friction_force < 0.0, "Friction not opposing +v");
    assert!((s.friction_force + 0.15 * 500.0 * 9.8).abs() < 1e-9, "Wrong kinetic magnitude: {}", s.friction_force);

    let mut engine = engine_moving(-20.0);
    engine.set_friction_enabled(true);
    engine.advance(0.016);
    assert!(engine.state().friction_force > 0.0, "Friction not opposing -v");
}

#[test]
fn snap_stops_creep_with_resistance() {
    // A residual 0.04 m/s with friction active must come to an exact stop
    let mut engine = engine_moving(0.04);
    engine.set_friction_enabled(true);

    engine.advance(0.016);
    assert_eq!(engine.state().velocity, 0.0, "Residual creep survived the snap");
}

// ==================================================================================
// Air drag tests
// ==================================================================================

#[test]
fn drag_quadratic_law() {
    let mut engine = engine_moving(20.0);
    engine.set_air_drag_enabled(true);
    engine.advance(0.016);
    let s = engine.state();
    // k * v^2 = 0.5 * 400 against the motion
    assert!((s.air_drag_force + 200.0).abs() < 1e-9, "Drag magnitude off: {}", s.air_drag_force);

    let mut engine = engine_moving(-20.0);
    engine.set_air_drag_enabled(true);
    engine.advance(0.016);
    assert!((engine.state().air_drag_force - 200.0).abs() < 1e-9, "Drag not opposing -v");
}

#[test]
fn drag_decays_speed_without_reversing() {
    let mut engine = engine_moving(40.0);
    engine.set_air_drag_enabled(true);

    let mut prev = 40.0;
    for _ in 0..5000 {
        engine.advance(0.016);
        let v = engine.state().velocity;
        assert!(v >= 0.0, "Drag reversed the direction of motion");
        assert!(v <= prev + 1e-12, "Drag accelerated the sled");
        prev = v;
    }
}

// ==================================================================================
// Scenario dynamics
// ==================================================================================

#[test]
fn thrust_reversal_decelerates_monotonically() {
    // Steady rightward motion, then full leftward thrust: the velocity
    // must fall smoothly toward and through zero, never jumping
    let mut engine = engine_moving(30.0);
    engine.set_applied_force_magnitude(2000.0);
    engine.set_thrust_direction(-1.0);

    let mut prev = 30.0;
    let mut crossed_zero = false;
    for _ in 0..1000 {
        engine.advance(0.016);
        let v = engine.state().velocity;
        assert!(v < prev, "Deceleration not monotonic: {} -> {}", prev, v);
        // |a| = 4 m/s^2 bounds the per-step change
        assert!(prev - v <= 4.0 * 0.016 + 1e-9, "Velocity jumped discontinuously");
        if v < 0.0 {
            crossed_zero = true;
        }
        prev = v;
    }
    assert!(crossed_zero, "Reversal never carried the sled through zero");
}

#[test]
fn constant_thrust_matches_euler_recurrence() {
    // 2000 N on 500 kg, dt = 0.1 s, 10 steps: a = 4 m/s^2 throughout,
    // v = 4.0 m/s, x = sum(v_i * dt) = 2.2 m
    let mut engine = engine_at_rest();
    engine.set_thrust_direction(1.0);

    let dt = 0.1;
    let mut expected_v = 0.0;
    let mut expected_x = 0.0;
    for _ in 0..10 {
        engine.advance(dt);
        expected_v += 4.0 * dt;
        expected_x += expected_v * dt;

        let s = engine.state();
        assert!((s.acceleration - 4.0).abs() < 1e-9, "Acceleration not constant: {}", s.acceleration);
        assert!((s.velocity - expected_v).abs() < 1e-9);
        assert!((s.position - expected_x).abs() < 1e-9);
    }

    let s = engine.state();
    assert!((s.velocity - 4.0).abs() < 1e-9, "Final velocity: {}", s.velocity);
    assert!((s.position - 2.2).abs() < 1e-9, "Final position: {}", s.position);
}

// ==================================================================================
// Reset semantics
// ==================================================================================

#[test]
fn reset_is_idempotent() {
    let mut engine = engine_at_rest();
    engine.set_thrust_direction(1.0);
    engine.set_air_drag_enabled(true);
    for _ in 0..100 {
        engine.advance(0.016);
    }

    engine.reset();
    let once = engine.state();
    assert_eq!(engine.elapsed(), 0.0);

    engine.reset();
    assert_eq!(engine.state(), once, "Second reset changed the state");
}

#[test]
fn reset_preserves_commanded_settings() {
    let mut engine = engine_at_rest();
    engine.set_friction_enabled(true);
    engine.set_air_drag_enabled(true);
    engine.set_friction_coefficient(0.3);
    engine.set_applied_force_magnitude(3000.0);
    engine.set_thrust_direction(1.0);
    for _ in 0..100 {
        engine.advance(0.016);
    }

    engine.reset();
    let s = engine.state();
    assert_eq!(s.position, 0.0);
    assert_eq!(s.velocity, 0.0);
    assert_eq!(s.acceleration, 0.0);
    assert_eq!(s.net_force, 0.0);
    assert_eq!(s.thrust_direction, 0, "Reset must drop the commanded direction");
    assert!(s.friction_enabled && s.air_drag_enabled, "Reset must keep the toggles");
    assert_eq!(s.friction_coefficient, 0.3, "Reset must keep the coefficient");
    assert_eq!(s.applied_force_magnitude, 3000.0, "Reset must keep the magnitude");
}

// ==================================================================================
// Input sanitization
// ==================================================================================

#[test]
fn mutators_sanitize_inputs() {
    let mut engine = engine_at_rest();

    engine.set_thrust_direction(7.5);
    assert_eq!(engine.state().thrust_direction, 1);
    engine.set_thrust_direction(-0.2);
    assert_eq!(engine.state().thrust_direction, -1);
    engine.set_thrust_direction(0.0);
    assert_eq!(engine.state().thrust_direction, 0);
    engine.set_thrust_direction(f64::NAN);
    assert_eq!(engine.state().thrust_direction, 0);

    engine.set_applied_force_magnitude(-50.0);
    assert_eq!(engine.state().applied_force_magnitude, 0.0);
    engine.set_applied_force_magnitude(9000.0);
    assert_eq!(engine.state().applied_force_magnitude, 5000.0, "Magnitude not clamped to the ceiling");

    engine.set_friction_coefficient(-1.0);
    assert_eq!(engine.state().friction_coefficient, 0.0);
}

#[test]
fn advance_ignores_negative_dt() {
    let mut engine = engine_moving(10.0);
    engine.advance(-0.5);
    let s = engine.state();
    assert_eq!(s.position, 0.0, "Negative dt moved the sled");
    assert_eq!(s.velocity, 10.0);
    assert_eq!(engine.elapsed(), 0.0);
}

// ==================================================================================
// Derived queries
// ==================================================================================

#[test]
fn speed_fraction_and_alarm_zone() {
    let engine = engine_moving(45.0);
    assert!((engine.speed_fraction() - 90.0).abs() < 1e-9);
    assert!(engine.in_alarm_zone());

    let engine = engine_moving(-45.0);
    assert!((engine.speed_fraction() - 90.0).abs() < 1e-9, "Fraction must use |v|");
    assert!(engine.in_alarm_zone());

    let engine = engine_moving(30.0);
    assert!((engine.speed_fraction() - 60.0).abs() < 1e-9);
    assert!(!engine.in_alarm_zone());

    // Exactly at the threshold is not yet an alarm
    let engine = engine_moving(40.0);
    assert!((engine.speed_fraction() - 80.0).abs() < 1e-9);
    assert!(!engine.in_alarm_zone());

    let engine = engine_at_rest();
    assert_eq!(engine.speed_fraction(), 0.0);
    assert!(!engine.in_alarm_zone());
}

// ==================================================================================
// Configuration and scenario building
// ==================================================================================

const SCENARIO_YAML: &str = r#"
parameters:
  mass: 500.0
  gravity: 9.8
  friction_coefficient: 0.15
  air_drag_coefficient: 0.5
  base_thrust: 2000.0
  max_speed: 50.0

sled:
  position: -5.0
  velocity: 12.0
  friction: true
  air_drag: false

t_end: 10.0

script:
  - at: 4.0
    action:
      thrust: 0.0
  - at: 1.0
    action:
      thrust: -1.0
  - at: 6.0
    action: reset
"#;

#[test]
fn yaml_scenario_builds_runtime_bundle() {
    let cfg: ScenarioConfig = serde_yaml::from_str(SCENARIO_YAML).expect("scenario YAML must parse");
    let scenario = Scenario::build_scenario(cfg);

    let s = scenario.engine.state();
    assert_eq!(s.position, -5.0);
    assert_eq!(s.velocity, 12.0);
    assert!(s.friction_enabled);
    assert!(!s.air_drag_enabled);
    assert_eq!(s.applied_force_magnitude, 2000.0);
    assert_eq!(scenario.t_end, 10.0);

    // Script sorted by fire time regardless of file order
    let times: Vec<f64> = scenario.script.iter().map(|ev| ev.at).collect();
    assert_eq!(times, vec![1.0, 4.0, 6.0]);
    assert_eq!(scenario.script[2].action, ActionConfig::Reset);
}

#[test]
fn omitted_thrust_limit_still_caps_magnitude() {
    // The YAML above has no thrust_limit: the default 5000 N ceiling applies
    let cfg: ScenarioConfig = serde_yaml::from_str(SCENARIO_YAML).expect("scenario YAML must parse");
    let mut scenario = Scenario::build_scenario(cfg);

    scenario.engine.set_applied_force_magnitude(20_000.0);
    assert_eq!(scenario.engine.state().applied_force_magnitude, 5000.0);
}

#[test]
fn script_events_drive_engine_mutators() {
    let cfg: ScenarioConfig = serde_yaml::from_str(SCENARIO_YAML).expect("scenario YAML must parse");
    let mut scenario = Scenario::build_scenario(cfg);

    // 1 s: full leftward thrust
    scenario.script[0].apply(&mut scenario.engine);
    assert_eq!(scenario.engine.state().thrust_direction, -1);

    // 6 s: reset rewinds kinematics but keeps the friction toggle
    scenario.script[2].apply(&mut scenario.engine);
    let s = scenario.engine.state();
    assert_eq!(s.velocity, 0.0);
    assert_eq!(s.position, 0.0);
    assert!(s.friction_enabled);
}
