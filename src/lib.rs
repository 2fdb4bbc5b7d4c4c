pub mod simulation;
pub mod configuration;
pub mod runtime;
pub mod benchmark;

pub use simulation::states::SledState;
pub use simulation::params::{Parameters, ALARM_FRACTION, MAX_FRAME_DT, SNAP_STOP, SNAP_WINDOW, STATIC_SLACK, VELOCITY_EPS};
pub use simulation::forces::{AirDrag, ForceBreakdown, ForceModel, ForceTerm, Thrust, TrackFriction};
pub use simulation::integrator::semi_implicit_euler;
pub use simulation::engine::PhysicsEngine;
pub use simulation::scenario::{ControlEvent, Scenario};

pub use configuration::config::{ActionConfig, EventConfig, ParametersConfig, ScenarioConfig, SledConfig};

pub use runtime::console::{run_console, run_fixed};

pub use benchmark::benchmark::bench_advance;
