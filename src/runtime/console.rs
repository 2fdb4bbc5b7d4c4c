//! Headless frame drivers for a scenario
//!
//! The engine never runs itself; a driver samples time once per frame,
//! clamps the delta, feeds due script inputs through the mutator API,
//! calls `advance`, and reads one snapshot to report. Two drivers:
//! - [`run_console`]: real wall-clock pacing, the reference frame loop
//! - [`run_fixed`]: deterministic fixed-step replay for scripted runs

use std::time::{Duration, Instant};

use crate::simulation::engine::PhysicsEngine;
use crate::simulation::params::MAX_FRAME_DT;
use crate::simulation::scenario::{ControlEvent, Scenario};

const FRAME_SLEEP_MS: u64 = 16; // ~60 Hz pacing
const REPORT_PERIOD: f64 = 0.25; // s of simulation time between gauge lines

/// Run a scenario against the wall clock until `t_end`.
///
/// Each frame derives `dt = min(elapsed wall time, MAX_FRAME_DT)`; the
/// clamp bounds how far a single step extrapolates after a stall.
pub fn run_console(scenario: Scenario) {
    println!("run_console: driving sled to t = {} s ({} scripted inputs)", scenario.t_end, scenario.script.len());

    let Scenario {
        mut engine,
        script,
        t_end,
    } = scenario;

    let mut pending = script.into_iter().peekable();
    let mut last_frame = Instant::now();
    let mut next_report = 0.0;

    while engine.elapsed() < t_end {
        std::thread::sleep(Duration::from_millis(FRAME_SLEEP_MS));

        // Frame delta from the wall clock, clamped
        let now = Instant::now();
        let dt = now.duration_since(last_frame).as_secs_f64().min(MAX_FRAME_DT);
        last_frame = now;

        drain_due_events(&mut pending, &mut engine);
        engine.advance(dt);

        if engine.elapsed() >= next_report {
            next_report = engine.elapsed() + REPORT_PERIOD;
            print_gauge(&engine);
        }
    }

    print_summary(&engine);
}

/// Replay a scenario deterministically with a fixed step.
///
/// The step is clamped to `(0, MAX_FRAME_DT]` so a replay can never take a
/// larger stride than a live frame is allowed to.
pub fn run_fixed(scenario: Scenario, step: f64) {
    let dt = if step > 0.0 { step.min(MAX_FRAME_DT) } else { MAX_FRAME_DT };
    println!("run_fixed: replaying sled to t = {} s at dt = {} s", scenario.t_end, dt);

    let Scenario {
        mut engine,
        script,
        t_end,
    } = scenario;

    let mut pending = script.into_iter().peekable();
    let mut next_report = 0.0;

    while engine.elapsed() < t_end {
        drain_due_events(&mut pending, &mut engine);
        engine.advance(dt);

        if engine.elapsed() >= next_report {
            next_report = engine.elapsed() + REPORT_PERIOD;
            print_gauge(&engine);
        }
    }

    print_summary(&engine);
}

/// Apply every script entry whose fire time has been reached.
fn drain_due_events<I>(pending: &mut std::iter::Peekable<I>, engine: &mut PhysicsEngine)
where
    I: Iterator<Item = ControlEvent>,
{
    while pending.peek().is_some_and(|ev| ev.at <= engine.elapsed()) {
        if let Some(ev) = pending.next() {
            ev.apply(engine);
        }
    }
}

/// One gauge line: kinematics, force diagram values, speed bar, alarm.
fn print_gauge(engine: &PhysicsEngine) {
    let s = engine.state();
    let pct = engine.speed_fraction();

    // 20-slot speed bar, 5% per slot
    let filled = (pct / 5.0).round() as usize;
    let bar: String = (0..20).map(|i| if i < filled { '#' } else { '.' }).collect();

    let alarm = if engine.in_alarm_zone() { "  !! OVERSPEED" } else { "" };

    println!(
        "t = {:6.2} s  x = {:9.2} m  v = {:7.2} m/s  F: app {:7.1} fric {:7.1} drag {:7.1} net {:7.1} N  [{}] {:3.0}%{}",
        engine.elapsed(),
        s.position,
        s.velocity,
        s.applied_force,
        s.friction_force,
        s.air_drag_force,
        s.net_force,
        bar,
        pct,
        alarm,
    );
}

fn print_summary(engine: &PhysicsEngine) {
    let s = engine.state();
    println!(
        "done: t = {:.2} s, position = {:.2} m, velocity = {:.2} m/s, gauge {:.0}%",
        engine.elapsed(),
        s.position,
        s.velocity,
        engine.speed_fraction(),
    );
}
