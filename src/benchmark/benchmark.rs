use std::time::Instant;

use crate::simulation::engine::PhysicsEngine;
use crate::simulation::params::Parameters;

/// Time batches of `advance` calls with the full force model active.
///
/// The step must stay cheap enough to never threaten a frame budget; this
/// prints steps/second for a few batch sizes as a quick regression check.
pub fn bench_advance() {
    let ns = [100_000usize, 1_000_000, 5_000_000];

    for n in ns {
        // Worst-case standard model: thrust commanded, both resistances on
        let mut engine = PhysicsEngine::new(Parameters::default());
        engine.set_thrust_direction(1.0);
        engine.set_friction_enabled(true);
        engine.set_air_drag_enabled(true);

        let dt = 1.0 / 60.0;

        // Warm up
        for _ in 0..1_000 {
            engine.advance(dt);
        }

        let t0 = Instant::now();
        for _ in 0..n {
            engine.advance(dt);
        }
        let elapsed = t0.elapsed().as_secs_f64();

        println!(
            "N = {n:8}, total = {:8.6} s, {:12.0} steps/s, final v = {:.2} m/s",
            elapsed,
            n as f64 / elapsed,
            engine.state().velocity,
        );
    }
}
