use std::time::Instant;

use crate::simulation::engine::Simulation;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Color, NVec2};

/// Helper to build a simulation with `n` orbiters on a deterministic spiral
fn make_simulation(n: usize) -> anyhow::Result<Simulation> {
    let params = Parameters {
        g: 1.0,
        ..Parameters::default()
    };
    let mut sim = Simulation::new(params)?;

    let anchor_mass = 1.0e3;
    sim.add_body(NVec2::zeros(), NVec2::zeros(), anchor_mass, 10.0, Color::YELLOW)?;

    for i in 0..n {
        let i_f = i as f64;
        // deterministic positions, no rand needed
        let r = 20.0 + (i_f * 0.37).sin().abs() * 400.0;
        let phi = i_f * 0.13;
        let x = NVec2::new(r * phi.cos(), r * phi.sin());
        let speed = sim.parameters().circular_speed(anchor_mass, r);
        let v = NVec2::new(-phi.sin(), phi.cos()) * speed;
        sim.add_body(x, v, 1.0, 2.0, Color::WHITE)?;
    }

    Ok(sim)
}

/// Time one frame of the integrator over a range of orbiter counts
/// Paste output directly into a spreadsheet to graph
pub fn bench_step() -> anyhow::Result<()> {
    let dt = 1.0 / 60.0;

    println!("N,step_us");

    let mut n = 100;
    while n <= 51_200 {
        // Small n: average over many frames to smooth noise
        let frames = if n <= 1_600 { 200 } else { 20 };

        let mut sim = make_simulation(n)?;

        // Warm up, also fills part of every trail
        sim.step_scaled(dt, 1.0);

        let t0 = Instant::now();
        for _ in 0..frames {
            sim.step_scaled(dt, 1.0);
        }
        let us = t0.elapsed().as_secs_f64() * 1.0e6 / frames as f64;

        println!("{},{:.3}", n, us);
        n *= 2;
    }

    Ok(())
}
