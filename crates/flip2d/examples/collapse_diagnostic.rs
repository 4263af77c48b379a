//! Column Collapse Diagnostic
//!
//! Seed a block of fluid in the lower-left of the domain, let it fall under
//! gravity, and track energy and divergence frame by frame.
//! Run with: cargo run --example collapse_diagnostic

use flip2d::{FlipFluidSolver, SolverConfig, Vec2};

const DT: f32 = 1.0 / 60.0;
const FRAMES: usize = 600;
const REPORT_EVERY: usize = 30;

fn main() {
    let config = SolverConfig {
        grid_width: 60,
        grid_height: 60,
        cell_size: 0.1,
        particle_count: 900,
        area_width: 3.0,
        area_height: 3.0,
        gravity: Vec2::new(0.0, -9.81),
        obstacle_center: Vec2::new(3.0, 3.0),
        obstacle_radius: 0.6,
        ..SolverConfig::default()
    };

    let mut solver = match FlipFluidSolver::new(config) {
        Ok(solver) => solver,
        Err(err) => {
            eprintln!("{}", err);
            return;
        }
    };

    println!("frame | kinetic energy | mean |div| | max grid speed");
    println!("------|----------------|------------|---------------");

    for frame in 0..=FRAMES {
        if frame % REPORT_EVERY == 0 {
            println!(
                "{:>5} | {:>14.4} | {:>10.4} | {:>13.4}",
                frame,
                solver.particles.kinetic_energy(),
                solver.grid.mean_absolute_divergence(),
                solver.grid.max_speed(),
            );
        }
        solver.step(DT);
    }

    let nan_count = solver
        .particles()
        .iter()
        .filter(|p| !p.position.is_finite() || !p.velocity.is_finite())
        .count();
    println!();
    println!(
        "done: {} particles, {} non-finite",
        solver.particles().len(),
        nan_count
    );
}
