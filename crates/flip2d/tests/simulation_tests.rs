//! End-to-end solver tests.
//!
//! These verify whole-step behaviors:
//! - seeding is deterministic and inside the configured area
//! - particle count is fixed for the solver's lifetime
//! - long runs stay bounded (no blow-up, no NaN)

use flip2d::{FlipFluidSolver, SolverConfig, Vec2};

const DT: f32 = 0.016;

#[test]
fn seeded_lattice_is_strictly_inside_area() {
    let config = SolverConfig {
        grid_width: 100,
        grid_height: 100,
        cell_size: 0.1,
        particle_count: 100,
        area_width: 10.0,
        area_height: 10.0,
        ..SolverConfig::default()
    };
    let solver = FlipFluidSolver::new(config).unwrap();

    assert_eq!(solver.particles().len(), 100);
    for p in solver.particles() {
        assert!(p.position.x > 0.0 && p.position.x < 10.0);
        assert!(p.position.y > 0.0 && p.position.y < 10.0);
        assert_eq!(p.velocity, Vec2::ZERO);
    }
}

#[test]
fn hundred_steps_stay_bounded_without_gravity() {
    let config = SolverConfig {
        grid_width: 20,
        grid_height: 20,
        cell_size: 0.1,
        particle_count: 100,
        area_width: 2.0,
        area_height: 2.0,
        gravity: Vec2::ZERO,
        obstacle_center: Vec2::new(1.0, 1.0),
        obstacle_radius: 0.2,
        ..SolverConfig::default()
    };
    let mut solver = FlipFluidSolver::new(config).unwrap();

    for _ in 0..100 {
        solver.step(DT);
    }

    let energy = solver.particles.kinetic_energy();
    assert!(energy.is_finite(), "kinetic energy went non-finite");
    assert!(energy < 1e3, "kinetic energy blew up: {}", energy);

    let world = 20.0 * 0.1;
    for p in solver.particles() {
        assert!(p.position.is_finite() && p.velocity.is_finite());
        assert!(p.position.x >= 0.0 && p.position.x <= world);
        assert!(p.position.y >= 0.0 && p.position.y <= world);
    }
}

#[test]
fn hundred_steps_stay_bounded_under_gravity() {
    let config = SolverConfig {
        grid_width: 20,
        grid_height: 20,
        cell_size: 0.1,
        particle_count: 100,
        area_width: 2.0,
        area_height: 2.0,
        gravity: Vec2::new(0.0, -9.81),
        obstacle_center: Vec2::new(1.0, 1.0),
        obstacle_radius: 0.2,
        ..SolverConfig::default()
    };
    let mut solver = FlipFluidSolver::new(config).unwrap();

    for _ in 0..100 {
        solver.step(DT);
    }

    let energy = solver.particles.kinetic_energy();
    assert!(energy.is_finite());
    assert!(energy < 1e6, "kinetic energy blew up: {}", energy);
    for p in solver.particles() {
        assert!(p.position.is_finite() && p.velocity.is_finite());
    }
}

#[test]
fn particle_count_never_changes() {
    let config = SolverConfig {
        grid_width: 32,
        grid_height: 32,
        cell_size: 0.25,
        particle_count: 256,
        area_width: 4.0,
        area_height: 4.0,
        obstacle_center: Vec2::new(4.0, 4.0),
        obstacle_radius: 0.5,
        ..SolverConfig::default()
    };
    let mut solver = FlipFluidSolver::new(config).unwrap();
    let seeded = solver.particles().len();

    for _ in 0..50 {
        solver.step(DT);
        assert_eq!(solver.particles().len(), seeded);
    }
}

#[test]
fn pressure_boundary_stays_zero_across_steps() {
    let config = SolverConfig {
        grid_width: 24,
        grid_height: 24,
        cell_size: 0.1,
        particle_count: 100,
        area_width: 2.4,
        area_height: 2.4,
        obstacle_center: Vec2::new(1.2, 1.2),
        obstacle_radius: 0.3,
        ..SolverConfig::default()
    };
    let mut solver = FlipFluidSolver::new(config).unwrap();

    for _ in 0..20 {
        solver.step(DT);
    }

    let grid = &solver.grid;
    for i in 0..grid.width {
        assert_eq!(grid.pressure[grid.cell_index(i, 0)], 0.0);
        assert_eq!(grid.pressure[grid.cell_index(i, grid.height - 1)], 0.0);
    }
    for j in 0..grid.height {
        assert_eq!(grid.pressure[grid.cell_index(0, j)], 0.0);
        assert_eq!(grid.pressure[grid.cell_index(grid.width - 1, j)], 0.0);
    }
}
