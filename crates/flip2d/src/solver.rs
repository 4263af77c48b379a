//! The solver facade tying the per-stage passes together.

use crate::advection;
use crate::config::{SolverConfig, SolverError};
use crate::grid::Grid;
use crate::particle::{Particle, Particles};
use crate::projection;
use crate::transfer::{self, TransferBuffers};

/// 2D PIC/FLIP fluid solver.
///
/// Owns the grid, the particle set, and all per-step scratch buffers; memory
/// is allocated once at construction and reused for the solver's lifetime.
/// The caller drives the simulation by calling [`step`](Self::step) once per
/// time tick with the elapsed time, then reading
/// [`particles`](Self::particles) for rendering or inspection.
pub struct FlipFluidSolver {
    pub config: SolverConfig,
    pub grid: Grid,
    pub particles: Particles,
    transfer_buffers: TransferBuffers,
}

impl FlipFluidSolver {
    /// Validate the configuration, allocate the grid, and seed the particle
    /// lattice.
    pub fn new(config: SolverConfig) -> Result<Self, SolverError> {
        config.validate()?;

        let grid = Grid::new(config.grid_width, config.grid_height, config.cell_size);
        let particles =
            Particles::seeded_lattice(config.area_width, config.area_height, config.particle_count);
        let transfer_buffers = TransferBuffers::new(&grid);

        Ok(Self {
            config,
            grid,
            particles,
            transfer_buffers,
        })
    }

    /// Run one full simulation step:
    /// 1. Transfer particle velocities to the grid (P2G)
    /// 2. Apply gravity to interior grid velocities
    /// 3. Semi-Lagrangian self-advection of the grid velocities
    /// 4. Relax the pressure Poisson equation
    /// 5. Subtract the pressure gradient (approximate incompressibility)
    /// 6. Transfer grid velocities back to particles (G2P, PIC/FLIP blend)
    /// 7. Advect particles
    /// 8. Reflect particles at the domain edges
    /// 9. Hard clamp and resolve obstacle collisions
    ///
    /// Every pass is a synchronous sweep; the step completes fully before
    /// returning.
    pub fn step(&mut self, dt: f32) {
        transfer::particles_to_grid(&mut self.grid, &self.particles, &mut self.transfer_buffers);

        projection::apply_gravity(&mut self.grid, self.config.gravity, dt);
        projection::advect_velocities(&mut self.grid, dt);
        projection::solve_pressure(&mut self.grid, self.config.pressure_iterations, dt);
        projection::apply_pressure_gradient(&mut self.grid, dt);

        transfer::grid_to_particles(&self.grid, &mut self.particles, self.config.pic_ratio);

        advection::advect_particles(&mut self.particles, dt);

        let world_width = self.grid.world_width();
        let world_height = self.grid.world_height();
        advection::reflect_at_boundaries(&mut self.particles, world_width, world_height);
        advection::resolve_collisions(
            &mut self.particles,
            world_width,
            world_height,
            self.config.obstacle_center,
            self.config.obstacle_radius,
        );
    }

    /// Read-only snapshot of the particle state after the last step.
    pub fn particles(&self) -> &[Particle] {
        &self.particles.list
    }
}
