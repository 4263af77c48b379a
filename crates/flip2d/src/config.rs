//! Solver configuration and construction-time validation.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when constructing a solver.
#[derive(Debug, Error)]
pub enum SolverError {
    /// A configuration value was outside its valid range.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

/// Full parameter set for a [`crate::FlipFluidSolver`].
///
/// All values are fixed for the solver's lifetime; `dt` is the only per-step
/// input and is passed to `step` by the caller.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Grid cells along x.
    pub grid_width: usize,
    /// Grid cells along y.
    pub grid_height: usize,
    /// World units per cell. Grid node (i, j) sits at (i, j) * cell_size.
    pub cell_size: f32,
    /// Target number of seeded particles (the lattice may truncate slightly).
    pub particle_count: usize,
    /// Width of the seeded particle block, in world units.
    pub area_width: f32,
    /// Height of the seeded particle block, in world units.
    pub area_height: f32,
    /// Body force applied to interior grid velocities each step.
    pub gravity: Vec2,
    /// PIC fraction of the grid-to-particle blend, in [0, 1].
    /// Small values keep more particle velocity history (FLIP).
    pub pic_ratio: f32,
    /// Fixed relaxation sweep count for the pressure solve.
    pub pressure_iterations: usize,
    /// Center of the circular obstacle, in world units.
    pub obstacle_center: Vec2,
    /// Radius of the circular obstacle, in world units.
    pub obstacle_radius: f32,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            grid_width: 100,
            grid_height: 100,
            cell_size: 0.1,
            particle_count: 1000,
            area_width: 10.0,
            area_height: 10.0,
            gravity: Vec2::new(0.0, -9.81),
            pic_ratio: 0.05,
            pressure_iterations: 20,
            obstacle_center: Vec2::new(5.0, 5.0),
            obstacle_radius: 1.0,
        }
    }
}

impl SolverConfig {
    /// Check every parameter range. Called by `FlipFluidSolver::new`.
    pub fn validate(&self) -> Result<(), SolverError> {
        if self.grid_width == 0 || self.grid_height == 0 {
            return Err(SolverError::InvalidConfiguration(format!(
                "grid dimensions must be positive, got {}x{}",
                self.grid_width, self.grid_height
            )));
        }
        if self.cell_size <= 0.0 {
            return Err(SolverError::InvalidConfiguration(format!(
                "cell_size must be positive, got {}",
                self.cell_size
            )));
        }
        if self.particle_count == 0 {
            return Err(SolverError::InvalidConfiguration(
                "particle_count must be positive".to_string(),
            ));
        }
        if self.area_width <= 0.0 || self.area_height <= 0.0 {
            return Err(SolverError::InvalidConfiguration(format!(
                "seed area must be positive, got {}x{}",
                self.area_width, self.area_height
            )));
        }
        if !(0.0..=1.0).contains(&self.pic_ratio) {
            return Err(SolverError::InvalidConfiguration(format!(
                "pic_ratio must be in [0, 1], got {}",
                self.pic_ratio
            )));
        }
        if self.pressure_iterations == 0 {
            return Err(SolverError::InvalidConfiguration(
                "pressure_iterations must be positive".to_string(),
            ));
        }
        if self.obstacle_radius <= 0.0 {
            return Err(SolverError::InvalidConfiguration(format!(
                "obstacle_radius must be positive, got {}",
                self.obstacle_radius
            )));
        }
        Ok(())
    }
}
