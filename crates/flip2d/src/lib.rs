//! 2D PIC/FLIP (Particle-In-Cell / Fluid-Implicit-Particle) fluid solver.
//!
//! Hybrid particle/grid simulation on a fixed-resolution grid:
//! 1. Splat particle velocities onto the grid (P2G)
//! 2. Apply gravity and self-advect the grid velocities
//! 3. Relax the pressure Poisson equation and subtract the gradient
//! 4. Gather corrected velocities back onto particles (G2P, PIC/FLIP blend)
//! 5. Advect particles and resolve boundary/obstacle collisions
//!
//! The solver is framework-agnostic and fully single-threaded: the caller
//! supplies `dt` for each step and reads particle state back for rendering.
//!
//! # Example
//!
//! ```
//! use flip2d::{FlipFluidSolver, SolverConfig};
//!
//! let config = SolverConfig {
//!     grid_width: 20,
//!     grid_height: 20,
//!     cell_size: 0.1,
//!     particle_count: 100,
//!     area_width: 1.0,
//!     area_height: 1.0,
//!     ..SolverConfig::default()
//! };
//!
//! let mut solver = FlipFluidSolver::new(config).unwrap();
//! for _ in 0..10 {
//!     solver.step(1.0 / 60.0);
//! }
//! assert_eq!(solver.particles().len(), 100);
//! ```

pub mod advection;
pub mod config;
pub mod grid;
pub mod kernels;
pub mod particle;
pub mod projection;
pub mod solver;
pub mod transfer;

pub use config::{SolverConfig, SolverError};
pub use glam::Vec2;
pub use grid::Grid;
pub use particle::{Particle, Particles};
pub use solver::FlipFluidSolver;
pub use transfer::TransferBuffers;
