//! Particle-grid transfer.
//!
//! P2G: scatter particle velocities onto nearby grid nodes with the
//! quadratic falloff kernel, tracking per-node weight sums, then normalize.
//! G2P: gather the projected grid velocity back onto each particle with a
//! PIC/FLIP blend.

use glam::Vec2;

use crate::grid::Grid;
use crate::kernels::quadratic_falloff;
use crate::particle::Particles;

/// Per-node accumulation buffers for P2G (allocated once, reused each step).
pub struct TransferBuffers {
    pub sum_x: Vec<f32>,
    pub weight_x: Vec<f32>,
    pub sum_y: Vec<f32>,
    pub weight_y: Vec<f32>,
}

impl TransferBuffers {
    /// Create buffers sized for the given grid.
    pub fn new(grid: &Grid) -> Self {
        let cell_count = grid.width * grid.height;
        Self {
            sum_x: vec![0.0; cell_count],
            weight_x: vec![0.0; cell_count],
            sum_y: vec![0.0; cell_count],
            weight_y: vec![0.0; cell_count],
        }
    }

    /// Clear all buffers to zero.
    pub fn clear(&mut self) {
        self.sum_x.fill(0.0);
        self.weight_x.fill(0.0);
        self.sum_y.fill(0.0);
        self.weight_y.fill(0.0);
    }
}

/// Transfer particle velocities to the grid (P2G).
///
/// Each particle scatters into the 4x4 node block at offsets {-1, 0, 1, 2}
/// around its base cell. Nodes are normalized by their accumulated weight
/// sum; untouched nodes come out zero. The kernel is non-negative, so no
/// node velocity can exceed the magnitude of the particles feeding it.
pub fn particles_to_grid(grid: &mut Grid, particles: &Particles, buffers: &mut TransferBuffers) {
    buffers.clear();

    let cell_size = grid.cell_size;

    for particle in particles.iter() {
        let base_i = (particle.position.x / cell_size).floor() as i32;
        let base_j = (particle.position.y / cell_size).floor() as i32;

        for dj in -1i32..=2 {
            for di in -1i32..=2 {
                let gi = base_i + di;
                let gj = base_j + dj;
                if gi < 0 || gj < 0 || gi >= grid.width as i32 || gj >= grid.height as i32 {
                    continue;
                }

                let node = grid.node_position(gi as usize, gj as usize);
                let w = quadratic_falloff(particle.position, node, cell_size);

                let idx = grid.cell_index(gi as usize, gj as usize);
                buffers.sum_x[idx] += particle.velocity.x * w;
                buffers.weight_x[idx] += w;
                buffers.sum_y[idx] += particle.velocity.y * w;
                buffers.weight_y[idx] += w;
            }
        }
    }

    // Normalize; nodes no particle touched stay zero.
    for idx in 0..grid.velocity_x.len() {
        grid.velocity_x[idx] = if buffers.weight_x[idx] > 0.0 {
            buffers.sum_x[idx] / buffers.weight_x[idx]
        } else {
            0.0
        };
        grid.velocity_y[idx] = if buffers.weight_y[idx] > 0.0 {
            buffers.sum_y[idx] / buffers.weight_y[idx]
        } else {
            0.0
        };
    }
}

/// Transfer grid velocities back to particles (G2P) with a PIC/FLIP blend.
///
/// Particles whose base cell falls outside [0, width-1) x [0, height-1)
/// keep their velocity this step.
pub fn grid_to_particles(grid: &Grid, particles: &mut Particles, pic_ratio: f32) {
    let cell_size = grid.cell_size;

    for particle in particles.iter_mut() {
        let base_i = (particle.position.x / cell_size).floor() as i32;
        let base_j = (particle.position.y / cell_size).floor() as i32;

        if base_i < 0
            || base_j < 0
            || base_i >= grid.width as i32 - 1
            || base_j >= grid.height as i32 - 1
        {
            continue;
        }

        let grid_velocity = Vec2::new(
            grid.sample_x(particle.position),
            grid.sample_y(particle.position),
        );

        // PIC takes the grid velocity outright; FLIP adds the grid delta to
        // the velocity the particle already carries.
        let flip_velocity = particle.velocity + (grid_velocity - particle.velocity);
        particle.velocity = pic_ratio * grid_velocity + (1.0 - pic_ratio) * flip_velocity;
    }
}
