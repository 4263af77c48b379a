//! Grid projection: body forces, velocity self-advection, pressure
//! relaxation, and pressure-gradient subtraction.
//!
//! All sub-stages update interior cells only (1..width-1, 1..height-1);
//! boundary rows and columns are zeroed by the advection sweep each step and
//! boundary pressure stays pinned at zero.

use glam::Vec2;

use crate::grid::Grid;

/// Add the body force to every interior velocity component (explicit Euler).
pub fn apply_gravity(grid: &mut Grid, gravity: Vec2, dt: f32) {
    for j in 1..grid.height - 1 {
        for i in 1..grid.width - 1 {
            let idx = grid.cell_index(i, j);
            grid.velocity_x[idx] += gravity.x * dt;
            grid.velocity_y[idx] += gravity.y * dt;
        }
    }
}

/// Semi-Lagrangian self-advection of the grid velocities.
///
/// Each axis is traced independently: the x-field backtraces along the
/// x-velocity only and the y-field along the y-velocity only, then samples
/// the pre-advection field at the traced point (clamped at the grid edges).
/// The sweep writes into zeroed scratch, so boundary cells come out zero.
pub fn advect_velocities(grid: &mut Grid, dt: f32) {
    grid.velocity_x_next.fill(0.0);
    grid.velocity_y_next.fill(0.0);

    for j in 1..grid.height - 1 {
        for i in 1..grid.width - 1 {
            let idx = grid.cell_index(i, j);
            let node = grid.node_position(i, j);

            let trace_x = node - Vec2::new(grid.velocity_x[idx] * dt, 0.0);
            let trace_y = node - Vec2::new(0.0, grid.velocity_y[idx] * dt);

            let advected_x = grid.sample_x(trace_x);
            let advected_y = grid.sample_y(trace_y);
            grid.velocity_x_next[idx] = advected_x;
            grid.velocity_y_next[idx] = advected_y;
        }
    }

    std::mem::swap(&mut grid.velocity_x, &mut grid.velocity_x_next);
    std::mem::swap(&mut grid.velocity_y, &mut grid.velocity_y_next);
}

/// Relax the pressure Poisson equation for a fixed number of sweeps.
///
/// Jacobi iteration for lap(p) = div(v) / dt: each sweep writes the full
/// interior into a temporary buffer from the previous iterate, then copies
/// it back, so no sweep reads its own partial results. Divergence uses wide
/// central differences (1 / 2h); boundary pressure is never written.
pub fn solve_pressure(grid: &mut Grid, iterations: usize, dt: f32) {
    let alpha = grid.cell_size * grid.cell_size / dt;
    let inv_two_h = 1.0 / (2.0 * grid.cell_size);

    for _ in 0..iterations {
        for j in 1..grid.height - 1 {
            for i in 1..grid.width - 1 {
                let idx = grid.cell_index(i, j);
                let left = grid.cell_index(i - 1, j);
                let right = grid.cell_index(i + 1, j);
                let down = grid.cell_index(i, j - 1);
                let up = grid.cell_index(i, j + 1);

                let divergence = (grid.velocity_x[right] - grid.velocity_x[left]
                    + grid.velocity_y[up]
                    - grid.velocity_y[down])
                    * inv_two_h;

                let relaxed = (grid.pressure[left]
                    + grid.pressure[right]
                    + grid.pressure[down]
                    + grid.pressure[up]
                    - alpha * divergence)
                    * 0.25;
                grid.pressure_next[idx] = relaxed;
            }
        }

        for j in 1..grid.height - 1 {
            for i in 1..grid.width - 1 {
                let idx = grid.cell_index(i, j);
                let value = grid.pressure_next[idx];
                grid.pressure[idx] = value;
            }
        }
    }
}

/// Subtract the pressure gradient from the interior velocities.
///
/// Central differences (1 / 2h), scaled by dt, matching the divergence
/// stencil used by the relaxation.
pub fn apply_pressure_gradient(grid: &mut Grid, dt: f32) {
    let inv_two_h = 1.0 / (2.0 * grid.cell_size);

    for j in 1..grid.height - 1 {
        for i in 1..grid.width - 1 {
            let idx = grid.cell_index(i, j);
            let left = grid.cell_index(i - 1, j);
            let right = grid.cell_index(i + 1, j);
            let down = grid.cell_index(i, j - 1);
            let up = grid.cell_index(i, j + 1);

            let grad_x = (grid.pressure[right] - grid.pressure[left]) * inv_two_h;
            let grad_y = (grid.pressure[up] - grid.pressure[down]) * inv_two_h;

            grid.velocity_x[idx] -= grad_x * dt;
            grid.velocity_y[idx] -= grad_y * dt;
        }
    }
}
