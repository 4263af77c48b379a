//! Fixed-resolution grid for the pressure projection.
//!
//! Velocity components and pressure are collocated at cell nodes:
//! node (i, j) sits at world position (i, j) * cell_size. All fields are
//! flat arrays indexed through `cell_index`, sized width * height and
//! allocated once at construction.

use glam::Vec2;

/// Collocated velocity/pressure grid.
///
/// The `_next` arrays are double-buffer scratch for the advection and
/// pressure sweeps, kept here so no step allocates.
pub struct Grid {
    pub width: usize,
    pub height: usize,
    pub cell_size: f32,

    /// Horizontal velocity at cell nodes.
    pub velocity_x: Vec<f32>,
    /// Vertical velocity at cell nodes.
    pub velocity_y: Vec<f32>,
    /// Pressure at cell nodes. Boundary nodes are pinned at zero; interior
    /// values are warm-started across steps.
    pub pressure: Vec<f32>,

    /// Scratch buffer for the velocity advection sweep.
    pub velocity_x_next: Vec<f32>,
    /// Scratch buffer for the velocity advection sweep.
    pub velocity_y_next: Vec<f32>,
    /// Scratch buffer for the pressure relaxation sweep.
    pub pressure_next: Vec<f32>,
}

impl Grid {
    /// Allocate a zero-filled grid.
    pub fn new(width: usize, height: usize, cell_size: f32) -> Self {
        let cell_count = width * height;
        Self {
            width,
            height,
            cell_size,
            velocity_x: vec![0.0; cell_count],
            velocity_y: vec![0.0; cell_count],
            pressure: vec![0.0; cell_count],
            velocity_x_next: vec![0.0; cell_count],
            velocity_y_next: vec![0.0; cell_count],
            pressure_next: vec![0.0; cell_count],
        }
    }

    /// Flat index of cell (i, j).
    #[inline]
    pub fn cell_index(&self, i: usize, j: usize) -> usize {
        j * self.width + i
    }

    /// World position of node (i, j).
    #[inline]
    pub fn node_position(&self, i: usize, j: usize) -> Vec2 {
        Vec2::new(i as f32 * self.cell_size, j as f32 * self.cell_size)
    }

    /// Domain extent along x, in world units.
    #[inline]
    pub fn world_width(&self) -> f32 {
        self.width as f32 * self.cell_size
    }

    /// Domain extent along y, in world units.
    #[inline]
    pub fn world_height(&self) -> f32 {
        self.height as f32 * self.cell_size
    }

    /// Bilinearly sample the horizontal velocity field at a world position.
    pub fn sample_x(&self, pos: Vec2) -> f32 {
        self.sample(&self.velocity_x, pos)
    }

    /// Bilinearly sample the vertical velocity field at a world position.
    pub fn sample_y(&self, pos: Vec2) -> f32 {
        self.sample(&self.velocity_y, pos)
    }

    /// Bilinear interpolation over cell nodes.
    ///
    /// Indices are clamped to the grid, never signaled: particles and
    /// backtraced sample points can legitimately sit at (or past) the edges.
    fn sample(&self, field: &[f32], pos: Vec2) -> f32 {
        let gx = (pos.x / self.cell_size).floor() as i32;
        let gy = (pos.y / self.cell_size).floor() as i32;

        let i = gx.clamp(0, self.width as i32 - 1) as usize;
        let j = gy.clamp(0, self.height as i32 - 1) as usize;
        let i1 = (i + 1).min(self.width - 1);
        let j1 = (j + 1).min(self.height - 1);

        // Fractions are clamped too: points past the edge sample the edge
        // value instead of extrapolating.
        let fx = (pos.x / self.cell_size - i as f32).clamp(0.0, 1.0);
        let fy = (pos.y / self.cell_size - j as f32).clamp(0.0, 1.0);

        let v00 = field[self.cell_index(i, j)];
        let v10 = field[self.cell_index(i1, j)];
        let v01 = field[self.cell_index(i, j1)];
        let v11 = field[self.cell_index(i1, j1)];

        let bottom = v00 * (1.0 - fx) + v10 * fx;
        let top = v01 * (1.0 - fx) + v11 * fx;
        bottom * (1.0 - fy) + top * fy
    }

    /// Mean absolute central-difference divergence over interior cells.
    pub fn mean_absolute_divergence(&self) -> f32 {
        if self.width < 3 || self.height < 3 {
            return 0.0;
        }

        let inv_two_h = 1.0 / (2.0 * self.cell_size);
        let mut total = 0.0f32;

        for j in 1..self.height - 1 {
            for i in 1..self.width - 1 {
                let div = (self.velocity_x[self.cell_index(i + 1, j)]
                    - self.velocity_x[self.cell_index(i - 1, j)]
                    + self.velocity_y[self.cell_index(i, j + 1)]
                    - self.velocity_y[self.cell_index(i, j - 1)])
                    * inv_two_h;
                total += div.abs();
            }
        }

        total / ((self.width - 2) * (self.height - 2)) as f32
    }

    /// Largest velocity magnitude over all cells.
    pub fn max_speed(&self) -> f32 {
        self.velocity_x
            .iter()
            .zip(&self.velocity_y)
            .map(|(&vx, &vy)| Vec2::new(vx, vy).length())
            .fold(0.0f32, f32::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_is_zero_filled() {
        let grid = Grid::new(16, 12, 0.5);
        assert_eq!(grid.velocity_x.len(), 16 * 12);
        assert_eq!(grid.velocity_y.len(), 16 * 12);
        assert_eq!(grid.pressure.len(), 16 * 12);
        for idx in 0..16 * 12 {
            assert_eq!(grid.velocity_x[idx], 0.0);
            assert_eq!(grid.velocity_y[idx], 0.0);
            assert_eq!(grid.pressure[idx], 0.0);
        }
    }

    #[test]
    fn sample_at_node_returns_node_value() {
        let mut grid = Grid::new(4, 4, 1.0);
        let idx = grid.cell_index(2, 1);
        grid.velocity_x[idx] = 3.0;
        assert!((grid.sample_x(Vec2::new(2.0, 1.0)) - 3.0).abs() < 1e-6);
    }

    #[test]
    fn sample_midway_averages_neighbors() {
        let mut grid = Grid::new(4, 4, 1.0);
        let a = grid.cell_index(1, 1);
        let b = grid.cell_index(2, 1);
        grid.velocity_x[a] = 2.0;
        grid.velocity_x[b] = 4.0;
        assert!((grid.sample_x(Vec2::new(1.5, 1.0)) - 3.0).abs() < 1e-6);
    }

    #[test]
    fn sample_clamps_outside_domain() {
        let mut grid = Grid::new(4, 4, 1.0);
        let idx = grid.cell_index(0, 0);
        grid.velocity_y[idx] = 7.0;
        // Far below/left of the grid resolves to the corner node.
        assert!((grid.sample_y(Vec2::new(-10.0, -10.0)) - 7.0).abs() < 1e-6);
    }

    #[test]
    fn divergence_of_zero_field_is_zero() {
        let grid = Grid::new(8, 8, 0.5);
        assert_eq!(grid.mean_absolute_divergence(), 0.0);
    }
}
