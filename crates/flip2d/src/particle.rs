//! Fluid particles for the PIC/FLIP simulation.
//!
//! Each particle carries a continuous position and velocity. The set is
//! seeded once on a regular lattice and its count never changes; every step
//! mutates the particles in place (transfer-back, advection, collisions).

use glam::Vec2;

/// A single fluid particle.
#[derive(Clone, Copy, Debug)]
pub struct Particle {
    /// World position.
    pub position: Vec2,
    /// Current velocity.
    pub velocity: Vec2,
}

impl Particle {
    pub fn new(position: Vec2, velocity: Vec2) -> Self {
        Self { position, velocity }
    }
}

/// Collection of particles, owned exclusively by the solver.
pub struct Particles {
    pub list: Vec<Particle>,
}

impl Particles {
    /// Create an empty particle collection.
    pub fn new() -> Self {
        Self { list: Vec::new() }
    }

    /// Seed particles on a regular lattice covering `area_width` x
    /// `area_height`, aiming for `count` particles.
    ///
    /// Lattice spacing is `sqrt(area / count)` and particles sit at
    /// `((k + 0.5) * spacing, (m + 0.5) * spacing)` for every k, m keeping
    /// the position strictly inside the area. Velocities start at zero.
    /// Seeding is deterministic: the same inputs produce the same lattice.
    pub fn seeded_lattice(area_width: f32, area_height: f32, count: usize) -> Self {
        let spacing = (area_width * area_height / count as f32).sqrt();
        let mut list = Vec::with_capacity(count);

        let mut k = 0;
        loop {
            let x = (k as f32 + 0.5) * spacing;
            if x >= area_width {
                break;
            }
            let mut m = 0;
            loop {
                let y = (m as f32 + 0.5) * spacing;
                if y >= area_height {
                    break;
                }
                list.push(Particle::new(Vec2::new(x, y), Vec2::ZERO));
                m += 1;
            }
            k += 1;
        }

        Self { list }
    }

    /// Number of particles.
    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Iterate over particles.
    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.list.iter()
    }

    /// Iterate mutably over particles.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Particle> {
        self.list.iter_mut()
    }

    /// Total kinetic energy, 0.5 * sum(|v|^2) with unit particle mass.
    pub fn kinetic_energy(&self) -> f32 {
        0.5 * self
            .list
            .iter()
            .map(|p| p.velocity.length_squared())
            .sum::<f32>()
    }
}

impl Default for Particles {
    fn default() -> Self {
        Self::new()
    }
}
