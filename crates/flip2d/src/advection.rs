//! Particle advection and boundary/obstacle handling.
//!
//! After advection two passes run in order every step: a reflective mirror
//! at the domain edges, then a hard clamp plus the circular obstacle
//! response. The clamp re-checks the edges after the mirror; both passes
//! negate the offending velocity component, and the order matters at exact
//! boundary values.

use glam::Vec2;

use crate::particle::Particles;

/// Advect every particle with explicit Euler: position += velocity * dt.
pub fn advect_particles(particles: &mut Particles, dt: f32) {
    for particle in particles.iter_mut() {
        particle.position += particle.velocity * dt;
    }
}

/// Mirror particles that crossed a domain edge back inside and negate the
/// crossing velocity component.
pub fn reflect_at_boundaries(particles: &mut Particles, world_width: f32, world_height: f32) {
    for particle in particles.iter_mut() {
        if particle.position.x < 0.0 {
            particle.position.x = -particle.position.x;
            particle.velocity.x = -particle.velocity.x;
        } else if particle.position.x > world_width {
            particle.position.x = 2.0 * world_width - particle.position.x;
            particle.velocity.x = -particle.velocity.x;
        }

        if particle.position.y < 0.0 {
            particle.position.y = -particle.position.y;
            particle.velocity.y = -particle.velocity.y;
        } else if particle.position.y > world_height {
            particle.position.y = 2.0 * world_height - particle.position.y;
            particle.velocity.y = -particle.velocity.y;
        }
    }
}

/// Hard-clamp any particle still out of range to the exact boundary, then
/// resolve collisions against the circular obstacle.
///
/// Particles inside the obstacle are projected radially to its surface and
/// their velocity is reflected about the surface normal.
pub fn resolve_collisions(
    particles: &mut Particles,
    world_width: f32,
    world_height: f32,
    obstacle_center: Vec2,
    obstacle_radius: f32,
) {
    for particle in particles.iter_mut() {
        if particle.position.x < 0.0 {
            particle.position.x = 0.0;
            particle.velocity.x = -particle.velocity.x;
        } else if particle.position.x > world_width {
            particle.position.x = world_width;
            particle.velocity.x = -particle.velocity.x;
        }

        if particle.position.y < 0.0 {
            particle.position.y = 0.0;
            particle.velocity.y = -particle.velocity.y;
        } else if particle.position.y > world_height {
            particle.position.y = world_height;
            particle.velocity.y = -particle.velocity.y;
        }

        let offset = particle.position - obstacle_center;
        let distance = offset.length();
        if distance < obstacle_radius {
            let normal = offset.normalize_or_zero();
            particle.position = obstacle_center + normal * obstacle_radius;
            particle.velocity -= 2.0 * particle.velocity.dot(normal) * normal;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::particle::Particle;

    fn single(position: Vec2, velocity: Vec2) -> Particles {
        let mut particles = Particles::new();
        particles.list.push(Particle::new(position, velocity));
        particles
    }

    #[test]
    fn advection_moves_by_velocity_times_dt() {
        let mut particles = single(Vec2::new(1.0, 1.0), Vec2::new(2.0, -4.0));
        advect_particles(&mut particles, 0.5);
        let p = &particles.list[0];
        assert!((p.position.x - 2.0).abs() < 1e-6);
        assert!((p.position.y + 1.0).abs() < 1e-6);
    }

    #[test]
    fn reflection_mirrors_position_and_velocity() {
        let mut particles = single(Vec2::new(-0.5, 3.0), Vec2::new(-2.0, 0.0));
        reflect_at_boundaries(&mut particles, 10.0, 10.0);
        let p = &particles.list[0];
        assert_eq!(p.position.x, 0.5);
        assert_eq!(p.velocity.x, 2.0);
    }

    #[test]
    fn reflection_mirrors_upper_edge() {
        let mut particles = single(Vec2::new(3.0, 10.5), Vec2::new(0.0, 3.0));
        reflect_at_boundaries(&mut particles, 10.0, 10.0);
        let p = &particles.list[0];
        assert_eq!(p.position.y, 9.5);
        assert_eq!(p.velocity.y, -3.0);
    }

    #[test]
    fn clamp_pins_far_out_particles_to_boundary() {
        let mut particles = single(Vec2::new(14.0, -2.0), Vec2::new(5.0, -5.0));
        resolve_collisions(&mut particles, 10.0, 10.0, Vec2::new(5.0, 5.0), 1.0);
        let p = &particles.list[0];
        assert_eq!(p.position.x, 10.0);
        assert_eq!(p.position.y, 0.0);
    }

    #[test]
    fn obstacle_projects_to_surface_and_reflects() {
        let center = Vec2::new(5.0, 5.0);
        let radius = 2.0;
        // Half a radius away, moving straight at the center.
        let mut particles = single(Vec2::new(4.0, 5.0), Vec2::new(3.0, 0.0));
        resolve_collisions(&mut particles, 10.0, 10.0, center, radius);

        let p = &particles.list[0];
        let distance = (p.position - center).length();
        assert!((distance - radius).abs() < 1e-5);

        let normal = (p.position - center).normalize();
        assert!(
            p.velocity.dot(normal) > 0.0,
            "velocity should point away from the obstacle"
        );
    }
}
