//! CPU particle field driving the animated backdrop
//!
//! The field owns its particles only while mounted. `unmount` drops them and
//! every later `step`, `pointer_moved` or `resize` call is ignored, so a host
//! that keeps delivering frames or input after teardown never touches
//! disposed state.

use crate::FieldParams;
use glam::Vec2;
use particle_physics::{apply_drag, connection_opacity, pointer_repulsion, Particle, REFERENCE_FPS};
use rand::Rng;

/// Largest step, in reference frames, a single update may take.
pub const MAX_FRAME_STEP: f32 = 3.0;

/// Convert wall-clock seconds into reference frames for [`ParticleField::step`]
pub fn frame_delta(seconds: f32) -> f32 {
    (seconds * REFERENCE_FPS).clamp(0.0, MAX_FRAME_STEP)
}

/// A link between two particles closer than the connection distance
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Connection {
    pub a: usize,
    pub b: usize,
    /// 1.0 when touching, approaching 0.0 at the connection distance
    pub opacity: f32,
}

pub struct ParticleField {
    params: FieldParams,
    particles: Vec<Particle>,
    bounds: Vec2,
    pointer: Option<Vec2>,
    mounted: bool,
}

impl ParticleField {
    pub fn new(params: FieldParams) -> Self {
        Self {
            params,
            particles: Vec::new(),
            bounds: Vec2::new(0.0, params.height),
            pointer: None,
            mounted: false,
        }
    }

    /// Size the canvas to `width` x fixed height and spawn a fresh particle set
    pub fn mount(&mut self, width: f32, rng: &mut impl Rng) {
        let width = width.max(0.0);
        self.bounds = Vec2::new(width, self.params.height);
        self.pointer = None;

        let p = &self.params;
        let speed = p.max_spawn_speed;
        self.particles = (0..p.particle_count)
            .map(|_| {
                let position = Vec2::new(
                    rng.random::<f32>() * width,
                    rng.random::<f32>() * p.height,
                );
                let velocity = Vec2::new(
                    rng.random_range(-speed..speed),
                    rng.random_range(-speed..speed),
                );
                let radius = rng.random_range(p.min_radius..p.max_radius);
                Particle::new(position, velocity, radius)
            })
            .collect();

        self.mounted = true;
        log::info!(
            "✓ Particle field mounted: {} particles in {:.0}x{:.0}",
            self.particles.len(),
            self.bounds.x,
            self.bounds.y
        );
    }

    /// Tear down: drop particles and pointer state, ignore further input
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        self.particles.clear();
        self.pointer = None;
        self.mounted = false;
        log::debug!("Particle field unmounted");
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Record the pointer position relative to the canvas origin
    pub fn pointer_moved(&mut self, position: Vec2) {
        if self.mounted {
            self.pointer = Some(position);
        }
    }

    /// Container resized: width follows, height stays, particles are left where they are
    pub fn resize(&mut self, width: f32) {
        if !self.mounted {
            return;
        }
        let width = width.max(0.0);
        if width != self.bounds.x {
            log::debug!("Particle field resized: {:.0} -> {:.0}", self.bounds.x, width);
            self.bounds.x = width;
        }
    }

    /// Advance the simulation by `dt` reference frames
    pub fn step(&mut self, dt: f32) {
        if !self.mounted {
            return;
        }
        let dt = dt.max(0.0);
        let p = self.params;

        for particle in &mut self.particles {
            particle.integrate(dt);

            if let Some(pointer) = self.pointer {
                particle.velocity +=
                    pointer_repulsion(particle.position, pointer, p.repel_radius, p.repel_strength)
                        * dt;
            }

            particle.velocity = apply_drag(particle.velocity, p.cruise_speed, p.drag, dt);
            particle.reflect(self.bounds);
        }
    }

    /// Every unordered pair closer than the connection distance
    pub fn connections(&self) -> impl Iterator<Item = Connection> + '_ {
        let threshold = self.params.connection_distance;
        self.particles.iter().enumerate().flat_map(move |(i, a)| {
            self.particles[i + 1..]
                .iter()
                .enumerate()
                .filter_map(move |(k, b)| {
                    let opacity = connection_opacity(a.distance_to(b), threshold);
                    (opacity > 0.0).then_some(Connection {
                        a: i,
                        b: i + 1 + k,
                        opacity,
                    })
                })
        })
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    pub fn bounds(&self) -> Vec2 {
        self.bounds
    }

    pub fn pointer(&self) -> Option<Vec2> {
        self.pointer
    }

    pub fn params(&self) -> &FieldParams {
        &self.params
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn mounted_field(width: f32) -> ParticleField {
        let mut field = ParticleField::new(FieldParams::default());
        field.mount(width, &mut StdRng::seed_from_u64(7));
        field
    }

    /// Field with a single hand-placed particle
    fn single(width: f32, particle: Particle) -> ParticleField {
        let mut field = mounted_field(width);
        field.particles = vec![particle];
        field
    }

    #[test]
    fn test_mount_spawns_within_bounds() {
        let field = mounted_field(800.0);
        let p = FieldParams::default();

        assert!(field.is_mounted());
        assert_eq!(field.particle_count(), p.particle_count);
        assert_eq!(field.bounds(), Vec2::new(800.0, p.height));

        for particle in field.particles() {
            assert!(particle.is_within(field.bounds()));
            assert!(particle.radius >= p.min_radius && particle.radius < p.max_radius);
            assert!(particle.velocity.x.abs() <= p.max_spawn_speed);
            assert!(particle.velocity.y.abs() <= p.max_spawn_speed);
        }
    }

    #[test]
    fn test_reflection_at_right_edge() {
        let mut field = single(
            400.0,
            Particle::new(Vec2::new(400.0, 300.0), Vec2::new(0.4, 0.0), 2.0),
        );

        field.step(1.0);

        let particle = field.particles()[0];
        assert!(particle.velocity.x < 0.0);
        assert!(particle.is_within(field.bounds()));
    }

    #[test]
    fn test_never_outside_after_step() {
        let mut field = mounted_field(640.0);
        field.pointer_moved(Vec2::new(320.0, 300.0));

        for _ in 0..2000 {
            field.step(MAX_FRAME_STEP);
            for particle in field.particles() {
                assert!(particle.is_within(field.bounds()));
            }
        }
    }

    #[test]
    fn test_pointer_repels() {
        let mut field = single(
            800.0,
            Particle::new(Vec2::new(410.0, 300.0), Vec2::ZERO, 2.0),
        );
        field.pointer_moved(Vec2::new(400.0, 300.0));

        field.step(1.0);

        let particle = field.particles()[0];
        assert!(particle.velocity.x > 0.0, "particle should move away from the pointer");
        assert_eq!(particle.velocity.y, 0.0);
    }

    #[test]
    fn test_pointer_reaches_full_radius() {
        let mut field = single(
            800.0,
            Particle::new(Vec2::new(550.0, 300.0), Vec2::ZERO, 2.0),
        );
        field.pointer_moved(Vec2::new(400.0, 300.0));

        field.step(1.0);

        assert!(field.particles()[0].velocity.x > 0.0);
    }

    #[test]
    fn test_pointer_out_of_range_has_no_effect() {
        let velocity = Vec2::new(0.2, -0.1);
        let mut field = single(800.0, Particle::new(Vec2::new(100.0, 100.0), velocity, 2.0));
        field.pointer_moved(Vec2::new(700.0, 500.0));

        field.step(1.0);

        assert_eq!(field.particles()[0].velocity, velocity);
    }

    #[test]
    fn test_drag_settles_repelled_particles() {
        let mut field = single(
            800.0,
            Particle::new(Vec2::new(400.0, 300.0), Vec2::new(5.0, 0.0), 2.0),
        );

        for _ in 0..300 {
            field.step(1.0);
        }

        assert!(field.particles()[0].speed() <= FieldParams::default().cruise_speed + 1e-3);
    }

    #[test]
    fn test_resize_keeps_positions() {
        let mut field = mounted_field(800.0);
        let before: Vec<Vec2> = field.particles().iter().map(|p| p.position).collect();

        field.resize(200.0);

        assert_eq!(field.bounds().x, 200.0);
        assert_eq!(field.bounds().y, FieldParams::default().height);
        let after: Vec<Vec2> = field.particles().iter().map(|p| p.position).collect();
        assert_eq!(before, after);

        // The next frame pulls stragglers back in
        field.step(1.0);
        for particle in field.particles() {
            assert!(particle.is_within(field.bounds()));
        }
    }

    #[test]
    fn test_unmounted_field_ignores_everything() {
        let mut field = mounted_field(800.0);
        field.unmount();

        field.pointer_moved(Vec2::new(10.0, 10.0));
        field.resize(100.0);
        field.step(1.0);

        assert!(!field.is_mounted());
        assert_eq!(field.particle_count(), 0);
        assert_eq!(field.pointer(), None);
        assert_eq!(field.bounds().x, 800.0);
    }

    #[test]
    fn test_connections_respect_threshold() {
        let mut field = mounted_field(800.0);
        field.particles = vec![
            Particle::new(Vec2::new(0.0, 0.0), Vec2::ZERO, 1.0),
            Particle::new(Vec2::new(30.0, 0.0), Vec2::ZERO, 1.0),
            Particle::new(Vec2::new(140.0, 0.0), Vec2::ZERO, 1.0),
            Particle::new(Vec2::new(500.0, 0.0), Vec2::ZERO, 1.0),
        ];

        let links: Vec<Connection> = field.connections().collect();

        // 0-1 (30), 0-2 (140) and 1-2 (110) link; everything to 3 is too far
        assert_eq!(links.len(), 3);
        assert!(links.iter().all(|c| c.a < c.b && c.b != 3));

        let near = links.iter().find(|c| (c.a, c.b) == (0, 1)).unwrap();
        let far = links.iter().find(|c| (c.a, c.b) == (0, 2)).unwrap();
        assert!(near.opacity > far.opacity);
    }

    #[test]
    fn test_frame_delta_clamps() {
        assert!((frame_delta(1.0 / 60.0) - 1.0).abs() < 1e-5);
        assert_eq!(frame_delta(-1.0), 0.0);
        assert_eq!(frame_delta(5.0), MAX_FRAME_STEP);
    }
}
