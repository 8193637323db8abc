//! Particle type for the backdrop simulation

use glam::Vec2;

/// A drifting point on the canvas
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Position in canvas pixels
    pub position: Vec2,
    /// Velocity in pixels per reference frame
    pub velocity: Vec2,
    /// Draw radius, fixed at creation
    pub radius: f32,
}

impl Particle {
    pub fn new(position: Vec2, velocity: Vec2, radius: f32) -> Self {
        Self {
            position,
            velocity,
            radius,
        }
    }

    /// Advance position by `velocity * dt`
    pub fn integrate(&mut self, dt: f32) {
        self.position += self.velocity * dt;
    }

    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }

    pub fn distance_to(&self, other: &Particle) -> f32 {
        self.position.distance(other.position)
    }

    /// Elastic reflection against the `[0, bounds]` rectangle.
    ///
    /// A coordinate past an edge is clamped onto it and the matching velocity
    /// component is forced to point back inside. Returns true if any edge was hit.
    pub fn reflect(&mut self, bounds: Vec2) -> bool {
        let mut hit = false;

        if self.position.x < 0.0 {
            self.position.x = 0.0;
            self.velocity.x = self.velocity.x.abs();
            hit = true;
        } else if self.position.x > bounds.x {
            self.position.x = bounds.x;
            self.velocity.x = -self.velocity.x.abs();
            hit = true;
        }

        if self.position.y < 0.0 {
            self.position.y = 0.0;
            self.velocity.y = self.velocity.y.abs();
            hit = true;
        } else if self.position.y > bounds.y {
            self.position.y = bounds.y;
            self.velocity.y = -self.velocity.y.abs();
            hit = true;
        }

        hit
    }

    pub fn is_within(&self, bounds: Vec2) -> bool {
        (0.0..=bounds.x).contains(&self.position.x) && (0.0..=bounds.y).contains(&self.position.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integrate() {
        let mut p = Particle::new(Vec2::new(10.0, 10.0), Vec2::new(1.0, -2.0), 2.0);
        p.integrate(0.5);
        assert_eq!(p.position, Vec2::new(10.5, 9.0));
    }

    #[test]
    fn test_reflect_right_edge() {
        let bounds = Vec2::new(100.0, 50.0);
        let mut p = Particle::new(Vec2::new(100.4, 20.0), Vec2::new(0.4, 0.1), 1.0);
        assert!(p.reflect(bounds));
        assert!(p.velocity.x < 0.0);
        assert_eq!(p.velocity.y, 0.1);
        assert!(p.is_within(bounds));
    }

    #[test]
    fn test_reflect_top_edge_already_inbound() {
        // Velocity already points inward; it must stay inward
        let bounds = Vec2::new(100.0, 50.0);
        let mut p = Particle::new(Vec2::new(30.0, -1.0), Vec2::new(0.0, 0.3), 1.0);
        p.reflect(bounds);
        assert_eq!(p.velocity.y, 0.3);
        assert_eq!(p.position.y, 0.0);
    }

    #[test]
    fn test_reflect_inside_is_noop() {
        let bounds = Vec2::new(100.0, 50.0);
        let mut p = Particle::new(Vec2::new(50.0, 25.0), Vec2::new(-0.2, 0.2), 1.0);
        let before = p;
        assert!(!p.reflect(bounds));
        assert_eq!(p, before);
    }
}
