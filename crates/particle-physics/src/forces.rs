//! Pointer interaction, drag and link strength
//!
//! All functions are pure so the simulation and its tests can share them.

use glam::Vec2;

/// Velocity change pushing a particle away from the pointer.
///
/// Falls off linearly from `strength` at the pointer to zero at `radius`.
/// A particle sitting exactly on the pointer has no defined direction and
/// receives no push.
pub fn pointer_repulsion(position: Vec2, pointer: Vec2, radius: f32, strength: f32) -> Vec2 {
    let away = position - pointer;
    let distance = away.length();

    if distance >= radius || distance <= f32::EPSILON {
        return Vec2::ZERO;
    }

    let falloff = (radius - distance) / radius;
    away / distance * falloff * strength
}

/// Bleed off speed gained from the pointer until the particle is back to cruising.
pub fn apply_drag(velocity: Vec2, cruise_speed: f32, drag: f32, dt: f32) -> Vec2 {
    if velocity.length() <= cruise_speed {
        return velocity;
    }
    velocity * drag.powf(dt)
}

/// Opacity of the link between two particles `distance` apart.
///
/// 1.0 when touching, linearly fading to exactly 0.0 at `threshold` and beyond.
pub fn connection_opacity(distance: f32, threshold: f32) -> f32 {
    if threshold <= 0.0 || distance >= threshold {
        return 0.0;
    }
    (1.0 - distance / threshold).clamp(0.0, 1.0)
}
