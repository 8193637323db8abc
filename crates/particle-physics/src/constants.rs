//! Tuning constants for the particle backdrop
//!
//! Distances are in canvas pixels. Velocities are in pixels per reference
//! frame, where one reference frame is 1/60 s.

/// Number of particles spawned when the field mounts
pub const PARTICLE_COUNT: usize = 60;

/// Fixed canvas height; only the width follows the container
pub const FIELD_HEIGHT: f32 = 600.0;

/// Spawn velocity components are drawn from `[-MAX_SPAWN_SPEED, MAX_SPAWN_SPEED)`
pub const MAX_SPAWN_SPEED: f32 = 0.5;

/// Smallest particle radius
pub const MIN_RADIUS: f32 = 1.0;

/// Largest particle radius (exclusive)
pub const MAX_RADIUS: f32 = 3.0;

/// Pointer influence radius
pub const REPEL_RADIUS: f32 = 200.0;

/// Velocity added per frame at zero distance from the pointer
pub const REPEL_STRENGTH: f32 = 0.5;

/// Speed above which drag kicks in
pub const CRUISE_SPEED: f32 = 0.75;

/// Per-frame velocity multiplier while faster than cruise speed
pub const DRAG: f32 = 0.96;

/// Maximum distance at which two particles are linked
pub const CONNECTION_DISTANCE: f32 = 150.0;

/// Reference frame rate the velocities are tuned for
pub const REFERENCE_FPS: f32 = 60.0;
