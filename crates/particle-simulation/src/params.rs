//! Field parameters for runtime tuning

use particle_physics::constants::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldParams {
    pub particle_count: usize,
    pub height: f32,

    // Spawning
    pub max_spawn_speed: f32,
    pub min_radius: f32,
    pub max_radius: f32,

    // Pointer
    pub repel_radius: f32,
    pub repel_strength: f32,

    // Integration
    pub cruise_speed: f32,
    pub drag: f32,

    // Links
    pub connection_distance: f32,
}

impl Default for FieldParams {
    fn default() -> Self {
        Self {
            particle_count: PARTICLE_COUNT,
            height: FIELD_HEIGHT,
            max_spawn_speed: MAX_SPAWN_SPEED,
            min_radius: MIN_RADIUS,
            max_radius: MAX_RADIUS,
            repel_radius: REPEL_RADIUS,
            repel_strength: REPEL_STRENGTH,
            cruise_speed: CRUISE_SPEED,
            drag: DRAG,
            connection_distance: CONNECTION_DISTANCE,
        }
    }
}
