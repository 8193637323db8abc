//! # Particle Physics
//!
//! Kinematics for the backdrop particles: integration, elastic walls,
//! pointer repulsion and the distance-based link strength.

pub mod constants;
pub mod forces;
pub mod particle;

pub use constants::*;
pub use forces::*;
pub use particle::*;
