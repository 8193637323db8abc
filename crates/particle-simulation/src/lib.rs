//! # Particle Simulation
//!
//! Mountable particle field: spawning, per-frame stepping, pointer input and
//! connection enumeration for the animated backdrop.

pub mod params;
pub mod simulation;

pub use params::*;
pub use simulation::*;
