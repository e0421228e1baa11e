//! Background sparkles for the halo logo.
//!
//! A small, bounded set of particles appears at random cells, fades in,
//! lingers and fades out again. The random source is injected so that runs
//! can be reproduced from a seed.

mod chars;
mod color;
mod particles;

pub use chars::PARTICLE_CHARS;
pub use color::particle_tint;
pub use particles::{MAX_PARTICLES, Particle, ParticleSystem, clock_seed};
