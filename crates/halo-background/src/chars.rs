//! Character constants for background particles.

/// Glyphs a particle can be drawn with.
pub const PARTICLE_CHARS: &[char] = &['·', '•', '*', '✦', '✧'];
