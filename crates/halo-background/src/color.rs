//! Color utility functions for background particles.

use halo_core::Tint;

/// Darkest gray a particle is drawn with.
const GRAY_FLOOR: f32 = 80.0;
/// Gray added at full brightness.
const GRAY_RANGE: f32 = 100.0;

/// Map a particle brightness (0.0-1.0) to a neutral gray.
pub fn particle_tint(brightness: f32) -> Tint {
    let brightness = if brightness.is_nan() {
        0.0
    } else {
        brightness.clamp(0.0, 1.0)
    };
    Tint::gray((GRAY_FLOOR + brightness * GRAY_RANGE) as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_particle_tint_bounds() {
        assert_eq!(particle_tint(0.0), Tint::gray(80));
        assert_eq!(particle_tint(1.0), Tint::gray(180));
        assert_eq!(particle_tint(0.5), Tint::gray(130));
    }

    #[test]
    fn test_particle_tint_clamps() {
        assert_eq!(particle_tint(-4.0), Tint::gray(80));
        assert_eq!(particle_tint(7.0), Tint::gray(180));
        assert_eq!(particle_tint(f32::NAN), Tint::gray(80));
    }
}
