//! Lighting for the logo: a point light orbiting a hemispherical bulge.

/// Angular speed of the light in radians per frame.
const LIGHT_SPEED: f64 = 0.12;
/// Horizontal and vertical radii of the light's orbit, in cells.
const ORBIT_X: f64 = 25.0;
const ORBIT_Y: f64 = 15.0;
/// Height of the bulge at its apex.
const BULGE_HEIGHT: f64 = 8.0;

const AMBIENT: f64 = 0.3;
const DIFFUSE: f64 = 0.7;
const SPECULAR: f64 = 0.4;
const SHININESS: i32 = 10;

const MIN_INTENSITY: f32 = 0.2;
const MAX_INTENSITY: f32 = 1.0;

/// Illumination of the mask cell at `(x, y)` on the given frame.
///
/// `bounds_width` and `bounds_height` are the mask dimensions; the bulge is
/// centered on them. The result is always within `0.2..=1.0`.
pub fn illuminate(x: f32, y: f32, frame: u64, bounds_width: f32, bounds_height: f32) -> f32 {
    let (x, y) = (x as f64, y as f64);
    let cx = bounds_width as f64 / 2.0;
    let cy = bounds_height as f64 / 2.0;

    let angle = frame as f64 * LIGHT_SPEED;
    let light_x = cx + angle.cos() * ORBIT_X;
    let light_y = cy + angle.sin() * ORBIT_Y;
    let light_z = 10.0 + (angle * 0.7).sin() * 5.0;

    let max_dist = (cx * cx + cy * cy).sqrt();
    let per_max = |v: f64| if max_dist > 0.0 { v / max_dist } else { 0.0 };

    let dist = ((x - cx).powi(2) + (y - cy).powi(2)).sqrt();
    let norm_dist = per_max(dist);
    let bulge = if norm_dist <= 1.0 {
        (1.0 - norm_dist * norm_dist).max(0.0).sqrt() * BULGE_HEIGHT
    } else {
        0.0
    };

    let normal = [per_max(x - cx), per_max(y - cy), bulge / BULGE_HEIGHT];

    let mut to_light = [light_x - x, light_y - y, light_z - bulge];
    let len = to_light.iter().map(|c| c * c).sum::<f64>().sqrt();
    if len > 0.0 {
        to_light.iter_mut().for_each(|c| *c /= len);
    }

    let dot: f64 = normal.iter().zip(&to_light).map(|(n, l)| n * l).sum();
    let lit = dot.max(0.0);
    let intensity = (AMBIENT + lit * DIFFUSE + lit.powi(SHININESS) * SPECULAR) as f32;

    if intensity.is_nan() {
        MIN_INTENSITY
    } else {
        intensity.clamp(MIN_INTENSITY, MAX_INTENSITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_in_range(v: f32) {
        assert!((MIN_INTENSITY..=MAX_INTENSITY).contains(&v), "{v} out of range");
    }

    #[test]
    fn test_intensity_in_range_over_mask() {
        for frame in [0, 1, 7, 52, 300, 10_000] {
            for y in 0..13 {
                for x in 0..26 {
                    assert_in_range(illuminate(x as f32, y as f32, frame, 26.0, 13.0));
                }
            }
        }
    }

    #[test]
    fn test_degenerate_bounds() {
        // Zero-sized bounds put the point on the center with max_dist == 0
        for frame in 0..100 {
            assert_in_range(illuminate(0.0, 0.0, frame, 0.0, 0.0));
        }
    }

    #[test]
    fn test_point_at_center() {
        for frame in 0..100 {
            assert_in_range(illuminate(13.0, 6.5, frame, 26.0, 13.0));
        }
    }

    #[test]
    fn test_far_outside_bounds() {
        assert_in_range(illuminate(1e6, -1e6, 3, 26.0, 13.0));
        assert_in_range(illuminate(-40.0, 90.0, u64::MAX, 26.0, 13.0));
    }

    #[test]
    fn test_light_moves_across_frames() {
        // A rim cell on the right is lit when the light is to the right (frame 0)
        // and dimmer half an orbit later
        let lit = illuminate(25.0, 6.5, 0, 26.0, 13.0);
        let half_orbit = (std::f64::consts::PI / LIGHT_SPEED).round() as u64;
        let dark = illuminate(25.0, 6.5, half_orbit, 26.0, 13.0);
        assert!(lit > dark, "{lit} <= {dark}");
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(
            illuminate(4.0, 3.0, 17, 26.0, 13.0),
            illuminate(4.0, 3.0, 17, 26.0, 13.0)
        );
    }
}
