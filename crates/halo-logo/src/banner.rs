//! Banner text under the logo, revealed by a typing effect with a light
//! wave running across it.

use halo_core::{BASE_TINT, HIDDEN_TINT, Tint};

/// The boxed title printed beneath the ring.
pub const BANNER: [&str; 3] = [
    "╔════════════╗",
    "║   GENSYN   ║",
    "╚════════════╝",
];

/// Per-line frame offsets, so the wave is slightly out of phase line to line.
pub const BANNER_FRAME_OFFSETS: [u64; 3] = [0, 5, 10];

/// Width of the banner in characters.
pub fn banner_width() -> usize {
    BANNER
        .iter()
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0)
}

/// Visibility and brightness of one banner character.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextShade {
    pub visible: bool,
    /// Brightness in `0.7..=1.0` when visible, 0 otherwise.
    pub intensity: f32,
}

impl TextShade {
    const HIDDEN: Self = Self {
        visible: false,
        intensity: 0.0,
    };

    /// Color of the character: the dimmed base pink, or the near-black
    /// placeholder while it has not been typed yet.
    pub fn tint(self) -> Tint {
        if self.visible {
            BASE_TINT.scaled(self.intensity)
        } else {
            HIDDEN_TINT
        }
    }
}

/// Cyclic typing reveal layered with a travelling brightness wave.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypingWave {
    /// Frames spent on each character.
    typing_speed: u64,
    /// Frames the fully typed text stays up before the cycle restarts.
    pause: u64,
}

impl Default for TypingWave {
    fn default() -> Self {
        Self::new(2, 30)
    }
}

impl TypingWave {
    pub const fn new(typing_speed: u64, pause: u64) -> Self {
        let typing_speed = if typing_speed == 0 { 1 } else { typing_speed };
        Self {
            typing_speed,
            pause,
        }
    }

    /// Length in frames of one type-then-pause cycle.
    pub fn cycle_length(&self, total_chars: usize) -> u64 {
        total_chars as u64 * self.typing_speed + self.pause
    }

    /// Number of characters revealed on `frame`.
    pub fn visible_count(&self, frame: u64, total_chars: usize) -> usize {
        let cycle = self.cycle_length(total_chars).max(1);
        let typed = (frame % cycle) / self.typing_speed;
        typed.min(total_chars as u64) as usize
    }

    /// Shade of the character at `char_index` on `frame`.
    pub fn color_for(&self, char_index: usize, frame: u64, total_chars: usize) -> TextShade {
        if char_index >= self.visible_count(frame, total_chars) {
            return TextShade::HIDDEN;
        }

        let wave = (frame as f64 * 0.1 - char_index as f64 * 0.3).sin();
        TextShade {
            visible: true,
            intensity: (0.7 + (wave + 1.0) * 0.15) as f32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banner_width() {
        assert_eq!(banner_width(), 14);
        assert!(BANNER.iter().all(|line| line.chars().count() == 14));
    }

    #[test]
    fn test_typing_start() {
        let typing = TypingWave::default();
        assert_eq!(typing.visible_count(0, 10), 0);
        assert!((0..10).all(|i| !typing.color_for(i, 0, 10).visible));

        assert_eq!(typing.visible_count(2, 10), 1);
        assert!(typing.color_for(0, 2, 10).visible);
        assert!(!typing.color_for(1, 2, 10).visible);
    }

    #[test]
    fn test_visible_count_monotonic_then_resets() {
        let typing = TypingWave::default();
        let cycle = typing.cycle_length(10);
        assert_eq!(cycle, 50);

        let mut last = 0;
        for frame in 0..cycle {
            let count = typing.visible_count(frame, 10);
            assert!(count >= last, "frame {frame}: {count} < {last}");
            assert!(count <= 10);
            last = count;
        }
        assert_eq!(last, 10);
        assert_eq!(typing.visible_count(cycle, 10), 0);
        assert_eq!(typing.visible_count(cycle + 2, 10), 1);
    }

    #[test]
    fn test_visible_intensity_range() {
        let typing = TypingWave::default();
        for frame in 20..400 {
            for i in 0..10 {
                let shade = typing.color_for(i, frame, 10);
                if shade.visible {
                    assert!((0.7..=1.0).contains(&shade.intensity), "{shade:?}");
                }
            }
        }
    }

    #[test]
    fn test_hidden_uses_placeholder() {
        let typing = TypingWave::default();
        let shade = typing.color_for(9, 0, 10);
        assert_eq!(shade.tint(), HIDDEN_TINT);
        assert_eq!(shade.intensity, 0.0);
    }

    #[test]
    fn test_visible_tint_is_dimmed_base() {
        let shade = TextShade {
            visible: true,
            intensity: 1.0,
        };
        assert_eq!(shade.tint(), BASE_TINT);
    }

    #[test]
    fn test_wave_travels() {
        let typing = TypingWave::default();
        // Fully typed at frame 40 of a 50 frame cycle
        let a = typing.color_for(3, 40, 10).intensity;
        let b = typing.color_for(3, 45, 10).intensity;
        assert_ne!(a, b);
    }

    #[test]
    fn test_empty_text() {
        let typing = TypingWave::default();
        assert_eq!(typing.cycle_length(0), 30);
        assert_eq!(typing.visible_count(12, 0), 0);
    }

    #[test]
    fn test_zero_typing_speed() {
        let typing = TypingWave::new(0, 30);
        assert_eq!(typing.visible_count(3, 10), 3);
    }
}
