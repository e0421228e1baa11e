//! The halo logo: a ring mask lit by an orbiting light, and the animated
//! banner printed beneath it.

mod banner;
mod lighting;
mod mask;

pub use banner::{BANNER, BANNER_FRAME_OFFSETS, TextShade, TypingWave, banner_width};
pub use lighting::illuminate;
pub use mask::{FILLED_GLYPH, ShapeMask};
