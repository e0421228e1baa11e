//! Per-frame compositing of particles, the lit ring and the banner.

use color_eyre::Result;
use halo_background::{ParticleSystem, particle_tint};
use halo_core::{BANNER_RESERVED_ROWS, BASE_TINT, ColorMode, FALLBACK_SIZE, LOGO_TOP_PADDING};
use halo_logo::{
    BANNER, BANNER_FRAME_OFFSETS, FILLED_GLYPH, ShapeMask, TypingWave, banner_width, illuminate,
};
use rand::{Rng, rngs::StdRng};
use ratatui::{
    layout::Size,
    style::{Color, Style},
    text::{Line, Span},
};
use tracing::{trace, warn};

use crate::screen::Screen;

/// One character cell of a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub glyph: char,
    /// Foreground color; `None` keeps the terminal default.
    pub color: Option<Color>,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            glyph: ' ',
            color: None,
        }
    }
}

impl Cell {
    fn span(self) -> Span<'static> {
        styled(self.glyph, self.color)
    }
}

/// Glyph and color grid for a single frame, sized to the terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    /// A blank buffer.
    pub fn new(width: u16, height: u16) -> Self {
        let (width, height) = (width as usize, height as usize);
        Self {
            width,
            height,
            cells: vec![Cell::default(); width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, x: usize, y: usize) -> Option<&Cell> {
        self.index(x, y).map(|i| &self.cells[i])
    }

    /// Write a cell. Writes outside the buffer are dropped and return false.
    pub fn set(&mut self, x: usize, y: usize, glyph: char, color: Option<Color>) -> bool {
        match self.index(x, y) {
            Some(i) => {
                self.cells[i] = Cell { glyph, color };
                true
            }
            None => false,
        }
    }

    /// Row `y` as a line with one span per cell.
    pub fn line(&self, y: usize) -> Line<'static> {
        if y >= self.height {
            return Line::default();
        }
        let row = &self.cells[y * self.width..(y + 1) * self.width];
        Line::from(row.iter().map(|cell| cell.span()).collect::<Vec<_>>())
    }

    fn index(&self, x: usize, y: usize) -> Option<usize> {
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }
}

/// Builds and emits one frame per tick.
#[derive(Debug)]
pub struct FrameCompositor<R = StdRng> {
    mask: ShapeMask,
    particles: ParticleSystem<R>,
    typing: TypingWave,
    color_mode: ColorMode,
}

impl<R: Rng> FrameCompositor<R> {
    pub fn new(mask: ShapeMask, particles: ParticleSystem<R>, color_mode: ColorMode) -> Self {
        Self {
            mask,
            particles,
            typing: TypingWave::default(),
            color_mode,
        }
    }

    pub fn particles(&self) -> &ParticleSystem<R> {
        &self.particles
    }

    /// Compose frame `frame` and paint it on `screen`.
    pub fn render<S: Screen>(&mut self, screen: &mut S, frame: u64) -> Result<()> {
        let size = match screen.size() {
            Some(size) if size.width > 0 && size.height > 0 => size,
            other => {
                warn!(?other, "terminal size unavailable, using fallback");
                Size::new(FALLBACK_SIZE.0, FALLBACK_SIZE.1)
            }
        };

        let buffer = self.compose(frame, size.width, size.height);
        trace!(frame, particles = self.particles().len(), "composed frame");
        screen.paint(self.lines(&buffer, frame))
    }

    /// Build a fresh buffer: particles first, then the lit ring on top.
    pub fn compose(&mut self, frame: u64, width: u16, height: u16) -> FrameBuffer {
        let mut buffer = FrameBuffer::new(width, height);
        let color_mode = self.color_mode;

        for particle in self.particles.advance(width, height) {
            let color = color_mode.apply(particle_tint(particle.brightness()));
            buffer.set(
                particle.x() as usize,
                particle.y() as usize,
                particle.glyph(),
                color,
            );
        }

        let (mask_w, mask_h) = (self.mask.width(), self.mask.height());
        let left = buffer.width().saturating_sub(mask_w) / 2;
        let top = LOGO_TOP_PADDING as usize;
        for (x, y) in self.mask.filled_cells() {
            let (sx, sy) = (left + x, top + y);
            if sx >= buffer.width() || sy >= buffer.height() {
                continue;
            }
            let intensity = illuminate(x as f32, y as f32, frame, mask_w as f32, mask_h as f32);
            buffer.set(
                sx,
                sy,
                FILLED_GLYPH,
                color_mode.apply(BASE_TINT.scaled(intensity)),
            );
        }

        buffer
    }

    /// Lines to paint: the buffer minus its bottom rows, a blank line, then
    /// the banner.
    pub fn lines(&self, buffer: &FrameBuffer, frame: u64) -> Vec<Line<'static>> {
        let shown = buffer
            .height()
            .saturating_sub(BANNER_RESERVED_ROWS as usize);
        let mut lines: Vec<Line> = (0..shown).map(|y| buffer.line(y)).collect();

        lines.push(Line::default());
        let padding = " ".repeat(buffer.width().saturating_sub(banner_width()) / 2);
        for (text, offset) in BANNER.iter().zip(BANNER_FRAME_OFFSETS) {
            lines.push(self.banner_line(text, &padding, frame.wrapping_add(offset)));
        }
        lines
    }

    fn banner_line(&self, text: &str, padding: &str, frame: u64) -> Line<'static> {
        let total = text.chars().count();
        let mut spans = Vec::with_capacity(total + 1);
        spans.push(Span::raw(padding.to_string()));
        spans.extend(text.chars().enumerate().map(|(i, ch)| {
            let shade = self.typing.color_for(i, frame, total);
            styled(ch, self.color_mode.apply(shade.tint()))
        }));
        Line::from(spans)
    }
}

/// A single character span that carries its own color, so nothing bleeds
/// into the next character.
fn styled(glyph: char, color: Option<Color>) -> Span<'static> {
    match color {
        Some(color) => Span::styled(glyph.to_string(), Style::new().fg(color)),
        None => Span::raw(glyph.to_string()),
    }
}
