//! Ring-shaped logo mask.

use std::fmt;

use halo_core::RingParams;

/// Glyph drawn for every filled cell of the mask.
pub const FILLED_GLYPH: char = '█';

/// Immutable grid marking which cells belong to the ring outline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapeMask {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl ShapeMask {
    /// Build the ring described by `params`.
    pub fn ring(params: RingParams) -> Self {
        Self::generate(params.radius, params.thickness, params.aspect_ratio)
    }

    /// Build a ring of the given radius and band thickness.
    ///
    /// The box is `2 * radius + 1` rows tall and that many rows times
    /// `aspect_ratio` columns wide, so the ring reads as a circle on cells
    /// that are taller than they are wide.
    pub fn generate(radius: u16, thickness: f32, aspect_ratio: f32) -> Self {
        let aspect_ratio = if aspect_ratio.is_finite() && aspect_ratio > 0.0 {
            aspect_ratio
        } else {
            1.0
        };
        let radius_f = radius as f32;
        let height = radius as usize * 2 + 1;
        let width = (height as f32 * aspect_ratio) as usize;

        let mut cells = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                let dist = ring_distance(x, y, width, radius, aspect_ratio);
                cells.push(radius_f - thickness <= dist && dist <= radius_f + 0.5);
            }
        }

        Self {
            width,
            height,
            cells,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Whether the cell at `(x, y)` is part of the ring. Out of range is empty.
    pub fn is_filled(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height && self.cells[y * self.width + x]
    }

    /// Iterate over the `(x, y)` coordinates of every filled cell, row by row.
    pub fn filled_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, filled)| **filled)
            .map(|(i, _)| (i % self.width, i / self.width))
    }
}

impl fmt::Display for ShapeMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            let line: String = (0..self.width)
                .map(|x| if self.is_filled(x, y) { FILLED_GLYPH } else { ' ' })
                .collect();
            writeln!(f, "{}", line.trim_end())?;
        }
        Ok(())
    }
}

/// Distance from a cell to the mask center with the horizontal offset
/// squeezed by the aspect ratio.
fn ring_distance(x: usize, y: usize, width: usize, radius: u16, aspect_ratio: f32) -> f32 {
    let center_x = width as f32 / 2.0;
    let center_y = radius as f32;
    let dx = (x as f32 - center_x) / aspect_ratio;
    let dy = y as f32 - center_y;
    (dx * dx + dy * dy).sqrt()
}
