use anyhow::{Result, bail};
use raylib::prelude::*;

use super::Transition;
use crate::constants::{WIPE_PIECES_X, WIPE_PIECES_Y};

/// Block-wise diagonal wipe: both frames are divided into a grid of equal
/// tiles and the outgoing frame's tiles fade out anti-diagonal by
/// anti-diagonal, so the incoming frame is revealed in a sweep from one
/// corner to the other.
///
/// Tile sizes come from integer division of the `from` frame's dimensions;
/// remainder pixels stay on the base layer.
pub struct BlockWipe {
    duration: f32,
    pieces_x: i32,
    pieces_y: i32,
    diag_count: i32,
}

impl BlockWipe {
    pub fn new(duration: f32) -> Result<Self> {
        Self::with_grid(duration, WIPE_PIECES_X, WIPE_PIECES_Y)
    }

    pub fn with_grid(duration: f32, pieces_x: i32, pieces_y: i32) -> Result<Self> {
        if !duration.is_finite() || duration <= 0.0 {
            bail!("block wipe duration must be positive, got {}", duration);
        }
        if pieces_x < 1 || pieces_y < 1 {
            bail!("block wipe grid must be at least 1x1, got {}x{}", pieces_x, pieces_y);
        }
        Ok(Self {
            duration,
            pieces_x,
            pieces_y,
            diag_count: pieces_x + pieces_y - 2,
        })
    }

    // Opacity of the outgoing frame's (i, j) tile, clamped to [0, 1].
    // Tiles on the same anti-diagonal share the same value; the clamp width
    // of 1 makes adjacent diagonals overlap while they fade.
    fn tile_progress(&self, i: i32, j: i32, elapsed: f32) -> f32 {
        let e = 1.0 - elapsed / self.duration;
        let k = self.diag_count - (i + j);
        (e * (self.diag_count - 1) as f32 - k as f32).clamp(0.0, 1.0)
    }
}

impl Transition for BlockWipe {
    fn duration(&self) -> f32 {
        self.duration
    }

    fn render(&self, from: &Texture2D, to: &Texture2D, d: &mut RaylibDrawHandle, elapsed: f32) {
        let block_w = from.width() / self.pieces_x;
        let block_h = from.height() / self.pieces_y;

        d.draw_texture(to, 0, 0, Color::WHITE);

        for i in 0..self.pieces_x {
            for j in 0..self.pieces_y {
                let q = self.tile_progress(i, j, elapsed);
                let x = (i * block_w) as f32;
                let y = (j * block_h) as f32;
                d.draw_texture_rec(
                    from,
                    Rectangle::new(x, y, block_w as f32, block_h as f32),
                    Vector2::new(x, y),
                    Color::new(255, 255, 255, (255.0 * q) as u8),
                );
            }
        }
    }
}
