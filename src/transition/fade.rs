use anyhow::{Result, bail};
use raylib::prelude::*;

use super::Transition;

/// Linear cross-dissolve: the incoming frame is drawn at full opacity and
/// the outgoing frame fades out on top of it.
pub struct Fade {
    duration: f32,
}

impl Fade {
    pub fn new(duration: f32) -> Result<Self> {
        if !duration.is_finite() || duration <= 0.0 {
            bail!("fade duration must be positive, got {}", duration);
        }
        Ok(Self { duration })
    }

    // Opacity of the outgoing frame at `elapsed` seconds, on the 0..255 scale.
    // Not clamped here; the byte conversion saturates.
    fn from_alpha(&self, elapsed: f32) -> f32 {
        255.0 * (1.0 - elapsed / self.duration)
    }
}

impl Transition for Fade {
    fn duration(&self) -> f32 {
        self.duration
    }

    fn render(&self, from: &Texture2D, to: &Texture2D, d: &mut RaylibDrawHandle, elapsed: f32) {
        d.draw_texture(to, 0, 0, Color::WHITE);
        d.draw_texture(
            from,
            0,
            0,
            Color::new(255, 255, 255, self.from_alpha(elapsed) as u8),
        );
    }
}
