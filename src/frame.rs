use anyhow::{Result, anyhow};
use raylib::prelude::*;

use crate::constants::*;

// Builds a full-screen solid color frame and uploads it as a texture.
// The demo uses these in place of scenes rendered by a real application;
// transitions only ever read them.
pub fn solid_color_frame(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    color: Color,
) -> Result<Texture2D> {
    let image = Image::gen_image_color(WINDOW_WIDTH, WINDOW_HEIGHT, color);
    let texture = rl
        .load_texture_from_image(thread, &image)
        .map_err(|e| anyhow!("failed to create frame texture: {}", e))?;
    drop(image);
    Ok(texture)
}
