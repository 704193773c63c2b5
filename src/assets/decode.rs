use std::path::Path;

use anyhow::Context;

use crate::foundation::error::StoryResult;
use crate::foundation::math::premul_rgba8;
use crate::render::surface::Surface;

/// Decode any format `image` understands into a premultiplied surface.
pub fn decode_image(bytes: &[u8]) -> StoryResult<Surface> {
    let dyn_img = image::load_from_memory(bytes).context("decode image from memory")?;
    let rgba = dyn_img.to_rgba8();
    let (width, height) = rgba.dimensions();

    let mut data = rgba.into_raw();
    for px in data.chunks_exact_mut(4) {
        let p = premul_rgba8([px[0], px[1], px[2], px[3]]);
        px.copy_from_slice(&p);
    }
    Surface::from_premul(width, height, data)
}

/// Read and decode an image file from disk.
pub fn load_image_file(path: &Path) -> StoryResult<Surface> {
    let bytes = std::fs::read(path).with_context(|| format!("read image '{}'", path.display()))?;
    decode_image(&bytes)
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
