use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::foundation::core::{Offset, Rgba8};
use crate::foundation::error::{StoryError, StoryResult};
use crate::foundation::math::{mul_div255_u8, premul_over_px, unpremul_rgba8};
use crate::render::blur::{blur_extent, blur_rgba8_premul};

/// Premultiplied RGBA8 pixel buffer, row-major and tightly packed.
#[derive(Clone, PartialEq, Eq)]
pub struct Surface {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl std::fmt::Debug for Surface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Surface")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

/// A rasterized element plus the offset of its top-left corner relative to
/// the position it is drawn at (text carries a small bleed margin).
#[derive(Clone, Debug)]
pub struct Sprite {
    /// Pixels of the element.
    pub surface: Surface,
    /// Offset of `surface`'s origin from the draw position.
    pub anchor: Offset,
}

impl From<Surface> for Sprite {
    fn from(surface: Surface) -> Self {
        Self {
            surface,
            anchor: Offset::ZERO,
        }
    }
}

/// Blurred drop shadow parameters for [`Surface::draw_with_shadow`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Shadow {
    /// Displacement of the shadow from the element.
    pub offset: Offset,
    /// Gaussian standard deviation in pixels.
    pub blur: f32,
}

fn byte_len(width: u32, height: u32) -> StoryResult<usize> {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|v| v.checked_mul(4))
        .ok_or_else(|| StoryError::render("surface size overflow"))
}

impl Surface {
    /// Fully transparent surface.
    pub fn new(width: u32, height: u32) -> StoryResult<Self> {
        if width == 0 || height == 0 {
            return Err(StoryError::render(format!(
                "surface must be non-empty (got {width}x{height})"
            )));
        }
        Ok(Self {
            width,
            height,
            data: vec![0u8; byte_len(width, height)?],
        })
    }

    /// Surface filled with a single straight-alpha color.
    pub fn filled(width: u32, height: u32, color: Rgba8) -> StoryResult<Self> {
        let mut out = Self::new(width, height)?;
        let px = color.premul();
        for chunk in out.data.chunks_exact_mut(4) {
            chunk.copy_from_slice(&px);
        }
        Ok(out)
    }

    /// Wrap already premultiplied bytes.
    pub fn from_premul(width: u32, height: u32, data: Vec<u8>) -> StoryResult<Self> {
        if width == 0 || height == 0 {
            return Err(StoryError::render("surface must be non-empty"));
        }
        if data.len() != byte_len(width, height)? {
            return Err(StoryError::render(
                "surface bytes must match width*height*4",
            ));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Premultiplied bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Premultiplied pixel at `(x, y)`; transparent outside the surface.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        if x >= self.width || y >= self.height {
            return [0, 0, 0, 0];
        }
        let idx = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        [
            self.data[idx],
            self.data[idx + 1],
            self.data[idx + 2],
            self.data[idx + 3],
        ]
    }

    /// Scale every channel by `alpha / 255`.
    pub fn multiply_alpha(&mut self, alpha: u8) {
        if alpha == 255 {
            return;
        }
        let a = u16::from(alpha);
        for v in &mut self.data {
            *v = mul_div255_u8(u16::from(*v), a);
        }
    }

    /// Bicubic resample to `width` x `height`.
    pub fn resized(&self, width: u32, height: u32) -> StoryResult<Surface> {
        if width == self.width && height == self.height {
            return Ok(self.clone());
        }
        let src = image::RgbaImage::from_raw(self.width, self.height, self.data.clone())
            .ok_or_else(|| StoryError::render("surface bytes do not form an image"))?;
        let out =
            image::imageops::resize(&src, width, height, image::imageops::FilterType::CatmullRom);
        Surface::from_premul(width, height, out.into_raw())
    }

    /// Copy of this surface surrounded by `pad` transparent pixels on every side.
    pub fn padded(&self, pad: u32) -> StoryResult<Surface> {
        if pad == 0 {
            return Ok(self.clone());
        }
        let mut out = Surface::new(self.width + 2 * pad, self.height + 2 * pad)?;
        out.blit(self, Offset::new(pad as i32, pad as i32));
        Ok(out)
    }

    /// Blurred copy; see [`blur_rgba8_premul`].
    pub fn blurred(&self, sigma: f32) -> StoryResult<Surface> {
        let data = blur_rgba8_premul(&self.data, self.width, self.height, sigma)?;
        Surface::from_premul(self.width, self.height, data)
    }

    /// Source-over composite `src` with its top-left corner at `at`, clipped
    /// to this surface.
    pub fn composite_over(&mut self, src: &Surface, at: Offset) {
        self.for_each_overlap(src, at, |dst, s| premul_over_px(dst, s));
    }

    /// Replace pixels under `src` (no blending).
    fn blit(&mut self, src: &Surface, at: Offset) {
        self.for_each_overlap(src, at, |_, s| s);
    }

    fn for_each_overlap(
        &mut self,
        src: &Surface,
        at: Offset,
        mut f: impl FnMut([u8; 4], [u8; 4]) -> [u8; 4],
    ) {
        let x0 = i64::from(at.x).max(0);
        let y0 = i64::from(at.y).max(0);
        let x1 = (i64::from(at.x) + i64::from(src.width)).min(i64::from(self.width));
        let y1 = (i64::from(at.y) + i64::from(src.height)).min(i64::from(self.height));
        if x0 >= x1 || y0 >= y1 {
            return;
        }

        let dst_w = self.width as usize;
        let src_w = src.width as usize;
        for y in y0..y1 {
            let sy = (y - i64::from(at.y)) as usize;
            for x in x0..x1 {
                let sx = (x - i64::from(at.x)) as usize;
                let si = (sy * src_w + sx) * 4;
                let di = ((y as usize) * dst_w + x as usize) * 4;
                let s = [
                    src.data[si],
                    src.data[si + 1],
                    src.data[si + 2],
                    src.data[si + 3],
                ];
                let d = [
                    self.data[di],
                    self.data[di + 1],
                    self.data[di + 2],
                    self.data[di + 3],
                ];
                self.data[di..di + 4].copy_from_slice(&f(d, s));
            }
        }
    }

    /// Draw a sprite at `at` (its anchor applied).
    pub fn draw(&mut self, sprite: &Sprite, at: Offset) {
        self.composite_over(&sprite.surface, at + sprite.anchor);
    }

    /// Draw-with-shadow: `shade` is placed on a transparent scratch layer at
    /// `at + shadow.offset`, the layer is blurred and composited, then `ink`
    /// is composited at `at`.
    ///
    /// The scratch layer is only as large as the shade plus the blur extent,
    /// which matches a full-canvas layer once clipped.
    pub fn draw_with_shadow(
        &mut self,
        ink: &Sprite,
        shade: &Sprite,
        at: Offset,
        shadow: Shadow,
    ) -> StoryResult<()> {
        let pad = blur_extent(shadow.blur);
        let layer = shade.surface.padded(pad)?.blurred(shadow.blur)?;
        let pad = pad as i32;
        let origin = at + shadow.offset + shade.anchor + Offset::new(-pad, -pad);
        self.composite_over(&layer, origin);
        self.draw(ink, at);
        Ok(())
    }

    /// Convert to a straight-alpha RGBA image.
    pub fn to_rgba_image(&self) -> StoryResult<image::RgbaImage> {
        let mut straight = Vec::with_capacity(self.data.len());
        for px in self.data.chunks_exact(4) {
            straight.extend_from_slice(&unpremul_rgba8([px[0], px[1], px[2], px[3]]));
        }
        image::RgbaImage::from_raw(self.width, self.height, straight)
            .ok_or_else(|| StoryError::render("surface bytes do not form an image"))
    }

    /// Encode as PNG (straight RGBA), creating parent directories.
    ///
    /// The file is written next to `path` under a temporary name and renamed
    /// into place, so `path` never holds a partial image.
    pub fn save_png(&self, path: &Path) -> StoryResult<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create output dir '{}'", parent.display()))?;
        }
        let img = self.to_rgba_image()?;
        let mut encoded = Vec::new();
        img.write_to(&mut std::io::Cursor::new(&mut encoded), image::ImageFormat::Png)
            .context("encode png")?;

        let staging = staging_path(path);
        let written = std::fs::write(&staging, &encoded).and_then(|()| std::fs::rename(&staging, path));
        if let Err(err) = written {
            let _ = std::fs::remove_file(&staging);
            return Err(anyhow::Error::new(err)
                .context(format!("write png '{}'", path.display()))
                .into());
        }
        Ok(())
    }
}

fn staging_path(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "story.png".to_owned());
    path.with_file_name(format!(".{name}.{}.tmp", std::process::id()))
}

#[cfg(test)]
#[path = "../../tests/unit/render/surface.rs"]
mod tests;
