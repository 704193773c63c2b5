use crate::foundation::error::{StoryError, StoryResult};

const BOX_PASSES: usize = 3;

/// Gaussian-like blur of a premultiplied RGBA8 buffer.
///
/// `sigma` is the standard deviation in pixels. The kernel is approximated by
/// three successive box passes per axis, which keeps the cost independent of
/// the radius; edges are clamped.
pub fn blur_rgba8_premul(src: &[u8], width: u32, height: u32, sigma: f32) -> StoryResult<Vec<u8>> {
    let expected_len = (width as usize)
        .checked_mul(height as usize)
        .and_then(|v| v.checked_mul(4))
        .ok_or_else(|| StoryError::render("blur buffer size overflow"))?;
    if src.len() != expected_len {
        return Err(StoryError::render(
            "blur_rgba8_premul expects src matching width*height*4",
        ));
    }
    if !sigma.is_finite() || sigma < 0.0 {
        return Err(StoryError::render("blur sigma must be finite and >= 0"));
    }

    let radius = box_radius(sigma);
    if radius == 0 || expected_len == 0 {
        return Ok(src.to_vec());
    }

    let (w, h) = (width as usize, height as usize);
    let mut a = src.to_vec();
    let mut b = vec![0u8; expected_len];

    for _ in 0..BOX_PASSES {
        box_pass(&a, &mut b, h, w * 4, w, 4, radius);
        std::mem::swap(&mut a, &mut b);
    }
    for _ in 0..BOX_PASSES {
        box_pass(&a, &mut b, w, 4, h, w * 4, radius);
        std::mem::swap(&mut a, &mut b);
    }
    Ok(a)
}

/// Box radius whose three-pass convolution has variance closest to `sigma²`.
pub fn box_radius(sigma: f32) -> usize {
    if sigma <= 0.0 {
        return 0;
    }
    let s = f64::from(sigma);
    let width = (4.0 * s * s + 1.0).sqrt();
    ((width - 1.0) / 2.0).round().max(0.0) as usize
}

/// Pixels a blur of `sigma` can bleed past the edge of its input.
pub fn blur_extent(sigma: f32) -> u32 {
    (box_radius(sigma) * BOX_PASSES) as u32
}

/// One sliding-window box pass over `lines` independent lines of `n` pixels.
fn box_pass(
    src: &[u8],
    dst: &mut [u8],
    lines: usize,
    line_step: usize,
    n: usize,
    px_step: usize,
    radius: usize,
) {
    let window = (2 * radius + 1) as u32;
    let half = window / 2;
    let last = n - 1;

    for line in 0..lines {
        let base = line * line_step;
        let at = |i: usize, c: usize| u32::from(src[base + i * px_step + c]);

        // Seed window covers -radius..=radius with indices clamped to the line.
        let mut acc = [0u32; 4];
        for k in 0..=(2 * radius) {
            let i = k.saturating_sub(radius).min(last);
            for (c, slot) in acc.iter_mut().enumerate() {
                *slot += at(i, c);
            }
        }
        for x in 0..n {
            let out = base + x * px_step;
            for c in 0..4 {
                dst[out + c] = ((acc[c] + half) / window) as u8;
            }
            let leaving = x.saturating_sub(radius);
            let entering = (x + radius + 1).min(last);
            for (c, slot) in acc.iter_mut().enumerate() {
                *slot += at(entering, c);
                *slot -= at(leaving, c);
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/blur.rs"]
mod tests;
