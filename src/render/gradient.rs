use crate::foundation::error::StoryResult;
use crate::render::surface::Surface;

/// Row at which the ramp starts, as a fraction of the canvas height.
const RAMP_START: f64 = 0.4;
/// Ramp length, as a fraction of the canvas height (fully opaque at 110%).
const RAMP_SPAN: f64 = 0.7;

/// Per-row alpha of the legibility gradient: transparent above 40% of the
/// height, then a linear ramp clamped to `0..=255`.
pub fn legibility_ramp(height: u32) -> Vec<u8> {
    let h = f64::from(height);
    (0..height)
        .map(|y| {
            let t = (f64::from(y) - RAMP_START * h) / (RAMP_SPAN * h);
            (t * 255.0).round().clamp(0.0, 255.0) as u8
        })
        .collect()
}

/// Black layer whose alpha is the legibility ramp stretched across `width`.
pub fn legibility_overlay(width: u32, height: u32) -> StoryResult<Surface> {
    let column = legibility_ramp(height);
    let mut data = Vec::with_capacity((width as usize) * (height as usize) * 4);
    for a in column {
        for _ in 0..width {
            data.extend_from_slice(&[0, 0, 0, a]);
        }
    }
    Surface::from_premul(width, height, data)
}

#[cfg(test)]
#[path = "../../tests/unit/render/gradient.rs"]
mod tests;
