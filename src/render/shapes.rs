use std::f64::consts::{FRAC_PI_2, PI};

use vello_cpu::kurbo::{Arc, BezPath, Point, Rect, Vec2};

use crate::foundation::core::Rgba8;
use crate::foundation::error::StoryResult;
use crate::render::raster::rasterize;
use crate::render::surface::Surface;

const ARC_TOLERANCE: f64 = 0.1;

/// Filled rounded rectangle of `width` x `height` with corner `radius`.
///
/// Built from two axis-aligned rectangles covering the straight edges and
/// four quarter pie slices at the corners, all in the same fill and without
/// a stroke. The pieces are drawn opaque and the fill alpha is applied once
/// afterwards, so overlaps do not darken.
pub fn rounded_rect(width: u32, height: u32, radius: u32, fill: Rgba8) -> StoryResult<Surface> {
    let (w, h) = (f64::from(width), f64::from(height));
    let r = f64::from(radius).min(w / 2.0).min(h / 2.0);

    let mut out = rasterize(width, height, |ctx| {
        ctx.set_paint(fill.with_alpha(255).to_vello());
        ctx.fill_rect(&Rect::new(r, 0.0, w - r, h));
        ctx.fill_rect(&Rect::new(0.0, r, w, h - r));
        if r > 0.0 {
            ctx.fill_path(&pie_slice(Point::new(r, r), r, PI));
            ctx.fill_path(&pie_slice(Point::new(w - r, r), r, PI + FRAC_PI_2));
            ctx.fill_path(&pie_slice(Point::new(r, h - r), r, FRAC_PI_2));
            ctx.fill_path(&pie_slice(Point::new(w - r, h - r), r, 0.0));
        }
    })?;
    out.multiply_alpha(fill.a);
    Ok(out)
}

/// 90° pie slice starting at `start` radians (0 = +x, clockwise on screen).
fn pie_slice(center: Point, radius: f64, start: f64) -> BezPath {
    let arc = Arc {
        center,
        radii: Vec2::new(radius, radius),
        start_angle: start,
        sweep_angle: FRAC_PI_2,
        x_rotation: 0.0,
    };

    let mut path = BezPath::new();
    path.move_to(center);
    path.line_to(Point::new(
        center.x + radius * start.cos(),
        center.y + radius * start.sin(),
    ));
    for el in arc.append_iter(ARC_TOLERANCE) {
        path.push(el);
    }
    path.close_path();
    path
}

#[cfg(test)]
#[path = "../../tests/unit/render/shapes.rs"]
mod tests;
