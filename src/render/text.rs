use crate::assets::fonts::TextBlock;
use crate::foundation::core::{Offset, Rgba8};
use crate::foundation::error::StoryResult;
use crate::render::raster::rasterize;
use crate::render::surface::Sprite;

// Glyph outlines may overhang the advance box (accents, descenders on the
// last line, side bearings). Rasterize onto a slightly larger surface.
fn bleed(block: &TextBlock) -> u32 {
    (block.height() * 0.25).ceil().max(2.0) as u32
}

/// Rasterize shaped text in a single color. The returned sprite's anchor
/// places the layout origin (top-left of the first line box) at the draw
/// position.
pub fn rasterize_text(block: &TextBlock, color: Rgba8) -> StoryResult<Sprite> {
    let pad = bleed(block);
    let width = block.width().max(0.0).ceil() as u32 + 2 * pad;
    let height = block.height().max(0.0).ceil() as u32 + 2 * pad;

    let surface = rasterize(width, height, |ctx| {
        ctx.set_transform(vello_cpu::kurbo::Affine::translate((
            f64::from(pad),
            f64::from(pad),
        )));
        ctx.set_paint(color.to_vello());
        for line in block.layout.lines() {
            for item in line.items() {
                let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                    continue;
                };
                let glyphs = run.positioned_glyphs().map(|g| vello_cpu::Glyph {
                    id: g.id,
                    x: g.x,
                    y: g.y,
                });
                ctx.glyph_run(&block.font)
                    .font_size(run.run().font_size())
                    .fill_glyphs(glyphs);
            }
        }
    })?;

    let pad = pad as i32;
    Ok(Sprite {
        surface,
        anchor: Offset::new(-pad, -pad),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/render/text.rs"]
mod tests;
