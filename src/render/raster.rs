use crate::foundation::error::{StoryError, StoryResult};
use crate::render::surface::Surface;

/// Run vector drawing commands on a fresh transparent `width` x `height`
/// context and return the premultiplied result.
pub(crate) fn rasterize(
    width: u32,
    height: u32,
    draw: impl FnOnce(&mut vello_cpu::RenderContext),
) -> StoryResult<Surface> {
    let w: u16 = width
        .try_into()
        .map_err(|_| StoryError::render("raster width exceeds u16"))?;
    let h: u16 = height
        .try_into()
        .map_err(|_| StoryError::render("raster height exceeds u16"))?;
    if w == 0 || h == 0 {
        return Err(StoryError::render("raster size must be non-zero"));
    }

    let mut ctx = vello_cpu::RenderContext::new(w, h);
    draw(&mut ctx);
    ctx.flush();

    let mut pixmap = vello_cpu::Pixmap::new(w, h);
    ctx.render_to_pixmap(&mut pixmap);
    Surface::from_premul(width, height, pixmap.data_as_u8_slice().to_vec())
}
