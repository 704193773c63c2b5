use std::borrow::Cow;
use std::path::Path;

use crate::foundation::error::{StoryError, StoryResult};

/// Which of the two configured faces to lay text out with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FontFace {
    /// Heavy face used for the story title.
    Title,
    /// Regular face used for dates, game names and badges.
    Body,
}

#[derive(Clone)]
struct LoadedFace {
    family: String,
    weight: parley::fontique::FontWeight,
    data: vello_cpu::peniko::FontData,
}

/// Shaped single-paragraph text plus the font needed to draw its glyphs.
pub struct TextBlock {
    pub(crate) layout: parley::Layout<()>,
    pub(crate) font: vello_cpu::peniko::FontData,
}

impl TextBlock {
    /// Advance width of the laid-out text in pixels.
    pub fn width(&self) -> f32 {
        self.layout.width()
    }

    /// Line-box height of the laid-out text in pixels.
    pub fn height(&self) -> f32 {
        self.layout.height()
    }
}

/// The two faces a story needs, registered with a private Parley context.
///
/// Fonts are loaded once up front and handed to the renderer; loading fails
/// fast when either file cannot be read or parsed.
pub struct FontSet {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<()>,
    title: LoadedFace,
    body: LoadedFace,
}

impl std::fmt::Debug for FontSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontSet")
            .field("title", &self.title.family)
            .field("body", &self.body.family)
            .finish_non_exhaustive()
    }
}

impl FontSet {
    /// Read and register the title and body font files.
    pub fn load(title: &Path, body: &Path) -> StoryResult<Self> {
        let title_bytes = std::fs::read(title).map_err(|e| StoryError::font_load(title, e))?;
        let body_bytes = std::fs::read(body).map_err(|e| StoryError::font_load(body, e))?;

        let mut font_ctx = parley::FontContext::default();
        let title_face =
            register(&mut font_ctx, title_bytes).map_err(|e| StoryError::font_load(title, e))?;
        let body_face =
            register(&mut font_ctx, body_bytes).map_err(|e| StoryError::font_load(body, e))?;
        tracing::debug!(
            title = %title_face.family,
            body = %body_face.family,
            "fonts registered"
        );

        Ok(Self {
            font_ctx,
            layout_ctx: parley::LayoutContext::new(),
            title: title_face,
            body: body_face,
        })
    }

    /// Family name resolved for `face`.
    pub fn family(&self, face: FontFace) -> &str {
        &self.face(face).family
    }

    fn face(&self, face: FontFace) -> &LoadedFace {
        match face {
            FontFace::Title => &self.title,
            FontFace::Body => &self.body,
        }
    }

    /// Shape `text` on a single line (no wrapping) at `size_px`.
    pub fn layout(&mut self, text: &str, face: FontFace, size_px: f32) -> StoryResult<TextBlock> {
        if !size_px.is_finite() || size_px <= 0.0 {
            return Err(StoryError::config("text size must be finite and > 0"));
        }
        let loaded = self.face(face).clone();

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(Cow::Owned(loaded.family)),
        ));
        builder.push_default(parley::style::StyleProperty::FontWeight(loaded.weight));
        builder.push_default(parley::style::StyleProperty::FontSize(size_px));

        let mut layout: parley::Layout<()> = builder.build(text);
        layout.break_all_lines(None);

        Ok(TextBlock {
            layout,
            font: loaded.data,
        })
    }
}

fn register(font_ctx: &mut parley::FontContext, bytes: Vec<u8>) -> Result<LoadedFace, String> {
    let families = font_ctx
        .collection
        .register_fonts(parley::fontique::Blob::from(bytes.clone()), None);
    let (family_id, fonts) = families
        .first()
        .ok_or_else(|| "no font families found in file".to_owned())?;
    let weight = fonts
        .first()
        .map(|info| info.weight())
        .ok_or_else(|| "font family has no faces".to_owned())?;
    let family = font_ctx
        .collection
        .family_name(*family_id)
        .ok_or_else(|| "registered font family has no name".to_owned())?
        .to_owned();

    Ok(LoadedFace {
        family,
        weight,
        data: vello_cpu::peniko::FontData::new(vello_cpu::peniko::Blob::from(bytes), 0),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/assets/fonts.rs"]
mod tests;
