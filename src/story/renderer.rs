use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::assets::covers::CoverArtSource;
use crate::assets::decode::load_image_file;
use crate::assets::fonts::{FontFace, FontSet};
use crate::foundation::core::{Offset, Rgba8};
use crate::foundation::error::{StoryError, StoryResult};
use crate::model::game::{
    GameActivityRecord, NAME_BUDGET, format_playtime, most_played_by_total, truncate_name,
};
use crate::render::gradient::legibility_overlay;
use crate::render::shapes::rounded_rect;
use crate::render::surface::{Shadow, Sprite, Surface};
use crate::render::text::rasterize_text;
use crate::story::config::StoryConfig;
use crate::story::layout::{self, date_range_text, row_top};

/// A game row that made it onto the canvas.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoryRow {
    /// Game shown on the row.
    pub app_id: u64,
    /// Top edge of the thumbnail.
    pub top: i32,
    /// Name as drawn (possibly truncated).
    pub name: String,
    /// Badge text.
    pub playtime: String,
}

/// Finished canvas plus what was drawn on it.
#[derive(Clone, Debug)]
pub struct Story {
    /// Composited image.
    pub canvas: Surface,
    /// Game whose cover is the backdrop.
    pub background_app_id: u64,
    /// Rows drawn, top to bottom.
    pub rows: Vec<StoryRow>,
    /// Whether the logo made it onto the canvas.
    pub logo_drawn: bool,
}

/// Composes story images from game activity.
///
/// One renderer can produce any number of stories; nothing is cached between
/// calls, so the same inputs always produce the same pixels.
pub struct StoryRenderer {
    config: StoryConfig,
    locale: chrono::Locale,
    fonts: FontSet,
    covers: Box<dyn CoverArtSource>,
}

impl std::fmt::Debug for StoryRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoryRenderer")
            .field("config", &self.config)
            .field("fonts", &self.fonts)
            .finish_non_exhaustive()
    }
}

impl StoryRenderer {
    /// Validate `config` and take ownership of fonts and the cover source.
    pub fn new(
        config: StoryConfig,
        fonts: FontSet,
        covers: Box<dyn CoverArtSource>,
    ) -> StoryResult<Self> {
        config.validate()?;
        let locale = config.locale()?;
        Ok(Self {
            config,
            locale,
            fonts,
            covers,
        })
    }

    /// Settings this renderer draws with.
    pub fn config(&self) -> &StoryConfig {
        &self.config
    }

    /// Render `records` and write the PNG to `path`. Nothing is written when
    /// composing fails, and a failed encode or write leaves `path` as it was.
    #[tracing::instrument(skip(self, records), fields(records = records.len()))]
    pub fn render(
        &mut self,
        records: &[GameActivityRecord],
        today: NaiveDate,
        path: &Path,
    ) -> StoryResult<PathBuf> {
        let story = self.compose(records, today)?;
        story.canvas.save_png(path)?;
        tracing::info!(path = %path.display(), rows = story.rows.len(), "story image saved");
        Ok(path.to_path_buf())
    }

    /// Build the story canvas in memory.
    ///
    /// The background is the cover of the game with the most lifetime
    /// playtime; rows show up to the first three records that have recent
    /// playtime, in input order.
    pub fn compose(
        &mut self,
        records: &[GameActivityRecord],
        today: NaiveDate,
    ) -> StoryResult<Story> {
        let Some(featured) = most_played_by_total(records) else {
            return Err(StoryError::NoRecords);
        };
        tracing::info!(
            records = records.len(),
            background = featured.app_id,
            "composing story"
        );

        let mut canvas = self.background(featured.app_id)?;
        self.header(&mut canvas, today)?;
        let rows = self.rows(&mut canvas, records)?;
        canvas.composite_over(
            &legibility_overlay(self.config.width, self.config.height)?,
            Offset::ZERO,
        );
        let logo_drawn = self.logo(&mut canvas);

        Ok(Story {
            canvas,
            background_app_id: featured.app_id,
            rows,
            logo_drawn,
        })
    }

    fn background(&self, app_id: u64) -> StoryResult<Surface> {
        let (w, h) = (self.config.width, self.config.height);
        let cover = self.covers.fetch_cover(app_id).map_err(|e| match e {
            e @ StoryError::AssetFetch { .. } => e,
            other => StoryError::asset_fetch(format!("cover for app {app_id}"), other),
        })?;
        let backdrop = cover.resized(w, h)?.blurred(layout::BACKGROUND_BLUR)?;

        let mut canvas = Surface::new(w, h)?;
        canvas.composite_over(&backdrop, Offset::ZERO);
        Ok(canvas)
    }

    fn header(&mut self, canvas: &mut Surface, today: NaiveDate) -> StoryResult<()> {
        let margin = self.margin();
        let band_h = self
            .config
            .margin
            .saturating_add(layout::BANNER_EXTRA)
            .min(self.config.height);
        let band = Surface::filled(self.config.width, band_h, layout::BANNER_FILL)?;
        canvas.composite_over(&band, Offset::ZERO);

        let origin = Offset::new(margin, margin);
        let title_size = self.config.title_size;
        self.shadowed_text(
            canvas,
            layout::TITLE_TEXT,
            FontFace::Title,
            title_size,
            origin + layout::TITLE_OFFSET,
            layout::HEADER_SHADOW,
        )?;

        let dates = date_range_text(today, self.locale);
        let body_size = self.config.body_size;
        self.shadowed_text(
            canvas,
            &dates,
            FontFace::Body,
            body_size,
            origin + layout::DATE_OFFSET,
            layout::HEADER_SHADOW,
        )
    }

    fn rows(
        &mut self,
        canvas: &mut Surface,
        records: &[GameActivityRecord],
    ) -> StoryResult<Vec<StoryRow>> {
        let margin = self.margin();
        let mut rows = Vec::new();

        for record in records.iter().take(layout::MAX_ROWS) {
            if !record.played_recently() {
                continue;
            }
            let thumb = match self.thumbnail(record.app_id) {
                Ok(thumb) => thumb,
                Err(err) => {
                    tracing::warn!(app_id = record.app_id, %err, "skipping row without cover");
                    continue;
                }
            };

            let top = row_top(rows.len());
            let thumb = Sprite::from(thumb);
            canvas.draw_with_shadow(&thumb, &thumb, Offset::new(margin, top), layout::THUMB_SHADOW)?;

            let name = truncate_name(&record.display_name, NAME_BUDGET);
            let body_size = self.config.body_size;
            let text_x = margin + layout::ROW_TEXT_DX;
            self.shadowed_text(
                canvas,
                &name,
                FontFace::Body,
                body_size,
                Offset::new(text_x, top + layout::NAME_DY),
                layout::NAME_SHADOW,
            )?;

            let playtime = format_playtime(record.recent_playtime_minutes);
            self.badge(canvas, &playtime, Offset::new(text_x, top + layout::BADGE_DY))?;

            rows.push(StoryRow {
                app_id: record.app_id,
                top,
                name,
                playtime,
            });
        }
        Ok(rows)
    }

    fn thumbnail(&self, app_id: u64) -> StoryResult<Surface> {
        self.covers
            .fetch_cover(app_id)?
            .resized(layout::THUMB_WIDTH, layout::THUMB_HEIGHT)
    }

    // The badge box hugs the line box with the padding trimmed by the text
    // lift on both sides, so the text stays vertically centered.
    fn badge(&mut self, canvas: &mut Surface, text: &str, at: Offset) -> StoryResult<()> {
        let block = self
            .fonts
            .layout(text, FontFace::Body, self.config.badge_size)?;
        let pad = layout::BADGE_PADDING;
        let lift = layout::BADGE_TEXT_LIFT;
        let w = block.width().ceil() as u32 + 2 * pad;
        let h = block.height().ceil() as u32 + 2 * (pad - lift);

        let pill = rounded_rect(w, h, layout::BADGE_RADIUS, layout::BADGE_FILL)?;
        canvas.composite_over(&pill, at);

        let label = rasterize_text(&block, Rgba8::WHITE)?;
        canvas.draw(&label, at + Offset::new(pad as i32, (pad - lift) as i32));
        Ok(())
    }

    fn shadowed_text(
        &mut self,
        canvas: &mut Surface,
        text: &str,
        face: FontFace,
        size: f32,
        at: Offset,
        shadow: Shadow,
    ) -> StoryResult<()> {
        let block = self.fonts.layout(text, face, size)?;
        let ink = rasterize_text(&block, Rgba8::WHITE)?;
        let shade = rasterize_text(&block, Rgba8::BLACK)?;
        canvas.draw_with_shadow(&ink, &shade, at, shadow)
    }

    fn logo(&self, canvas: &mut Surface) -> bool {
        let Some(path) = self.config.logo.as_deref() else {
            return false;
        };
        let logo = load_image_file(path)
            .and_then(|img| img.resized(layout::LOGO_SIZE, layout::LOGO_SIZE));
        match logo {
            Ok(logo) => {
                let m = self.margin();
                canvas.composite_over(&logo, Offset::new(m, m));
                true
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "logo not drawn");
                false
            }
        }
    }

    fn margin(&self) -> i32 {
        i32::try_from(self.config.margin).unwrap_or(i32::MAX)
    }
}
