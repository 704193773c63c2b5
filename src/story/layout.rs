//! Fixed geometry of the story canvas. Coordinates are in pixels from the
//! top-left corner; horizontal positions are relative to the margin.

use chrono::{Days, NaiveDate, NaiveTime};

use crate::foundation::core::{Offset, Rgba8};
use crate::render::surface::Shadow;

/// Header title.
pub const TITLE_TEXT: &str = "Steam Wrapped";

/// Days covered by the story, ending today.
pub const LOOKBACK_DAYS: u64 = 14;

/// Blur applied to the backdrop cover.
pub const BACKGROUND_BLUR: f32 = 40.0;

/// Header band height below the margin.
pub const BANNER_EXTRA: u32 = 220;
/// Header band color.
pub const BANNER_FILL: Rgba8 = Rgba8::new(0, 0, 0, 120);
/// Title position relative to `(margin, margin)`; leaves room for the logo.
pub const TITLE_OFFSET: Offset = Offset::new(100, 0);
/// Date range position relative to `(margin, margin)`.
pub const DATE_OFFSET: Offset = Offset::new(0, 100);
/// Shadow behind title and date.
pub const HEADER_SHADOW: Shadow = Shadow {
    offset: Offset::new(4, 4),
    blur: 4.0,
};

/// Game rows drawn at most.
pub const MAX_ROWS: usize = 3;
/// Top edge of the first row.
pub const ROWS_TOP: i32 = 350;
/// Vertical distance between rows.
pub const ROW_PITCH: i32 = 350;

/// Thumbnail width.
pub const THUMB_WIDTH: u32 = 200;
/// Thumbnail height.
pub const THUMB_HEIGHT: u32 = 300;
/// Shadow behind thumbnails.
pub const THUMB_SHADOW: Shadow = Shadow {
    offset: Offset::new(8, 8),
    blur: 20.0,
};

/// Text column of a row, right of the thumbnail.
pub const ROW_TEXT_DX: i32 = 250;
/// Game name offset below the row top.
pub const NAME_DY: i32 = 40;
/// Shadow behind game names.
pub const NAME_SHADOW: Shadow = Shadow {
    offset: Offset::new(3, 3),
    blur: 6.0,
};

/// Badge offset below the row top.
pub const BADGE_DY: i32 = 120;
/// Space between badge edge and text.
pub const BADGE_PADDING: u32 = 20;
/// Badge corner radius.
pub const BADGE_RADIUS: u32 = 20;
/// Badge color.
pub const BADGE_FILL: Rgba8 = Rgba8::new(0, 0, 0, 110);
/// Badge text sits this much above the padded position.
pub const BADGE_TEXT_LIFT: u32 = 10;

/// Side of the square logo.
pub const LOGO_SIZE: u32 = 80;

/// Top edge of the `index`-th drawn row.
pub fn row_top(index: usize) -> i32 {
    ROWS_TOP + ROW_PITCH * index as i32
}

/// `"{start:%d %B} - {today:%d %B %Y}"` with month names in `locale`.
pub fn date_range_text(today: NaiveDate, locale: chrono::Locale) -> String {
    let start = today.checked_sub_days(Days::new(LOOKBACK_DAYS)).unwrap_or(today);
    let fmt = |d: NaiveDate, pattern: &str| {
        d.and_time(NaiveTime::MIN)
            .and_utc()
            .format_localized(pattern, locale)
            .to_string()
    };
    format!("{} - {}", fmt(start, "%d %B"), fmt(today, "%d %B %Y"))
}

#[cfg(test)]
#[path = "../../tests/unit/story/layout.rs"]
mod tests;
