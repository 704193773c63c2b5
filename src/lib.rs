//! Render a shareable "story" image of a Steam user's last two weeks of play.
//!
//! The pipeline is CPU-only and synchronous: game records come from the Steam
//! Web API ([`SteamClient`]) or any other source, cover art from a
//! [`CoverArtSource`], and [`StoryRenderer`] composes a blurred backdrop,
//! header, top-game rows, a legibility gradient and a logo into a PNG.
//!
//! ```no_run
//! use steam_wrapped::{FontSet, HttpCoverArt, StoryConfig, StoryRenderer};
//!
//! # fn main() -> steam_wrapped::StoryResult<()> {
//! let config = StoryConfig::default();
//! let fonts = FontSet::load(&config.title_font, &config.body_font)?;
//! let mut renderer = StoryRenderer::new(config, fonts, Box::new(HttpCoverArt::new()?))?;
//! # let games = Vec::new();
//! let today = chrono::Local::now().date_naive();
//! renderer.render(&games, today, std::path::Path::new("steam_story.png"))?;
//! # Ok(())
//! # }
//! ```
#![forbid(unsafe_code)]
#![deny(missing_docs)]

/// Cover art, image decoding and fonts.
pub mod assets;
/// Console output for the CLI.
pub mod display;
mod foundation;
/// Game activity records.
pub mod model;
/// CPU compositing primitives.
pub mod render;
/// Game activity sources.
pub mod source;
/// Story configuration, layout and rendering.
pub mod story;

pub use assets::covers::{CoverArtSource, HttpCoverArt, STEAM_CDN_COVER_TEMPLATE, cover_url};
pub use assets::fonts::{FontFace, FontSet, TextBlock};
pub use foundation::core::{Offset, Rgba8};
pub use foundation::error::{StoryError, StoryResult};
pub use model::game::{GameActivityRecord, format_playtime, truncate_name};
pub use render::surface::{Shadow, Sprite, Surface};
pub use source::steam::{OwnedGamesQuery, STEAM_API_BASE, SteamClient};
pub use story::config::{StoryConfig, SteamCredentials};
pub use story::renderer::{Story, StoryRenderer, StoryRow};
