use std::time::Duration;

use reqwest::blocking::Client;

use crate::assets::decode::decode_image;
use crate::foundation::error::{StoryError, StoryResult};
use crate::render::surface::Surface;

/// Steam CDN location of the 600x900 library capsule; `{id}` is replaced
/// with the application id.
pub const STEAM_CDN_COVER_TEMPLATE: &str =
    "https://cdn.cloudflare.steamstatic.com/steam/apps/{id}/library_600x900.jpg";

/// Per-request timeout for cover downloads.
pub const COVER_TIMEOUT: Duration = Duration::from_secs(10);

/// Expand a cover URL template for `app_id`.
pub fn cover_url(template: &str, app_id: u64) -> String {
    template.replace("{id}", &app_id.to_string())
}

/// Anything that can produce the decoded cover image for a Steam application.
///
/// The renderer treats every error as "cover unavailable" for that game.
pub trait CoverArtSource {
    /// Decoded cover image for `app_id`.
    fn fetch_cover(&self, app_id: u64) -> StoryResult<Surface>;
}

/// Downloads covers over HTTP(S).
#[derive(Debug, Clone)]
pub struct HttpCoverArt {
    client: Client,
    template: String,
}

impl HttpCoverArt {
    /// Cover source pointed at the public Steam CDN.
    pub fn new() -> StoryResult<Self> {
        Self::with_template(STEAM_CDN_COVER_TEMPLATE)
    }

    /// Cover source using a custom URL template containing `{id}`.
    pub fn with_template(template: impl Into<String>) -> StoryResult<Self> {
        let template = template.into();
        if !template.contains("{id}") {
            return Err(StoryError::config(format!(
                "cover url template '{template}' has no {{id}} placeholder"
            )));
        }
        let client = Client::builder()
            .timeout(COVER_TIMEOUT)
            .build()
            .map_err(|e| StoryError::config(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { client, template })
    }
}

impl CoverArtSource for HttpCoverArt {
    #[tracing::instrument(skip(self), level = "debug")]
    fn fetch_cover(&self, app_id: u64) -> StoryResult<Surface> {
        let url = cover_url(&self.template, app_id);
        let asset = format!("cover for app {app_id}");

        let res = self
            .client
            .get(&url)
            .send()
            .map_err(|e| StoryError::asset_fetch(&asset, e))?;
        let status = res.status();
        if !status.is_success() {
            return Err(StoryError::asset_fetch(&asset, format!("HTTP {status}")));
        }
        let bytes = res
            .bytes()
            .map_err(|e| StoryError::asset_fetch(&asset, e))?;
        tracing::debug!(%url, len = bytes.len(), "cover downloaded");

        decode_image(&bytes).map_err(|e| StoryError::asset_fetch(&asset, e))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/covers.rs"]
mod tests;
