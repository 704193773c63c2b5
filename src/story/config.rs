use std::path::PathBuf;

use crate::foundation::error::{StoryError, StoryResult};

/// Environment variable holding the Steam Web API key.
pub const ENV_API_KEY: &str = "STEAM_API_KEY";
/// Environment variable holding the 64-bit Steam id of the user.
pub const ENV_USER_ID: &str = "STEAM_USER_ID";

/// Credentials for the Steam Web API.
#[derive(Clone, PartialEq, Eq)]
pub struct SteamCredentials {
    /// Steam Web API key.
    pub api_key: String,
    /// 64-bit Steam id.
    pub user_id: String,
}

impl std::fmt::Debug for SteamCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SteamCredentials")
            .field("api_key", &"<redacted>")
            .field("user_id", &self.user_id)
            .finish()
    }
}

impl SteamCredentials {
    /// Both values must be present and non-blank; the error lists every
    /// missing variable.
    pub fn new(api_key: Option<String>, user_id: Option<String>) -> StoryResult<Self> {
        let api_key = api_key.filter(|v| !v.trim().is_empty());
        let user_id = user_id.filter(|v| !v.trim().is_empty());
        match (api_key, user_id) {
            (Some(api_key), Some(user_id)) => Ok(Self { api_key, user_id }),
            (api_key, user_id) => {
                let missing: Vec<&str> = [
                    api_key.is_none().then_some(ENV_API_KEY),
                    user_id.is_none().then_some(ENV_USER_ID),
                ]
                .into_iter()
                .flatten()
                .collect();
                Err(StoryError::config(format!(
                    "missing required environment variables: {}",
                    missing.join(", ")
                )))
            }
        }
    }
}

/// Everything that shapes a rendered story apart from the game list itself.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct StoryConfig {
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    /// Distance of header and rows from the left/top edges.
    pub margin: u32,
    /// Locale tag for month names, e.g. `fr_FR`.
    pub locale: String,
    /// Font file for the title.
    pub title_font: PathBuf,
    /// Font file for dates, names and badges.
    pub body_font: PathBuf,
    /// Title text size in pixels.
    pub title_size: f32,
    /// Date and game name text size in pixels.
    pub body_size: f32,
    /// Playtime badge text size in pixels.
    pub badge_size: f32,
    /// Branding mark drawn in the top-left corner; skipped when unset or unreadable.
    pub logo: Option<PathBuf>,
}

impl Default for StoryConfig {
    fn default() -> Self {
        Self {
            width: 1080,
            height: 1920,
            margin: 60,
            locale: "fr_FR".to_owned(),
            title_font: PathBuf::from("fonts/Montserrat-Bold.ttf"),
            body_font: PathBuf::from("fonts/Montserrat-Regular.ttf"),
            title_size: 80.0,
            body_size: 60.0,
            badge_size: 40.0,
            logo: Some(PathBuf::from("imgs/steam_icon.png")),
        }
    }
}

impl StoryConfig {
    /// Reject empty or oversized canvases, bad text sizes and unknown locales.
    pub fn validate(&self) -> StoryResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(StoryError::config(format!(
                "canvas must be non-empty (got {}x{})",
                self.width, self.height
            )));
        }
        if self.width > u32::from(u16::MAX) || self.height > u32::from(u16::MAX) {
            return Err(StoryError::config(format!(
                "canvas {}x{} exceeds {} px per side",
                self.width,
                self.height,
                u16::MAX
            )));
        }
        for (name, size) in [
            ("title", self.title_size),
            ("body", self.body_size),
            ("badge", self.badge_size),
        ] {
            if !size.is_finite() || size <= 0.0 {
                return Err(StoryError::config(format!(
                    "{name} text size must be finite and > 0"
                )));
            }
        }
        self.locale()?;
        Ok(())
    }

    /// Parsed locale; accepts `fr_FR` as well as the BCP 47 style `fr-FR`.
    pub fn locale(&self) -> StoryResult<chrono::Locale> {
        let tag = self.locale.trim().replace('-', "_");
        chrono::Locale::try_from(tag.as_str())
            .map_err(|_| StoryError::config(format!("unknown locale '{}'", self.locale)))
    }

    /// Fails with every font file that does not exist.
    pub fn check_fonts(&self) -> StoryResult<()> {
        let missing: Vec<String> = [&self.title_font, &self.body_font]
            .into_iter()
            .filter(|p| !p.is_file())
            .map(|p| p.display().to_string())
            .collect();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(StoryError::config(format!(
                "missing font files: {}",
                missing.join(", ")
            )))
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/story/config.rs"]
mod tests;
