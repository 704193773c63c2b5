use std::path::Path;

/// Convenience result type used across the crate.
pub type StoryResult<T> = Result<T, StoryError>;

/// Top-level error taxonomy for fetching playtime data and rendering stories.
#[derive(thiserror::Error, Debug)]
pub enum StoryError {
    /// The renderer was handed an empty game list.
    #[error("no games to render")]
    NoRecords,

    /// A remote or local image asset could not be fetched or decoded.
    #[error("failed to fetch {asset}: {reason}")]
    AssetFetch {
        /// Human-readable asset description (e.g. `cover art for app 570`).
        asset: String,
        /// Underlying transport or decode failure.
        reason: String,
    },

    /// A font file could not be read or registered with the text shaper.
    #[error("failed to load font '{path}': {reason}")]
    FontLoad {
        /// Font path as given by the configuration.
        path: String,
        /// Underlying IO or parse failure.
        reason: String,
    },

    /// Missing or invalid configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// Steam Web API transport or response-format failure.
    #[error("steam api error: {0}")]
    Api(String),

    /// Broken internal invariant while compositing (buffer sizes, dimensions).
    #[error("render error: {0}")]
    Render(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl StoryError {
    /// Build a [`StoryError::AssetFetch`] value.
    pub fn asset_fetch(asset: impl Into<String>, reason: impl std::fmt::Display) -> Self {
        Self::AssetFetch {
            asset: asset.into(),
            reason: reason.to_string(),
        }
    }

    /// Build a [`StoryError::FontLoad`] value.
    pub fn font_load(path: &Path, reason: impl std::fmt::Display) -> Self {
        Self::FontLoad {
            path: path.display().to_string(),
            reason: reason.to_string(),
        }
    }

    /// Build a [`StoryError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`StoryError::Api`] value.
    pub fn api(msg: impl Into<String>) -> Self {
        Self::Api(msg.into())
    }

    /// Build a [`StoryError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
