//! External inputs of a story: cover art, decoded images and fonts.

/// Cover art sources.
pub mod covers;
/// Image decoding into premultiplied surfaces.
pub mod decode;
/// Font registration and text layout.
pub mod fonts;
