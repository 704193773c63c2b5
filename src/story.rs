//! The story image: configuration, canvas geometry and the compositing
//! pipeline that turns game records into a PNG.

/// Render settings and API credentials.
pub mod config;
/// Canvas geometry and header text.
pub mod layout;
/// The compositing pipeline.
pub mod renderer;
