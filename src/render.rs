//! CPU compositing primitives: premultiplied surfaces, blur, vector shapes
//! and text rasterization.

/// Box-approximated Gaussian blur.
pub mod blur;
/// Legibility gradient overlay.
pub mod gradient;
pub(crate) mod raster;
/// Vector shapes.
pub mod shapes;
/// Premultiplied pixel surfaces and sprites.
pub mod surface;
/// Text rasterization.
pub mod text;
