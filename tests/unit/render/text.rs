use super::*;
use crate::assets::fonts::{FontFace, FontSet};

fn test_fonts() -> FontSet {
    let dir = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/data/fonts");
    FontSet::load(&dir.join("DejaVuSans-Bold.ttf"), &dir.join("DejaVuSans.ttf")).unwrap()
}

fn coverage(sprite: &Sprite) -> u64 {
    sprite
        .surface
        .data()
        .chunks_exact(4)
        .map(|px| u64::from(px[3]))
        .sum()
}

#[test]
fn text_sprite_covers_layout_plus_bleed() {
    let mut fonts = test_fonts();
    let block = fonts.layout("Half-Life", FontFace::Body, 40.0).unwrap();
    let sprite = rasterize_text(&block, Rgba8::WHITE).unwrap();

    assert!(sprite.anchor.x < 0 && sprite.anchor.x == sprite.anchor.y);
    let pad = (-sprite.anchor.x) as u32;
    assert_eq!(sprite.surface.width(), block.width().ceil() as u32 + 2 * pad);
    assert_eq!(sprite.surface.height(), block.height().ceil() as u32 + 2 * pad);
    assert!(coverage(&sprite) > 0);
}

#[test]
fn glyph_pixels_carry_the_requested_color() {
    let mut fonts = test_fonts();
    let block = fonts.layout("HHHH", FontFace::Title, 60.0).unwrap();
    let sprite = rasterize_text(&block, Rgba8::new(255, 0, 0, 255)).unwrap();

    let solid = sprite
        .surface
        .data()
        .chunks_exact(4)
        .find(|px| px[3] == 255)
        .expect("bold glyph stems should have fully covered pixels");
    assert_eq!(solid, &[255, 0, 0, 255]);
}

#[test]
fn translucent_color_limits_coverage() {
    let mut fonts = test_fonts();
    let block = fonts.layout("HHHH", FontFace::Title, 60.0).unwrap();
    let sprite = rasterize_text(&block, Rgba8::new(0, 0, 0, 100)).unwrap();
    let max_alpha = sprite
        .surface
        .data()
        .chunks_exact(4)
        .map(|px| px[3])
        .max()
        .unwrap();
    assert!((98..=102).contains(&max_alpha), "max alpha {max_alpha}");
}

#[test]
fn empty_text_rasterizes_to_transparent_sprite() {
    let mut fonts = test_fonts();
    let block = fonts.layout("", FontFace::Body, 40.0).unwrap();
    let sprite = rasterize_text(&block, Rgba8::WHITE).unwrap();
    assert_eq!(coverage(&sprite), 0);
}
