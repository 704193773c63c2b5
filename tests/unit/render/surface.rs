use super::*;

fn temp_path(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!(
        "steam_wrapped_{name}_{}_{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ))
}

#[test]
fn new_rejects_empty_dimensions() {
    assert!(Surface::new(0, 4).is_err());
    assert!(Surface::new(4, 0).is_err());
    assert!(Surface::from_premul(2, 2, vec![0u8; 15]).is_err());
}

#[test]
fn filled_stores_premultiplied_pixels() {
    let s = Surface::filled(2, 1, Rgba8::new(255, 0, 0, 128)).unwrap();
    assert_eq!(s.pixel(0, 0), [128, 0, 0, 128]);
    assert_eq!(s.pixel(5, 5), [0, 0, 0, 0]);
}

#[test]
fn composite_over_clips_to_destination() {
    let mut dst = Surface::new(4, 4).unwrap();
    let src = Surface::filled(3, 3, Rgba8::WHITE).unwrap();

    dst.composite_over(&src, Offset::new(-1, 2));

    assert_eq!(dst.pixel(0, 2), [255, 255, 255, 255]);
    assert_eq!(dst.pixel(1, 3), [255, 255, 255, 255]);
    assert_eq!(dst.pixel(2, 2), [0, 0, 0, 0]);
    assert_eq!(dst.pixel(0, 1), [0, 0, 0, 0]);

    // Entirely outside: no-op.
    let before = dst.clone();
    dst.composite_over(&src, Offset::new(10, 10));
    assert_eq!(dst, before);
}

#[test]
fn multiply_alpha_scales_all_channels() {
    let mut s = Surface::filled(1, 1, Rgba8::WHITE).unwrap();
    s.multiply_alpha(110);
    assert_eq!(s.pixel(0, 0), [110, 110, 110, 110]);
}

#[test]
fn padded_centers_the_original() {
    let s = Surface::filled(2, 2, Rgba8::BLACK).unwrap();
    let p = s.padded(3).unwrap();
    assert_eq!((p.width(), p.height()), (8, 8));
    assert_eq!(p.pixel(2, 2), [0, 0, 0, 0]);
    assert_eq!(p.pixel(3, 3), [0, 0, 0, 255]);
    assert_eq!(p.pixel(4, 4), [0, 0, 0, 255]);
    assert_eq!(p.pixel(5, 5), [0, 0, 0, 0]);
}

#[test]
fn shadow_lands_under_and_beside_the_ink() {
    let mut canvas = Surface::filled(40, 40, Rgba8::WHITE).unwrap();
    let ink = Sprite::from(Surface::filled(10, 10, Rgba8::new(255, 0, 0, 255)).unwrap());
    let shade = Sprite::from(Surface::filled(10, 10, Rgba8::BLACK).unwrap());

    canvas
        .draw_with_shadow(
            &ink,
            &shade,
            Offset::new(10, 10),
            Shadow {
                offset: Offset::new(4, 4),
                blur: 2.0,
            },
        )
        .unwrap();

    // Ink on top.
    assert_eq!(canvas.pixel(12, 12), [255, 0, 0, 255]);
    // Shadow darkens below-right of the ink, not above-left.
    let below = canvas.pixel(22, 22);
    assert!(below[0] < 255);
    assert_eq!(canvas.pixel(2, 2), [255, 255, 255, 255]);
}

#[test]
fn straight_image_unpremultiplies() {
    let s = Surface::filled(1, 1, Rgba8::new(200, 100, 0, 255)).unwrap();
    let img = s.to_rgba_image().unwrap();
    assert_eq!(img.get_pixel(0, 0).0, [200, 100, 0, 255]);
}

#[test]
fn save_png_round_trips_dimensions() {
    let dir = temp_path("surface_png");
    let path = dir.join("nested").join("out.png");
    let s = Surface::filled(3, 5, Rgba8::new(1, 2, 3, 255)).unwrap();
    s.save_png(&path).unwrap();

    let back = image::open(&path).unwrap();
    assert_eq!(back.to_rgba8().dimensions(), (3, 5));
    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn save_png_replaces_existing_file_without_leftovers() {
    let dir = temp_path("surface_replace");
    let path = dir.join("out.png");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(&path, b"stale").unwrap();

    Surface::filled(4, 2, Rgba8::WHITE).unwrap().save_png(&path).unwrap();

    assert_eq!(image::open(&path).unwrap().to_rgba8().dimensions(), (4, 2));
    let entries: Vec<_> = std::fs::read_dir(&dir).unwrap().collect();
    assert_eq!(entries.len(), 1);
    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn failed_save_leaves_target_and_directory_untouched() {
    let dir = temp_path("surface_fail");
    // A directory squatting on the output path makes the final rename fail.
    let path = dir.join("out.png");
    std::fs::create_dir_all(&path).unwrap();

    let err = Surface::filled(4, 2, Rgba8::WHITE)
        .unwrap()
        .save_png(&path)
        .unwrap_err();
    assert!(err.to_string().contains("out.png"), "{err}");
    assert!(path.is_dir());
    let names: Vec<String> = std::fs::read_dir(&dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["out.png".to_owned()]);
    std::fs::remove_dir_all(&dir).ok();
}
