use super::*;

fn fonts_dir() -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/data/fonts")
}

fn test_fonts() -> FontSet {
    let dir = fonts_dir();
    FontSet::load(&dir.join("DejaVuSans-Bold.ttf"), &dir.join("DejaVuSans.ttf")).unwrap()
}

#[test]
fn load_resolves_both_families() {
    let fonts = test_fonts();
    assert!(fonts.family(FontFace::Title).starts_with("DejaVu Sans"));
    assert!(fonts.family(FontFace::Body).starts_with("DejaVu Sans"));
}

#[test]
fn missing_font_file_names_the_path() {
    let dir = fonts_dir();
    let err = FontSet::load(&dir.join("nope.ttf"), &dir.join("DejaVuSans.ttf")).unwrap_err();
    assert!(matches!(err, StoryError::FontLoad { .. }));
    assert!(err.to_string().contains("nope.ttf"));
}

#[test]
fn non_font_bytes_are_rejected() {
    let bogus = std::env::temp_dir().join(format!("steam-wrapped-bogus-{}.ttf", std::process::id()));
    std::fs::write(&bogus, b"definitely not a font").unwrap();
    let err = FontSet::load(&bogus, &fonts_dir().join("DejaVuSans.ttf")).unwrap_err();
    let _ = std::fs::remove_file(&bogus);
    assert!(matches!(err, StoryError::FontLoad { .. }));
}

#[test]
fn layout_width_grows_with_text_and_size() {
    let mut fonts = test_fonts();
    let short = fonts.layout("Portal", FontFace::Body, 40.0).unwrap();
    let long = fonts.layout("Portal 2 Portal 2", FontFace::Body, 40.0).unwrap();
    let big = fonts.layout("Portal", FontFace::Body, 80.0).unwrap();

    assert!(short.width() > 0.0);
    assert!(long.width() > short.width());
    assert!(big.width() > short.width() * 1.8);
    assert!(big.height() > short.height());
}

#[test]
fn title_face_is_wider_than_body_face() {
    let mut fonts = test_fonts();
    let bold = fonts.layout("Steam Wrapped", FontFace::Title, 60.0).unwrap();
    let regular = fonts.layout("Steam Wrapped", FontFace::Body, 60.0).unwrap();
    assert!(bold.width() > regular.width());
}

#[test]
fn layout_rejects_bad_size() {
    let mut fonts = test_fonts();
    assert!(fonts.layout("x", FontFace::Body, 0.0).is_err());
    assert!(fonts.layout("x", FontFace::Body, f32::NAN).is_err());
}
